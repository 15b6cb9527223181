//! Pizza reads.

use crate::error::AppError;
use crate::models::Pizza;
use sqlx::PgPool;

const SELECT_ALL: &str = "SELECT id, name, ingredients FROM pizzas ORDER BY id";

pub struct PizzaService;

impl PizzaService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Pizza>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as(SELECT_ALL).fetch_all(pool).await?;
        Ok(rows)
    }
}
