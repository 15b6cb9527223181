//! Pizza listing.

use crate::error::AppError;
use crate::models::Pizza;
use crate::service::PizzaService;
use crate::state::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/pizzas",
    responses((status = 200, description = "All pizzas", body = [Pizza]))
)]
pub async fn list_pizzas(State(state): State<AppState>) -> Result<Json<Vec<Pizza>>, AppError> {
    let rows = PizzaService::list(&state.pool).await?;
    Ok(Json(rows))
}
