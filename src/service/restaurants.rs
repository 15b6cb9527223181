//! Restaurant reads and cascading delete.

use crate::error::AppError;
use crate::models::{Pizza, Restaurant, RestaurantPizza};
use crate::response::{RestaurantDetail, RestaurantPizzaWithPizza, RestaurantSummary};
use sqlx::PgPool;

const SELECT_ALL: &str = "SELECT id, name, address FROM restaurants ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, address FROM restaurants WHERE id = $1";
const SELECT_LISTINGS: &str = r#"
    SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
           p.name AS pizza_name, p.ingredients AS pizza_ingredients
    FROM restaurant_pizzas rp
    JOIN pizzas p ON p.id = rp.pizza_id
    WHERE rp.restaurant_id = $1
    ORDER BY rp.id
"#;
const DELETE_LISTINGS: &str = "DELETE FROM restaurant_pizzas WHERE restaurant_id = $1";
const DELETE_BY_ID: &str = "DELETE FROM restaurants WHERE id = $1";

/// One listing joined with its pizza.
#[derive(sqlx::FromRow)]
struct ListingRow {
    id: i64,
    price: f64,
    pizza_id: i64,
    restaurant_id: i64,
    pizza_name: String,
    pizza_ingredients: String,
}

impl From<ListingRow> for RestaurantPizzaWithPizza {
    fn from(row: ListingRow) -> Self {
        let pizza = Pizza {
            id: row.pizza_id,
            name: row.pizza_name,
            ingredients: row.pizza_ingredients,
        };
        let listing = RestaurantPizza {
            id: row.id,
            price: row.price,
            pizza_id: row.pizza_id,
            restaurant_id: row.restaurant_id,
        };
        RestaurantPizzaWithPizza::new(listing, pizza)
    }
}

pub struct RestaurantService;

impl RestaurantService {
    /// All restaurants in id order, without listings.
    pub async fn list(pool: &PgPool) -> Result<Vec<RestaurantSummary>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows: Vec<Restaurant> = sqlx::query_as(SELECT_ALL).fetch_all(pool).await?;
        Ok(rows.into_iter().map(RestaurantSummary::from).collect())
    }

    /// One restaurant with every listing and its pizza. `None` when the id is absent.
    pub async fn detail(pool: &PgPool, id: i64) -> Result<Option<RestaurantDetail>, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let restaurant: Option<Restaurant> = sqlx::query_as(SELECT_BY_ID).bind(id).fetch_optional(pool).await?;
        let Some(restaurant) = restaurant else {
            return Ok(None);
        };
        tracing::debug!(sql = %SELECT_LISTINGS, id, "query");
        let listings: Vec<ListingRow> = sqlx::query_as(SELECT_LISTINGS).bind(id).fetch_all(pool).await?;
        Ok(Some(RestaurantDetail::new(
            restaurant,
            listings.into_iter().map(RestaurantPizzaWithPizza::from).collect(),
        )))
    }

    /// Delete a restaurant and its listings in one transaction. Returns false when the id is absent,
    /// in which case nothing is written.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        tracing::debug!(sql = %DELETE_LISTINGS, id, "query (tx)");
        let listings = sqlx::query(DELETE_LISTINGS).bind(id).execute(&mut *tx).await?;
        tracing::debug!(sql = %DELETE_BY_ID, id, "query (tx)");
        let deleted = sqlx::query(DELETE_BY_ID).bind(id).execute(&mut *tx).await?;
        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }
        tx.commit().await?;
        tracing::info!(restaurant_id = id, listings = listings.rows_affected(), "restaurant deleted");
        Ok(true)
    }
}
