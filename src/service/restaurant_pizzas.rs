//! Restaurant pizza insertion.

use crate::error::AppError;
use crate::models::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
use crate::response::RestaurantPizzaCreated;
use sqlx::PgPool;

const INSERT: &str = r#"
    INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
    VALUES ($1, $2, $3)
    RETURNING id, price, pizza_id, restaurant_id
"#;
const SELECT_PIZZA: &str = "SELECT id, name, ingredients FROM pizzas WHERE id = $1";
const SELECT_RESTAURANT: &str = "SELECT id, name, address FROM restaurants WHERE id = $1";

pub struct RestaurantPizzaService;

impl RestaurantPizzaService {
    /// Insert a listing and load both sides for the response, in one transaction.
    /// Unknown pizza or restaurant ids surface as `CreateError::Reference`.
    pub async fn create(pool: &PgPool, new: &NewRestaurantPizza) -> Result<RestaurantPizzaCreated, AppError> {
        let mut tx = pool.begin().await?;
        tracing::debug!(sql = %INSERT, price = new.price.get(), pizza_id = new.pizza_id, restaurant_id = new.restaurant_id, "query (tx)");
        let listing: RestaurantPizza = sqlx::query_as(INSERT)
            .bind(new.price.get())
            .bind(new.pizza_id)
            .bind(new.restaurant_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::from_insert)?;
        let pizza: Pizza = sqlx::query_as(SELECT_PIZZA)
            .bind(listing.pizza_id)
            .fetch_one(&mut *tx)
            .await?;
        let restaurant: Restaurant = sqlx::query_as(SELECT_RESTAURANT)
            .bind(listing.restaurant_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(id = listing.id, pizza_id = listing.pizza_id, restaurant_id = listing.restaurant_id, "restaurant pizza created");
        Ok(RestaurantPizzaCreated::new(listing, pizza, restaurant))
    }
}
