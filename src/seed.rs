//! Sample data for development databases.

use crate::error::AppError;
use sqlx::PgPool;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const LISTINGS: &[(usize, usize, f64)] = &[(0, 0, 1.0), (1, 1, 4.0), (2, 2, 5.0)];

/// Insert the sample restaurants, pizzas and listings unless either table already has rows.
/// Returns whether anything was written.
pub async fn seed_sample_data(pool: &PgPool) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;
    let (existing,): (i64,) =
        sqlx::query_as("SELECT (SELECT COUNT(*) FROM restaurants) + (SELECT COUNT(*) FROM pizzas)")
            .fetch_one(&mut *tx)
            .await?;
    if existing > 0 {
        tracing::info!(existing, "tables not empty, skipping seed");
        return Ok(false);
    }

    let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
    for &(name, address) in RESTAURANTS {
        let (id,): (i64,) = sqlx::query_as("INSERT INTO restaurants (name, address) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(address)
            .fetch_one(&mut *tx)
            .await?;
        restaurant_ids.push(id);
    }

    let mut pizza_ids = Vec::with_capacity(PIZZAS.len());
    for &(name, ingredients) in PIZZAS {
        let (id,): (i64,) = sqlx::query_as("INSERT INTO pizzas (name, ingredients) VALUES ($1, $2) RETURNING id")
            .bind(name)
            .bind(ingredients)
            .fetch_one(&mut *tx)
            .await?;
        pizza_ids.push(id);
    }

    for &(restaurant, pizza, price) in LISTINGS {
        sqlx::query("INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES ($1, $2, $3)")
            .bind(price)
            .bind(pizza_ids[pizza])
            .bind(restaurant_ids[restaurant])
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::info!(
        restaurants = RESTAURANTS.len(),
        pizzas = PIZZAS.len(),
        listings = LISTINGS.len(),
        "seeded sample data"
    );
    Ok(true)
}
