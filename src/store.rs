//! Database bootstrap: create the database if missing and the three tables if missing.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Table DDL in dependency order. Both foreign keys cascade from the parent side.
const TABLES: &[(&str, &str)] = &[
    (
        "restaurants",
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT NOT NULL
        )
        "#,
    ),
    (
        "pizzas",
        r#"
        CREATE TABLE IF NOT EXISTS pizzas (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            ingredients TEXT NOT NULL
        )
        "#,
    ),
    (
        "restaurant_pizzas",
        r#"
        CREATE TABLE IF NOT EXISTS restaurant_pizzas (
            id BIGSERIAL PRIMARY KEY,
            price DOUBLE PRECISION NOT NULL CHECK (price >= 1 AND price <= 30),
            pizza_id BIGINT NOT NULL REFERENCES pizzas (id) ON DELETE CASCADE,
            restaurant_id BIGINT NOT NULL REFERENCES restaurants (id) ON DELETE CASCADE
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS restaurant_pizzas_pizza_id_idx ON restaurant_pizzas (pizza_id)",
    "CREATE INDEX IF NOT EXISTS restaurant_pizzas_restaurant_id_idx ON restaurant_pizzas (restaurant_id)",
];

/// Create `restaurants`, `pizzas` and `restaurant_pizzas` if they do not exist. Idempotent.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for (table, ddl) in TABLES {
        tracing::debug!(table, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin_url, db_name)) = split_database_url(database_url) else {
        return Ok(());
    };
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into the admin URL (same server, `postgres` database) and the target
/// database name. `None` when the URL has no path.
fn split_database_url(url: &str) -> Option<(String, String)> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..].find('/').map(|i| scheme_end + i + 1)?;
    let (base, path_and_query) = url.split_at(path_start);
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    Some((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_from_url() {
        let (admin, name) = split_database_url("postgres://user:pw@localhost:5432/pizza?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://user:pw@localhost:5432/postgres");
        assert_eq!(name, "pizza");
    }

    #[test]
    fn url_without_path_has_nothing_to_create() {
        assert_eq!(split_database_url("postgres://localhost"), None);
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("pizza"), "\"pizza\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }
}
