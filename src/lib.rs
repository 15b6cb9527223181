//! Restaurants, pizzas and their prices over a small JSON REST API backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, CreateError, ValidationError};
pub use routes::{app, ApiDoc};
pub use seed::seed_sample_data;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
