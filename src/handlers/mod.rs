//! HTTP handlers for restaurants, pizzas and restaurant pizzas.

pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;
pub use pizzas::*;
pub use restaurant_pizzas::*;
pub use restaurants::*;
