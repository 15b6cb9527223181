//! Store access for each record type, plus request validation.

mod pizzas;
mod restaurant_pizzas;
mod restaurants;
mod validation;
pub use pizzas::PizzaService;
pub use restaurant_pizzas::RestaurantPizzaService;
pub use restaurants::RestaurantService;
pub use validation::RequestValidator;
