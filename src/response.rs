//! Response shapes, one per endpoint. Field order is the JSON key order.

use crate::models::{Pizza, Restaurant, RestaurantPizza};
use serde::Serialize;
use utoipa::ToSchema;

/// Restaurant without its listings: `{id, name, address}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(r: Restaurant) -> Self {
        RestaurantSummary {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

/// A listing with its pizza expanded, as nested under a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantPizzaWithPizza {
    pub id: i64,
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
}

impl RestaurantPizzaWithPizza {
    pub fn new(rp: RestaurantPizza, pizza: Pizza) -> Self {
        RestaurantPizzaWithPizza {
            id: rp.id,
            price: rp.price,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza,
        }
    }
}

/// `GET /restaurants/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

impl RestaurantDetail {
    pub fn new(r: Restaurant, restaurant_pizzas: Vec<RestaurantPizzaWithPizza>) -> Self {
        RestaurantDetail {
            id: r.id,
            name: r.name,
            address: r.address,
            restaurant_pizzas,
        }
    }
}

/// `POST /restaurant_pizzas`: the new listing with both sides expanded.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RestaurantPizzaCreated {
    pub id: i64,
    pub price: f64,
    pub pizza_id: i64,
    pub restaurant_id: i64,
    pub pizza: Pizza,
    pub restaurant: RestaurantSummary,
}

impl RestaurantPizzaCreated {
    pub fn new(rp: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        RestaurantPizzaCreated {
            id: rp.id,
            price: rp.price,
            pizza_id: rp.pizza_id,
            restaurant_id: rp.restaurant_id,
            pizza,
            restaurant: restaurant.into(),
        }
    }
}
