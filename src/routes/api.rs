//! Restaurant, pizza and restaurant pizza routes, plus the OpenAPI document describing them.

use crate::error::{ErrorBody, ErrorsBody};
use crate::handlers::{
    self, create_restaurant_pizza, delete_restaurant, get_restaurant, list_pizzas, list_restaurants,
};
use crate::models::Pizza;
use crate::response::{RestaurantDetail, RestaurantPizzaCreated, RestaurantPizzaWithPizza, RestaurantSummary};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::restaurants::list_restaurants,
        handlers::restaurants::get_restaurant,
        handlers::restaurants::delete_restaurant,
        handlers::pizzas::list_pizzas,
        handlers::restaurant_pizzas::create_restaurant_pizza,
    ),
    components(schemas(
        RestaurantSummary,
        RestaurantDetail,
        RestaurantPizzaWithPizza,
        RestaurantPizzaCreated,
        Pizza,
        ErrorBody,
        ErrorsBody,
    ))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:id", get(get_restaurant).delete(delete_restaurant))
        .route("/pizzas", get(list_pizzas))
        .route("/restaurant_pizzas", post(create_restaurant_pizza))
        .route("/openapi.json", get(openapi))
}
