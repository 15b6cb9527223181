//! Restaurant pizza creation.

use crate::error::{AppError, CreateError, ErrorsBody};
use crate::response::RestaurantPizzaCreated;
use crate::service::{RequestValidator, RestaurantPizzaService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// Body: `{"price": number, "pizza_id": integer, "restaurant_id": integer}`.
/// Unreadable JSON is reported like any other bad input.
#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    responses(
        (status = 201, description = "Created", body = RestaurantPizzaCreated),
        (status = 400, description = "Price out of range or invalid data", body = ErrorsBody)
    )
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaCreated>), AppError> {
    let Json(body) = body.map_err(|e| CreateError::Malformed(e.body_text()))?;
    let new = RequestValidator::restaurant_pizza(&body)?;
    let created = RestaurantPizzaService::create(&state.pool, &new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
