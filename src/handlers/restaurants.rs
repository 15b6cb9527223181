//! Restaurant handlers: list, read with listings, delete.

use crate::error::{AppError, ErrorBody};
use crate::response::{RestaurantDetail, RestaurantSummary};
use crate::service::RestaurantService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

const ENTITY: &str = "Restaurant";

/// Only plain digit strings are ids; anything else never matches a restaurant.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    if id_str.is_empty() || !id_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(ENTITY));
    }
    id_str.parse().map_err(|_| AppError::NotFound(ENTITY))
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses((status = 200, description = "All restaurants", body = [RestaurantSummary]))
)]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<Json<Vec<RestaurantSummary>>, AppError> {
    let rows = RestaurantService::list(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = RestaurantDetail),
        (status = 404, description = "No such restaurant", body = ErrorBody)
    )
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<RestaurantDetail>, AppError> {
    let id = parse_id(&id_str)?;
    let detail = RestaurantService::detail(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;
    Ok(Json(detail))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant and its pizzas deleted"),
        (status = 404, description = "No such restaurant", body = ErrorBody)
    )
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    if !RestaurantService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(ENTITY));
    }
    Ok(StatusCode::NO_CONTENT)
}
