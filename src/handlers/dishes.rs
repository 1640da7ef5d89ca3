//! Dish query endpoints.

use crate::dtos::{DishFilterParams, parse_flag};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

pub async fn list_dishes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dishes = state.db.list_dishes().await?;
    if dishes.is_empty() {
        return Err(AppError::NotFound("No dishes found.".to_string()));
    }
    Ok(Json(dishes))
}

pub async fn dish_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let not_found = || AppError::NotFound(format!("No dishes found with id : {}.", id));

    let dish = match id.parse::<i64>() {
        Ok(id) => state.db.dish_by_id(id).await?,
        Err(_) => None,
    };

    let dish = dish.ok_or_else(not_found)?;
    Ok(Json(dish))
}

pub async fn filter_dishes(
    State(state): State<AppState>,
    Query(params): Query<DishFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let is_veg = parse_flag("isVeg", params.is_veg.as_deref())?;

    let dishes = state.db.dishes_by_veg(is_veg).await?;
    if dishes.is_empty() {
        return Err(AppError::NotFound("No dishes found.".to_string()));
    }
    Ok(Json(dishes))
}

pub async fn sort_dishes_by_price(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let dishes = state.db.dishes_by_price().await?;
    if dishes.is_empty() {
        return Err(AppError::NotFound("No dishes found.".to_string()));
    }
    Ok(Json(dishes))
}
