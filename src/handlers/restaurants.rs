//! Restaurant query endpoints.

use crate::dtos::{RestaurantFilterParams, parse_flag};
use crate::error::AppError;
use crate::startup::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let restaurants = state.db.list_restaurants().await?;
    if restaurants.is_empty() {
        return Err(AppError::NotFound("No restaurants found.".to_string()));
    }
    Ok(Json(restaurants))
}

/// Non-numeric path segments behave as an unmatched id so the response is
/// the same 404 a missing row gets, with the raw value echoed back.
pub async fn restaurant_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let not_found = || AppError::NotFound(format!("No restaurants found with id : {}.", id));

    let restaurant = match id.parse::<i64>() {
        Ok(id) => state.db.restaurant_by_id(id).await?,
        Err(_) => None,
    };

    let restaurant = restaurant.ok_or_else(not_found)?;
    Ok(Json(restaurant))
}

pub async fn restaurants_by_cuisine(
    State(state): State<AppState>,
    Path(cuisine): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let restaurants = state.db.restaurants_by_cuisine(&cuisine).await?;
    if restaurants.is_empty() {
        return Err(AppError::NotFound(format!(
            "No restaurants found with cuisine : {}.",
            cuisine
        )));
    }
    Ok(Json(restaurants))
}

pub async fn filter_restaurants(
    State(state): State<AppState>,
    Query(params): Query<RestaurantFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let is_veg = parse_flag("isVeg", params.is_veg.as_deref())?;
    let is_luxury = parse_flag("isLuxury", params.is_luxury.as_deref())?;
    let has_outdoor_seating =
        parse_flag("hasOutdoorSeating", params.has_outdoor_seating.as_deref())?;

    let restaurants = state
        .db
        .filter_restaurants(is_veg, is_luxury, has_outdoor_seating)
        .await?;
    if restaurants.is_empty() {
        return Err(AppError::NotFound("No restaurants found.".to_string()));
    }
    Ok(Json(restaurants))
}

pub async fn sort_restaurants_by_rating(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let restaurants = state.db.restaurants_by_rating().await?;
    if restaurants.is_empty() {
        return Err(AppError::NotFound("No restaurants found.".to_string()));
    }
    Ok(Json(restaurants))
}
