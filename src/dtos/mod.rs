//! Query-string parameter shapes for the filter endpoints.

use crate::error::AppError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFilterParams {
    pub is_veg: Option<String>,
    pub is_luxury: Option<String>,
    pub has_outdoor_seating: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishFilterParams {
    pub is_veg: Option<String>,
}

/// Normalize a query-string flag to the stored 0/1 representation.
/// Accepts `true`/`false`/`1`/`0`, case-insensitive.
pub fn parse_flag(name: &str, value: Option<&str>) -> Result<bool, AppError> {
    let value = value
        .ok_or_else(|| AppError::BadRequest(format!("Missing query parameter: {}.", name)))?;

    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(AppError::BadRequest(format!(
            "Invalid value for {} : {}. Expected true or false.",
            name, other
        ))),
    }
}
