//! Restaurant catalog row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `restaurants` table, returned to clients verbatim.
/// Column names in the store are camelCase; flags are stored as 0/1
/// integers and surface as JSON booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    #[sqlx(rename = "isVeg")]
    pub is_veg: bool,
    pub rating: f64,
    #[sqlx(rename = "priceForTwo")]
    pub price_for_two: i64,
    pub location: String,
    #[sqlx(rename = "hasOutdoorSeating")]
    pub has_outdoor_seating: bool,
    #[sqlx(rename = "isLuxury")]
    pub is_luxury: bool,
}
