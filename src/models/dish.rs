//! Dish catalog row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `dishes` table, returned to clients verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[sqlx(rename = "isVeg")]
    pub is_veg: bool,
}
