//! Database service for catalog-service.
//!
//! Read-only access to the catalog store. Every public method is one
//! parameterized SELECT; the service never writes.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::models::{Dish, Restaurant};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

const RESTAURANT_COLUMNS: &str =
    "id, name, cuisine, isVeg, rating, priceForTwo, location, hasOutdoorSeating, isLuxury";
const DISH_COLUMNS: &str = "id, name, price, isVeg";

/// Shared connection pool over the SQLite catalog store.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the catalog store. Fails fast when the file is unreachable so
    /// the server never starts serving against a missing database.
    #[instrument(skip(config), fields(service = "catalog-service"))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to SQLite"
        );

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("SQLite connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Restaurant queries
    // -------------------------------------------------------------------------

    /// All restaurants, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        sqlx::query_as::<_, Restaurant>(&format!(
            "SELECT {} FROM restaurants",
            RESTAURANT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list restaurants: {}", e)))
    }

    /// A single restaurant by id, if present.
    #[instrument(skip(self))]
    pub async fn restaurant_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        sqlx::query_as::<_, Restaurant>(&format!(
            "SELECT {} FROM restaurants WHERE id = ?",
            RESTAURANT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to get restaurant: {}", e)))
    }

    /// Restaurants matching a cuisine exactly.
    #[instrument(skip(self))]
    pub async fn restaurants_by_cuisine(&self, cuisine: &str) -> Result<Vec<Restaurant>, AppError> {
        sqlx::query_as::<_, Restaurant>(&format!(
            "SELECT {} FROM restaurants WHERE cuisine = ?",
            RESTAURANT_COLUMNS
        ))
        .bind(cuisine)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to filter by cuisine: {}", e))
        })
    }

    /// Restaurants matching all three flags.
    #[instrument(skip(self))]
    pub async fn filter_restaurants(
        &self,
        is_veg: bool,
        is_luxury: bool,
        has_outdoor_seating: bool,
    ) -> Result<Vec<Restaurant>, AppError> {
        sqlx::query_as::<_, Restaurant>(&format!(
            "SELECT {} FROM restaurants WHERE isVeg = ? AND isLuxury = ? AND hasOutdoorSeating = ?",
            RESTAURANT_COLUMNS
        ))
        .bind(is_veg)
        .bind(is_luxury)
        .bind(has_outdoor_seating)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to filter restaurants: {}", e))
        })
    }

    /// All restaurants, highest rated first.
    #[instrument(skip(self))]
    pub async fn restaurants_by_rating(&self) -> Result<Vec<Restaurant>, AppError> {
        sqlx::query_as::<_, Restaurant>(&format!(
            "SELECT {} FROM restaurants ORDER BY rating DESC",
            RESTAURANT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!("Failed to sort restaurants: {}", e))
        })
    }

    // -------------------------------------------------------------------------
    // Dish queries
    // -------------------------------------------------------------------------

    /// All dishes, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_dishes(&self) -> Result<Vec<Dish>, AppError> {
        sqlx::query_as::<_, Dish>(&format!("SELECT {} FROM dishes", DISH_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list dishes: {}", e)))
    }

    /// A single dish by id, if present.
    #[instrument(skip(self))]
    pub async fn dish_by_id(&self, id: i64) -> Result<Option<Dish>, AppError> {
        sqlx::query_as::<_, Dish>(&format!(
            "SELECT {} FROM dishes WHERE id = ?",
            DISH_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to get dish: {}", e)))
    }

    /// Dishes matching the veg flag.
    #[instrument(skip(self))]
    pub async fn dishes_by_veg(&self, is_veg: bool) -> Result<Vec<Dish>, AppError> {
        sqlx::query_as::<_, Dish>(&format!(
            "SELECT {} FROM dishes WHERE isVeg = ?",
            DISH_COLUMNS
        ))
        .bind(is_veg)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to filter dishes: {}", e)))
    }

    /// All dishes, cheapest first.
    #[instrument(skip(self))]
    pub async fn dishes_by_price(&self) -> Result<Vec<Dish>, AppError> {
        sqlx::query_as::<_, Dish>(&format!(
            "SELECT {} FROM dishes ORDER BY price",
            DISH_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to sort dishes: {}", e)))
    }
}
