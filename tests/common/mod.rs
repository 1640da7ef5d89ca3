//! Common test utilities for catalog-service integration tests.

use catalog_service::config::{CatalogConfig, DatabaseConfig};
use catalog_service::models::{Dish, Restaurant};
use catalog_service::services::Database;
use catalog_service::startup::Application;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,catalog_service=debug,sqlx=warn")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub struct TestApp {
    pub address: String,
    pub db: Database,
    pub client: reqwest::Client,
    // Keeps the scratch database file alive for the test's duration.
    _data_dir: TempDir,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Request failed")
    }
}

/// Spawn the application against a fresh scratch database with the catalog
/// schema created but no rows seeded.
pub async fn spawn_app() -> TestApp {
    init_tracing();

    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = data_dir.path().join("catalog.sqlite");

    let config = CatalogConfig {
        port: 0,
        service_name: "catalog-service-test".to_string(),
        log_level: "debug".to_string(),
        database: DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", db_path.display()),
            max_connections: 2,
            min_connections: 1,
        },
    };

    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();
    let db = app.db().clone();
    create_schema(&db).await;

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        db,
        client: reqwest::Client::new(),
        _data_dir: data_dir,
    }
}

/// The schema the service reads; created and seeded here because the service
/// itself never does DDL.
async fn create_schema(db: &Database) {
    sqlx::query(
        r#"
        CREATE TABLE restaurants (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            cuisine TEXT NOT NULL,
            isVeg INTEGER NOT NULL,
            rating REAL NOT NULL,
            priceForTwo INTEGER NOT NULL,
            location TEXT NOT NULL,
            hasOutdoorSeating INTEGER NOT NULL,
            isLuxury INTEGER NOT NULL
        )
        "#,
    )
    .execute(db.pool())
    .await
    .expect("Failed to create restaurants table");

    sqlx::query(
        r#"
        CREATE TABLE dishes (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            isVeg INTEGER NOT NULL
        )
        "#,
    )
    .execute(db.pool())
    .await
    .expect("Failed to create dishes table");
}

pub async fn insert_restaurant(db: &Database, restaurant: &Restaurant) {
    sqlx::query(
        r#"
        INSERT INTO restaurants
            (id, name, cuisine, isVeg, rating, priceForTwo, location, hasOutdoorSeating, isLuxury)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(restaurant.id)
    .bind(&restaurant.name)
    .bind(&restaurant.cuisine)
    .bind(restaurant.is_veg)
    .bind(restaurant.rating)
    .bind(restaurant.price_for_two)
    .bind(&restaurant.location)
    .bind(restaurant.has_outdoor_seating)
    .bind(restaurant.is_luxury)
    .execute(db.pool())
    .await
    .expect("Failed to insert restaurant");
}

pub async fn insert_dish(db: &Database, dish: &Dish) {
    sqlx::query("INSERT INTO dishes (id, name, price, isVeg) VALUES (?, ?, ?, ?)")
        .bind(dish.id)
        .bind(&dish.name)
        .bind(dish.price)
        .bind(dish.is_veg)
        .execute(db.pool())
        .await
        .expect("Failed to insert dish");
}

pub fn sample_restaurant(id: i64) -> Restaurant {
    Restaurant {
        id,
        name: format!("Restaurant {}", id),
        cuisine: "Italian".to_string(),
        is_veg: false,
        rating: 4.0,
        price_for_two: 1200,
        location: "MG Road".to_string(),
        has_outdoor_seating: false,
        is_luxury: false,
    }
}

pub fn sample_dish(id: i64) -> Dish {
    Dish {
        id,
        name: format!("Dish {}", id),
        price: 250.0,
        is_veg: false,
    }
}
