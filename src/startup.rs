use crate::config::CatalogConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::Database;
use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Open the catalog store, then bind the listener. The server is never
    /// reachable before the database handle exists.
    pub async fn build(config: CatalogConfig) -> Result<Self, AppError> {
        let db = Database::connect(&config.database).await.map_err(|e| {
            tracing::error!("Failed to open catalog store: {}", e);
            e
        })?;

        let state = AppState { db };

        let app = router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &Database {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/restaurants", get(handlers::list_restaurants))
        .route("/restaurants/details/:id", get(handlers::restaurant_details))
        .route(
            "/restaurants/cuisine/:cuisine",
            get(handlers::restaurants_by_cuisine),
        )
        .route("/restaurants/filter", get(handlers::filter_restaurants))
        .route(
            "/restaurants/sort-by-rating",
            get(handlers::sort_restaurants_by_rating),
        )
        .route("/dishes", get(handlers::list_dishes))
        .route("/dishes/details/:id", get(handlers::dish_details))
        .route("/dishes/filter", get(handlers::filter_dishes))
        .route("/dishes/sort-by-price", get(handlers::sort_dishes_by_price))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}
