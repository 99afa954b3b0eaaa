//! Application startup and lifecycle management.

use crate::config::{ItemServiceConfig, StoreBackend};
use crate::handlers;
use crate::services::{Database, InMemoryItemStore, InstanceIdentity, ItemStore};
use axum::{
    body::Body,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::instance::{served_by_middleware, ServedBy};
use service_core::middleware::metrics::metrics_middleware;
use service_core::middleware::tracing::{make_request_span, request_id_middleware};
use service_core::observability::init_metrics;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// Everything here is either immutable or a handle to the shared database,
/// so handlers carry nothing from one request to the next.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ItemServiceConfig>,
    pub store: Arc<dyn ItemStore>,
    pub identity: InstanceIdentity,
}

/// Build the HTTP router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let served_by = ServedBy::new(state.identity.hostname());

    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/items/:id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route("/reset", post(handlers::reset_items))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn_with_state(served_by, served_by_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    http_port: u16,
    http_listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: ItemServiceConfig) -> Result<Self, AppError> {
        init_metrics();

        let store: Arc<dyn ItemStore> = match config.store {
            StoreBackend::Postgres => {
                let db = Database::connect(&config.database).await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to connect to PostgreSQL");
                    e
                })?;

                db.run_migrations().await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to run migrations");
                    e
                })?;

                Arc::new(db)
            }
            StoreBackend::Memory => {
                tracing::warn!(
                    "Using in-memory item store - data is not shared between instances"
                );
                Arc::new(InMemoryItemStore::new())
            }
        };

        let identity = InstanceIdentity::resolve();

        // Port 0 = random port for testing
        let http_addr = config.common.socket_addr();
        let http_listener = TcpListener::bind(http_addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %http_addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let http_port = http_listener.local_addr()?.port();

        tracing::info!(
            http_port = http_port,
            hostname = %identity,
            "Item service listener bound"
        );

        let state = AppState {
            config: Arc::new(config),
            store,
            identity,
        };

        Ok(Self {
            http_port,
            http_listener,
            state,
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state.clone());

        tracing::info!(
            service = %self.state.config.service_name,
            version = %self.state.config.service_version,
            http_port = self.http_port,
            "Service ready to accept connections"
        );

        axum::serve(self.http_listener, router).await.map_err(|e| {
            tracing::error!(error = %e, "HTTP server error");
            std::io::Error::other(format!("HTTP server error: {}", e))
        })
    }
}
