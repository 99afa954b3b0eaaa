//! PostgreSQL-backed item store.

use async_trait::async_trait;
use backoff::{future::retry, ExponentialBackoff};
use secrecy::{ExposeSecret, Secret};
use service_core::error::AppError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::config::DatabaseConfig;
use crate::models::{Item, ItemChanges, NewItem};
use crate::services::metrics::{record_error, QueryTimer};
use crate::services::store::ItemStore;

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a connection pool, retrying with exponential backoff until
    /// `connect_timeout` elapses. Replicas often start before the database
    /// accepts connections.
    #[instrument(skip(config), fields(service = "item-service"))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let options = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(Duration::from_secs(600));

        let policy = ExponentialBackoff {
            initial_interval: Duration::from_millis(500),
            max_interval: Duration::from_secs(3),
            max_elapsed_time: Some(config.connect_timeout),
            ..Default::default()
        };

        let url = config.url.expose_secret();
        let pool = retry(policy, || {
            let options = options.clone();
            async move {
                options.connect(url).await.map_err(|e| {
                    warn!(error = %e, "PostgreSQL not reachable yet, retrying");
                    backoff::Error::transient(e)
                })
            }
        })
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Build a pool that connects on first use. Never fails on an unreachable
    /// server; the first query does.
    pub fn connect_lazy(url: &Secret<String>, acquire_timeout: Duration) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(acquire_timeout)
            .connect_lazy(url.expose_secret())
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Invalid database URL: {}", e)))?;

        Ok(Self { pool })
    }

    /// Create the `items` table if it does not exist.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }
}

fn query_failed(operation: &'static str, e: sqlx::Error) -> AppError {
    record_error(operation);
    AppError::DatabaseError(anyhow::anyhow!("Failed to {}: {}", operation.replace('_', " "), e))
}

#[async_trait]
impl ItemStore for Database {
    #[instrument(skip(self))]
    async fn list_items(&self) -> Result<Vec<Item>, AppError> {
        let timer = QueryTimer::start("list_items");

        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("list_items", e))?;

        timer.observe_duration();
        Ok(items)
    }

    #[instrument(skip(self), fields(item_id = id))]
    async fn get_item(&self, id: i32) -> Result<Option<Item>, AppError> {
        let timer = QueryTimer::start("get_item");

        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_failed("get_item", e))?;

        timer.observe_duration();
        Ok(item)
    }

    #[instrument(skip(self, new_item))]
    async fn create_item(&self, new_item: NewItem) -> Result<Item, AppError> {
        let timer = QueryTimer::start("create_item");

        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&new_item.name)
        .bind(&new_item.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| query_failed("create_item", e))?;

        timer.observe_duration();
        Ok(item)
    }

    #[instrument(skip(self, changes), fields(item_id = id))]
    async fn update_item(&self, id: i32, changes: ItemChanges) -> Result<Option<Item>, AppError> {
        let timer = QueryTimer::start("update_item");

        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = COALESCE($2, name),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_failed("update_item", e))?;

        timer.observe_duration();
        Ok(item)
    }

    #[instrument(skip(self), fields(item_id = id))]
    async fn delete_item(&self, id: i32) -> Result<bool, AppError> {
        let timer = QueryTimer::start("delete_item");

        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("delete_item", e))?;

        timer.observe_duration();
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn reset(&self) -> Result<(), AppError> {
        let timer = QueryTimer::start("reset");

        sqlx::query("TRUNCATE TABLE items RESTART IDENTITY")
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("reset", e))?;

        timer.observe_duration();
        warn!("Items table reset");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<(), AppError> {
        let timer = QueryTimer::start("health_check");

        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;

        timer.observe_duration();
        Ok(())
    }
}
