//! Roster API
//!
//! A user account service: registration, login with opaque session tokens,
//! and profile reads whose visibility depends on who is asking. Passwords
//! are stored as Argon2 hashes and tokens never appear in list responses.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::{AccountServiceTrait, AppState};
use config::StorageBackend;
use infrastructure::account::{InMemoryAccountStore, PostgresAccountStore};
use infrastructure::session::{AccountService, Argon2Hasher};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state_with_defaults() -> anyhow::Result<AppState> {
    create_app_state(&AppConfig::default()).await
}

/// Create the application state, choosing the account store from config
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Storage backend: {:?}", config.storage.backend);

    let hasher = Arc::new(Argon2Hasher::new());

    let account_service: Arc<dyn AccountServiceTrait> = match config.storage.backend {
        StorageBackend::Memory => {
            let store = Arc::new(InMemoryAccountStore::new());
            Arc::new(AccountService::new(store, hasher))
        }
        StorageBackend::Postgres => {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pool = sqlx::PgPool::connect(&database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            let store = PostgresAccountStore::new(pool);
            store.ensure_schema().await?;

            Arc::new(AccountService::new(Arc::new(store), hasher))
        }
    };

    Ok(AppState::new(account_service))
}
