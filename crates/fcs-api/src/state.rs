use fcs_db::Store;

use crate::{ApiConfig, config::Environment};

/// Shared state handed to every handler
#[derive(Clone, Debug)]
pub struct ApiState {
    pub store: Store,
    pub environment: Environment,
}

impl ApiState {
    /// Open the configured database, run migrations and seed the initial user.
    pub async fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let store = Store::connect(&config.database_url, config.db_max_connections).await?;
        tracing::info!(database_url = %config.database_url, "database ready");

        Ok(Self::with_store(store, config.env))
    }

    pub const fn with_store(store: Store, environment: Environment) -> Self {
        Self { store, environment }
    }
}
