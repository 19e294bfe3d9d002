pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::Store;

use std::{str::FromStr, time::Duration};

use anyhow::Context;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

/// Id of the user seeded on every startup.
pub const INITIAL_USER_ID: &str = "0";
/// Username of the seeded user.
pub const INITIAL_USERNAME: &str = "initial_user";

/// Generate a new opaque identifier for a user, deck or card.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Create a SQLite connection pool with foreign key enforcement turned on.
///
/// The database file is created when it does not exist yet. WAL lets readers
/// proceed while a deck is being written; writers queue on the busy timeout.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("invalid database url: {database_url}"))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .context("failed to connect to database")?;

    Ok(pool)
}

/// Create a pool backed by a private in-memory database.
///
/// Every SQLite connection to `:memory:` gets its own database, so the pool is
/// pinned to one connection that is never recycled.
pub async fn create_in_memory_pool() -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .context("invalid in-memory database url")?
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("failed to open in-memory database")?;

    Ok(pool)
}

/// Run the migrations bundled from this crate's `migrations/` folder and seed the
/// initial user.
pub async fn migrate_and_seed(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!()
        .run(pool)
        .await
        .context("failed to run migrations")?;

    let inserted = repositories::user::insert_if_absent(pool, INITIAL_USER_ID, INITIAL_USERNAME)
        .await
        .context("failed to insert initial user")?;
    if inserted {
        tracing::info!(user_id = INITIAL_USER_ID, "seeded initial user");
    }

    Ok(())
}
