use thiserror::Error;

/// Failure of a store operation, already classified for the HTTP layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// A unique key is already taken.
    #[error("{0}")]
    Conflict(String),

    /// A referenced parent row does not exist.
    #[error("{0}")]
    InvalidReference(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub const fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Classify an insert failure by the constraint it violated.
    ///
    /// `conflict` and `reference` are the client-facing messages used when the
    /// failure is a unique or foreign key violation respectively.
    pub(crate) fn from_insert(err: sqlx::Error, conflict: &str, reference: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict(conflict.to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                Self::InvalidReference(reference.to_string())
            }
            _ => Self::Database(err),
        }
    }
}
