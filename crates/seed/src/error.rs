use workbridge_core::error::CoreError;

/// Errors raised while seeding.
///
/// Only [`SeedError::MissingReference`] is recoverable: the loader logs it
/// and moves on to the next fixture record. Everything else aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Missing {entity} '{key}'")]
    MissingReference { entity: &'static str, key: String },

    #[error("Failed to write progress output: {0}")]
    Io(#[from] std::io::Error),
}

impl SeedError {
    pub fn missing(entity: &'static str, key: impl Into<String>) -> Self {
        Self::MissingReference {
            entity,
            key: key.into(),
        }
    }
}
