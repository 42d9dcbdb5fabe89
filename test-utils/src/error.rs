use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to connect to the in-memory database or execute schema statements.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
