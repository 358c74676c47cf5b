/// Errors surfaced by the database connectors
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver-level error passed through
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Could not establish a verified connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
