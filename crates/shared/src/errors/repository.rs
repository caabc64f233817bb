use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A connection could not be acquired or a transaction could not be opened.
    #[error("Database unavailable: {0}")]
    Unavailable(#[source] SqlxError),

    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),
}

impl RepositoryError {
    pub fn unavailable(err: SqlxError) -> Self {
        RepositoryError::Unavailable(err)
    }

    /// The driver's own message, without the layer prefix.
    pub fn raw_message(&self) -> String {
        match self {
            RepositoryError::Unavailable(err) | RepositoryError::Sqlx(err) => err.to_string(),
        }
    }
}
