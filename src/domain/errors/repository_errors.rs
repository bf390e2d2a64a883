/// Errors raised by message repositories.
///
/// A missing record is not an error: repositories return `Ok(None)` for it.
#[derive(Debug, Clone)]
pub enum RepositoryError {
    /// The table query itself failed (throttling, permissions, network)
    Access { table: String, message: String },

    /// A record exists but does not carry a usable message
    MalformedRecord { key: String, message: String },
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::Access { table, message } => {
                write!(f, "Failed to query table '{}': {}", table, message)
            }
            RepositoryError::MalformedRecord { key, message } => {
                write!(f, "Malformed record for key '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
