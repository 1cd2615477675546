//! Persistence Errors

/// Common result type for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;

/// Errors raised while reading or writing the stored list
#[derive(Debug, Clone, PartialEq)]
pub enum PersistError {
    /// No storage backend reachable (no window, storage disabled)
    Unavailable(String),
    /// Backend rejected a read or write
    Storage(String),
    /// Stored text is not a valid encoding of the list
    Corrupt(String),
    /// List could not be encoded
    Encode(String),
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            PersistError::Storage(msg) => write!(f, "Storage error: {}", msg),
            PersistError::Corrupt(msg) => write!(f, "Corrupt saved data: {}", msg),
            PersistError::Encode(msg) => write!(f, "Encode error: {}", msg),
        }
    }
}

impl std::error::Error for PersistError {}
