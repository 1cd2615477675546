//! Board Errors

use todo_persist::PersistError;

pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that stop a board from mounting
#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    /// No element matches the selector
    MissingElement(String),
    /// Saved list could not be read
    Persist(PersistError),
    /// Any other DOM failure
    Dom(String),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::MissingElement(selector) => write!(f, "No element matches '{}'", selector),
            BoardError::Persist(err) => write!(f, "{}", err),
            BoardError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Persist(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersistError> for BoardError {
    fn from(err: PersistError) -> Self {
        BoardError::Persist(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            BoardError::MissingElement(".todo-list".into()).to_string(),
            "No element matches '.todo-list'"
        );
        let err: BoardError = PersistError::Corrupt("todos: expected value".into()).into();
        assert_eq!(err.to_string(), "Corrupt saved data: todos: expected value");
    }
}
