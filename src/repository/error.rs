use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Caller-supplied filter is missing or inconsistent. Never retried.
    #[error("{0}")]
    Validation(String),
    #[error("repository lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl RepositoryError {
    pub fn validation(message: impl Into<String>) -> Self {
        RepositoryError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RepositoryError::Validation(_))
    }
}
