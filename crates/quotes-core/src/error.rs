//! Error types for the quotes service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuotesError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuotesError {
    #[error("Author with id {0} not found.")]
    AuthorNotFound(i64),

    #[error("Quote with id {0} not found.")]
    QuoteNotFound(i64),

    /// Uniqueness or check constraint rejected the write
    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl QuotesError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QuotesError::AuthorNotFound(_) | QuotesError::QuoteNotFound(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_embed_id() {
        assert_eq!(
            QuotesError::AuthorNotFound(3).to_string(),
            "Author with id 3 not found."
        );
        assert_eq!(
            QuotesError::QuoteNotFound(9).to_string(),
            "Quote with id 9 not found."
        );
        assert!(QuotesError::QuoteNotFound(9).is_not_found());
        assert!(!QuotesError::Conflict("dup".into()).is_not_found());
    }
}
