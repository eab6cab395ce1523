//! Storage traits for persistence
//!
//! Every method is a single implicit transaction: it either fully commits or
//! leaves the store untouched.

use crate::Result;
use async_trait::async_trait;
use quotes_types::{Author, AuthorChanges, Quote, QuoteChanges};

/// Author store
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// All authors in id order.
    async fn list_authors(&self) -> Result<Vec<Author>>;
    async fn get_author(&self, id: i64) -> Result<Option<Author>>;
    async fn create_author(&self, name: &str) -> Result<Author>;
    /// Returns `None` when no author has this id.
    async fn update_author(&self, id: i64, changes: &AuthorChanges) -> Result<Option<Author>>;
    /// Deletes the author together with every quote it owns and returns the
    /// author as it was, or `None` when no author has this id.
    async fn delete_author(&self, id: i64) -> Result<Option<Author>>;
}

/// Quote store
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// All quotes in id order, each with its owning author.
    async fn list_quotes(&self) -> Result<Vec<Quote>>;
    async fn list_quotes_by_author(&self, author_id: i64) -> Result<Vec<Quote>>;
    async fn get_quote(&self, id: i64) -> Result<Option<Quote>>;
    /// Fails with `AuthorNotFound` when the owner does not exist.
    async fn create_quote(&self, author_id: i64, text: &str) -> Result<Quote>;
    async fn update_quote(&self, id: i64, changes: &QuoteChanges) -> Result<Option<Quote>>;
    async fn delete_quote(&self, id: i64) -> Result<Option<Quote>>;
}
