//! Author service

use quotes_core::{Author, AuthorChanges, AuthorStore, NewAuthor, QuotesError, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub struct AuthorService {
    store: Arc<dyn AuthorStore>,
}

impl AuthorService {
    pub fn new(store: Arc<dyn AuthorStore>) -> Self {
        Self { store }
    }

    pub async fn list_authors(&self) -> Result<Vec<Author>> {
        self.store.list_authors().await
    }

    pub async fn get_author(&self, id: i64) -> Result<Author> {
        debug!("Looking up author {}", id);
        self.store
            .get_author(id)
            .await?
            .ok_or(QuotesError::AuthorNotFound(id))
    }

    pub async fn create_author(&self, new_author: NewAuthor) -> Result<Author> {
        let author = self.store.create_author(&new_author.name).await?;
        info!("Created author: id={}, name={}", author.id, author.name);
        Ok(author)
    }

    pub async fn update_author(&self, id: i64, changes: AuthorChanges) -> Result<Author> {
        let author = self
            .store
            .update_author(id, &changes)
            .await?
            .ok_or(QuotesError::AuthorNotFound(id))?;

        if !changes.is_empty() {
            info!("Updated author: id={}, name={}", author.id, author.name);
        }

        Ok(author)
    }

    /// Deletes the author and every quote it owns.
    pub async fn delete_author(&self, id: i64) -> Result<Author> {
        let author = self
            .store
            .delete_author(id)
            .await?
            .ok_or(QuotesError::AuthorNotFound(id))?;

        info!("Deleted author: id={}, name={}", author.id, author.name);
        Ok(author)
    }
}
