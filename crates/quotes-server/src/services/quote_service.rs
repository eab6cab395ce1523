//! Quote service

use quotes_core::{AuthorStore, NewQuote, Quote, QuoteChanges, QuoteStore, QuotesError, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub struct QuoteService {
    quotes: Arc<dyn QuoteStore>,
    authors: Arc<dyn AuthorStore>,
}

impl QuoteService {
    pub fn new(quotes: Arc<dyn QuoteStore>, authors: Arc<dyn AuthorStore>) -> Self {
        Self { quotes, authors }
    }

    pub async fn list_quotes(&self) -> Result<Vec<Quote>> {
        self.quotes.list_quotes().await
    }

    pub async fn list_author_quotes(&self, author_id: i64) -> Result<Vec<Quote>> {
        self.ensure_author(author_id).await?;
        self.quotes.list_quotes_by_author(author_id).await
    }

    pub async fn get_quote(&self, id: i64) -> Result<Quote> {
        debug!("Looking up quote {}", id);
        self.quotes
            .get_quote(id)
            .await?
            .ok_or(QuotesError::QuoteNotFound(id))
    }

    pub async fn create_quote(&self, author_id: i64, new_quote: NewQuote) -> Result<Quote> {
        self.ensure_author(author_id).await?;

        let quote = self.quotes.create_quote(author_id, &new_quote.text).await?;
        info!("Created quote: id={}, author={}", quote.id, quote.author_id());
        Ok(quote)
    }

    pub async fn update_quote(&self, id: i64, changes: QuoteChanges) -> Result<Quote> {
        let quote = self
            .quotes
            .update_quote(id, &changes)
            .await?
            .ok_or(QuotesError::QuoteNotFound(id))?;

        if !changes.is_empty() {
            info!("Updated quote: id={}", quote.id);
        }

        Ok(quote)
    }

    pub async fn delete_quote(&self, id: i64) -> Result<Quote> {
        let quote = self
            .quotes
            .delete_quote(id)
            .await?
            .ok_or(QuotesError::QuoteNotFound(id))?;

        info!("Deleted quote: id={}, author={}", quote.id, quote.author_id());
        Ok(quote)
    }

    async fn ensure_author(&self, author_id: i64) -> Result<()> {
        match self.authors.get_author(author_id).await? {
            Some(_) => Ok(()),
            None => Err(QuotesError::AuthorNotFound(author_id)),
        }
    }
}
