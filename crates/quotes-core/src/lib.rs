//! Quotes Core Library
//!
//! Error taxonomy and storage ports for the quotes service.

// Re-export pure types from quotes-types
pub use quotes_types::*;

pub mod error;
pub mod ports;

pub use error::{QuotesError, Result};
pub use ports::{AuthorStore, QuoteStore};
