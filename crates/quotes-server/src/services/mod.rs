//! Business logic services

pub mod author_service;
pub mod quote_service;

pub use author_service::AuthorService;
pub use quote_service::QuoteService;
