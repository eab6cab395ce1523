//! Quotes Types - Pure type definitions
//!
//! This crate contains only the records exposed over the wire and the request
//! payloads that create or change them. It has no runtime dependencies.

pub mod author;
pub mod quote;

pub use author::*;
pub use quote::*;

/// Maximum length of an author name, in characters
pub const AUTHOR_NAME_MAX_LEN: usize = 32;

/// Maximum length of a quote text, in characters
pub const QUOTE_TEXT_MAX_LEN: usize = 255;
