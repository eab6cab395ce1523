//! Quote types

use crate::Author;
use serde::{Deserialize, Serialize};

/// A stored quote, always carrying its owning author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub author: Author,
    pub text: String,
}

impl Quote {
    pub fn author_id(&self) -> i64 {
        self.author.id
    }
}

/// Quote creation request. The owning author comes from the request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewQuote {
    pub text: String,
}

/// Partial quote update. Only `text` may be changed; the owner is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl QuoteChanges {
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
    }
}
