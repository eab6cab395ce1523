//! Author types

use serde::{Deserialize, Serialize};

/// A stored author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

impl Author {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Author creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewAuthor {
    pub name: String,
}

/// Partial author update. Only `name` may be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AuthorChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_serializes_id_and_name() {
        let json = serde_json::to_value(Author::new(1, "Twain")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "name": "Twain" }));
    }

    #[test]
    fn test_changes_accept_partial_payload() {
        let changes: AuthorChanges = serde_json::from_str("{}").unwrap();
        assert!(changes.is_empty());

        let changes: AuthorChanges = serde_json::from_str(r#"{"name":"Wilde"}"#).unwrap();
        assert_eq!(changes.name.as_deref(), Some("Wilde"));
    }

    #[test]
    fn test_changes_reject_id_overwrite() {
        let err = serde_json::from_str::<AuthorChanges>(r#"{"id":7,"name":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `id`"));
    }
}
