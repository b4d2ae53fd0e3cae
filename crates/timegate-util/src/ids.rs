//! Strongly-typed identifiers for timegate

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a piece of time-limited content in a catalog
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_id_equality() {
        let id1 = ContentId::new("banner-1");
        let id2 = ContentId::new("banner-1");
        let id3 = ContentId::new("banner-2");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn content_id_ordering_is_lexicographic() {
        let a = ContentId::new("alpha");
        let b = ContentId::new("beta");
        assert!(a < b);
    }

    #[test]
    fn blank_ids_are_empty() {
        assert!(ContentId::new("").is_empty());
        assert!(ContentId::new("   ").is_empty());
        assert!(!ContentId::new("x").is_empty());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = ContentId::new("test-entry");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"test-entry\"");

        let parsed: ContentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
