use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Opaque identifier for a conversation, carried as the sole path segment of
/// the browser location. An empty token means "new, unsaved conversation".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationToken(String);

impl ConversationToken {
    /// Wrap a raw token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derive the active token from a location path: the first (and only)
    /// path segment. `/` resolves to the empty token.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self(path.trim_start_matches('/').to_string())
    }

    /// The location path that reflects this token (`/` when empty).
    #[must_use]
    pub fn to_path(&self) -> String {
        format!("/{}", self.0)
    }

    /// `true` when no conversation has been saved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ConversationToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConversationToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ConversationToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_root_path() {
        let token = ConversationToken::from_path("/");
        assert!(token.is_empty());
        assert_eq!(token.to_path(), "/");
    }

    #[test]
    fn test_resolve_from_conversation_path() {
        let token = ConversationToken::from_path("/abc123");
        assert!(!token.is_empty());
        assert_eq!(token.as_str(), "abc123");
        assert_eq!(token.to_path(), "/abc123");
    }

    #[test]
    fn test_resolve_is_pure_and_stable() {
        let a = ConversationToken::from_path("/tok-1");
        let b = ConversationToken::from_path("/tok-1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_without_leading_separator() {
        let token = ConversationToken::from_path("tok-1");
        assert_eq!(token.as_str(), "tok-1");
    }

    #[test]
    fn test_empty_path() {
        let token = ConversationToken::from_path("");
        assert!(token.is_empty());
    }

    #[test]
    fn test_serde_transparent() {
        let token = ConversationToken::new("tok-1");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"tok-1\"");

        let back: ConversationToken = serde_json::from_str("\"tok-2\"").unwrap();
        assert_eq!(back.as_str(), "tok-2");
    }
}
