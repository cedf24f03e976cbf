use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Timestamp;

/// Who authored a message in a conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message typed by the user.
    User,
    /// Answer produced by the assistant.
    Assistant,
}

impl MessageRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl Display for MessageRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A cited source passage attached to an assistant answer.
///
/// Passages arrive relevance-ordered from the backend and are rendered in
/// that order; the client never re-sorts them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceRef {
    /// The cited passage text.
    pub content: String,

    /// Zero-based page the passage was extracted from.
    pub page: u32,

    /// Relevance score in `[0, 1]`.
    pub score: f32,
}

/// A single message in a conversation.
///
/// Ids are unique within a conversation but not globally stable: optimistic
/// user messages carry client-generated UUIDs while stored messages carry
/// server ids, and the two are never reconciled (ids are only used as list
/// keys).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique identifier within the conversation. The backend stores integer
    /// ids, so deserialization accepts both numbers and strings.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Who authored the message.
    pub role: MessageRole,

    /// The message body.
    pub content: String,

    /// When the message was created, in UTC.
    pub created_at: Timestamp,

    /// Cited passages; empty for user messages and answers without sources.
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value.to_string(),
        Raw::Text(value) => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_role_round_trip() {
        assert_eq!(serde_json::to_string(&MessageRole::User).unwrap(), "\"user\"");
        let role: MessageRole = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, MessageRole::Assistant);
    }

    #[test]
    fn test_message_accepts_integer_id() {
        let json = r#"{
            "id": 42,
            "role": "user",
            "content": "What is the total revenue?",
            "created_at": "2025-03-08T14:30:00Z"
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.id, "42");
        assert_eq!(message.role, MessageRole::User);
        assert!(message.sources.is_empty());
    }

    #[test]
    fn test_message_accepts_string_id() {
        let json = r#"{
            "id": "b51f4e21-0a17-4d39-9e3c-0f4ad3f0f3aa",
            "role": "assistant",
            "content": "Revenue was flat.",
            "created_at": "2025-03-08T14:30:05Z",
            "sources": [{"content": "Revenue: 10.2M", "page": 3, "score": 0.91}]
        }"#;

        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.id, "b51f4e21-0a17-4d39-9e3c-0f4ad3f0f3aa");
        assert_eq!(message.sources.len(), 1);
        assert_eq!(message.sources[0].page, 3);
    }

    #[test]
    fn test_sources_preserve_backend_order() {
        let json = r#"[
            {"content": "a", "page": 7, "score": 0.4},
            {"content": "b", "page": 1, "score": 0.9}
        ]"#;

        let sources: Vec<SourceRef> = serde_json::from_str(json).unwrap();
        // Relevance order as returned, not re-sorted by page or score.
        assert_eq!(sources[0].page, 7);
        assert_eq!(sources[1].page, 1);
    }

    #[test]
    fn test_message_serialization_round_trip() {
        let message = Message {
            id: "1".to_string(),
            role: MessageRole::Assistant,
            content: "Hello".to_string(),
            created_at: Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap()),
            sources: vec![SourceRef {
                content: "passage".to_string(),
                page: 0,
                score: 1.0,
            }],
        };

        let serialized = serde_json::to_string(&message).unwrap();
        let deserialized: Message = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, message);
    }
}
