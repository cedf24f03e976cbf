use serde::{Deserialize, Serialize};

use super::{ConversationToken, SourceRef, Timestamp};

/// Request body for `POST chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// The user's question, as typed.
    pub question: String,

    /// Token of the conversation the question belongs to. Empty means
    /// "start a new conversation"; the server mints a token in that case.
    pub conversation_token: ConversationToken,
}

/// Response body for `POST chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    /// The assistant's answer.
    pub answer: String,

    /// Cited passages backing the answer, relevance-ordered.
    #[serde(default)]
    pub sources: Vec<SourceRef>,

    /// Seconds spent producing the answer.
    #[serde(default)]
    pub processing_time: f64,

    /// The token of the conversation the exchange was stored under. Replaces
    /// the client's active token (the server may have minted it).
    pub conversation_token: ConversationToken,

    /// Server-side creation time of the assistant message, in UTC.
    pub created_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_with_empty_token() {
        let request = ChatRequest {
            question: "What is the total revenue?".to_string(),
            conversation_token: ConversationToken::default(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"conversation_token\":\"\""));
        assert!(json.contains("What is the total revenue?"));
    }

    #[test]
    fn test_response_with_minted_token() {
        let json = r#"{
            "answer": "Total revenue for 2025 was 10.2M.",
            "sources": [{"content": "Revenue: 10.2M", "page": 2, "score": 0.87}],
            "processing_time": 1.42,
            "conversation_token": "tok-1",
            "created_at": "2025-03-08T14:30:05Z"
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.conversation_token.as_str(), "tok-1");
        assert_eq!(response.sources.len(), 1);
        assert!(response.created_at.is_some());
    }

    #[test]
    fn test_response_without_sources_or_created_at() {
        let json = r#"{"answer": "...", "conversation_token": "tok-9"}"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.sources.is_empty());
        assert!(response.created_at.is_none());
        assert_eq!(response.processing_time, 0.0);
    }
}
