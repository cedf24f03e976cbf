use serde::{Deserialize, Serialize};

use super::{ConversationToken, Message};

/// One known conversation as listed in the history sidebar.
///
/// The backend returns summaries recency-ordered; the client renders them in
/// that order and replaces the whole set on every refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationSummary {
    /// Opaque token identifying the conversation.
    pub token: ConversationToken,

    /// Server-generated display name.
    pub name: String,
}

/// Response body of `GET conversations/{token}/messages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesResponse {
    /// Messages in append order.
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageRole;

    #[test]
    fn test_summary_ignores_extra_fields() {
        // The backend's conversation schema also embeds messages; the sidebar
        // only needs token and name.
        let json = r#"{
            "token": "tok-1",
            "name": "Q3 revenue review",
            "messages": []
        }"#;

        let summary: ConversationSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.token.as_str(), "tok-1");
        assert_eq!(summary.name, "Q3 revenue review");
    }

    #[test]
    fn test_summary_list() {
        let json = r#"[
            {"token": "tok-2", "name": "Newest"},
            {"token": "tok-1", "name": "Older"}
        ]"#;

        let summaries: Vec<ConversationSummary> = serde_json::from_str(json).unwrap();
        assert_eq!(summaries.len(), 2);
        // Backend order is preserved (assumed recency-ordered server side).
        assert_eq!(summaries[0].name, "Newest");
    }

    #[test]
    fn test_messages_response() {
        let json = r#"{
            "messages": [
                {"id": 1, "role": "user", "content": "Hi", "created_at": "2025-03-08T14:30:00Z"},
                {"id": 2, "role": "assistant", "content": "Hello", "created_at": "2025-03-08T14:30:02Z"}
            ]
        }"#;

        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.messages.len(), 2);
        assert_eq!(response.messages[0].role, MessageRole::User);
        assert_eq!(response.messages[1].role, MessageRole::Assistant);
    }
}
