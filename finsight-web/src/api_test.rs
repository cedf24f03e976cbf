//! Tests for the API client functionality
//!
//! Validates endpoint construction, wire model handling and the error
//! taxonomy used for backend communication.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, FinsightClient};
    use reqwest::StatusCode;
    use shared::models::{ChatResponse, ConversationToken, ErrorResponse};

    /// Tests API client creation
    #[test]
    fn test_api_client_creation() {
        let _client = FinsightClient::new("http://localhost:8000/api");
        // Client should be created successfully
    }

    /// Tests trailing-slash normalization of the base URL
    #[test]
    fn test_base_url_variants() {
        let _with_slash = FinsightClient::new("/api/");
        let _without_slash = FinsightClient::new("/api");
    }

    /// Tests conversation message endpoint structure
    #[test]
    fn test_messages_endpoint() {
        let token = ConversationToken::new("tok-1");
        let url = format!("/api/conversations/{}/messages", token.as_str());
        assert_eq!(url, "/api/conversations/tok-1/messages");
    }

    /// Tests the full backend surface the client consumes
    #[test]
    fn test_api_endpoints() {
        assert_eq!(format!("/api/{}", "conversations"), "/api/conversations");
        assert_eq!(format!("/api/{}", "chat"), "/api/chat");
        assert_eq!(format!("/api/{}", "upload"), "/api/upload");
    }

    /// Tests the not-found classification used for the non-fatal error path
    #[test]
    fn test_not_found_classification() {
        assert!(ApiError::Status(StatusCode::NOT_FOUND).is_not_found());
        assert!(!ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR).is_not_found());
        assert!(!ApiError::Timeout.is_not_found());
    }

    /// Tests error display strings surfaced to the user
    #[test]
    fn test_error_display() {
        let status = ApiError::Status(StatusCode::BAD_GATEWAY);
        assert!(format!("{status}").contains("502"));

        let timeout = ApiError::Timeout;
        assert_eq!(format!("{timeout}"), "request timed out");

        let rejected = ApiError::Rejected(ErrorResponse::new("Only PDF files are supported"));
        assert_eq!(format!("{rejected}"), "Only PDF files are supported");
    }

    /// Tests the new-conversation exchange: empty token in, minted token out
    #[test]
    fn test_chat_response_with_minted_token() {
        let body = r#"{
            "answer": "Total revenue for 2025 was 10.2M.",
            "sources": [],
            "conversation_token": "tok-1"
        }"#;

        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.conversation_token.as_str(), "tok-1");
        assert_eq!(response.conversation_token.to_path(), "/tok-1");
    }
}
