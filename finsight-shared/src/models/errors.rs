use serde::{Deserialize, Serialize};

/// Error payload the backend may attach to a non-2xx response.
///
/// Treated opaquely by the client: only the display string crosses the
/// component boundary.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message.
    pub message: String,
    /// Optional additional details about the error.
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let error = ErrorResponse::new("Conversation not found!");
        assert_eq!(error.message, "Conversation not found!");
        assert_eq!(error.details, None);
    }

    #[test]
    fn test_error_response_display() {
        let plain = ErrorResponse::new("Upload failed");
        assert_eq!(format!("{plain}"), "Upload failed");

        let detailed = ErrorResponse {
            message: "Upload failed".to_string(),
            details: Some("file too large".to_string()),
        };
        assert_eq!(format!("{detailed}"), "Upload failed: file too large");
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"message":"Messages not found","details":null}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message, "Messages not found");
        assert_eq!(error.details, None);
    }
}
