pub mod chat;
pub mod conversation;
pub mod document;
pub mod errors;
pub mod message;
pub mod timestamp;
pub mod token;

pub use chat::{ChatRequest, ChatResponse};
pub use conversation::{ConversationSummary, MessagesResponse};
pub use document::UploadResponse;
pub use errors::ErrorResponse;
pub use message::{Message, MessageRole, SourceRef};
pub use timestamp::{LocalTimestamp, Timestamp};
pub use token::ConversationToken;
