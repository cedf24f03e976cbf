pub(crate) mod chat_history;
pub(crate) mod composer;
pub(crate) mod file_upload;
pub(crate) mod message_bubble;
pub(crate) mod message_list;
pub(crate) mod source_list;
pub(crate) mod typing_indicator;

// Re-export components for convenience
pub use chat_history::ChatHistory;
pub use composer::Composer;
pub use file_upload::FileUpload;
pub use message_list::MessageList;
