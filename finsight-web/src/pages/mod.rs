mod chat;

pub use chat::ChatPage;
