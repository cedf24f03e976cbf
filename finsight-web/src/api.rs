use futures::future::{self, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    ChatRequest, ChatResponse, ConversationSummary, ConversationToken, ErrorResponse,
    MessagesResponse, UploadResponse,
};
use thiserror::Error;

use crate::config::FrontendConfig;

/// One attempt per request; a hung call surfaces as an error after this long.
const REQUEST_TIMEOUT_MS: u32 = 30_000;

thread_local! {
    static SHARED_CLIENT: OnceCell<FinsightClient> = OnceCell::new();
}

/// Failure of an API call, reported upward as a display string.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (network failure, invalid body, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(StatusCode),
    /// The server rejected the request with a structured error body.
    #[error("{0}")]
    Rejected(ErrorResponse),
    /// No response within [`REQUEST_TIMEOUT_MS`]; not retried.
    #[error("request timed out")]
    Timeout,
}

impl ApiError {
    /// Whether the failure is the non-fatal "requested thing absent" case.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(StatusCode::NOT_FOUND))
    }
}

/// Lightweight API client for the Finsight backend.
#[derive(Clone, Debug)]
pub struct FinsightClient {
    base_url: String,
    client: Client,
}

impl FinsightClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The per-tab shared client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send_with_timeout(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let send = request.send();
        pin_mut!(send);
        match future::select(send, TimeoutFuture::new(REQUEST_TIMEOUT_MS)).await {
            Either::Left((result, _)) => Ok(result?),
            Either::Right(((), _)) => Err(ApiError::Timeout),
        }
    }

    async fn expect_json<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.send_with_timeout(request).await?;
        let status = response.status();
        if !status.is_success() {
            // Prefer the server's own error message when the body carries one.
            return match response.json::<ErrorResponse>().await {
                Ok(body) => Err(ApiError::Rejected(body)),
                Err(_) => Err(ApiError::Status(status)),
            };
        }
        Ok(response.json().await?)
    }

    /// List all known conversations, recency-ordered by the server.
    pub async fn list_conversations(&self) -> Result<Vec<ConversationSummary>, ApiError> {
        let url = self.api_url("conversations");
        self.expect_json(self.client.get(url)).await
    }

    /// Fetch the full message list of one conversation.
    pub async fn conversation_messages(
        &self,
        token: &ConversationToken,
    ) -> Result<MessagesResponse, ApiError> {
        let url = self.api_url(&format!("conversations/{}/messages", token.as_str()));
        self.expect_json(self.client.get(url)).await
    }

    /// Submit a question against the given conversation (empty token starts a
    /// new one; the server mints and returns the token either way).
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let url = self.api_url("chat");
        self.expect_json(self.client.post(url).json(request)).await
    }

    /// Submit a document for ingestion as a multipart body with field `file`.
    pub async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        let url = self.api_url("upload");
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.expect_json(self.client.post(url).multipart(form)).await
    }
}
