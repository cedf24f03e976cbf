use serde::{Deserialize, Serialize};

/// Response body for `POST upload` after a document was ingested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    /// Human-readable status line.
    pub message: String,

    /// Name of the processed file.
    pub filename: String,

    /// How many chunks the document was split into.
    pub chunks_count: u64,

    /// Seconds the ingestion took.
    pub processing_time: f64,
}
