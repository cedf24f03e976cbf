use thiserror::Error;

/// Hard cap on accepted documents: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Client-side rejection of a selected file; never reaches the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Only PDF files are allowed")]
    NotPdf,
    #[error("File size must be less than 10MB")]
    TooLarge,
}

/// A document between selection and submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    /// Original file name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl UploadCandidate {
    /// Validate a selected file; identical for the browse and drop paths.
    pub fn validate(name: &str, mime: &str, size: u64) -> Result<Self, UploadError> {
        if mime != "application/pdf" && !name.to_lowercase().ends_with(".pdf") {
            return Err(UploadError::NotPdf);
        }
        if size > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge);
        }
        Ok(Self {
            name: name.to_string(),
            size,
        })
    }
}

/// Upload flow state machine.
///
/// `Empty → Selected → Uploading → {Empty on success | Selected on failure}`.
/// The candidate is retained across a failed submit so the user can retry;
/// only one upload may be in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadPhase {
    /// No file chosen.
    #[default]
    Empty,
    /// A validated file awaits submission.
    Selected(UploadCandidate),
    /// The multipart submit is on the wire.
    Uploading(UploadCandidate),
}

impl UploadPhase {
    /// A file passed validation.
    #[must_use]
    pub fn select(candidate: UploadCandidate) -> Self {
        Self::Selected(candidate)
    }

    /// Start the submit. Returns `None` unless a file is selected and no
    /// upload is pending.
    #[must_use]
    pub fn begin(self) -> Option<Self> {
        match self {
            Self::Selected(candidate) => Some(Self::Uploading(candidate)),
            Self::Empty | Self::Uploading(_) => None,
        }
    }

    /// The submit succeeded; the flow resets.
    #[must_use]
    pub fn succeed(self) -> Self {
        Self::Empty
    }

    /// The submit failed; the file is retained for a retry.
    #[must_use]
    pub fn fail(self) -> Self {
        match self {
            Self::Uploading(candidate) => Self::Selected(candidate),
            other => other,
        }
    }

    /// The user removed the selected file.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::Empty
    }

    /// Whether the submit affordance must be unavailable.
    #[must_use]
    pub const fn is_uploading(&self) -> bool {
        matches!(self, Self::Uploading(_))
    }

    /// The candidate currently held by the flow, if any.
    #[must_use]
    pub fn candidate(&self) -> Option<&UploadCandidate> {
        match self {
            Self::Selected(candidate) | Self::Uploading(candidate) => Some(candidate),
            Self::Empty => None,
        }
    }
}
