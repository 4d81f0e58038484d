use thiserror::Error;

/// Message surfaced when the service rejects a request without a usable `detail`.
pub const REMOTE_FALLBACK_MESSAGE: &str = "Failed to validate sentence";
/// Message surfaced for transport failures and malformed success bodies.
pub const GENERIC_FALLBACK_MESSAGE: &str = "An error occurred";

/// Every way a submission can fail.
///
/// `Display` yields the user-facing message; the `reason` fields keep the
/// underlying cause for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a sentence")]
    EmptySentence,
    #[error("Please enter a valid word ID")]
    InvalidWordId,
    #[error("{message}")]
    Remote { status: u16, message: String },
    #[error("{}", GENERIC_FALLBACK_MESSAGE)]
    Transport { reason: String },
    #[error("{}", GENERIC_FALLBACK_MESSAGE)]
    MalformedResponse { reason: String },
    #[error("Request was cancelled")]
    Cancelled,
}

impl ValidationError {
    /// True for failures raised before anything touched the network.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::EmptySentence | Self::InvalidWordId)
    }
}
