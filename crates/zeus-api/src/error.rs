use thiserror::Error;

/// Top-level error type for the `zeus-api` crate.
///
/// Covers every failure mode at the remote boundary: transport, URL
/// construction, cancellation, non-2xx API responses, and payload decoding.
/// `zeus-provider` maps these into operation failures; 404s drive its
/// remove-from-state path.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The operation's cancellation token fired while a request was in flight.
    #[error("Request cancelled")]
    Cancelled,

    // ── Zeus API ────────────────────────────────────────────────────
    /// Non-2xx response, with the message decoded from the optional
    /// `{"error": …}` body (falls back to the status line).
    #[error("Zeus API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    ///
    /// Read and delete paths treat these as "already gone" rather than fatal.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if the failure was a cancellation, not a remote fault.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
