use thiserror::Error;

/// Top-level error type for the provider core.
///
/// Value-conversion failures carry the accumulated root-to-node path in
/// their message (e.g. `map["region"]: list[3]: value must be known`), so
/// callers can surface them as attribute diagnostics without extra
/// bookkeeping. Remote failures pass through from [`zeus_api::Error`]
/// unchanged.
#[derive(Debug, Error)]
pub enum Error {
    // ── Value conversion ────────────────────────────────────────────
    /// A value could not be encoded to JSON: an unknown node, or a number
    /// with no JSON representation. The message is the full path-prefixed
    /// diagnosis.
    #[error("{0}")]
    InvalidValue(String),

    /// A decoded JSON node falls outside the supported value set.
    #[error("unsupported value shape: {0}")]
    UnsupportedShape(String),

    // ── Remote API ──────────────────────────────────────────────────
    #[error(transparent)]
    Api(#[from] zeus_api::Error),

    // ── Configuration ───────────────────────────────────────────────
    #[error("config loading failed: {0}")]
    ConfigLoad(Box<figment::Error>),

    #[error("invalid {field}: {reason}")]
    Config { field: String, reason: String },

    // ── IPv4 functions ──────────────────────────────────────────────
    #[error("ipv4_long must be between 0 and 4294967295")]
    Ipv4LongOutOfRange,

    #[error("ipv4_ip must be a valid IPv4 address")]
    Ipv4Invalid,
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// True when the remote API reported the object missing (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_not_found())
    }

    /// True when an in-flight remote call was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_cancelled())
    }
}
