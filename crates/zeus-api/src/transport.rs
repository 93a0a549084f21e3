// Shared transport configuration for building reqwest::Client instances.
//
// Kept separate from the client so callers (and tests) can tune timeouts
// without touching auth or URL handling.

use std::time::Duration;

/// Transport configuration for the Zeus HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("zeus-provider/0.1.0")
            .build()
            .map_err(crate::error::Error::Transport)
    }
}
