//! Provider configuration.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// Raw, possibly-incomplete settings as a host hands them over. Unset
/// fields fall back to `ZEUS_ENDPOINT` / `ZEUS_TOKEN`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub endpoint: Option<String>,
    pub token: Option<String>,
}

/// Fully-resolved provider configuration. The token is secret material:
/// redacted Debug, never serialized.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: Url,
    pub token: SecretString,
}

impl ProviderConfig {
    /// Resolve settings against the environment: explicit values win,
    /// `ZEUS_`-prefixed variables fill the gaps, and anything still
    /// missing afterwards is a configuration error.
    pub fn resolve(explicit: ProviderSettings) -> Result<Self, Error> {
        let env: ProviderSettings = Figment::new()
            .merge(Serialized::defaults(ProviderSettings::default()))
            .merge(Env::prefixed("ZEUS_"))
            .extract()?;

        let endpoint = explicit
            .endpoint
            .or(env.endpoint)
            .ok_or_else(|| missing("endpoint", "ZEUS_ENDPOINT"))?;
        let token = explicit
            .token
            .or(env.token)
            .ok_or_else(|| missing("token", "ZEUS_TOKEN"))?;

        let endpoint: Url = endpoint.parse().map_err(|_| Error::Config {
            field: "endpoint".to_string(),
            reason: format!("invalid URL: {endpoint}"),
        })?;

        Ok(Self {
            endpoint,
            token: SecretString::from(token),
        })
    }
}

fn missing(field: &str, var: &str) -> Error {
    Error::Config {
        field: field.to_string(),
        reason: format!("not set and {var} is unset"),
    }
}
