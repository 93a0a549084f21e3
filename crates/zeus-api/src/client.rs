// Hand-crafted async HTTP client for the Zeus address-pool API.
//
// All endpoints sit at the server root (no version prefix).
// Auth: `Authorization: Bearer <token>` on every request.

use std::future::Future;

use reqwest::header;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    AssignDetail, CreateAssignRequest, CreateAssignResponse, CreatePoolRequest,
    CreatePoolResponse, PoolDetail,
};

// ── Error response shape from the Zeus API ───────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Zeus API.
///
/// Holds only immutable configuration (base URL, bearer token, transport),
/// so it is cheap to clone and safe to share across concurrent operations.
/// Every request method takes a [`CancellationToken`]; a token firing while
/// the request is in flight aborts it with [`Error::Cancelled`].
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    token: SecretString,
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client with the default transport configuration.
    pub fn new(base_url: &str, token: SecretString) -> Result<Self, Error> {
        Self::with_transport(base_url, token, &TransportConfig::default())
    }

    /// Build a client with an explicit transport configuration.
    pub fn with_transport(
        base_url: &str,
        token: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Parse the base URL and force a trailing slash so relative joins
    /// append to any path prefix instead of replacing it.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"pool/id/abc"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    fn prepare(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(self.token.expose_secret())
    }

    /// Race a request future against the operation's cancellation token.
    async fn execute<T>(
        cancel: &CancellationToken,
        fut: impl Future<Output = Result<T, Error>>,
    ) -> Result<T, Error> {
        tokio::select! {
            () = cancel.cancelled() => Err(Error::Cancelled),
            out = fut => out,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let req = self.prepare(self.http.get(url));
        Self::execute(cancel, async move {
            let resp = req.send().await?;
            Self::handle_response(resp).await
        })
        .await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let req = self.prepare(self.http.post(url)).json(body);
        Self::execute(cancel, async move {
            let resp = req.send().await?;
            Self::handle_response(resp).await
        })
        .await
    }

    async fn delete(&self, cancel: &CancellationToken, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let req = self.prepare(self.http.delete(url));
        Self::execute(cancel, async move {
            let resp = req.send().await?;
            Self::handle_empty(resp).await
        })
        .await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::parse_error(status, resp).await);
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|e| e.error)
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                }
            });

        Error::Api {
            status: status.as_u16(),
            message,
        }
    }

    // ── Pools ────────────────────────────────────────────────────────

    /// Create an address pool, returning its server-assigned ID.
    pub async fn create_pool(
        &self,
        cancel: &CancellationToken,
        req: &CreatePoolRequest,
    ) -> Result<CreatePoolResponse, Error> {
        self.post(cancel, "pools", req).await
    }

    /// Fetch pool details by ID.
    pub async fn pool_by_id(
        &self,
        cancel: &CancellationToken,
        id: &str,
    ) -> Result<PoolDetail, Error> {
        self.get(cancel, &format!("pool/id/{id}")).await
    }

    /// Delete a pool. The server answers 404 for pools already gone.
    pub async fn delete_pool(&self, cancel: &CancellationToken, id: &str) -> Result<(), Error> {
        self.delete(cancel, &format!("pool/{id}")).await
    }

    // ── Assignments ──────────────────────────────────────────────────

    /// Create an assignment across regions, returning its ID and the
    /// per-region address allocations.
    pub async fn create_assign(
        &self,
        cancel: &CancellationToken,
        req: &CreateAssignRequest,
    ) -> Result<CreateAssignResponse, Error> {
        self.post(cancel, "assigns", req).await
    }

    /// Fetch assignment details by ID.
    pub async fn assign_by_id(
        &self,
        cancel: &CancellationToken,
        id: &str,
    ) -> Result<AssignDetail, Error> {
        self.get(cancel, &format!("assign/{id}")).await
    }

    /// Delete an assignment. The server answers 404 when already gone.
    pub async fn delete_assign(&self, cancel: &CancellationToken, id: &str) -> Result<(), Error> {
        self.delete(cancel, &format!("assign/{id}")).await
    }
}
