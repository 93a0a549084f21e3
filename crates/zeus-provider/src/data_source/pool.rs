//! Pool lookup by ID.

use tokio_util::sync::CancellationToken;
use zeus_api::Client;

use crate::error::Error;
use crate::value::Attr;

/// Result model of a pool lookup. Everything except the input `id` is
/// read from the server; `size` is derived from the occupancy list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoolData {
    pub id: Attr<String>,
    pub region: Attr<String>,
    pub friendly_name: Attr<String>,
    pub begin: Attr<String>,
    pub end: Attr<String>,
    pub gateway_ip: Attr<String>,
    pub size: Attr<i64>,
    pub state: Attr<Vec<i64>>,
}

#[derive(Debug, Clone)]
pub struct PoolDataSource {
    client: Client,
}

impl PoolDataSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Look up a pool. Any failure, including a missing pool, is fatal
    /// for the operation.
    pub async fn read(&self, cancel: &CancellationToken, id: &str) -> Result<PoolData, Error> {
        let detail = self.client.pool_by_id(cancel, id).await?;

        let (size, state) = match detail.state {
            Some(list) => (
                i64::try_from(list.len()).unwrap_or(i64::MAX),
                Attr::Known(list),
            ),
            None => (0, Attr::Null),
        };

        Ok(PoolData {
            id: Attr::Known(detail.id),
            region: Attr::Known(detail.region),
            friendly_name: Attr::Known(detail.friendly_name),
            begin: Attr::Known(detail.begin),
            end: Attr::Known(detail.end),
            gateway_ip: Attr::Known(detail.gateway),
            size: Attr::Known(size),
            state,
        })
    }
}
