//! The pool resource: a regional IPv4 address pool.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use zeus_api::Client;
use zeus_api::types::{CreatePoolRequest, PoolDetail};

use crate::error::Error;
use crate::resource::required;
use crate::value::Attr;

/// State model for the pool resource.
///
/// `start`, `gateway`, `size`, and `region` are configured and force
/// replacement on change; the remaining fields are computed by the server.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoolModel {
    pub id: Attr<String>,
    pub start: Attr<i64>,
    pub gateway: Attr<i64>,
    pub size: Attr<i64>,
    pub region: Attr<String>,
    pub friendly_name: Attr<String>,
    pub begin: Attr<String>,
    pub end: Attr<String>,
    pub gateway_ip: Attr<String>,
    pub state: Attr<Vec<i64>>,
}

/// CRUD orchestration for pools.
#[derive(Debug, Clone)]
pub struct PoolResource {
    client: Client,
}

impl PoolResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create the pool, then refresh so computed fields land in state.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        plan: PoolModel,
    ) -> Result<PoolModel, Error> {
        let req = CreatePoolRequest {
            start: required(&plan.start, "start")?,
            gateway: required(&plan.gateway, "gateway")?,
            size: required(&plan.size, "size")?,
            region: required(&plan.region, "region")?,
        };

        let created = self.client.create_pool(cancel, &req).await?;
        info!(id = %created.id, "created pool");

        let mut model = plan;
        model.id = Attr::Known(created.id);
        self.refresh(cancel, model).await
    }

    /// Refresh from the server; `Ok(None)` means the pool no longer
    /// exists and should be dropped from state without error.
    pub async fn read(
        &self,
        cancel: &CancellationToken,
        state: PoolModel,
    ) -> Result<Option<PoolModel>, Error> {
        match self.refresh(cancel, state).await {
            Ok(model) => Ok(Some(model)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Every mutable attribute is replace-on-change, so update only
    /// carries the planned model forward.
    pub async fn update(
        &self,
        _cancel: &CancellationToken,
        plan: PoolModel,
    ) -> Result<PoolModel, Error> {
        Ok(plan)
    }

    /// Delete by ID. A pool already gone (404) counts as success.
    pub async fn delete(
        &self,
        cancel: &CancellationToken,
        state: &PoolModel,
    ) -> Result<(), Error> {
        let id = required(&state.id, "id")?;
        match self.client.delete_pool(cancel, &id).await {
            Ok(()) => {
                info!(id = %id, "deleted pool");
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                debug!(id = %id, "pool already gone");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Import by opaque ID: a model with only the id known, then a
    /// regular read.
    pub async fn import(
        &self,
        cancel: &CancellationToken,
        id: &str,
    ) -> Result<Option<PoolModel>, Error> {
        let model = PoolModel {
            id: Attr::Known(id.to_string()),
            ..PoolModel::default()
        };
        self.read(cancel, model).await
    }

    async fn refresh(
        &self,
        cancel: &CancellationToken,
        mut model: PoolModel,
    ) -> Result<PoolModel, Error> {
        let id = required(&model.id, "id")?;
        let detail = self.client.pool_by_id(cancel, &id).await?;
        apply_detail(&mut model, detail);
        Ok(model)
    }
}

fn apply_detail(model: &mut PoolModel, detail: PoolDetail) {
    model.region = Attr::Known(detail.region);
    model.friendly_name = Attr::Known(detail.friendly_name);
    model.begin = Attr::Known(detail.begin);
    model.end = Attr::Known(detail.end);
    model.gateway_ip = Attr::Known(detail.gateway);

    // The occupancy list is authoritative for size when the server
    // reports it; otherwise the configured size stands.
    if let Some(state) = detail.state {
        model.size = Attr::Known(i64::try_from(state.len()).unwrap_or(i64::MAX));
        model.state = Attr::Known(state);
    }
}
