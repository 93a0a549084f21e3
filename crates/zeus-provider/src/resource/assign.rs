//! The assign resource: a named lease of addresses across regions.

use std::collections::BTreeMap;

use chrono::SecondsFormat;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use zeus_api::Client;
use zeus_api::types::CreateAssignRequest;

use crate::codec;
use crate::error::Error;
use crate::lease::{LeaseRecord, encode_leases};
use crate::resource::required;
use crate::value::{Attr, DynamicValue};

/// State model for the assign resource.
///
/// `region`, `host`, `key`, and `type_tag` are configured and force
/// replacement on change. `data` is the free-form payload; whether a
/// change to it forces replacement is decided by the stability policy at
/// plan time. `created_at` and `leases` are computed by the server.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssignModel {
    pub id: Attr<String>,
    pub region: Attr<Vec<String>>,
    pub host: Attr<String>,
    pub key: Attr<String>,
    pub type_tag: Attr<String>,
    pub data: DynamicValue,
    pub created_at: Attr<String>,
    pub leases: Attr<BTreeMap<String, LeaseRecord>>,
}

/// CRUD orchestration for assignments.
#[derive(Debug, Clone)]
pub struct AssignResource {
    client: Client,
}

impl AssignResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create the assignment, then refresh so computed fields land in
    /// state. A still-unknown `data` is rejected before any request; a
    /// null `data` omits the field from the request body entirely.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        plan: AssignModel,
    ) -> Result<AssignModel, Error> {
        if plan.data.is_unknown() {
            return Err(Error::InvalidValue(
                "data must be known during apply".to_string(),
            ));
        }
        let data = if plan.data.is_null() {
            None
        } else {
            Some(codec::encode(&plan.data)?)
        };

        let req = CreateAssignRequest {
            region: required(&plan.region, "region")?,
            host: required(&plan.host, "host")?,
            key: required(&plan.key, "key")?,
            assign_type: required(&plan.type_tag, "type")?,
            data,
        };

        let created = self.client.create_assign(cancel, &req).await?;
        info!(id = %created.id, "created assign");

        let mut model = plan;
        model.id = Attr::Known(created.id);
        self.refresh(cancel, model).await
    }

    /// Refresh from the server; `Ok(None)` means the assignment no
    /// longer exists and should be dropped from state without error.
    pub async fn read(
        &self,
        cancel: &CancellationToken,
        state: AssignModel,
    ) -> Result<Option<AssignModel>, Error> {
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
        plan: AssignModel,
    ) -> Result<AssignModel, Error> {
        Ok(plan)
    }

    /// Delete by ID. An assignment already gone (404) counts as success.
    pub async fn delete(
        &self,
        cancel: &CancellationToken,
        state: &AssignModel,
    ) -> Result<(), Error> {
        let id = required(&state.id, "id")?;
        match self.client.delete_assign(cancel, &id).await {
            Ok(()) => {
                info!(id = %id, "deleted assign");
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                debug!(id = %id, "assign already gone");
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
    ) -> Result<Option<AssignModel>, Error> {
        let model = AssignModel {
            id: Attr::Known(id.to_string()),
            ..AssignModel::default()
        };
        self.read(cancel, model).await
    }

    /// Server-owned fields only: configured `region`, `host`, and `data`
    /// stay as held.
    async fn refresh(
        &self,
        cancel: &CancellationToken,
        mut model: AssignModel,
    ) -> Result<AssignModel, Error> {
        let id = required(&model.id, "id")?;
        let detail = self.client.assign_by_id(cancel, &id).await?;

        model.key = Attr::Known(detail.key);
        model.type_tag = Attr::Known(detail.assign_type);
        model.created_at = Attr::Known(
            detail
                .created_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        );
        model.leases = encode_leases(detail.leases);
        Ok(model)
    }
}
