//! Assignment lookup by ID.

use std::collections::BTreeMap;

use chrono::SecondsFormat;
use tokio_util::sync::CancellationToken;
use zeus_api::Client;

use crate::codec;
use crate::error::Error;
use crate::lease::{LeaseRecord, encode_leases};
use crate::value::{Attr, DynamicValue};

/// Result model of an assignment lookup. The free-form `data` payload is
/// reconstructed through the codec; a JSON null comes back as a null
/// value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssignData {
    pub id: Attr<String>,
    pub key: Attr<String>,
    pub type_tag: Attr<String>,
    pub created_at: Attr<String>,
    pub data: DynamicValue,
    pub leases: Attr<BTreeMap<String, LeaseRecord>>,
}

#[derive(Debug, Clone)]
pub struct AssignDataSource {
    client: Client,
}

impl AssignDataSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Look up an assignment. Any failure, including a missing
    /// assignment, is fatal for the operation.
    pub async fn read(&self, cancel: &CancellationToken, id: &str) -> Result<AssignData, Error> {
        let detail = self.client.assign_by_id(cancel, id).await?;

        Ok(AssignData {
            id: Attr::Known(detail.id),
            key: Attr::Known(detail.key),
            type_tag: Attr::Known(detail.assign_type),
            created_at: Attr::Known(
                detail
                    .created_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            data: codec::decode(&detail.data)?,
            leases: encode_leases(detail.leases),
        })
    }
}
