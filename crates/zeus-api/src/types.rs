//! Wire types for the Zeus address-pool API.
//!
//! All types match the JSON bodies of the Zeus REST endpoints. Camel-cased
//! wire fields map through `#[serde(rename_all = "camelCase")]`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Pools ────────────────────────────────────────────────────────────

/// Request body for `POST /pools`.
///
/// `start` and `gateway` carry addresses in 32-bit integer form (see the
/// provider's `ipv4_ip2long` helper for the conversion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePoolRequest {
    pub start: i64,
    pub gateway: i64,
    pub size: i64,
    pub region: String,
}

/// Response body for `POST /pools`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePoolResponse {
    pub id: String,
}

/// Pool detail — from `GET /pool/id/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDetail {
    pub id: String,
    pub region: String,
    pub friendly_name: String,
    pub begin: String,
    pub end: String,
    pub gateway: String,
    /// Per-slot occupancy; the pool's effective size is this list's length.
    /// Absent on servers that have not materialized the pool yet.
    #[serde(default)]
    pub state: Option<Vec<i64>>,
}

// ── Assignments ──────────────────────────────────────────────────────

/// Per-region address allocation attached to an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResult {
    pub address: String,
    pub gateway: String,
    pub lease_id: String,
    /// VLAN tag; omitted on the wire when the lease carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan: Option<i64>,
}

/// Request body for `POST /assigns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAssignRequest {
    pub region: Vec<String>,
    pub host: String,
    pub key: String,
    #[serde(rename = "type")]
    pub assign_type: String,
    /// Free-form payload; omitted entirely when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Response body for `POST /assigns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAssignResponse {
    pub id: String,
    #[serde(default)]
    pub addresses: BTreeMap<String, AddressResult>,
}

/// Assignment detail — from `GET /assign/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDetail {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub key: String,
    #[serde(rename = "type")]
    pub assign_type: String,
    /// Free-form payload exactly as stored by the server; JSON null when unset.
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub leases: BTreeMap<String, AddressResult>,
}
