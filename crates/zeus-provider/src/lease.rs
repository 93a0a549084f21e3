//! Lease state records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zeus_api::types::AddressResult;

use crate::value::Attr;

/// One allocated lease in resource state: the same 4-field record for
/// every region. `vlan` always serializes; a lease without a VLAN carries
/// an explicit null, never an omitted key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseRecord {
    pub address: String,
    pub gateway: String,
    pub lease_id: String,
    pub vlan: Option<i64>,
}

impl From<AddressResult> for LeaseRecord {
    fn from(result: AddressResult) -> Self {
        Self {
            address: result.address,
            gateway: result.gateway,
            lease_id: result.lease_id,
            vlan: result.vlan,
        }
    }
}

/// Encode the per-region lease results returned by the API into the typed
/// state cell. An empty result set becomes the null map, not an empty one.
pub fn encode_leases(
    addresses: BTreeMap<String, AddressResult>,
) -> Attr<BTreeMap<String, LeaseRecord>> {
    if addresses.is_empty() {
        return Attr::Null;
    }
    Attr::Known(
        addresses
            .into_iter()
            .map(|(region, result)| (region, LeaseRecord::from(result)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn result(vlan: Option<i64>) -> AddressResult {
        AddressResult {
            address: "10.0.0.7".to_string(),
            gateway: "10.0.0.1".to_string(),
            lease_id: "lease-300".to_string(),
            vlan,
        }
    }

    #[test]
    fn test_empty_result_set_is_null() {
        let encoded = encode_leases(BTreeMap::new());
        assert!(encoded.is_null());
    }

    #[test]
    fn test_regions_and_fields_preserved() {
        let addresses = BTreeMap::from([
            ("us-east".to_string(), result(None)),
            ("eu-west".to_string(), result(Some(30))),
        ]);

        let encoded = encode_leases(addresses);
        let leases = encoded.known().unwrap();

        assert_eq!(leases.len(), 2);
        assert_eq!(leases["us-east"].address, "10.0.0.7");
        assert_eq!(leases["us-east"].vlan, None);
        assert_eq!(leases["eu-west"].vlan, Some(30));
    }

    #[test]
    fn test_missing_vlan_serializes_as_explicit_null() {
        let record = LeaseRecord::from(result(None));
        let json = serde_json::to_value(&record).unwrap();

        let fields = json.as_object().unwrap();
        assert_eq!(fields.len(), 4);
        assert!(fields.contains_key("vlan"));
        assert_eq!(fields["vlan"], Value::Null);
        assert_eq!(fields["lease_id"], "lease-300");
    }
}
