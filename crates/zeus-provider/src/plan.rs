//! Plan-time stability policy.
//!
//! Decides whether a changed attribute forces destroying and recreating
//! the managed object. The rule for dynamic fields: if either side is
//! still unknown the decision is deferred to apply; otherwise replacement
//! is required exactly when the two values are not structurally equal.
//! Comparison runs on the typed representation, never on encoded JSON.

use crate::resource::assign::AssignModel;
use crate::resource::pool::PoolModel;
use crate::value::{Attr, DynamicValue};

/// Replacement decision for a free-form dynamic field.
pub fn requires_replace(prior: &DynamicValue, proposed: &DynamicValue) -> bool {
    if prior.is_unknown() || proposed.is_unknown() {
        return false;
    }
    prior != proposed
}

/// The same rule for a statically-typed attribute cell.
pub fn attr_requires_replace<T: PartialEq>(prior: &Attr<T>, proposed: &Attr<T>) -> bool {
    if prior.is_unknown() || proposed.is_unknown() {
        return false;
    }
    prior != proposed
}

/// Plan a pool change: the planned model plus the names of attributes
/// forcing replacement. On create (no prior state) nothing forces
/// replacement and computed attributes are left unknown for apply to
/// fill; on later plans a still-unknown `id` carries the prior one
/// forward.
pub fn plan_pool(
    prior: Option<&PoolModel>,
    proposed: &PoolModel,
) -> (PoolModel, Vec<&'static str>) {
    let mut planned = proposed.clone();

    let Some(prior) = prior else {
        planned.id = Attr::Unknown;
        planned.friendly_name = Attr::Unknown;
        planned.begin = Attr::Unknown;
        planned.end = Attr::Unknown;
        planned.gateway_ip = Attr::Unknown;
        planned.state = Attr::Unknown;
        return (planned, Vec::new());
    };

    if planned.id.is_unknown() {
        planned.id = prior.id.clone();
    }

    let mut replaced = Vec::new();
    if attr_requires_replace(&prior.start, &planned.start) {
        replaced.push("start");
    }
    if attr_requires_replace(&prior.gateway, &planned.gateway) {
        replaced.push("gateway");
    }
    if attr_requires_replace(&prior.size, &planned.size) {
        replaced.push("size");
    }
    if attr_requires_replace(&prior.region, &planned.region) {
        replaced.push("region");
    }

    (planned, replaced)
}

/// Plan an assign change. The scalar configured attributes replace on
/// change; `data` is governed by the dynamic-field policy.
pub fn plan_assign(
    prior: Option<&AssignModel>,
    proposed: &AssignModel,
) -> (AssignModel, Vec<&'static str>) {
    let mut planned = proposed.clone();

    let Some(prior) = prior else {
        planned.id = Attr::Unknown;
        planned.created_at = Attr::Unknown;
        planned.leases = Attr::Unknown;
        return (planned, Vec::new());
    };

    if planned.id.is_unknown() {
        planned.id = prior.id.clone();
    }

    let mut replaced = Vec::new();
    if attr_requires_replace(&prior.region, &planned.region) {
        replaced.push("region");
    }
    if attr_requires_replace(&prior.host, &planned.host) {
        replaced.push("host");
    }
    if attr_requires_replace(&prior.key, &planned.key) {
        replaced.push("key");
    }
    if attr_requires_replace(&prior.type_tag, &planned.type_tag) {
        replaced.push("type");
    }
    if requires_replace(&prior.data, &planned.data) {
        replaced.push("data");
    }

    (planned, replaced)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_equal_values_never_replace() {
        let v = DynamicValue::Map(BTreeMap::from([(
            "a".to_string(),
            DynamicValue::from(1i64),
        )]));
        assert!(!requires_replace(&v, &v.clone()));
        assert!(!requires_replace(&DynamicValue::Null, &DynamicValue::Null));
    }

    #[test]
    fn test_unknown_defers() {
        assert!(!requires_replace(
            &DynamicValue::Int64(1),
            &DynamicValue::Unknown
        ));
        assert!(!requires_replace(
            &DynamicValue::Unknown,
            &DynamicValue::Int64(1)
        ));
        assert!(!requires_replace(
            &DynamicValue::Unknown,
            &DynamicValue::Unknown
        ));
    }

    #[test]
    fn test_distinct_known_values_replace() {
        assert!(requires_replace(
            &DynamicValue::Int64(1),
            &DynamicValue::Int64(2)
        ));
        assert!(requires_replace(
            &DynamicValue::Null,
            &DynamicValue::Int64(2)
        ));
        assert!(requires_replace(
            &DynamicValue::from(vec![1i64, 2]),
            &DynamicValue::from(vec![2i64, 1])
        ));
    }

    #[test]
    fn test_set_reorder_is_not_a_change() {
        let prior = DynamicValue::set([DynamicValue::from("a"), DynamicValue::from("b")]);
        let proposed = DynamicValue::set([DynamicValue::from("b"), DynamicValue::from("a")]);
        assert!(!requires_replace(&prior, &proposed));
    }

    #[test]
    fn test_attr_rule() {
        assert!(!attr_requires_replace(&Attr::Known(1), &Attr::Unknown));
        assert!(!attr_requires_replace::<i64>(&Attr::Null, &Attr::Null));
        assert!(attr_requires_replace(&Attr::Known(1), &Attr::Known(2)));
        assert!(attr_requires_replace(&Attr::Null, &Attr::Known(2)));
    }

    fn pool_state() -> PoolModel {
        PoolModel {
            id: Attr::Known("pool-1".to_string()),
            start: Attr::Known(167_772_161),
            gateway: Attr::Known(167_772_161),
            size: Attr::Known(256),
            region: Attr::Known("us-east".to_string()),
            friendly_name: Attr::Known("edge-pool".to_string()),
            begin: Attr::Known("10.0.0.2".to_string()),
            end: Attr::Known("10.0.0.254".to_string()),
            gateway_ip: Attr::Known("10.0.0.1".to_string()),
            state: Attr::Known(vec![167_772_162]),
        }
    }

    #[test]
    fn test_plan_pool_create_leaves_computed_unknown() {
        let proposed = PoolModel {
            start: Attr::Known(167_772_161),
            gateway: Attr::Known(167_772_161),
            size: Attr::Known(256),
            region: Attr::Known("us-east".to_string()),
            ..PoolModel::default()
        };

        let (planned, replaced) = plan_pool(None, &proposed);

        assert!(replaced.is_empty());
        assert!(planned.id.is_unknown());
        assert!(planned.begin.is_unknown());
        assert!(planned.state.is_unknown());
        assert_eq!(planned.size, Attr::Known(256));
    }

    #[test]
    fn test_plan_pool_reports_changed_attributes_in_order() {
        let prior = pool_state();
        let mut proposed = prior.clone();
        proposed.start = Attr::Known(167_772_417);
        proposed.size = Attr::Known(512);

        let (_, replaced) = plan_pool(Some(&prior), &proposed);
        assert_eq!(replaced, vec!["start", "size"]);
    }

    #[test]
    fn test_plan_pool_carries_prior_id_for_unknown() {
        let prior = pool_state();
        let mut proposed = prior.clone();
        proposed.id = Attr::Unknown;

        let (planned, replaced) = plan_pool(Some(&prior), &proposed);
        assert_eq!(planned.id, Attr::Known("pool-1".to_string()));
        assert!(replaced.is_empty());
    }

    fn assign_state() -> AssignModel {
        AssignModel {
            id: Attr::Known("assign-9".to_string()),
            region: Attr::Known(vec!["us-east".to_string()]),
            host: Attr::Known("web-1".to_string()),
            key: Attr::Known("web-1.prod".to_string()),
            type_tag: Attr::Known("host".to_string()),
            data: DynamicValue::Map(BTreeMap::from([(
                "owner".to_string(),
                DynamicValue::from("platform"),
            )])),
            created_at: Attr::Known("2026-03-14T09:26:53Z".to_string()),
            leases: Attr::Null,
        }
    }

    #[test]
    fn test_plan_assign_data_change_replaces() {
        let prior = assign_state();
        let mut proposed = prior.clone();
        proposed.data = DynamicValue::Map(BTreeMap::from([(
            "owner".to_string(),
            DynamicValue::from("infra"),
        )]));

        let (_, replaced) = plan_assign(Some(&prior), &proposed);
        assert_eq!(replaced, vec!["data"]);
    }

    #[test]
    fn test_plan_assign_unknown_data_defers() {
        let prior = assign_state();
        let mut proposed = prior.clone();
        proposed.data = DynamicValue::Unknown;

        let (_, replaced) = plan_assign(Some(&prior), &proposed);
        assert!(replaced.is_empty());
    }

    #[test]
    fn test_plan_assign_scalar_changes() {
        let prior = assign_state();
        let mut proposed = prior.clone();
        proposed.host = Attr::Known("web-2".to_string());
        proposed.type_tag = Attr::Known("cname".to_string());

        let (_, replaced) = plan_assign(Some(&prior), &proposed);
        assert_eq!(replaced, vec!["host", "type"]);
    }

    #[test]
    fn test_plan_assign_create() {
        let proposed = assign_state();
        let (planned, replaced) = plan_assign(None, &proposed);

        assert!(replaced.is_empty());
        assert!(planned.id.is_unknown());
        assert!(planned.created_at.is_unknown());
        assert!(planned.leases.is_unknown());
    }
}
