//! Dynamic value model.
//!
//! Configuration payloads arrive as arbitrarily-shaped values that keep
//! Terraform's three-way distinction: a node is null, unknown (not yet
//! decided at plan time), or known. [`DynamicValue`] is that tree;
//! [`Attr`] is the same three-state cell for statically-typed attributes
//! in resource state models.

use std::collections::BTreeMap;

use strum::Display;

/// Discriminant names for [`DynamicValue`] nodes, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Null,
    Unknown,
    String,
    Bool,
    Int64,
    Float64,
    Number,
    List,
    Set,
    Tuple,
    Map,
    Object,
}

/// A dynamically-typed configuration value.
///
/// `Null` and `Unknown` are distinct states: null means "deliberately
/// absent", unknown means "not decided until apply". A null container is
/// the whole container being absent, never a container of nulls.
///
/// `Number` carries numbers too wide for `i64`/`f64` (e.g. large `u64` or
/// arbitrary-precision forms) untouched; see the codec for how they move
/// across the JSON boundary.
#[derive(Debug, Clone)]
pub enum DynamicValue {
    Null,
    Unknown,
    String(String),
    Bool(bool),
    Int64(i64),
    Float64(f64),
    Number(serde_json::Number),
    List(Vec<DynamicValue>),
    Set(Vec<DynamicValue>),
    Tuple(Vec<DynamicValue>),
    Map(BTreeMap<String, DynamicValue>),
    Object(BTreeMap<String, DynamicValue>),
}

impl DynamicValue {
    /// The discriminant of this node.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Unknown => ValueKind::Unknown,
            Self::String(_) => ValueKind::String,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int64(_) => ValueKind::Int64,
            Self::Float64(_) => ValueKind::Float64,
            Self::Number(_) => ValueKind::Number,
            Self::List(_) => ValueKind::List,
            Self::Set(_) => ValueKind::Set,
            Self::Tuple(_) => ValueKind::Tuple,
            Self::Map(_) => ValueKind::Map,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// Build a set, dropping duplicates by value equality and keeping
    /// first-occurrence order.
    pub fn set(items: impl IntoIterator<Item = DynamicValue>) -> Self {
        let mut out: Vec<DynamicValue> = Vec::new();
        for item in items {
            if !out.contains(&item) {
                out.push(item);
            }
        }
        Self::Set(out)
    }

    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if value is an unknown placeholder.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Check if this node is neither null nor unknown. Children of a
    /// known container may still be unknown.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Null | Self::Unknown)
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get a field of a map or object.
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        match self {
            Self::Map(entries) | Self::Object(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Try to get a slot of a list, set, or tuple.
    pub fn get_index(&self, index: usize) -> Option<&DynamicValue> {
        match self {
            Self::List(items) | Self::Set(items) | Self::Tuple(items) => items.get(index),
            _ => None,
        }
    }
}

/// Structural equality. Same variant required; list and tuple compare in
/// order, sets compare as multisets, maps and objects by key and value.
impl PartialEq for DynamicValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) | (Self::Unknown, Self::Unknown) => true,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Float64(a), Self::Float64(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::List(a), Self::List(b)) | (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => multiset_eq(a, b),
            (Self::Map(a), Self::Map(b)) | (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

fn multiset_eq(a: &[DynamicValue], b: &[DynamicValue]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut unmatched: Vec<&DynamicValue> = b.iter().collect();
    for item in a {
        match unmatched.iter().position(|c| *c == item) {
            Some(i) => {
                unmatched.swap_remove(i);
            }
            None => return false,
        }
    }
    true
}

impl Default for DynamicValue {
    fn default() -> Self {
        Self::Null
    }
}

// Conversion traits
impl From<bool> for DynamicValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for DynamicValue {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for DynamicValue {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<String> for DynamicValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<DynamicValue>> From<Vec<T>> for DynamicValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

// ── Typed attribute cells ───────────────────────────────────────────

/// A three-state cell for a statically-typed attribute: absent, pending,
/// or carrying a value. The declared type lives in `T`, so "null of the
/// declared type" needs no runtime type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Attr<T> {
    Null,
    Unknown,
    Known(T),
}

impl<T> Attr<T> {
    /// Check if the attribute is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the attribute is an unknown placeholder.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Check if the attribute carries a value.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Borrow the carried value, if any.
    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(v) => Some(v),
            _ => None,
        }
    }

    /// Take the carried value, if any.
    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Known(v) => Some(v),
            _ => None,
        }
    }

    /// The carried value, or `T::default()` for null/unknown cells.
    pub fn known_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Known(v) => v,
            _ => T::default(),
        }
    }
}

impl<T> Default for Attr<T> {
    fn default() -> Self {
        Self::Null
    }
}

impl<T> From<T> for Attr<T> {
    fn from(v: T) -> Self {
        Self::Known(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_values() {
        let v = DynamicValue::from(42i64);
        assert_eq!(v.as_i64(), Some(42));
        assert_eq!(v.as_f64(), None);

        let v = DynamicValue::from(2.5f64);
        assert_eq!(v.as_f64(), Some(2.5));

        let v = DynamicValue::from("hello");
        assert_eq!(v.as_str(), Some("hello"));
        assert!(v.is_known());
    }

    #[test]
    fn test_null_and_unknown_are_distinct() {
        assert!(DynamicValue::Null.is_null());
        assert!(!DynamicValue::Null.is_unknown());
        assert!(DynamicValue::Unknown.is_unknown());
        assert_ne!(DynamicValue::Null, DynamicValue::Unknown);
    }

    #[test]
    fn test_container_access() {
        let v = DynamicValue::Map(BTreeMap::from([
            ("env".to_string(), DynamicValue::from("dev")),
            ("count".to_string(), DynamicValue::from(3i64)),
        ]));

        assert_eq!(v.get("env").and_then(DynamicValue::as_str), Some("dev"));
        assert_eq!(v.get("count").and_then(DynamicValue::as_i64), Some(3));
        assert!(v.get("missing").is_none());

        let v = DynamicValue::from(vec![1i64, 2, 3]);
        assert_eq!(v.get_index(2).and_then(DynamicValue::as_i64), Some(3));
        assert!(v.get_index(3).is_none());
    }

    #[test]
    fn test_set_dedups_preserving_order() {
        let v = DynamicValue::set([
            DynamicValue::from("b"),
            DynamicValue::from("a"),
            DynamicValue::from("b"),
        ]);

        let DynamicValue::Set(items) = v else {
            panic!("expected a set");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_str(), Some("b"));
        assert_eq!(items[1].as_str(), Some("a"));
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a = DynamicValue::set([DynamicValue::from(1i64), DynamicValue::from(2i64)]);
        let b = DynamicValue::set([DynamicValue::from(2i64), DynamicValue::from(1i64)]);
        assert_eq!(a, b);

        let c = DynamicValue::Set(vec![
            DynamicValue::from(1i64),
            DynamicValue::from(1i64),
        ]);
        let d = DynamicValue::Set(vec![
            DynamicValue::from(1i64),
            DynamicValue::from(2i64),
        ]);
        assert_ne!(c, d);
    }

    #[test]
    fn test_list_equality_is_ordered() {
        let a = DynamicValue::from(vec![1i64, 2]);
        let b = DynamicValue::from(vec![2i64, 1]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_different_variants_never_equal() {
        let list = DynamicValue::List(vec![DynamicValue::from(1i64)]);
        let set = DynamicValue::Set(vec![DynamicValue::from(1i64)]);
        assert_ne!(list, set);
        assert_ne!(DynamicValue::from(1i64), DynamicValue::from(1.0f64));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(DynamicValue::Unknown.kind().to_string(), "unknown");
        assert_eq!(DynamicValue::from(1i64).kind().to_string(), "int64");
        assert_eq!(
            DynamicValue::Tuple(Vec::new()).kind().to_string(),
            "tuple"
        );
    }

    #[test]
    fn test_attr_states() {
        let known: Attr<i64> = Attr::from(7);
        assert!(known.is_known());
        assert_eq!(known.known(), Some(&7));
        assert_eq!(known.clone().into_known(), Some(7));
        assert_eq!(known.known_or_default(), 7);

        let null: Attr<String> = Attr::Null;
        assert!(null.is_null());
        assert_eq!(null.known_or_default(), String::new());

        let unknown: Attr<i64> = Attr::Unknown;
        assert!(unknown.is_unknown());
        assert_eq!(unknown.into_known(), None);
    }
}
