//! Conversion between [`DynamicValue`] trees and plain JSON.
//!
//! Encoding walks the value tree into a `serde_json::Value` for the wire.
//! Unknown nodes cannot be encoded; the failure message accumulates path
//! segments outer-to-inner, so an unknown three levels down reads like
//! `map["region"]: list[3]: value must be known`. Null short-circuits to
//! JSON null at whatever depth it appears.
//!
//! Decoding reconstructs a value tree from arbitrary JSON. Container-kind
//! fidelity is not attempted: arrays always come back as lists and objects
//! as maps, with every slot typed per-element.

use std::collections::BTreeMap;

use serde_json::{Number, Value};

use crate::error::Error;
use crate::value::DynamicValue;

const MUST_BE_KNOWN: &str = "value must be known";

/// Prefix conversion failures with the path segment of the failing child.
fn with_path(err: Error, label: &str) -> Error {
    match err {
        Error::InvalidValue(msg) => Error::InvalidValue(format!("{label}: {msg}")),
        Error::UnsupportedShape(msg) => Error::UnsupportedShape(format!("{label}: {msg}")),
        other => other,
    }
}

// ── Encode ──────────────────────────────────────────────────────────

/// Encode a value tree to JSON.
///
/// Fails with [`Error::InvalidValue`] if any node at any depth is unknown
/// or is a number JSON cannot carry. A null anywhere encodes to JSON null.
pub fn encode(value: &DynamicValue) -> Result<Value, Error> {
    match value {
        DynamicValue::Null => Ok(Value::Null),
        DynamicValue::Unknown => Err(Error::InvalidValue(MUST_BE_KNOWN.to_string())),
        DynamicValue::String(s) => Ok(Value::String(s.clone())),
        DynamicValue::Bool(b) => Ok(Value::Bool(*b)),
        DynamicValue::Int64(n) => Ok(Value::Number(Number::from(*n))),
        DynamicValue::Float64(f) => encode_float(*f),
        DynamicValue::Number(n) => encode_wide_number(n),
        DynamicValue::List(items) => encode_sequence(items, "list"),
        DynamicValue::Set(items) => encode_sequence(items, "set"),
        DynamicValue::Tuple(items) => encode_sequence(items, "tuple"),
        DynamicValue::Map(entries) => encode_map(entries),
        DynamicValue::Object(entries) => encode_object(entries),
    }
}

fn encode_float(f: f64) -> Result<Value, Error> {
    Number::from_f64(f)
        .map(Value::Number)
        .ok_or_else(|| Error::InvalidValue(format!("float {f} is not representable in JSON")))
}

/// Wide numbers are carried losslessly on decode but JSON output is
/// float64: convert best-effort, accepting precision loss, and fail only
/// when no finite reading exists.
fn encode_wide_number(n: &Number) -> Result<Value, Error> {
    n.as_f64()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| Error::InvalidValue(format!("number {n} is not representable in JSON")))
}

fn encode_sequence(items: &[DynamicValue], label: &str) -> Result<Value, Error> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let encoded = encode(item).map_err(|e| with_path(e, &format!("{label}[{i}]")))?;
        out.push(encoded);
    }
    Ok(Value::Array(out))
}

fn encode_map(entries: &BTreeMap<String, DynamicValue>) -> Result<Value, Error> {
    let mut out = serde_json::Map::new();
    for (key, item) in entries {
        let encoded = encode(item).map_err(|e| with_path(e, &format!("map[{key:?}]")))?;
        out.insert(key.clone(), encoded);
    }
    Ok(Value::Object(out))
}

fn encode_object(entries: &BTreeMap<String, DynamicValue>) -> Result<Value, Error> {
    let mut out = serde_json::Map::new();
    for (key, item) in entries {
        let encoded = encode(item).map_err(|e| with_path(e, &format!("object.{key}")))?;
        out.insert(key.clone(), encoded);
    }
    Ok(Value::Object(out))
}

// ── Decode ──────────────────────────────────────────────────────────

/// Decode arbitrary JSON into a value tree.
///
/// JSON null becomes [`DynamicValue::Null`] (no type information assumed);
/// arrays become lists, objects become maps. Numbers that fit `i64` come
/// back as `Int64`, float-sourced numbers as `Float64`, and anything wider
/// passes through untouched rather than being down-cast.
pub fn decode(value: &Value) -> Result<DynamicValue, Error> {
    match value {
        Value::Null => Ok(DynamicValue::Null),
        Value::Bool(b) => Ok(DynamicValue::Bool(*b)),
        Value::String(s) => Ok(DynamicValue::String(s.clone())),
        Value::Number(n) => decode_number(n),
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                out.push(decode(item).map_err(|e| with_path(e, &format!("list[{i}]")))?);
            }
            Ok(DynamicValue::List(out))
        }
        Value::Object(entries) => {
            let mut out = BTreeMap::new();
            for (key, item) in entries {
                let decoded = decode(item).map_err(|e| with_path(e, &format!("map[{key:?}]")))?;
                out.insert(key.clone(), decoded);
            }
            Ok(DynamicValue::Map(out))
        }
    }
}

fn decode_number(n: &Number) -> Result<DynamicValue, Error> {
    if let Some(i) = n.as_i64() {
        Ok(DynamicValue::Int64(i))
    } else if n.is_f64() {
        n.as_f64().map(DynamicValue::Float64).ok_or_else(|| {
            Error::UnsupportedShape(format!("number {n} has no float reading"))
        })
    } else if n.is_u64() || n.as_f64().is_some() {
        Ok(DynamicValue::Number(n.clone()))
    } else {
        Err(Error::UnsupportedShape(format!(
            "number {n} has no integral or float reading"
        )))
    }
}
