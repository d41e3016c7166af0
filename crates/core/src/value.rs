//! Structured values for property transfer
//!
//! This module defines:
//! - StructuredValue: the tagged union carried for one leaf property
//! - ExternalRef: identity of a referenced external resource
//! - Color: a four-channel color consumed atomically by the codec
//!
//! ## Value Model
//!
//! StructuredValue is a closed union with exactly 7 variants:
//! - Null, Bool, Int, Float, String, Object, ExternalRef
//!
//! It is the in-memory counterpart of one JSON value. Object key order is
//! insignificant; objects compare by key set and per-key values.
//!
//! ## External references
//!
//! A reference to a persisted asset carries `{guid, instanceID}` and lowers
//! to a JSON object. A reference with no durable identity carries only its
//! transient instance id and lowers to a bare JSON integer. A null reference
//! is `Null`, not an `ExternalRef` variant.
//!
//! Converting generic JSON back into a StructuredValue never produces an
//! `ExternalRef`: on the decode path the raw Object/Int/Null shapes are kept
//! as-is and the codec decides reference-ness from the target property's
//! declared kind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON key carrying the persistent asset guid of a durable reference.
pub const GUID_FIELD: &str = "guid";
/// JSON key carrying the transient instance id of a durable reference.
pub const INSTANCE_ID_FIELD: &str = "instanceID";

/// Tagged value for one leaf property
///
/// Produced by the codec's encode side, consumed by its decode side.
/// Different variants are NEVER equal; float equality follows IEEE-754
/// (`NaN != NaN`, `-0.0 == 0.0`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StructuredValue {
    /// Null value (also: a null external reference)
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Object with string keys; insertion order insignificant
    Object(BTreeMap<String, StructuredValue>),
    /// Reference to an external resource
    ExternalRef(ExternalRef),
}

/// Identity of a referenced external resource
///
/// `Durable` references resolve to a persisted, content-addressable asset
/// and survive across sessions. `Transient` references are only valid for
/// the current runtime session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExternalRef {
    /// Persisted asset: guid plus the live instance id at copy time
    Durable {
        /// Persistent asset guid
        guid: String,
        /// Transient instance id recorded alongside the guid
        instance_id: i64,
    },
    /// Runtime-only instance with no durable identity
    Transient(i64),
}

/// Four-channel color, encoded atomically as `{"r","g","b","a"}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl Color {
    /// Create a color from four channels
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

// Custom PartialEq for IEEE-754 float semantics and strict cross-variant
// inequality.
impl PartialEq for StructuredValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StructuredValue::Null, StructuredValue::Null) => true,
            (StructuredValue::Bool(a), StructuredValue::Bool(b)) => a == b,
            (StructuredValue::Int(a), StructuredValue::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (StructuredValue::Float(a), StructuredValue::Float(b)) => a == b,
            (StructuredValue::String(a), StructuredValue::String(b)) => a == b,
            (StructuredValue::Object(a), StructuredValue::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k) == Some(v))
            }
            (StructuredValue::ExternalRef(a), StructuredValue::ExternalRef(b)) => a == b,
            _ => false,
        }
    }
}

impl StructuredValue {
    /// Get the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            StructuredValue::Null => "Null",
            StructuredValue::Bool(_) => "Bool",
            StructuredValue::Int(_) => "Int",
            StructuredValue::Float(_) => "Float",
            StructuredValue::String(_) => "String",
            StructuredValue::Object(_) => "Object",
            StructuredValue::ExternalRef(_) => "ExternalRef",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, StructuredValue::Null)
    }

    /// Check if this is an object value
    pub fn is_object(&self) -> bool {
        matches!(self, StructuredValue::Object(_))
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StructuredValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StructuredValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            StructuredValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float or Int value
    ///
    /// Color channels accept either numeric shape ("Float-compatible").
    pub fn as_float_compat(&self) -> Option<f64> {
        match self {
            StructuredValue::Float(f) => Some(*f),
            StructuredValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StructuredValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &BTreeMap if this is an Object value
    pub fn as_object(&self) -> Option<&BTreeMap<String, StructuredValue>> {
        match self {
            StructuredValue::Object(o) => Some(o),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for ergonomic construction
// ============================================================================

impl From<bool> for StructuredValue {
    fn from(b: bool) -> Self {
        StructuredValue::Bool(b)
    }
}

impl From<i64> for StructuredValue {
    fn from(i: i64) -> Self {
        StructuredValue::Int(i)
    }
}

impl From<i32> for StructuredValue {
    fn from(i: i32) -> Self {
        StructuredValue::Int(i as i64)
    }
}

impl From<f64> for StructuredValue {
    fn from(f: f64) -> Self {
        StructuredValue::Float(f)
    }
}

impl From<f32> for StructuredValue {
    fn from(f: f32) -> Self {
        StructuredValue::Float(f as f64)
    }
}

impl From<&str> for StructuredValue {
    fn from(s: &str) -> Self {
        StructuredValue::String(s.to_string())
    }
}

impl From<String> for StructuredValue {
    fn from(s: String) -> Self {
        StructuredValue::String(s)
    }
}

impl From<ExternalRef> for StructuredValue {
    fn from(r: ExternalRef) -> Self {
        StructuredValue::ExternalRef(r)
    }
}

impl From<Color> for StructuredValue {
    fn from(c: Color) -> Self {
        let mut obj = BTreeMap::new();
        obj.insert("r".to_string(), StructuredValue::Float(c.r as f64));
        obj.insert("g".to_string(), StructuredValue::Float(c.g as f64));
        obj.insert("b".to_string(), StructuredValue::Float(c.b as f64));
        obj.insert("a".to_string(), StructuredValue::Float(c.a as f64));
        StructuredValue::Object(obj)
    }
}

// ============================================================================
// serde_json interop
// ============================================================================

impl From<serde_json::Value> for StructuredValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => StructuredValue::Null,
            serde_json::Value::Bool(b) => StructuredValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    StructuredValue::Int(i)
                } else {
                    // u64 beyond i64 range degrades to Float
                    StructuredValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => StructuredValue::String(s),
            serde_json::Value::Array(arr) => {
                // The document format has no array shape; keep the values as
                // an object keyed by index so nothing is silently lost.
                StructuredValue::Object(
                    arr.into_iter()
                        .enumerate()
                        .map(|(i, v)| (i.to_string(), StructuredValue::from(v)))
                        .collect(),
                )
            }
            serde_json::Value::Object(obj) => StructuredValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, StructuredValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<StructuredValue> for serde_json::Value {
    fn from(v: StructuredValue) -> Self {
        match v {
            StructuredValue::Null => serde_json::Value::Null,
            StructuredValue::Bool(b) => serde_json::Value::Bool(b),
            StructuredValue::Int(i) => serde_json::Value::Number(i.into()),
            StructuredValue::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            StructuredValue::String(s) => serde_json::Value::String(s),
            StructuredValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            StructuredValue::ExternalRef(r) => r.into(),
        }
    }
}

impl From<ExternalRef> for serde_json::Value {
    fn from(r: ExternalRef) -> Self {
        match r {
            ExternalRef::Durable { guid, instance_id } => {
                let mut obj = serde_json::Map::new();
                obj.insert(GUID_FIELD.to_string(), serde_json::Value::String(guid));
                obj.insert(
                    INSTANCE_ID_FIELD.to_string(),
                    serde_json::Value::Number(instance_id.into()),
                );
                serde_json::Value::Object(obj)
            }
            ExternalRef::Transient(id) => serde_json::Value::Number(id.into()),
        }
    }
}
