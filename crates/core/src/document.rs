//! Transfer document: the flat path-keyed value map
//!
//! A `Document` maps relative property paths to [`StructuredValue`]s. It is
//! built fresh on every copy and parsed fresh on every paste; its only
//! durable representation is the text blob on the clipboard.
//!
//! ## Ordering
//!
//! Entry insertion order is preserved and reproduced by `to_json_text`, so
//! an encode is deterministic. Key order is insignificant on parse.
//!
//! ## Invariants
//!
//! - Every key corresponds to exactly one leaf visited by the walk that
//!   produced the document; the walk never emits a path twice. `insert` on
//!   an existing key overwrites in place so aliasing cannot duplicate keys.
//! - A document built from a single non-composite property has exactly one
//!   entry keyed by that property's own name.

use crate::error::{Error, Result};
use crate::value::StructuredValue;

/// Flat path-keyed value map, the unit of clipboard transfer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Vec<(String, StructuredValue)>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, overwriting in place if the key already exists
    pub fn insert(&mut self, key: impl Into<String>, value: StructuredValue) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&StructuredValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// First entry in insertion order
    ///
    /// Pasting a document onto a childless root applies this entry's value
    /// and ignores its key.
    pub fn first(&self) -> Option<(&str, &StructuredValue)> {
        self.entries.first().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StructuredValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to a UTF-8 JSON object, entries in insertion order
    pub fn to_json_text(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::from(v.clone())))
            .collect();
        // A map of already-valid values cannot fail to serialize
        serde_json::to_string(&serde_json::Value::Object(map)).unwrap_or_default()
    }

    /// Parse clipboard text into a document
    ///
    /// The text must be a JSON object; anything else is a
    /// [`Error::MalformedDocument`].
    pub fn from_json_text(text: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(text)?;
        let obj = match parsed {
            serde_json::Value::Object(obj) => obj,
            other => {
                return Err(Error::MalformedDocument(format!(
                    "expected a JSON object, got {other}"
                )))
            }
        };
        Ok(Self {
            entries: obj
                .into_iter()
                .map(|(k, v)| (k, StructuredValue::from(v)))
                .collect(),
        })
    }
}

impl FromIterator<(String, StructuredValue)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, StructuredValue)>>(iter: I) -> Self {
        let mut doc = Document::new();
        for (k, v) in iter {
            doc.insert(k, v);
        }
        doc
    }
}
