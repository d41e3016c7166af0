//! In-memory host adapter
//!
//! Reference implementation of the collaborator traits, and the host used by
//! the test suites. One adapter exists per hosting environment; this one
//! keeps the whole property tree in a `Vec` in depth-first visible order.
//!
//! ## Apply semantics
//!
//! `MemoryTree` keeps a committed view and a staged view. Mutable resolution
//! hands out staged properties; reads resolve against the committed view.
//! [`PropertyTree::apply`] replaces the committed view with the staged one in
//! a single step, so a paste is observable all-or-nothing.

use crate::handle::{
    Clipboard, DurableAssetId, IdentityLookup, InstanceId, PropertyHandle, PropertyKind,
    PropertyTree,
};
use crate::value::Color;
use std::collections::HashMap;

/// One property node held in memory
///
/// Carries storage for every accessor; only the slot matching the declared
/// kind is meaningful, which mirrors the [`PropertyHandle`] contract.
#[derive(Debug, Clone)]
pub struct MemoryProperty {
    kind: PropertyKind,
    path: String,
    visible: bool,
    has_children: bool,
    has_visible_children: bool,
    bool_value: bool,
    int_value: i64,
    float_value: f64,
    string_value: String,
    color_value: Color,
    reference: Option<InstanceId>,
    reference_instance_id: i64,
}

impl MemoryProperty {
    fn base(kind: PropertyKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            visible: true,
            has_children: false,
            has_visible_children: false,
            bool_value: false,
            int_value: 0,
            float_value: 0.0,
            string_value: String::new(),
            color_value: Color::new(0.0, 0.0, 0.0, 0.0),
            reference: None,
            reference_instance_id: 0,
        }
    }

    /// Boolean leaf
    pub fn bool(path: impl Into<String>, value: bool) -> Self {
        Self {
            bool_value: value,
            ..Self::base(PropertyKind::Boolean, path)
        }
    }

    /// Integer leaf
    pub fn int(path: impl Into<String>, value: i64) -> Self {
        Self {
            int_value: value,
            ..Self::base(PropertyKind::Integer, path)
        }
    }

    /// Float leaf
    pub fn float(path: impl Into<String>, value: f64) -> Self {
        Self {
            float_value: value,
            ..Self::base(PropertyKind::Float, path)
        }
    }

    /// String leaf
    pub fn string(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            string_value: value.into(),
            ..Self::base(PropertyKind::String, path)
        }
    }

    /// Color leaf
    ///
    /// Structurally has channel children but is drawn (and encoded) as a
    /// single field, so `has_visible_children` stays false.
    pub fn color(path: impl Into<String>, value: Color) -> Self {
        Self {
            color_value: value,
            has_children: true,
            ..Self::base(PropertyKind::Color, path)
        }
    }

    /// External reference leaf
    pub fn reference(path: impl Into<String>, target: Option<InstanceId>) -> Self {
        Self {
            reference: target,
            reference_instance_id: target.map(|t| t.0).unwrap_or(0),
            ..Self::base(PropertyKind::ExternalReference, path)
        }
    }

    /// Composite node with visible children
    pub fn composite(path: impl Into<String>) -> Self {
        Self {
            has_children: true,
            has_visible_children: true,
            ..Self::base(PropertyKind::Composite, path)
        }
    }

    /// Opaque gradient leaf (no codec rule)
    pub fn gradient(path: impl Into<String>) -> Self {
        Self::base(PropertyKind::Gradient, path)
    }

    /// Override the declared kind (for `Enum` and `ArraySize` int storage)
    pub fn with_kind(mut self, kind: PropertyKind) -> Self {
        self.kind = kind;
        self
    }

    /// Exclude this node from the visible walk
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl PropertyHandle for MemoryProperty {
    fn kind(&self) -> PropertyKind {
        self.kind
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn has_children(&self) -> bool {
        self.has_children
    }

    fn has_visible_children(&self) -> bool {
        self.has_visible_children
    }

    fn bool_value(&self) -> bool {
        self.bool_value
    }

    fn set_bool_value(&mut self, value: bool) {
        self.bool_value = value;
    }

    fn int_value(&self) -> i64 {
        self.int_value
    }

    fn set_int_value(&mut self, value: i64) {
        self.int_value = value;
    }

    fn float_value(&self) -> f64 {
        self.float_value
    }

    fn set_float_value(&mut self, value: f64) {
        self.float_value = value;
    }

    fn string_value(&self) -> String {
        self.string_value.clone()
    }

    fn set_string_value(&mut self, value: &str) {
        self.string_value = value.to_string();
    }

    fn color_value(&self) -> Color {
        self.color_value
    }

    fn set_color_value(&mut self, value: Color) {
        self.color_value = value;
    }

    fn reference(&self) -> Option<InstanceId> {
        self.reference
    }

    fn set_reference(&mut self, target: Option<InstanceId>) {
        self.reference = target;
        self.reference_instance_id = target.map(|t| t.0).unwrap_or(0);
    }

    fn reference_instance_id(&self) -> i64 {
        self.reference_instance_id
    }

    fn set_reference_instance_id(&mut self, id: i64) {
        self.reference_instance_id = id;
    }
}

/// In-memory property tree for one component
///
/// Properties are stored in depth-first visible order, exactly the order
/// `visible_paths` reports.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    committed: Vec<MemoryProperty>,
    staged: Vec<MemoryProperty>,
}

impl MemoryTree {
    /// Build a tree from properties already in depth-first pre-order
    pub fn new(properties: Vec<MemoryProperty>) -> Self {
        Self {
            staged: properties.clone(),
            committed: properties,
        }
    }

    /// Committed view of a property, for assertions and inspection
    pub fn get(&self, path: &str) -> Option<&MemoryProperty> {
        self.committed.iter().find(|p| p.path == path)
    }
}

impl PropertyTree for MemoryTree {
    fn visible_paths(&self) -> Vec<String> {
        self.committed
            .iter()
            .filter(|p| p.visible)
            .map(|p| p.path.clone())
            .collect()
    }

    fn resolve(&self, path: &str) -> Option<&dyn PropertyHandle> {
        self.committed
            .iter()
            .find(|p| p.path == path)
            .map(|p| p as &dyn PropertyHandle)
    }

    fn resolve_mut(&mut self, path: &str) -> Option<&mut dyn PropertyHandle> {
        self.staged
            .iter_mut()
            .find(|p| p.path == path)
            .map(|p| p as &mut dyn PropertyHandle)
    }

    fn apply(&mut self) {
        self.committed = self.staged.clone();
    }
}

/// Identity service over registered guid/instance pairs
#[derive(Debug, Clone, Default)]
pub struct MapIdentity {
    by_instance: HashMap<i64, DurableAssetId>,
    by_guid: HashMap<String, InstanceId>,
}

impl MapIdentity {
    /// Create an empty identity service (nothing resolves)
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a persisted asset reachable in both directions
    pub fn register(&mut self, guid: impl Into<String>, instance: InstanceId, local_id: i64) {
        let guid = guid.into();
        self.by_instance.insert(
            instance.0,
            DurableAssetId {
                guid: guid.clone(),
                local_id,
            },
        );
        self.by_guid.insert(guid, instance);
    }
}

impl IdentityLookup for MapIdentity {
    fn to_durable_id(&self, instance: InstanceId) -> Option<DurableAssetId> {
        self.by_instance.get(&instance.0).cloned()
    }

    fn from_durable_id(&self, guid: &str) -> Option<InstanceId> {
        self.by_guid.get(guid).copied()
    }
}

/// Clipboard over a plain string buffer
#[derive(Debug, Clone, Default)]
pub struct BufferClipboard {
    text: String,
}

impl BufferClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard pre-loaded with text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current buffer contents
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Clipboard for BufferClipboard {
    fn get_text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}
