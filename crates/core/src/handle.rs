//! Collaborator traits for the host editor environment
//!
//! This module defines the trait seams between the transfer core and the
//! hosting editor, so implementations can be swapped without breaking the
//! codec or the transcoder:
//!
//! - `PropertyHandle`: cursor into one node of the host's property tree
//! - `PropertyTree`: path resolution, visible-order iteration, atomic apply
//! - `IdentityLookup`: durable asset identity resolution
//! - `Clipboard`: opaque text blob get/set
//!
//! Handles are borrowed for the duration of one copy or paste call and never
//! outlive it. All operations are single-threaded and synchronous; the host
//! guarantees no concurrent callback reentrancy.

use crate::value::Color;

/// Declared value kind of a property node
///
/// The codec has a direct encoding rule for every kind except `Composite`
/// (whose visible children are visited individually) and `Gradient` (an
/// opaque leaf the transfer format cannot carry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Boolean flag
    Boolean,
    /// Signed integer
    Integer,
    /// Floating-point number
    Float,
    /// UTF-8 string
    String,
    /// Four-channel color; structurally has children but encodes atomically
    Color,
    /// Enumeration, carried as its integer value
    Enum,
    /// Array length pseudo-property, carried as an integer
    ArraySize,
    /// Reference to another object in the host graph
    ExternalReference,
    /// Composite with visible children, each visited individually
    Composite,
    /// Opaque gradient; no encoding rule exists
    Gradient,
}

/// Opaque identifier for a live host object instance
///
/// Valid only for the current runtime session. The identity service maps
/// instances to and from durable asset identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(pub i64);

/// Durable asset identity: survives across sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurableAssetId {
    /// Persistent asset guid
    pub guid: String,
    /// Local file identifier within the asset
    pub local_id: i64,
}

/// Opaque cursor into one node of the host's property tree
///
/// Typed accessors are only meaningful for the matching [`PropertyKind`];
/// the codec guards every access with the declared kind, so adapters may
/// return any default from a mismatched getter and ignore a mismatched
/// setter.
///
/// Setters record pending mutations; nothing is observable until the owning
/// tree's [`PropertyTree::apply`] commits the batch.
pub trait PropertyHandle {
    /// Declared value kind of this node
    fn kind(&self) -> PropertyKind;

    /// Dot-separated path, component-relative, unique within the owning root
    fn path(&self) -> &str;

    /// Final segment of the path
    fn name(&self) -> &str {
        self.path().rsplit('.').next().unwrap_or_default()
    }

    /// Whether this node structurally has child nodes
    fn has_children(&self) -> bool;

    /// Whether this node has visible child nodes
    fn has_visible_children(&self) -> bool;

    /// Boolean value (kind `Boolean`)
    fn bool_value(&self) -> bool;
    /// Set the boolean value
    fn set_bool_value(&mut self, value: bool);

    /// Integer value (kinds `Integer`, `Enum`, `ArraySize`)
    fn int_value(&self) -> i64;
    /// Set the integer value
    fn set_int_value(&mut self, value: i64);

    /// Float value (kind `Float`)
    fn float_value(&self) -> f64;
    /// Set the float value
    fn set_float_value(&mut self, value: f64);

    /// String value (kind `String`)
    fn string_value(&self) -> String;
    /// Set the string value
    fn set_string_value(&mut self, value: &str);

    /// Color value (kind `Color`)
    fn color_value(&self) -> Color;
    /// Set the color value
    fn set_color_value(&mut self, value: Color);

    /// Referenced object, if any (kind `ExternalReference`)
    fn reference(&self) -> Option<InstanceId>;
    /// Set or clear the referenced object
    fn set_reference(&mut self, target: Option<InstanceId>);

    /// Transient instance id recorded alongside the reference (0 when unset)
    fn reference_instance_id(&self) -> i64;
    /// Record the transient instance-id hint without touching the reference
    fn set_reference_instance_id(&mut self, id: i64);
}

/// Host property tree: resolution, iteration, and atomic apply
///
/// The tree owns the property graph of one component. All mutations made
/// through resolved handles are buffered and become visible atomically at
/// [`apply`](PropertyTree::apply), giving all-or-nothing visibility of a
/// single paste.
pub trait PropertyTree {
    /// Depth-first pre-order paths of all visible properties
    ///
    /// Component-relative, including composite nodes (the transcoder decides
    /// per node whether to descend or transcode).
    fn visible_paths(&self) -> Vec<String>;

    /// Resolve a component-relative path to a handle
    ///
    /// Returns None if no such property exists.
    fn resolve(&self, path: &str) -> Option<&dyn PropertyHandle>;

    /// Resolve a component-relative path to a mutable handle
    ///
    /// Returns None if no such property exists.
    fn resolve_mut(&mut self, path: &str) -> Option<&mut dyn PropertyHandle>;

    /// Commit all buffered mutations atomically
    fn apply(&mut self);
}

/// Durable asset identity resolution
///
/// Both directions fail soft: an unresolvable instance or guid is `None`,
/// never an error. A paste that fails to resolve a guid degrades to a null
/// reference.
pub trait IdentityLookup {
    /// Durable identity of a live instance, if it maps to a persisted asset
    fn to_durable_id(&self, instance: InstanceId) -> Option<DurableAssetId>;

    /// Live instance for a persisted asset guid, if currently loadable
    fn from_durable_id(&self, guid: &str) -> Option<InstanceId>;
}

/// System clipboard: whole-blob text transfer, no chunking
pub trait Clipboard {
    /// Current clipboard text (empty string when the clipboard is empty)
    fn get_text(&self) -> String;

    /// Replace the clipboard text
    fn set_text(&mut self, text: &str);
}
