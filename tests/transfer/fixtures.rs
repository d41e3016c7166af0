//! Shared hosts for the transfer integration tests
//!
//! A "mover" component: scalar leaves, a color, a three-component offset
//! vector, and an external reference, in depth-first visible order.

use propclip::{Color, InstanceId};
use propclip_core::mem::{MapIdentity, MemoryProperty, MemoryTree};

/// Instance id of the asset registered with [`identity`]
pub const MATERIAL_INSTANCE: InstanceId = InstanceId(501);
/// Guid of the asset registered with [`identity`]
pub const MATERIAL_GUID: &str = "9f1c2b7a8d3e4f50";

/// Identity service that resolves the shared material asset
pub fn identity() -> MapIdentity {
    let mut identity = MapIdentity::new();
    identity.register(MATERIAL_GUID, MATERIAL_INSTANCE, 2100);
    identity
}

/// A fully populated mover component
pub fn mover_tree() -> MemoryTree {
    MemoryTree::new(vec![
        MemoryProperty::float("speed", 3.5),
        MemoryProperty::bool("enabled", true),
        MemoryProperty::string("label", "player"),
        MemoryProperty::color("tint", Color::new(1.0, 0.5, 0.25, 1.0)),
        MemoryProperty::composite("offset"),
        MemoryProperty::int("offset.x", 1),
        MemoryProperty::int("offset.y", 2),
        MemoryProperty::int("offset.z", 3),
        MemoryProperty::reference("material", Some(MATERIAL_INSTANCE)),
    ])
}

/// The same shape as [`mover_tree`] with every value zeroed
pub fn blank_mover_tree() -> MemoryTree {
    MemoryTree::new(vec![
        MemoryProperty::float("speed", 0.0),
        MemoryProperty::bool("enabled", false),
        MemoryProperty::string("label", ""),
        MemoryProperty::color("tint", Color::new(0.0, 0.0, 0.0, 0.0)),
        MemoryProperty::composite("offset"),
        MemoryProperty::int("offset.x", 0),
        MemoryProperty::int("offset.y", 0),
        MemoryProperty::int("offset.z", 0),
        MemoryProperty::reference("material", None),
    ])
}
