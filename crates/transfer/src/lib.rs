//! Property clipboard transfer
//!
//! Converts between a typed, tree-shaped property model and a flat,
//! path-keyed JSON document on the system clipboard, in both directions:
//!
//! - [`ValueCodec`]: one leaf value to/from a [`StructuredValue`]
//! - [`transcoder`]: tree walk, document build/consume, paste compatibility
//! - [`ops`]: the clipboard-facing copy/paste operations and availability
//!   gates the editor menu wires up
//!
//! # Quick Start
//!
//! ```
//! use propclip_core::mem::{BufferClipboard, MapIdentity, MemoryProperty, MemoryTree};
//! use propclip_transfer::{copy_property, paste_property, PropertyHandle};
//!
//! let identity = MapIdentity::new();
//! let source = MemoryTree::new(vec![MemoryProperty::float("speed", 3.5)]);
//! let mut clipboard = BufferClipboard::new();
//! copy_property(&source, "speed", &identity, &mut clipboard)?;
//!
//! let mut target = MemoryTree::new(vec![MemoryProperty::float("velocity", 0.0)]);
//! paste_property(&mut target, "velocity", &identity, &clipboard)?;
//! assert_eq!(target.get("velocity").unwrap().float_value(), 3.5);
//! # Ok::<(), propclip_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod ops;
pub mod transcoder;

pub use codec::ValueCodec;
pub use ops::{
    component_paste_available, copy_component, copy_property, paste_available, paste_component,
    paste_property,
};
pub use transcoder::{
    decode_component, decode_subtree, encode_component, encode_subtree, paste_compatible,
    should_descend,
};

// Re-export the core vocabulary so hosts depend on one crate
pub use propclip_core::{
    Clipboard, Color, Document, DurableAssetId, Error, ExternalRef, IdentityLookup, InstanceId,
    PropertyHandle, PropertyKind, PropertyTree, Result, StructuredValue,
};
