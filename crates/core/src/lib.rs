//! Core types and traits for property clipboard transfer
//!
//! This crate defines the foundational types used throughout the system:
//! - StructuredValue: tagged union carried for one leaf property
//! - ExternalRef, Color: leaf value shapes with dedicated encodings
//! - Document: the flat path-keyed map that is the transfer unit
//! - PropertyKind, InstanceId, DurableAssetId: host-facing vocabulary
//! - Traits: collaborator seams (PropertyHandle, PropertyTree,
//!   IdentityLookup, Clipboard)
//! - Error: error type hierarchy
//! - mem: in-memory reference adapter

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod handle;
pub mod mem;
pub mod value;

// Re-export commonly used types and traits
pub use document::Document;
pub use error::{Error, Result};
pub use handle::{
    Clipboard, DurableAssetId, IdentityLookup, InstanceId, PropertyHandle, PropertyKind,
    PropertyTree,
};
pub use value::{Color, ExternalRef, StructuredValue, GUID_FIELD, INSTANCE_ID_FIELD};
