//! propclip - clipboard copy/paste for editor property trees
//!
//! propclip moves property values between object graphs through the system
//! clipboard as JSON text: copy one property (or a whole component's fields)
//! to a flat path-keyed document, and paste that document back onto any
//! compatible target.
//!
//! # Quick Start
//!
//! ```
//! use propclip::{copy_property, paste_property, PropertyHandle};
//! use propclip_core::mem::{BufferClipboard, MapIdentity, MemoryProperty, MemoryTree};
//!
//! let identity = MapIdentity::new();
//! let source = MemoryTree::new(vec![MemoryProperty::float("speed", 3.5)]);
//! let mut clipboard = BufferClipboard::new();
//! copy_property(&source, "speed", &identity, &mut clipboard)?;
//!
//! let mut target = MemoryTree::new(vec![MemoryProperty::float("velocity", 0.0)]);
//! paste_property(&mut target, "velocity", &identity, &clipboard)?;
//! assert_eq!(target.get("velocity").unwrap().float_value(), 3.5);
//! # Ok::<(), propclip::Error>(())
//! ```
//!
//! # Architecture
//!
//! The leaf value codec and the tree transcoder live in
//! `propclip-transfer`; the value model and the host-facing trait seams live
//! in `propclip-core`. Hosts implement the `PropertyTree`/`PropertyHandle`
//! adapter for their environment plus the `IdentityLookup` and `Clipboard`
//! collaborators, and wire the operations into their menu chrome.

// Re-export the public API from propclip-transfer
pub use propclip_transfer::*;
