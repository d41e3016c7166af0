//! Property tree transcoder
//!
//! Walks a property (or a whole component) in depth-first visible order,
//! decides per node whether it is a leaf to transcode or a composite to
//! skip-and-descend, and builds or consumes a path-keyed [`Document`] via
//! the [`ValueCodec`]. Also hosts the paste-compatibility predicate.
//!
//! "Leaf" means the codec has a direct rule for the kind, independent of
//! whether the node structurally has children: a color has channel children
//! at the model level but is encoded atomically, and an external reference
//! carries non-visible identity the walk would never reach.

use crate::codec::ValueCodec;
use propclip_core::{Document, PropertyHandle, PropertyKind, PropertyTree, Result};
use tracing::debug;

/// Whether the codec consumes this kind in one piece
fn encodes_atomically(kind: PropertyKind) -> bool {
    matches!(kind, PropertyKind::Color | PropertyKind::ExternalReference)
}

/// Whether the walk should descend into this node instead of encoding it
///
/// True iff the node is a true composite: it has children and the codec has
/// no direct rule for it.
pub fn should_descend(handle: &dyn PropertyHandle) -> bool {
    handle.has_children() && !encodes_atomically(handle.kind())
}

/// Encode the subtree rooted at `root_path` into a document
///
/// For a root with visible children, visits every visible strict descendant
/// in depth-first pre-order, skipping composites and emitting each leaf
/// under its root-relative key. For a childless root, the document is the
/// single entry keyed by the root's own name. A missing root yields an
/// empty document.
///
/// # Errors
///
/// Propagates [`propclip_core::Error::UnsupportedKind`] from the codec,
/// aborting the whole encode.
pub fn encode_subtree(
    codec: &ValueCodec<'_>,
    tree: &dyn PropertyTree,
    root_path: &str,
) -> Result<Document> {
    let mut document = Document::new();
    let Some(root) = tree.resolve(root_path) else {
        return Ok(document);
    };

    if root.has_visible_children() {
        // Subtree boundary by path prefix: strict descendants only
        let prefix = format!("{root_path}.");
        for path in tree.visible_paths() {
            let Some(rest) = path.strip_prefix(&prefix) else {
                continue;
            };
            let Some(node) = tree.resolve(&path) else {
                continue;
            };
            if should_descend(node) {
                continue;
            }
            document.insert(rest, codec.encode(node)?);
        }
    } else {
        document.insert(root.name(), codec.encode(root)?);
    }

    Ok(document)
}

/// Encode every visible leaf of the component into a document
///
/// Same walk as [`encode_subtree`] with no prefix stripping: keys are
/// absolute component-relative paths.
///
/// # Errors
///
/// Propagates [`propclip_core::Error::UnsupportedKind`] from the codec.
pub fn encode_component(codec: &ValueCodec<'_>, tree: &dyn PropertyTree) -> Result<Document> {
    let mut document = Document::new();
    for path in tree.visible_paths() {
        let Some(node) = tree.resolve(&path) else {
            continue;
        };
        if should_descend(node) {
            continue;
        }
        document.insert(path, codec.encode(node)?);
    }
    Ok(document)
}

/// Decode a document into the subtree rooted at `root_path`
///
/// For a root with visible children, each entry resolves against
/// `root_path + "." + key`; entries whose path does not resolve are skipped
/// silently. For a childless root, the first entry's value is applied to
/// the root directly, ignoring its key. The caller commits afterwards via
/// [`PropertyTree::apply`].
pub fn decode_subtree(
    codec: &ValueCodec<'_>,
    tree: &mut dyn PropertyTree,
    root_path: &str,
    document: &Document,
) {
    let has_visible_children = match tree.resolve(root_path) {
        Some(root) => root.has_visible_children(),
        None => {
            debug!(
                target: "propclip::transcoder",
                path = %root_path,
                "paste target not found, nothing to do"
            );
            return;
        }
    };

    if has_visible_children {
        for (key, value) in document.iter() {
            let path = format!("{root_path}.{key}");
            match tree.resolve_mut(&path) {
                Some(node) => codec.decode(node, value),
                None => debug!(
                    target: "propclip::transcoder",
                    path = %path,
                    "no property at path, skipping entry"
                ),
            }
        }
    } else if let Some((_, value)) = document.first() {
        if let Some(root) = tree.resolve_mut(root_path) {
            codec.decode(root, value);
        }
    }
}

/// Decode a document against the whole component
///
/// Keys resolve as absolute component-relative paths; missing paths are
/// skipped silently. The caller commits afterwards via
/// [`PropertyTree::apply`].
pub fn decode_component(
    codec: &ValueCodec<'_>,
    tree: &mut dyn PropertyTree,
    document: &Document,
) {
    for (key, value) in document.iter() {
        match tree.resolve_mut(key) {
            Some(node) => codec.decode(node, value),
            None => debug!(
                target: "propclip::transcoder",
                path = %key,
                "no property at path, skipping entry"
            ),
        }
    }
}

/// Whether a document is offerable for pasting onto the target
///
/// A multi-entry document is only compatible with multi-leaf composite
/// targets; a single-entry document is only compatible with leaf targets.
/// This is a conservative heuristic, not a schema check: it can admit a
/// paste whose entries all fail to resolve and silently drop, which decodes
/// to an empty write set rather than an error.
pub fn paste_compatible(document: &Document, target: &dyn PropertyHandle) -> bool {
    (document.len() > 1) == should_descend(target)
}
