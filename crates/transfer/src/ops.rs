//! Clipboard-facing copy and paste operations
//!
//! The operational surface the editor menu wires up. Each operation runs to
//! completion within one host callback: materialize the document, move the
//! text blob, commit. The menu chrome itself stays outside this crate; it
//! passes the target tree and path explicitly on every call (there is no
//! cached "current property" state).
//!
//! Availability gates never error: malformed clipboard text reads as
//! "nothing to paste", which is how the host decides whether to offer the
//! paste action at all.

use crate::codec::ValueCodec;
use crate::transcoder::{
    decode_component, decode_subtree, encode_component, encode_subtree, paste_compatible,
};
use propclip_core::{Clipboard, Document, IdentityLookup, PropertyHandle, PropertyTree, Result};
use tracing::debug;

/// Copy one property (leaf or subtree) to the clipboard
///
/// Writes the document's JSON text only when the document is non-empty.
///
/// # Errors
///
/// [`propclip_core::Error::UnsupportedKind`] aborts the copy; nothing is
/// written to the clipboard.
pub fn copy_property(
    tree: &dyn PropertyTree,
    path: &str,
    identity: &dyn IdentityLookup,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    let codec = ValueCodec::new(identity);
    let document = encode_subtree(&codec, tree, path)?;
    if !document.is_empty() {
        clipboard.set_text(&document.to_json_text());
        debug!(
            target: "propclip::ops",
            path = %path,
            entries = document.len(),
            "copied property to clipboard"
        );
    }
    Ok(())
}

/// Paste the clipboard document onto one property (leaf or subtree)
///
/// Decodes best-effort (mismatched or unresolved entries are skipped), then
/// commits all mutations atomically.
///
/// # Errors
///
/// [`propclip_core::Error::MalformedDocument`] when the clipboard does not
/// hold a document. Hosts gate the action with [`paste_available`], so this
/// never reaches the user.
pub fn paste_property(
    tree: &mut dyn PropertyTree,
    path: &str,
    identity: &dyn IdentityLookup,
    clipboard: &dyn Clipboard,
) -> Result<()> {
    let document = Document::from_json_text(&clipboard.get_text())?;
    let codec = ValueCodec::new(identity);
    decode_subtree(&codec, tree, path, &document);
    tree.apply();
    debug!(
        target: "propclip::ops",
        path = %path,
        entries = document.len(),
        "pasted document onto property"
    );
    Ok(())
}

/// Whether the clipboard holds a document pastable onto the target
///
/// True iff the clipboard text parses as a document and the document's
/// shape is compatible with the target. Never errors.
pub fn paste_available(clipboard: &dyn Clipboard, target: &dyn PropertyHandle) -> bool {
    match Document::from_json_text(&clipboard.get_text()) {
        Ok(document) => paste_compatible(&document, target),
        Err(_) => false,
    }
}

/// Copy every visible field of the component to the clipboard
///
/// # Errors
///
/// [`propclip_core::Error::UnsupportedKind`] aborts the copy; nothing is
/// written to the clipboard.
pub fn copy_component(
    tree: &dyn PropertyTree,
    identity: &dyn IdentityLookup,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    let codec = ValueCodec::new(identity);
    let document = encode_component(&codec, tree)?;
    clipboard.set_text(&document.to_json_text());
    debug!(
        target: "propclip::ops",
        entries = document.len(),
        "copied component fields to clipboard"
    );
    Ok(())
}

/// Paste the clipboard document onto the whole component
///
/// Entries resolve as absolute component-relative paths; missing paths are
/// skipped. Commits atomically.
///
/// # Errors
///
/// [`propclip_core::Error::MalformedDocument`] when the clipboard does not
/// hold a document.
pub fn paste_component(
    tree: &mut dyn PropertyTree,
    identity: &dyn IdentityLookup,
    clipboard: &dyn Clipboard,
) -> Result<()> {
    let document = Document::from_json_text(&clipboard.get_text())?;
    let codec = ValueCodec::new(identity);
    decode_component(&codec, tree, &document);
    tree.apply();
    debug!(
        target: "propclip::ops",
        entries = document.len(),
        "pasted document onto component"
    );
    Ok(())
}

/// Whether the clipboard holds any document at all
///
/// The whole-component paste has no single target to shape-check against,
/// so its gate is parse-only.
pub fn component_paste_available(clipboard: &dyn Clipboard) -> bool {
    Document::from_json_text(&clipboard.get_text()).is_ok()
}
