//! Operational behavior: clipboard writes, error surfacing, atomic apply

use crate::fixtures::{identity, mover_tree};
use propclip::{copy_property, paste_property, Error, PropertyHandle};
use propclip_core::mem::{BufferClipboard, MapIdentity, MemoryProperty, MemoryTree};

#[test]
fn test_unsupported_kind_aborts_copy_and_preserves_clipboard() {
    let identity = MapIdentity::new();
    let tree = MemoryTree::new(vec![
        MemoryProperty::composite("fx"),
        MemoryProperty::int("fx.strength", 5),
        MemoryProperty::gradient("fx.fade"),
    ]);
    let mut clipboard = BufferClipboard::with_text(r#"{"earlier":1}"#);

    let err = copy_property(&tree, "fx", &identity, &mut clipboard).unwrap_err();
    assert!(matches!(err, Error::UnsupportedKind { .. }));
    // The partial document never reaches the clipboard
    assert_eq!(clipboard.text(), r#"{"earlier":1}"#);
}

#[test]
fn test_copy_of_missing_property_leaves_clipboard_alone() {
    let identity = identity();
    let tree = mover_tree();
    let mut clipboard = BufferClipboard::with_text("earlier");
    copy_property(&tree, "no.such.path", &identity, &mut clipboard).unwrap();
    assert_eq!(clipboard.text(), "earlier");
}

#[test]
fn test_malformed_paste_errors_and_mutates_nothing() {
    let identity = identity();
    let mut target = mover_tree();
    let clipboard = BufferClipboard::with_text("}{");

    let err = paste_property(&mut target, "speed", &identity, &clipboard).unwrap_err();
    assert!(matches!(err, Error::MalformedDocument(_)));
    assert_eq!(target.get("speed").unwrap().float_value(), 3.5);
}

#[test]
fn test_paste_commits_whole_batch_at_once() {
    let identity = identity();
    let source = mover_tree();
    let mut clipboard = BufferClipboard::new();
    copy_property(&source, "offset", &identity, &mut clipboard).unwrap();

    let mut target = MemoryTree::new(vec![
        MemoryProperty::composite("offset"),
        MemoryProperty::int("offset.x", 0),
        MemoryProperty::int("offset.y", 0),
        MemoryProperty::int("offset.z", 0),
    ]);
    paste_property(&mut target, "offset", &identity, &clipboard).unwrap();

    // After the operation returns, every entry is visible together
    assert_eq!(target.get("offset.x").unwrap().int_value(), 1);
    assert_eq!(target.get("offset.y").unwrap().int_value(), 2);
    assert_eq!(target.get("offset.z").unwrap().int_value(), 3);
}

#[test]
fn test_copy_overwrites_previous_clipboard_contents() {
    let identity = identity();
    let tree = mover_tree();
    let mut clipboard = BufferClipboard::with_text("stale");
    copy_property(&tree, "speed", &identity, &mut clipboard).unwrap();
    assert_eq!(clipboard.text(), r#"{"speed":3.5}"#);
}

#[test]
fn test_successive_copies_are_independent_documents() {
    let identity = identity();
    let tree = mover_tree();
    let mut clipboard = BufferClipboard::new();

    copy_property(&tree, "offset", &identity, &mut clipboard).unwrap();
    let first = clipboard.text().to_string();
    copy_property(&tree, "speed", &identity, &mut clipboard).unwrap();
    let second = clipboard.text().to_string();

    assert_eq!(first, r#"{"x":1,"y":2,"z":3}"#);
    assert_eq!(second, r#"{"speed":3.5}"#);
}
