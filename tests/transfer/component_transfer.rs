//! Whole-component copy and paste over absolute paths

use crate::fixtures::{blank_mover_tree, identity, mover_tree, MATERIAL_INSTANCE};
use propclip::{
    component_paste_available, copy_component, paste_component, Color, PropertyHandle,
};
use propclip_core::mem::{BufferClipboard, MemoryProperty, MemoryTree};

#[test]
fn test_component_roundtrip_all_fields() {
    let identity = identity();
    let source = mover_tree();
    let mut clipboard = BufferClipboard::new();
    copy_component(&source, &identity, &mut clipboard).unwrap();

    let mut target = blank_mover_tree();
    paste_component(&mut target, &identity, &clipboard).unwrap();

    assert_eq!(target.get("speed").unwrap().float_value(), 3.5);
    assert!(target.get("enabled").unwrap().bool_value());
    assert_eq!(target.get("label").unwrap().string_value(), "player");
    assert_eq!(
        target.get("tint").unwrap().color_value(),
        Color::new(1.0, 0.5, 0.25, 1.0)
    );
    assert_eq!(target.get("offset.x").unwrap().int_value(), 1);
    assert_eq!(target.get("offset.y").unwrap().int_value(), 2);
    assert_eq!(target.get("offset.z").unwrap().int_value(), 3);
    assert_eq!(
        target.get("material").unwrap().reference(),
        Some(MATERIAL_INSTANCE)
    );
}

#[test]
fn test_component_document_keys_are_absolute_paths() {
    let identity = identity();
    let source = mover_tree();
    let mut clipboard = BufferClipboard::new();
    copy_component(&source, &identity, &mut clipboard).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(clipboard.text()).unwrap();
    let keys: Vec<&str> = parsed.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(
        keys,
        [
            "speed",
            "enabled",
            "label",
            "tint",
            "offset.x",
            "offset.y",
            "offset.z",
            "material"
        ]
    );
    // Composite parents are never emitted
    assert!(parsed.get("offset").is_none());
}

#[test]
fn test_hidden_fields_stay_out_of_the_document() {
    let identity = identity();
    let tree = MemoryTree::new(vec![
        MemoryProperty::string("script", "Mover").hidden(),
        MemoryProperty::float("speed", 3.0),
    ]);
    let mut clipboard = BufferClipboard::new();
    copy_component(&tree, &identity, &mut clipboard).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(clipboard.text()).unwrap();
    assert!(parsed.get("script").is_none());
    assert_eq!(parsed["speed"], 3.0);
}

#[test]
fn test_heterogeneous_paste_applies_what_fits() {
    let identity = identity();
    let source = mover_tree();
    let mut clipboard = BufferClipboard::new();
    copy_component(&source, &identity, &mut clipboard).unwrap();

    // A differently-shaped component: only "speed" lines up by path and
    // kind; everything else is skipped without aborting the paste.
    let mut target = MemoryTree::new(vec![
        MemoryProperty::float("speed", 0.0),
        MemoryProperty::int("label", 0),
        MemoryProperty::string("offset.x", ""),
    ]);
    paste_component(&mut target, &identity, &clipboard).unwrap();

    assert_eq!(target.get("speed").unwrap().float_value(), 3.5);
    // Kind mismatches left untouched
    assert_eq!(target.get("label").unwrap().int_value(), 0);
    assert_eq!(target.get("offset.x").unwrap().string_value(), "");
}

#[test]
fn test_component_gate_accepts_any_document() {
    let identity = identity();
    let source = mover_tree();
    let mut clipboard = BufferClipboard::new();
    copy_component(&source, &identity, &mut clipboard).unwrap();
    assert!(component_paste_available(&clipboard));
}

#[test]
fn test_component_gate_rejects_non_documents() {
    assert!(!component_paste_available(&BufferClipboard::with_text("")));
    assert!(!component_paste_available(&BufferClipboard::with_text("plain text")));
    assert!(!component_paste_available(&BufferClipboard::with_text("[]")));
}
