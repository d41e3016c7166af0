//! External reference encodings through the clipboard text layer

use crate::fixtures::{identity, MATERIAL_GUID, MATERIAL_INSTANCE};
use propclip::{copy_property, paste_property, InstanceId, PropertyHandle};
use propclip_core::mem::{BufferClipboard, MapIdentity, MemoryProperty, MemoryTree};

fn reference_tree(target: Option<InstanceId>) -> MemoryTree {
    MemoryTree::new(vec![MemoryProperty::reference("material", target)])
}

#[test]
fn test_durable_reference_travels_as_guid_object() {
    let identity = identity();
    let source = reference_tree(Some(MATERIAL_INSTANCE));
    let mut clipboard = BufferClipboard::new();
    copy_property(&source, "material", &identity, &mut clipboard).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(clipboard.text()).unwrap();
    assert_eq!(parsed["material"]["guid"], MATERIAL_GUID);
    assert_eq!(parsed["material"]["instanceID"], MATERIAL_INSTANCE.0);

    let mut target = reference_tree(None);
    paste_property(&mut target, "material", &identity, &clipboard).unwrap();
    assert_eq!(
        target.get("material").unwrap().reference(),
        Some(MATERIAL_INSTANCE)
    );
}

#[test]
fn test_transient_reference_travels_as_bare_integer() {
    let identity = identity();
    // Instance 777 has no durable identity
    let source = reference_tree(Some(InstanceId(777)));
    let mut clipboard = BufferClipboard::new();
    copy_property(&source, "material", &identity, &mut clipboard).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(clipboard.text()).unwrap();
    assert_eq!(parsed["material"], 777);

    let mut target = reference_tree(None);
    paste_property(&mut target, "material", &identity, &clipboard).unwrap();
    assert_eq!(
        target.get("material").unwrap().reference(),
        Some(InstanceId(777))
    );
}

#[test]
fn test_null_reference_travels_as_json_null() {
    let identity = identity();
    let source = reference_tree(None);
    let mut clipboard = BufferClipboard::new();
    copy_property(&source, "material", &identity, &mut clipboard).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(clipboard.text()).unwrap();
    assert!(parsed["material"].is_null());

    let mut target = reference_tree(Some(MATERIAL_INSTANCE));
    paste_property(&mut target, "material", &identity, &clipboard).unwrap();
    assert_eq!(target.get("material").unwrap().reference(), None);
}

#[test]
fn test_unresolvable_guid_degrades_to_null_reference() {
    let identity = identity();
    let source = reference_tree(Some(MATERIAL_INSTANCE));
    let mut clipboard = BufferClipboard::new();
    copy_property(&source, "material", &identity, &mut clipboard).unwrap();

    // The pasting session has never seen this asset
    let empty_identity = MapIdentity::new();
    let mut target = reference_tree(None);
    paste_property(&mut target, "material", &empty_identity, &clipboard).unwrap();
    assert_eq!(target.get("material").unwrap().reference(), None);
    // The instance-id hint from the document is still recorded
    assert_eq!(
        target.get("material").unwrap().reference_instance_id(),
        MATERIAL_INSTANCE.0
    );
}
