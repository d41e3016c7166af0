//! Leaf value codec
//!
//! Converts a single leaf property's runtime value to and from a
//! [`StructuredValue`]. Holds no tree knowledge; the transcoder decides which
//! nodes reach the codec.
//!
//! ## Asymmetry
//!
//! Encode is exact-or-loud: a kind with no rule is
//! [`Error::UnsupportedKind`], aborting the whole copy. Decode is
//! best-effort: any kind/shape mismatch leaves the handle unchanged, so a
//! heterogeneous document pasted onto a narrower target degrades to applying
//! whatever fits.

use propclip_core::{
    Color, Error, ExternalRef, IdentityLookup, PropertyHandle, PropertyKind, Result,
    StructuredValue, GUID_FIELD, INSTANCE_ID_FIELD,
};

/// Stateless codec over a borrowed identity service
///
/// The identity service is injected per call chain; there is no cached
/// module state.
#[derive(Clone, Copy)]
pub struct ValueCodec<'a> {
    identity: &'a dyn IdentityLookup,
}

impl<'a> ValueCodec<'a> {
    /// Create a codec borrowing the given identity service
    pub fn new(identity: &'a dyn IdentityLookup) -> Self {
        Self { identity }
    }

    /// Encode one leaf property's value
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedKind`] when the declared kind has no encoding
    /// rule. This is a configuration gap, not a recoverable condition.
    pub fn encode(&self, handle: &dyn PropertyHandle) -> Result<StructuredValue> {
        match handle.kind() {
            PropertyKind::Boolean => Ok(StructuredValue::Bool(handle.bool_value())),
            PropertyKind::Integer | PropertyKind::Enum | PropertyKind::ArraySize => {
                Ok(StructuredValue::Int(handle.int_value()))
            }
            PropertyKind::Float => Ok(StructuredValue::Float(handle.float_value())),
            PropertyKind::String => Ok(StructuredValue::String(handle.string_value())),
            PropertyKind::Color => Ok(handle.color_value().into()),
            PropertyKind::ExternalReference => Ok(self.encode_reference(handle)),
            kind => Err(Error::UnsupportedKind { kind }),
        }
    }

    fn encode_reference(&self, handle: &dyn PropertyHandle) -> StructuredValue {
        let Some(instance) = handle.reference() else {
            return StructuredValue::Null;
        };
        match self.identity.to_durable_id(instance) {
            Some(durable) => StructuredValue::ExternalRef(ExternalRef::Durable {
                guid: durable.guid,
                instance_id: handle.reference_instance_id(),
            }),
            // No durable identity: only the transient id travels
            None => StructuredValue::ExternalRef(ExternalRef::Transient(
                handle.reference_instance_id(),
            )),
        }
    }

    /// Decode a value into a leaf property
    ///
    /// Sets the handle only when the value's shape matches the declared
    /// kind; every mismatch is a silent no-op so one bad entry never aborts
    /// a paste.
    pub fn decode(&self, handle: &mut dyn PropertyHandle, value: &StructuredValue) {
        match (handle.kind(), value) {
            (PropertyKind::Boolean, StructuredValue::Bool(b)) => handle.set_bool_value(*b),
            (
                PropertyKind::Integer | PropertyKind::Enum | PropertyKind::ArraySize,
                StructuredValue::Int(i),
            ) => handle.set_int_value(*i),
            (PropertyKind::Float, StructuredValue::Float(f)) => handle.set_float_value(*f),
            (PropertyKind::String, StructuredValue::String(s)) => handle.set_string_value(s),
            (PropertyKind::Color, StructuredValue::Object(obj)) => {
                // All four channels must be present and numeric; a partial
                // channel set is rejected whole.
                let channel = |key: &str| obj.get(key).and_then(|v| v.as_float_compat());
                if let (Some(r), Some(g), Some(b), Some(a)) =
                    (channel("r"), channel("g"), channel("b"), channel("a"))
                {
                    handle.set_color_value(Color::new(r as f32, g as f32, b as f32, a as f32));
                }
            }
            (PropertyKind::ExternalReference, StructuredValue::Object(obj)) => {
                match obj.get(GUID_FIELD).and_then(|v| v.as_str()) {
                    None => handle.set_reference(None),
                    Some(guid) => {
                        // Failed resolution degrades to a null reference
                        handle.set_reference(self.identity.from_durable_id(guid));
                        let hint = obj
                            .get(INSTANCE_ID_FIELD)
                            .and_then(|v| v.as_int())
                            .unwrap_or(0);
                        handle.set_reference_instance_id(hint);
                    }
                }
            }
            (PropertyKind::ExternalReference, StructuredValue::Int(id)) => {
                handle.set_reference(Some(propclip_core::InstanceId(*id)));
                handle.set_reference_instance_id(*id);
            }
            (PropertyKind::ExternalReference, StructuredValue::Null) => {
                handle.set_reference(None);
            }
            // Shape mismatch: leave the handle unchanged
            _ => {}
        }
    }
}
