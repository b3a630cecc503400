//! Inference requests and tensor-slot resolution.
//!
//! A request binds a set of tensor ports, addressable both by name and
//! by position. Resolution returns the same descriptor type for either
//! key variant, so callers can be written key-type-agnostic.

use crate::error::{MarshalError, Result};
use tensorlink_core::{ElementType, Shape, TensorKey};

/// Descriptor for one bound tensor port: the element type and shape the
/// request expects at that slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorSlot {
    /// Expected element type
    pub element_type: ElementType,
    /// Expected shape
    pub shape: Shape,
}

impl TensorSlot {
    /// Byte size of a tensor filling this slot.
    pub fn byte_size(&self) -> usize {
        self.element_type.byte_size() * self.shape.element_count()
    }
}

/// Named and positional tensor-slot bindings for one inference call.
///
/// Port order is the positional binding; names are the named binding.
/// Bindings are fixed at construction, mirroring how a compiled model's
/// ports are known before any call runs.
#[derive(Debug, Clone)]
pub struct InferRequest {
    ports: Vec<(String, TensorSlot)>,
}

impl InferRequest {
    /// Build a request over ordered (name, slot) port bindings.
    pub fn new(ports: Vec<(String, TensorSlot)>) -> Self {
        Self { ports }
    }

    /// Number of bound ports.
    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    fn slot_by_name(&self, name: &str) -> Option<&TensorSlot> {
        self.ports
            .iter()
            .find(|(port, _)| port == name)
            .map(|(_, slot)| slot)
    }

    fn slot_by_index(&self, index: usize) -> Option<&TensorSlot> {
        self.ports.get(index).map(|(_, slot)| slot)
    }
}

/// Resolve the tensor slot bound to `key`.
///
/// Both key variants return the same descriptor type; a key with no
/// bound slot is an [`MarshalError::UnknownTensorKey`].
pub fn resolve_slot<'a>(request: &'a InferRequest, key: &TensorKey) -> Result<&'a TensorSlot> {
    let slot = match key {
        TensorKey::Name(name) => request.slot_by_name(name),
        TensorKey::Index(index) => request.slot_by_index(*index),
    };
    slot.ok_or_else(|| MarshalError::UnknownTensorKey(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> InferRequest {
        InferRequest::new(vec![
            (
                "data".to_string(),
                TensorSlot {
                    element_type: ElementType::F32,
                    shape: Shape::new(vec![1, 3, 8, 8]),
                },
            ),
            (
                "mask".to_string(),
                TensorSlot {
                    element_type: ElementType::U8,
                    shape: Shape::new(vec![1, 8, 8]),
                },
            ),
        ])
    }

    #[test]
    fn test_resolve_by_name() {
        let req = request();
        let slot = resolve_slot(&req, &TensorKey::from("mask")).unwrap();
        assert_eq!(slot.element_type, ElementType::U8);
        assert_eq!(slot.shape.dims(), &[1, 8, 8]);
    }

    #[test]
    fn test_name_and_index_resolve_identically() {
        let req = request();
        let by_name = resolve_slot(&req, &TensorKey::from("data")).unwrap();
        let by_index = resolve_slot(&req, &TensorKey::from(0usize)).unwrap();
        assert_eq!(by_name, by_index);
    }

    #[test]
    fn test_unknown_name_fails() {
        let req = request();
        let err = resolve_slot(&req, &TensorKey::from("missing")).unwrap_err();
        assert_eq!(
            err,
            MarshalError::UnknownTensorKey("\"missing\"".to_string())
        );
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let req = request();
        let err = resolve_slot(&req, &TensorKey::from(2usize)).unwrap_err();
        assert!(matches!(err, MarshalError::UnknownTensorKey(_)));
    }

    #[test]
    fn test_slot_byte_size() {
        let req = request();
        let slot = resolve_slot(&req, &TensorKey::from("data")).unwrap();
        assert_eq!(slot.byte_size(), 4 * 3 * 64);
    }
}
