//! Tensor materialization from runtime values.
//!
//! Two branches, selected by the value's observed kind:
//!
//! 1. A typed numeric array becomes a freshly-allocated tensor of the
//!    slot's (type, shape), filled by a reinterpreting bulk byte copy.
//!    The copy is only legal when the array's byte length equals the
//!    tensor's byte size exactly; the source element width is assumed to
//!    already match the target element type. A length mismatch is a hard
//!    error, never a partially-filled or zero-filled tensor.
//! 2. A wrapped tensor object hands over its native tensor directly; the
//!    shared buffer makes this a shallow clone with no byte copy.
//!
//! Any other value kind is a type mismatch.

use crate::error::{MarshalError, Result};
use crate::request::{resolve_slot, InferRequest};
use tensorlink_core::{Tensor, TensorKey};
use tensorlink_runtime::Value;

/// Build or extract a native tensor from a runtime value.
pub fn materialize(value: &Value, request: &InferRequest, key: &TensorKey) -> Result<Tensor> {
    match value {
        Value::TypedArray(arr) => {
            let slot = resolve_slot(request, key)?;
            let expected = slot.byte_size();
            let actual = arr.byte_length();
            tracing::debug!(
                key = %key,
                element_type = %slot.element_type,
                shape = %slot.shape,
                expected_bytes = expected,
                actual_bytes = actual,
                "materializing tensor from typed array"
            );
            if actual != expected {
                return Err(MarshalError::TypeMismatch(format!(
                    "tensor {}: typed array holds {} bytes, slot needs {} ({} {})",
                    key, actual, expected, slot.element_type, slot.shape
                )));
            }
            let tensor = Tensor::from_bytes(
                slot.element_type,
                slot.shape.clone(),
                arr.as_bytes().to_vec(),
            )
            .map_err(|e| MarshalError::TypeMismatch(format!("tensor {}: {}", key, e)))?;
            Ok(tensor)
        }
        Value::Tensor(handle) => {
            tracing::debug!(key = %key, "materializing tensor from wrapped tensor object");
            Ok(handle.tensor().clone())
        }
        other => Err(MarshalError::TypeMismatch(format!(
            "tensor {}: expected typed array or tensor object, got {}",
            key,
            other.kind()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::TensorSlot;
    use tensorlink_core::{ElementType, Shape};
    use tensorlink_runtime::{TensorHandle, TypedArray};

    fn request() -> InferRequest {
        InferRequest::new(vec![(
            "input".to_string(),
            TensorSlot {
                element_type: ElementType::F32,
                shape: Shape::new(vec![2, 2]),
            },
        )])
    }

    #[test]
    fn test_typed_array_exact_size_copies_bytes_verbatim() {
        let req = request();
        let arr = TypedArray::from_f32(&[1.0, 2.0, 3.0, 4.0]);
        let source_bytes = arr.as_bytes().to_vec();
        let tensor = materialize(&Value::from(arr), &req, &TensorKey::from("input")).unwrap();
        assert_eq!(tensor.element_type(), ElementType::F32);
        assert_eq!(tensor.shape().dims(), &[2, 2]);
        assert_eq!(tensor.bytes(), source_bytes.as_slice());
    }

    #[test]
    fn test_typed_array_resolves_by_index_too() {
        let req = request();
        let arr = TypedArray::from_f32(&[1.0, 2.0, 3.0, 4.0]);
        let tensor = materialize(&Value::from(arr), &req, &TensorKey::from(0usize)).unwrap();
        assert_eq!(tensor.shape().dims(), &[2, 2]);
    }

    #[test]
    fn test_byte_size_mismatch_is_a_hard_error() {
        let req = request();
        // 3 elements, slot needs 4; must not come back zero- or
        // partially-filled.
        let arr = TypedArray::from_f32(&[1.0, 2.0, 3.0]);
        let err = materialize(&Value::from(arr), &req, &TensorKey::from("input")).unwrap_err();
        match err {
            MarshalError::TypeMismatch(msg) => {
                assert!(msg.contains("12 bytes"), "{}", msg);
                assert!(msg.contains("16"), "{}", msg);
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_element_width_mismatch_is_caught_by_byte_size() {
        let req = request();
        // Same element count, wrong width: 4 x f64 = 32 bytes != 16.
        let arr = TypedArray::from_f64(&[1.0, 2.0, 3.0, 4.0]);
        let err = materialize(&Value::from(arr), &req, &TensorKey::from("input")).unwrap_err();
        assert!(matches!(err, MarshalError::TypeMismatch(_)));
    }

    #[test]
    fn test_wrapped_tensor_is_extracted_without_copy() {
        let req = request();
        let native = Tensor::from_bytes(
            ElementType::F32,
            Shape::new(vec![2, 2]),
            vec![0u8; 16],
        )
        .unwrap();
        let value = Value::Tensor(TensorHandle::new(native.clone()));
        let tensor = materialize(&value, &req, &TensorKey::from("input")).unwrap();
        assert!(tensor.shares_buffer(&native));
    }

    #[test]
    fn test_unknown_key_propagates() {
        let req = request();
        let arr = TypedArray::from_f32(&[1.0, 2.0, 3.0, 4.0]);
        let err = materialize(&Value::from(arr), &req, &TensorKey::from("missing")).unwrap_err();
        assert!(matches!(err, MarshalError::UnknownTensorKey(_)));
    }

    #[test]
    fn test_neither_branch_is_explicit_mismatch() {
        let req = request();
        for value in [Value::Null, Value::Number(1.0), Value::from("x"), Value::Array(vec![])] {
            let err = materialize(&value, &req, &TensorKey::from("input")).unwrap_err();
            assert!(matches!(err, MarshalError::TypeMismatch(_)), "{:?}", value);
        }
    }
}
