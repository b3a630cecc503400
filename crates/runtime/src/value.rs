//! The runtime value representation.
//!
//! `Value` is the closed model of what the embedding runtime can hand
//! across the call boundary. The marshalling layer works purely off this
//! enum plus the coarse [`ValueKind`] it exposes; no conversion coerces
//! one kind into another.
//!
//! Equality carries no coercion: `Number(1.0)` is never equal to
//! `String("1")`, and typed arrays compare by element kind and raw bytes.

use serde::{Deserialize, Serialize};
use tensorlink_core::{ElementType, Tensor};

/// Coarse runtime kind of a [`Value`].
///
/// This is what acceptance descriptors match against and what error
/// messages name as the "actual" side of a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Absent value (also what out-of-bounds argument reads produce)
    Null,
    /// Boolean
    Bool,
    /// Double-precision number
    Number,
    /// UTF-8 string
    String,
    /// Ordered array of values
    Array,
    /// Typed numeric array over raw bytes
    TypedArray,
    /// Structured object (wrapped native tensor)
    Object,
}

impl ValueKind {
    /// Kind name for error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::TypedArray => "typed array",
            ValueKind::Object => "object",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A typed numeric array: element kind plus raw bytes.
///
/// The byte buffer is the array's backing store viewed verbatim; length
/// is always a whole multiple of the element byte size by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedArray {
    kind: ElementType,
    bytes: Vec<u8>,
}

macro_rules! typed_array_ctor {
    ($fn_name:ident, $prim:ty, $kind:expr) => {
        /// Build a typed array from a native slice.
        pub fn $fn_name(values: &[$prim]) -> Self {
            let mut bytes = Vec::with_capacity(values.len() * std::mem::size_of::<$prim>());
            for v in values {
                bytes.extend_from_slice(&v.to_ne_bytes());
            }
            Self { kind: $kind, bytes }
        }
    };
}

impl TypedArray {
    /// Build a typed array directly over raw bytes.
    ///
    /// Callers are responsible for handing in a byte length that is a
    /// whole multiple of the element size; the slice constructors below
    /// guarantee this.
    pub fn from_raw(kind: ElementType, bytes: Vec<u8>) -> Self {
        Self { kind, bytes }
    }

    typed_array_ctor!(from_i8, i8, ElementType::I8);
    typed_array_ctor!(from_u8, u8, ElementType::U8);
    typed_array_ctor!(from_i16, i16, ElementType::I16);
    typed_array_ctor!(from_u16, u16, ElementType::U16);
    typed_array_ctor!(from_i32, i32, ElementType::I32);
    typed_array_ctor!(from_u32, u32, ElementType::U32);
    typed_array_ctor!(from_i64, i64, ElementType::I64);
    typed_array_ctor!(from_f32, f32, ElementType::F32);
    typed_array_ctor!(from_f64, f64, ElementType::F64);

    /// Element kind of the array.
    #[inline]
    pub fn kind(&self) -> ElementType {
        self.kind
    }

    /// Backing byte length.
    #[inline]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Number of elements.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.bytes.len() / self.kind.byte_size()
    }

    /// Raw backing bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A structured runtime object wrapping an already-constructed native
/// tensor, exposing it without a byte copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorHandle {
    tensor: Tensor,
}

impl TensorHandle {
    /// Wrap a native tensor.
    pub fn new(tensor: Tensor) -> Self {
        Self { tensor }
    }

    /// The underlying native tensor.
    pub fn tensor(&self) -> &Tensor {
        &self.tensor
    }
}

/// The dynamic runtime's value representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean
    Bool(bool),
    /// Double-precision number (the runtime's only numeric type)
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Ordered array of values
    Array(Vec<Value>),
    /// Typed numeric array
    TypedArray(TypedArray),
    /// Wrapped native tensor
    Tensor(TensorHandle),
}

impl Value {
    /// Coarse kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::TypedArray(_) => ValueKind::TypedArray,
            Value::Tensor(_) => ValueKind::Object,
        }
    }

    /// Try to get as f64.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as array slice.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as typed array.
    pub fn as_typed_array(&self) -> Option<&TypedArray> {
        match self {
            Value::TypedArray(arr) => Some(arr),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<TypedArray> for Value {
    fn from(arr: TypedArray) -> Self {
        Value::TypedArray(arr)
    }
}

impl From<Tensor> for Value {
    fn from(tensor: Tensor) -> Self {
        Value::Tensor(TensorHandle::new(tensor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensorlink_core::Shape;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Number(1.5).kind(), ValueKind::Number);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::Array(vec![]).kind(), ValueKind::Array);
        assert_eq!(
            Value::from(TypedArray::from_f32(&[1.0])).kind(),
            ValueKind::TypedArray
        );
        let t = Tensor::zeros(ElementType::F32, Shape::new(vec![1]));
        assert_eq!(Value::from(t).kind(), ValueKind::Object);
    }

    #[test]
    fn test_no_cross_kind_equality() {
        assert_ne!(Value::Number(1.0), Value::String("1".to_string()));
        assert_ne!(Value::Null, Value::Number(0.0));
        assert_ne!(Value::Bool(true), Value::Number(1.0));
    }

    #[test]
    fn test_typed_array_byte_length() {
        let arr = TypedArray::from_f32(&[1.0, 2.0, 3.0]);
        assert_eq!(arr.kind(), ElementType::F32);
        assert_eq!(arr.byte_length(), 12);
        assert_eq!(arr.element_count(), 3);
    }

    #[test]
    fn test_typed_array_bytes_are_verbatim() {
        let arr = TypedArray::from_u8(&[7, 8, 9]);
        assert_eq!(arr.as_bytes(), &[7, 8, 9]);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Number(2.0).as_number(), Some(2.0));
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert!(Value::Null.as_number().is_none());
        assert!(Value::Number(2.0).as_array().is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let v = Value::Array(vec![
            Value::Number(1.0),
            Value::from("f32"),
            Value::from(TypedArray::from_i32(&[1, 2])),
        ]);
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_tensor_value_serde_round_trip() {
        let t = Tensor::from_bytes(ElementType::U8, Shape::new(vec![2]), vec![5, 6]).unwrap();
        let v = Value::from(t);
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
