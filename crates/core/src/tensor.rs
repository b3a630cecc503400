//! Native tensors and the keys that address them.

use crate::element_type::ElementType;
use crate::error::CoreError;
use crate::shape::Shape;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A buffer of raw bytes paired with an element type and shape.
///
/// The buffer is reference-counted: cloning a `Tensor` is a shallow copy
/// that shares the bytes, matching the handle semantics of the native
/// inference library. All constructors take ownership of their input, so
/// a tensor never aliases memory it does not co-own and never holds a
/// reference into a call context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tensor {
    element_type: ElementType,
    shape: Shape,
    data: Arc<[u8]>,
}

impl Tensor {
    /// Allocate a zero-filled tensor sized from (type, shape).
    pub fn zeros(element_type: ElementType, shape: Shape) -> Self {
        let len = element_type.byte_size() * shape.element_count();
        Self {
            element_type,
            shape,
            data: vec![0u8; len].into(),
        }
    }

    /// Build a tensor over an existing byte buffer.
    ///
    /// The buffer length must equal the byte size implied by
    /// (type, shape); anything else is a [`CoreError::BufferSize`].
    pub fn from_bytes(
        element_type: ElementType,
        shape: Shape,
        bytes: Vec<u8>,
    ) -> Result<Self, CoreError> {
        let expected = element_type.byte_size() * shape.element_count();
        if bytes.len() != expected {
            return Err(CoreError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            element_type,
            shape,
            data: bytes.into(),
        })
    }

    /// Element type of the buffer.
    #[inline]
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Shape of the tensor.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Total buffer size in bytes.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.data.len()
    }

    /// Raw bytes of the buffer.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// True when `other` shares this tensor's buffer.
    pub fn shares_buffer(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

// Serde goes through an owned mirror so the shared buffer stays a plain
// byte sequence on the wire.
#[derive(Serialize, Deserialize)]
struct TensorRepr {
    element_type: ElementType,
    shape: Shape,
    data: Vec<u8>,
}

impl Serialize for Tensor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TensorRepr {
            element_type: self.element_type,
            shape: self.shape.clone(),
            data: self.data.to_vec(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tensor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = TensorRepr::deserialize(deserializer)?;
        Tensor::from_bytes(repr.element_type, repr.shape, repr.data)
            .map_err(serde::de::Error::custom)
    }
}

/// Addresses one tensor slot within an inference request.
///
/// Resolution is request-scoped; a key carries no meaning beyond the
/// request it is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TensorKey {
    /// Named port lookup
    Name(String),
    /// Positional port lookup, zero-based
    Index(usize),
}

impl From<&str> for TensorKey {
    fn from(name: &str) -> Self {
        TensorKey::Name(name.to_string())
    }
}

impl From<String> for TensorKey {
    fn from(name: String) -> Self {
        TensorKey::Name(name)
    }
}

impl From<usize> for TensorKey {
    fn from(index: usize) -> Self {
        TensorKey::Index(index)
    }
}

impl std::fmt::Display for TensorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TensorKey::Name(name) => write!(f, "{:?}", name),
            TensorKey::Index(index) => write!(f, "#{}", index),
        }
    }
}
