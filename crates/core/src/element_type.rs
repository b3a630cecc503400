//! Enumerated element kinds for tensor buffers.
//!
//! `ElementType` is the closed set of kinds the native inference side
//! understands. It is wider than the marshalling catalog: the bindings
//! expose short names for nine kinds only, while the native library also
//! carries half-precision, bfloat16, u64 and boolean tensors. The extras
//! exist here so descriptors read off native models render faithfully in
//! diagnostics; the catalog decides what the runtime may name.

use serde::{Deserialize, Serialize};

/// Element kind of a tensor buffer.
///
/// Determines how raw bytes are interpreted and how many bytes one
/// element occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    /// 8-bit signed integer
    I8,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit signed integer
    I16,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit signed integer
    I32,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit signed integer
    I64,
    /// 64-bit unsigned integer (native only, not in the runtime catalog)
    U64,
    /// 16-bit IEEE-754 float (native only)
    F16,
    /// bfloat16 (native only)
    Bf16,
    /// 32-bit IEEE-754 float
    F32,
    /// 64-bit IEEE-754 float
    F64,
    /// Boolean, one byte per element (native only)
    Boolean,
}

impl ElementType {
    /// Size of one element in bytes.
    #[inline]
    pub const fn byte_size(&self) -> usize {
        match self {
            ElementType::I8 | ElementType::U8 | ElementType::Boolean => 1,
            ElementType::I16 | ElementType::U16 | ElementType::F16 | ElementType::Bf16 => 2,
            ElementType::I32 | ElementType::U32 | ElementType::F32 => 4,
            ElementType::I64 | ElementType::U64 | ElementType::F64 => 8,
        }
    }

    /// Canonical short name, used in diagnostics and by the catalog.
    pub const fn name(&self) -> &'static str {
        match self {
            ElementType::I8 => "i8",
            ElementType::U8 => "u8",
            ElementType::I16 => "i16",
            ElementType::U16 => "u16",
            ElementType::I32 => "i32",
            ElementType::U32 => "u32",
            ElementType::I64 => "i64",
            ElementType::U64 => "u64",
            ElementType::F16 => "f16",
            ElementType::Bf16 => "bf16",
            ElementType::F32 => "f32",
            ElementType::F64 => "f64",
            ElementType::Boolean => "boolean",
        }
    }

    #[inline]
    pub const fn is_floating_point(&self) -> bool {
        matches!(
            self,
            ElementType::F16 | ElementType::Bf16 | ElementType::F32 | ElementType::F64
        )
    }

    #[inline]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            ElementType::I8
                | ElementType::U8
                | ElementType::I16
                | ElementType::U16
                | ElementType::I32
                | ElementType::U32
                | ElementType::I64
                | ElementType::U64
        )
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
