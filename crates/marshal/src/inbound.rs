//! Inbound conversion: runtime argument -> native target type.
//!
//! One conversion operation per target kind, selected by the caller's
//! static type through the sealed [`FromRuntime`] trait. The set of
//! targets is closed; adding one means adding an impl here, which keeps
//! the conversion table exhaustive and checkable.
//!
//! Every extraction runs the acceptance check first: a value whose
//! coarse kind is excluded by the descriptor fails with a type mismatch
//! before any target-specific logic sees it.

use crate::accept::Acceptable;
use crate::catalog;
use crate::error::{MarshalError, Result};
use std::collections::HashSet;
use tensorlink_core::{ElementType, Layout, Shape};
use tensorlink_runtime::{CallContext, Value};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for Vec<usize> {}
    impl Sealed for std::collections::HashSet<String> {}
    impl Sealed for String {}
    impl Sealed for tensorlink_core::ElementType {}
    impl Sealed for tensorlink_core::Layout {}
    impl Sealed for tensorlink_core::Shape {}
}

/// A native target type constructible from one runtime argument.
///
/// Sealed: the seven implementations in this module are the complete
/// conversion table.
pub trait FromRuntime: Sized + sealed::Sealed {
    /// Convert the argument at `index`, validated against `acceptable`.
    fn from_runtime(ctx: &CallContext, index: usize, acceptable: &Acceptable) -> Result<Self>;
}

/// Extract a typed argument from a call context.
///
/// This is the single inbound entry point; the target type picks the
/// conversion path at compile time.
pub fn convert_arg<T: FromRuntime>(
    ctx: &CallContext,
    index: usize,
    acceptable: &Acceptable,
) -> Result<T> {
    T::from_runtime(ctx, index, acceptable)
}

/// Acceptance gate shared by every target path.
fn admitted<'a>(ctx: &'a CallContext, index: usize, acceptable: &Acceptable) -> Result<&'a Value> {
    let value = ctx.arg(index);
    if !acceptable.admits(value) {
        tracing::debug!(
            argument = index,
            actual = %value.kind(),
            expected = %acceptable.expectation(),
            "argument rejected by acceptance check"
        );
        return Err(MarshalError::TypeMismatch(format!(
            "argument {}: expected {}, got {}",
            index,
            acceptable.expectation(),
            value.kind()
        )));
    }
    Ok(value)
}

fn element_mismatch(index: usize, elem: usize, expected: &str, got: &Value) -> MarshalError {
    MarshalError::TypeMismatch(format!(
        "argument {}: element {} must be a {}, got {}",
        index,
        elem,
        expected,
        got.kind()
    ))
}

/// Range-check one numeric array element as a non-negative size.
fn number_to_size(index: usize, elem: usize, n: f64) -> Result<usize> {
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(MarshalError::OutOfRange(format!(
            "argument {}: element {} is not a whole number: {}",
            index, elem, n
        )));
    }
    if n < 0.0 || n > usize::MAX as f64 {
        return Err(MarshalError::OutOfRange(format!(
            "argument {}: element {} is not a valid size: {}",
            index, elem, n
        )));
    }
    Ok(n as usize)
}

/// Convert a runtime array of numbers into ordered sizes, failing fast
/// on the first invalid element. Shared by the size-sequence and shape
/// targets.
fn array_to_sizes(index: usize, items: &[Value]) -> Result<Vec<usize>> {
    let mut sizes = Vec::with_capacity(items.len());
    for (elem, item) in items.iter().enumerate() {
        let n = item
            .as_number()
            .ok_or_else(|| element_mismatch(index, elem, "number", item))?;
        sizes.push(number_to_size(index, elem, n)?);
    }
    Ok(sizes)
}

impl FromRuntime for i32 {
    fn from_runtime(ctx: &CallContext, index: usize, acceptable: &Acceptable) -> Result<Self> {
        let value = admitted(ctx, index, acceptable)?;
        let n = value.as_number().ok_or_else(|| {
            MarshalError::TypeMismatch(format!(
                "argument {}: expected number, got {}",
                index,
                value.kind()
            ))
        })?;
        if !n.is_finite() || n.fract() != 0.0 || n < i32::MIN as f64 || n > i32::MAX as f64 {
            return Err(MarshalError::OutOfRange(format!(
                "argument {}: {} does not fit in a 32-bit integer",
                index, n
            )));
        }
        Ok(n as i32)
    }
}

impl FromRuntime for Vec<usize> {
    fn from_runtime(ctx: &CallContext, index: usize, acceptable: &Acceptable) -> Result<Self> {
        let value = admitted(ctx, index, acceptable)?;
        let items = value.as_array().ok_or_else(|| {
            MarshalError::TypeMismatch(format!(
                "argument {}: expected array of numbers, got {}",
                index,
                value.kind()
            ))
        })?;
        array_to_sizes(index, items)
    }
}

impl FromRuntime for HashSet<String> {
    fn from_runtime(ctx: &CallContext, index: usize, acceptable: &Acceptable) -> Result<Self> {
        let value = admitted(ctx, index, acceptable)?;
        let items = value.as_array().ok_or_else(|| {
            MarshalError::TypeMismatch(format!(
                "argument {}: expected array of strings, got {}",
                index,
                value.kind()
            ))
        })?;
        let mut set = HashSet::with_capacity(items.len());
        for (elem, item) in items.iter().enumerate() {
            let s = item
                .as_str()
                .ok_or_else(|| element_mismatch(index, elem, "string", item))?;
            // Duplicates collapse into set semantics
            set.insert(s.to_string());
        }
        Ok(set)
    }
}

impl FromRuntime for String {
    fn from_runtime(ctx: &CallContext, index: usize, acceptable: &Acceptable) -> Result<Self> {
        let value = admitted(ctx, index, acceptable)?;
        value.as_str().map(str::to_string).ok_or_else(|| {
            MarshalError::TypeMismatch(format!(
                "argument {}: expected string, got {}",
                index,
                value.kind()
            ))
        })
    }
}

impl FromRuntime for ElementType {
    fn from_runtime(ctx: &CallContext, index: usize, acceptable: &Acceptable) -> Result<Self> {
        let name: String = String::from_runtime(ctx, index, acceptable)?;
        // The input's shape was right; an unknown name is a value-level
        // failure, distinct from a plain type mismatch.
        catalog::lookup(&name).ok_or(MarshalError::UnknownElementType(name))
    }
}

impl FromRuntime for Layout {
    fn from_runtime(ctx: &CallContext, index: usize, acceptable: &Acceptable) -> Result<Self> {
        let text: String = String::from_runtime(ctx, index, acceptable)?;
        // Forwarded verbatim; parse failures carry the layout's own
        // error detail.
        Ok(Layout::parse(&text)?)
    }
}

impl FromRuntime for Shape {
    fn from_runtime(ctx: &CallContext, index: usize, acceptable: &Acceptable) -> Result<Self> {
        // Element-wise identical to the size-sequence target; an empty
        // array is the valid rank-0 shape.
        let dims: Vec<usize> = Vec::<usize>::from_runtime(ctx, index, acceptable)?;
        Ok(Shape::new(dims))
    }
}
