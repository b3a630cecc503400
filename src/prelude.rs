//! Convenience re-exports for typical marshalling call sites.
//!
//! ```
//! use tensorlink::prelude::*;
//! ```

pub use crate::catalog;
pub use crate::{
    convert_arg, element_type_to_value, materialize, resolve_slot, Acceptable, CallContext,
    ElementType, Error, InferRequest, Layout, Result, Shape, SourceTag, Tensor, TensorHandle,
    TensorKey, TensorSlot, TypedArray, Value, ValueKind,
};
