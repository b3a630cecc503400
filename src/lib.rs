//! # Tensorlink
//!
//! Bidirectional type marshalling between a dynamic scripting runtime's
//! value representation and the strongly-typed domain objects of a
//! numerical inference library.
//!
//! ## Quick Start
//!
//! ```
//! use tensorlink::prelude::*;
//!
//! // The embedding runtime hands over a call context with arguments.
//! let ctx = CallContext::new(vec![
//!     Value::from("f32"),
//!     Value::Array(vec![Value::Number(1.0), Value::Number(3.0)]),
//! ]);
//!
//! // Extract typed arguments; the target type picks the conversion.
//! let et: ElementType = convert_arg(&ctx, 0, &Acceptable::kind(ValueKind::String))?;
//! let shape: Shape = convert_arg(&ctx, 1, &Acceptable::new([SourceTag::AnyArray]))?;
//! assert_eq!(et, ElementType::F32);
//! assert_eq!(shape.dims(), &[1, 3]);
//! # Ok::<(), tensorlink::Error>(())
//! ```
//!
//! ## Surfaces
//!
//! - Element-type catalog: [`catalog::lookup`] / [`catalog::short_name`]
//! - Inbound conversion: [`convert_arg`] over the closed target set
//! - Outbound conversion: [`element_type_to_value`]
//! - Tensor resolution: [`resolve_slot`]
//! - Tensor materialization: [`materialize`]
//!
//! All operations are synchronous and borrow their call context for one
//! invocation; failures surface as [`Error`] values naming the argument
//! position and the expected type.

#![warn(missing_docs)]

pub mod prelude;

pub use tensorlink_core::{
    CoreError, ElementType, Layout, LayoutError, Shape, Tensor, TensorKey,
};
pub use tensorlink_runtime::{CallContext, TensorHandle, TypedArray, Value, ValueKind};

pub use tensorlink_marshal::catalog;
pub use tensorlink_marshal::{
    convert_arg, element_type_to_value, materialize, resolve_slot, Acceptable, FromRuntime,
    InferRequest, MarshalError as Error, Result, SourceTag, TensorSlot,
};
