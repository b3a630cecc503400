//! Marshalling layer for tensorlink
//!
//! Converts values between the embedding runtime's dynamic representation
//! (`tensorlink-runtime`) and the inference library's domain types
//! (`tensorlink-core`). Five surfaces:
//!
//! - [`catalog`]: the immutable short-name -> element-type table
//! - [`inbound`]: typed argument extraction ([`convert_arg`])
//! - [`outbound`]: native element type -> runtime string
//!   ([`element_type_to_value`])
//! - [`request`]: tensor-slot resolution by name or index
//!   ([`resolve_slot`])
//! - [`materialize`]: building native tensors from runtime values
//!
//! All conversions are synchronous, borrow their call context for one
//! invocation only, and report failures as [`MarshalError`] values to
//! the immediate caller.

pub mod accept;
pub mod catalog;
pub mod error;
pub mod inbound;
pub mod materialize;
pub mod outbound;
pub mod request;

pub use accept::{Acceptable, SourceTag};
pub use error::{MarshalError, Result};
pub use inbound::{convert_arg, FromRuntime};
pub use materialize::materialize;
pub use outbound::element_type_to_value;
pub use request::{resolve_slot, InferRequest, TensorSlot};
