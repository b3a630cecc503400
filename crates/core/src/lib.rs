//! Core domain types for tensorlink
//!
//! This crate defines the inference-library side of the marshalling
//! boundary:
//! - [`ElementType`]: enumerated element kinds for tensor buffers
//! - [`Shape`]: ordered non-negative dimension sizes (rank 0 is valid)
//! - [`Layout`]: parsed axis-ordering descriptor
//! - [`Tensor`]: element type + shape + shared byte buffer
//! - [`TensorKey`]: name-or-index addressing of a request's tensor slots
//!
//! Nothing here touches the embedding runtime; these types are pure data
//! and carry no references into a call context.

pub mod element_type;
pub mod error;
pub mod layout;
pub mod shape;
pub mod tensor;

pub use element_type::ElementType;
pub use error::{CoreError, LayoutError};
pub use layout::Layout;
pub use shape::Shape;
pub use tensor::{Tensor, TensorKey};
