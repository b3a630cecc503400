//! Embedding-runtime value model for tensorlink
//!
//! This crate models the dynamic scripting runtime's side of the
//! marshalling boundary:
//! - [`Value`]: the runtime's dynamically-typed value representation
//! - [`ValueKind`]: the coarse kind used for acceptance checks
//! - [`TypedArray`]: a typed numeric array backed by raw bytes
//! - [`CallContext`]: the per-invocation handle carrying arguments and
//!   runtime value constructors
//!
//! The marshalling crate inspects these; it never owns a call context
//! beyond one invocation.

pub mod context;
pub mod value;

pub use context::CallContext;
pub use value::{TensorHandle, TypedArray, Value, ValueKind};
