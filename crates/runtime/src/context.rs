//! Per-invocation call context.

use crate::value::Value;

/// The handle the embedding runtime supplies for one call.
///
/// Carries the ordered argument list and the constructors for new
/// runtime values. The marshalling layer borrows a context for the
/// duration of one conversion and never stores it; argument values live
/// exactly as long as the context that owns them.
///
/// Reading past the end of the argument list yields [`Value::Null`],
/// mirroring how the embedding runtime reports absent arguments. The
/// acceptance check then rejects the null with a message naming the
/// position, so a missing argument surfaces as an ordinary type
/// mismatch rather than a panic.
#[derive(Debug, Clone)]
pub struct CallContext {
    args: Vec<Value>,
}

impl CallContext {
    /// Build a context over an ordered argument list.
    pub fn new(args: Vec<Value>) -> Self {
        Self { args }
    }

    /// Number of arguments passed to the call.
    #[inline]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Argument at `index`, or `Null` when the position is absent.
    pub fn arg(&self, index: usize) -> &Value {
        static NULL: Value = Value::Null;
        self.args.get(index).unwrap_or(&NULL)
    }

    /// Construct a new runtime string value.
    pub fn new_string(&self, s: impl Into<String>) -> Value {
        Value::String(s.into())
    }

    /// Construct a new runtime number value.
    pub fn new_number(&self, n: f64) -> Value {
        Value::Number(n)
    }

    /// Construct a new runtime array value.
    pub fn new_array(&self, items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}
