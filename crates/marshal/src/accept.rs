//! Acceptable-source-type descriptors.
//!
//! Every inbound extraction carries a descriptor naming which runtime
//! value shapes are legal at that argument position. The check runs
//! before the detailed conversion path: a value whose coarse kind is
//! excluded fails with a type mismatch no matter which target was
//! requested.

use smallvec::SmallVec;
use tensorlink_core::ElementType;
use tensorlink_runtime::{Value, ValueKind};

/// One acceptance tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTag {
    /// A scalar runtime kind (string, number, ...)
    Kind(ValueKind),
    /// A typed array with a specific element kind
    TypedArrayOf(ElementType),
    /// Any runtime array, regardless of element values
    AnyArray,
}

impl SourceTag {
    fn admits(&self, value: &Value) -> bool {
        match self {
            SourceTag::Kind(kind) => value.kind() == *kind,
            SourceTag::TypedArrayOf(et) => value
                .as_typed_array()
                .map_or(false, |arr| arr.kind() == *et),
            SourceTag::AnyArray => value.kind() == ValueKind::Array,
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceTag::Kind(kind) => write!(f, "{}", kind),
            SourceTag::TypedArrayOf(et) => write!(f, "{} typed array", et),
            SourceTag::AnyArray => write!(f, "array"),
        }
    }
}

/// Non-empty set of acceptance tags for one argument position.
///
/// Most call sites accept one or two source shapes, so tags live inline.
#[derive(Debug, Clone)]
pub struct Acceptable {
    tags: SmallVec<[SourceTag; 4]>,
}

impl Acceptable {
    /// Build a descriptor from tags.
    ///
    /// Panics on an empty tag list: extraction against an empty set can
    /// never succeed, so an empty descriptor is a programming error at
    /// the call site, not a runtime condition.
    pub fn new(tags: impl IntoIterator<Item = SourceTag>) -> Self {
        let tags: SmallVec<[SourceTag; 4]> = tags.into_iter().collect();
        assert!(
            !tags.is_empty(),
            "acceptable-type descriptor must not be empty"
        );
        Self { tags }
    }

    /// Shorthand for a single scalar kind.
    pub fn kind(kind: ValueKind) -> Self {
        Self::new([SourceTag::Kind(kind)])
    }

    /// True when `value`'s observed shape matches any tag.
    pub fn admits(&self, value: &Value) -> bool {
        self.tags.iter().any(|tag| tag.admits(value))
    }

    /// Renders the tag set for "expected ..." diagnostics.
    pub fn expectation(&self) -> String {
        let mut out = String::new();
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                out.push_str(" or ");
            }
            out.push_str(&tag.to_string());
        }
        out
    }
}
