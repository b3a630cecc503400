//! The element-type catalog.
//!
//! A process-lifetime, read-only table mapping the short type names the
//! runtime may use to native element types, and back. Built once on
//! first use and never mutated, so no locking is needed.
//!
//! The catalog domain is exactly nine entries. The native [`ElementType`]
//! enum is wider (f16, bf16, u64, boolean); those kinds have no short
//! name here and are invisible to the runtime-facing surface.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tensorlink_core::ElementType;

/// The nine (short name, element type) pairs the runtime may name.
const ENTRIES: [(&str, ElementType); 9] = [
    ("i8", ElementType::I8),
    ("u8", ElementType::U8),
    ("i16", ElementType::I16),
    ("u16", ElementType::U16),
    ("i32", ElementType::I32),
    ("u32", ElementType::U32),
    ("f32", ElementType::F32),
    ("f64", ElementType::F64),
    ("i64", ElementType::I64),
];

static BY_NAME: Lazy<HashMap<&'static str, ElementType>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Look up an element type by short name.
///
/// Any name outside the table is `None`, never a panic.
pub fn lookup(name: &str) -> Option<ElementType> {
    BY_NAME.get(name).copied()
}

/// Inverse lookup: the short name for an element type, if the catalog
/// covers it.
pub fn short_name(element_type: ElementType) -> Option<&'static str> {
    ENTRIES
        .iter()
        .find(|(_, et)| *et == element_type)
        .map(|(name, _)| *name)
}

/// The catalog's short names, for "expected one of ..." diagnostics.
pub fn known_names() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hits() {
        assert_eq!(lookup("i8"), Some(ElementType::I8));
        assert_eq!(lookup("f32"), Some(ElementType::F32));
        assert_eq!(lookup("i64"), Some(ElementType::I64));
    }

    #[test]
    fn test_lookup_misses_are_none() {
        assert_eq!(lookup("bf16"), None);
        assert_eq!(lookup("f16"), None);
        assert_eq!(lookup("float32"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("F32"), None);
    }

    #[test]
    fn test_short_name_round_trip() {
        for name in known_names() {
            let et = lookup(name).unwrap();
            assert_eq!(short_name(et), Some(name));
        }
    }

    #[test]
    fn test_native_extras_have_no_short_name() {
        assert_eq!(short_name(ElementType::Bf16), None);
        assert_eq!(short_name(ElementType::F16), None);
        assert_eq!(short_name(ElementType::U64), None);
        assert_eq!(short_name(ElementType::Boolean), None);
    }

    #[test]
    fn test_catalog_has_exactly_nine_entries() {
        assert_eq!(known_names().count(), 9);
    }
}
