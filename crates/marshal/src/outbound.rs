//! Outbound conversion: native value -> runtime value.

use crate::catalog;
use crate::error::{MarshalError, Result};
use tensorlink_core::ElementType;
use tensorlink_runtime::{CallContext, Value};

/// Convert a native element type back into a runtime string value.
///
/// Total over the catalog's domain: every short name the inbound path
/// accepts comes back out unchanged. Native kinds outside the catalog
/// (f16, bf16, u64, boolean) are an [`MarshalError::UnsupportedNativeType`],
/// never silently stringified.
pub fn element_type_to_value(ctx: &CallContext, element_type: ElementType) -> Result<Value> {
    match catalog::short_name(element_type) {
        Some(name) => Ok(ctx.new_string(name)),
        None => Err(MarshalError::UnsupportedNativeType(
            element_type.name().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::Acceptable;
    use crate::inbound::convert_arg;
    use tensorlink_runtime::ValueKind;

    #[test]
    fn test_catalog_members_convert() {
        let ctx = CallContext::new(vec![]);
        let v = element_type_to_value(&ctx, ElementType::F32).unwrap();
        assert_eq!(v, Value::from("f32"));
    }

    #[test]
    fn test_native_extras_are_unsupported() {
        let ctx = CallContext::new(vec![]);
        for et in [
            ElementType::F16,
            ElementType::Bf16,
            ElementType::U64,
            ElementType::Boolean,
        ] {
            let err = element_type_to_value(&ctx, et).unwrap_err();
            assert!(
                matches!(err, MarshalError::UnsupportedNativeType(_)),
                "{}",
                et
            );
        }
    }

    #[test]
    fn test_lookup_then_convert_is_identity_on_short_names() {
        for name in crate::catalog::known_names() {
            let et = crate::catalog::lookup(name).unwrap();
            let ctx = CallContext::new(vec![Value::from(name)]);
            let v = element_type_to_value(&ctx, et).unwrap();
            assert_eq!(v.as_str(), Some(name));

            // And the other direction: inbound over the produced string
            // lands back on the same element type.
            let round: ElementType =
                convert_arg(&ctx, 0, &Acceptable::kind(ValueKind::String)).unwrap();
            assert_eq!(round, et);
        }
    }
}
