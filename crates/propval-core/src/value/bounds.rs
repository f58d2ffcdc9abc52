//! Absence sentinel and exclusive range-scan boundaries.
//!
//! The boundaries are ordinary values picked for where they sort. A caller
//! that stores one of them as data gets exactly that value back; nothing
//! guards against the coincidence.

use crate::value::Value;

/// The property is absent. Sorts below every other value.
pub static NO_VALUE: Value = Value::NoValue;

/// Sorts at or below every number.
pub static MIN_NUMBER: Value = Value::Float64(f64::NEG_INFINITY);

/// NaN: sorts at or above every number, including infinity.
pub static MAX_NUMBER: Value = Value::Float64(f64::NAN);

/// The empty string: sorts at or below every text value.
pub static MIN_STRING: Value = Value::Text(String::new());

/// First value of the group after `Text`; sorts above every text value.
pub static MAX_STRING: Value = Value::Bool(false);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueGroup;

    #[test]
    fn number_bounds_enclose_every_number() {
        let numbers = [
            Value::Int8(i8::MIN),
            Value::Int64(i64::MIN),
            Value::Int64(i64::MAX),
            Value::Float32(f32::MAX),
            Value::Float64(f64::INFINITY),
            Value::Float64(-0.0),
            Value::Float64(f64::MIN_POSITIVE),
        ];

        for number in &numbers {
            assert!(&MIN_NUMBER < number, "number: {number:?}");
            assert!(&MAX_NUMBER > number, "number: {number:?}");
        }
    }

    #[test]
    fn max_string_is_the_smallest_value_after_text() {
        assert_eq!(MAX_STRING.group(), ValueGroup::Boolean);
        assert!(MAX_STRING > Value::text("\u{10FFFF}\u{10FFFF}"));
        assert!(MAX_STRING > Value::Char(char::MAX));
        assert!(MAX_STRING <= Value::Bool(false));
        assert!(MAX_STRING < Value::Bool(true));
    }

    #[test]
    fn min_string_is_the_smallest_text() {
        assert!(MIN_STRING <= Value::text(""));
        assert!(MIN_STRING < Value::Char('\0'));
        assert!(MIN_STRING > NO_VALUE);
    }

    #[test]
    fn no_value_is_distinct_from_empty_payloads() {
        assert_ne!(NO_VALUE, Value::text(""));
        assert_ne!(NO_VALUE, Value::BoolArray(Vec::new()));
        assert_ne!(NO_VALUE, Value::TextArray(Vec::new()));
        assert_eq!(NO_VALUE, Value::NoValue);
    }
}
