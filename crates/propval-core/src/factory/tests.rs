use crate::{
    error::ValueError,
    factory::{NullPolicy, as_natives, number_value, of, of_with, string_or_no_value, values},
    native::{NativeArray, NativeValue},
    value::Value,
};

// ---- single conversions ------------------------------------------------

#[test]
fn scalars_convert_to_matching_variants() {
    let cases = [
        (NativeValue::from(true), Value::bool(true)),
        (NativeValue::from(1i8), Value::int8(1)),
        (NativeValue::from(1i16), Value::int16(1)),
        (NativeValue::from(1i32), Value::int32(1)),
        (NativeValue::from(1i64), Value::int64(1)),
        (NativeValue::from(1.5f32), Value::float32(1.5)),
        (NativeValue::from(1.5f64), Value::float64(1.5)),
        (NativeValue::from('x'), Value::char('x')),
        (NativeValue::from("hi"), Value::text("hi")),
    ];

    for (native, expected) in cases {
        let value = of(&native).expect("supported scalar");

        assert_eq!(value, expected, "native: {native:?}");
        assert_eq!(value.type_label(), expected.type_label(), "native: {native:?}");
    }
}

#[test]
fn boolean_arrays_convert_without_nulls() {
    let value = of(&NativeValue::from(vec![true, false])).expect("bool array");

    assert_eq!(value, Value::bool_array(vec![true, false]));
    assert_ne!(value, Value::bool_array(vec![false, true]));
    assert_ne!(value, Value::bool_array(vec![true, false, true]));
}

#[test]
fn converted_arrays_own_an_independent_buffer() {
    let mut source = vec![Some(1), Some(2), Some(3), Some(4), Some(5)];
    let value = of(&NativeValue::from(source.clone())).expect("i32 array");

    source[0] = Some(100);

    assert_eq!(value, Value::int32_array(vec![1, 2, 3, 4, 5]));
    assert_eq!(value.array_len(), Some(5));
}

#[test]
fn converting_the_same_native_twice_gives_distinct_buffers() {
    let native = NativeValue::from(vec![1.0f64, 2.0]);

    let first = of(&native).expect("first conversion");
    let second = of(&native).expect("second conversion");

    assert_eq!(first, second);
    assert_ne!(
        first.as_float64_array().map(<[f64]>::as_ptr),
        second.as_float64_array().map(<[f64]>::as_ptr)
    );
}

#[test]
fn empty_arrays_convert() {
    let empty: Vec<String> = Vec::new();
    let value = of(&NativeValue::from(empty)).expect("empty text array");

    assert_eq!(value, Value::text_array(vec![]));
    assert_eq!(value.array_len(), Some(0));
}

// ---- nulls -------------------------------------------------------------

#[test]
fn null_follows_the_null_policy() {
    assert_eq!(of(&NativeValue::Null), Ok(Value::NoValue));
    assert_eq!(of_with(&NativeValue::Null, NullPolicy::Allow), Ok(Value::NoValue));
    assert_eq!(
        of_with(&NativeValue::Null, NullPolicy::Reject),
        Err(ValueError::NullNotAllowed)
    );
    assert_eq!(NullPolicy::default(), NullPolicy::Allow);
}

#[test]
fn reject_policy_still_converts_non_null_input() {
    assert_eq!(
        of_with(&NativeValue::from(3i64), NullPolicy::Reject),
        Ok(Value::int64(3))
    );
}

#[test]
fn null_array_element_fails_the_whole_array() {
    let native = NativeValue::from(vec![Some("a".to_string()), None, Some("c".to_string())]);

    assert_eq!(of(&native), Err(ValueError::NullArrayElement { index: 1 }));
    assert_eq!(
        of_with(&native, NullPolicy::Allow),
        Err(ValueError::NullArrayElement { index: 1 })
    );
}

// ---- rejected input ----------------------------------------------------

#[test]
fn already_canonical_values_are_rejected() {
    let native = NativeValue::from(Value::int32(1));

    assert_eq!(of(&native), Err(ValueError::DoubleWrapping));
}

#[test]
fn unsupported_types_are_named_in_the_error() {
    assert_eq!(
        of(&NativeValue::from(5u64)),
        Err(ValueError::UnsupportedType { type_name: "u64" })
    );
    assert_eq!(
        of(&NativeValue::from(vec![1u16])),
        Err(ValueError::UnsupportedArrayComponentType { component: "u16" })
    );
    assert_eq!(
        of(&NativeArray::unsupported::<u128>().into()),
        Err(ValueError::UnsupportedArrayComponentType { component: "u128" })
    );
}

// ---- batches -----------------------------------------------------------

#[test]
fn batch_preserves_order() {
    let natives = [
        NativeValue::from("a"),
        NativeValue::Null,
        NativeValue::from(vec![1i8]),
        NativeValue::from(2.0f32),
    ];

    assert_eq!(
        values(&natives),
        Ok(vec![
            Value::text("a"),
            Value::NoValue,
            Value::int8_array(vec![1]),
            Value::float32(2.0),
        ])
    );
}

#[test]
fn batch_is_all_or_nothing() {
    let natives = [
        NativeValue::from(1i32),
        NativeValue::from(Value::bool(true)),
        NativeValue::from(9u8),
    ];

    assert_eq!(values(&natives), Err(ValueError::DoubleWrapping));
}

#[test]
fn empty_batch_is_empty() {
    assert_eq!(values(&[]), Ok(vec![]));
}

#[test]
fn as_natives_reverses_a_batch() {
    let natives = vec![
        NativeValue::from(1i16),
        NativeValue::Null,
        NativeValue::from(vec!['a', 'b']),
    ];
    let converted = values(&natives).expect("supported batch");

    assert_eq!(as_natives(&converted), natives);
}

// ---- helpers -----------------------------------------------------------

#[test]
fn number_value_accepts_numbers_and_null_only() {
    assert_eq!(number_value(&NativeValue::from(4i8)), Ok(Value::int8(4)));
    assert_eq!(
        number_value(&NativeValue::from(0.25f64)),
        Ok(Value::float64(0.25))
    );
    assert_eq!(number_value(&NativeValue::Null), Ok(Value::NoValue));
    assert_eq!(
        number_value(&NativeValue::from("4")),
        Err(ValueError::UnsupportedType { type_name: "String" })
    );
    assert_eq!(
        number_value(&NativeValue::from(vec![4i32])),
        Err(ValueError::UnsupportedType { type_name: "i32[]" })
    );
}

#[test]
fn string_or_no_value_maps_none_to_the_sentinel() {
    assert_eq!(string_or_no_value(Some("x")), Value::text("x"));
    assert_eq!(string_or_no_value(Some("")), Value::text(""));
    assert!(string_or_no_value(None).is_no_value());
}
