//! Normalization factory: native input → canonical `Value`.
//!
//! Two construction paths exist:
//! - `Value::*_array(Vec<_>)` moves a buffer the caller already owns into the
//!   value without copying (storage hot paths).
//! - `of` / `of_with` / `values` borrow untrusted native input and always copy
//!   array payloads, so the caller keeps full use of its buffers.
//!
//! Every function here is pure; nothing is cached between calls.

#[cfg(test)]
mod tests;

use crate::{
    error::ValueError,
    native::{NativeArray, NativeValue},
    value::Value,
};

///
/// NullPolicy
///
/// Whether a native null may become `Value::NoValue`.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NullPolicy {
    #[default]
    Allow,
    Reject,
}

/// Convert one native value, mapping null to `NoValue`.
///
/// Array payloads are copied.
pub fn of(native: &NativeValue) -> Result<Value, ValueError> {
    of_with(native, NullPolicy::Allow)
}

/// Convert one native value under an explicit null policy.
pub fn of_with(native: &NativeValue, nulls: NullPolicy) -> Result<Value, ValueError> {
    convert(native, nulls).inspect_err(|err| {
        tracing::debug!(
            error = err.kind(),
            native_type = native.type_name(),
            "rejected native value: {err}"
        );
    })
}

/// Convert a batch of native values, preserving order.
///
/// All-or-nothing: the first failing element aborts the batch and no
/// partial result is returned.
pub fn values(natives: &[NativeValue]) -> Result<Vec<Value>, ValueError> {
    natives
        .iter()
        .enumerate()
        .map(|(index, native)| {
            of(native).inspect_err(|_| {
                tracing::debug!(index, len = natives.len(), "batch conversion aborted");
            })
        })
        .collect()
}

/// Project a batch of values back to native form; arrays are copied.
#[must_use]
pub fn as_natives(values: &[Value]) -> Vec<NativeValue> {
    values.iter().map(Value::as_native).collect()
}

/// Convert a native number; null maps to `NoValue`.
///
/// Non-numeric input fails with `UnsupportedType`.
pub fn number_value(native: &NativeValue) -> Result<Value, ValueError> {
    match native {
        NativeValue::Null
        | NativeValue::I8(_)
        | NativeValue::I16(_)
        | NativeValue::I32(_)
        | NativeValue::I64(_)
        | NativeValue::F32(_)
        | NativeValue::F64(_) => of(native),
        other => Err(ValueError::UnsupportedType {
            type_name: other.type_name(),
        }),
    }
}

/// Text for `Some`, `NoValue` for `None`.
#[must_use]
pub fn string_or_no_value(text: Option<&str>) -> Value {
    text.map_or(Value::NoValue, Value::text)
}

fn convert(native: &NativeValue, nulls: NullPolicy) -> Result<Value, ValueError> {
    match native {
        NativeValue::Null => match nulls {
            NullPolicy::Allow => Ok(Value::NoValue),
            NullPolicy::Reject => Err(ValueError::NullNotAllowed),
        },
        NativeValue::Bool(v) => Ok(Value::bool(*v)),
        NativeValue::I8(v) => Ok(Value::int8(*v)),
        NativeValue::I16(v) => Ok(Value::int16(*v)),
        NativeValue::I32(v) => Ok(Value::int32(*v)),
        NativeValue::I64(v) => Ok(Value::int64(*v)),
        NativeValue::F32(v) => Ok(Value::float32(*v)),
        NativeValue::F64(v) => Ok(Value::float64(*v)),
        NativeValue::Char(v) => Ok(Value::char(*v)),
        NativeValue::String(v) => Ok(Value::text(v.as_str())),
        NativeValue::Array(array) => array_value(array),
        NativeValue::Value(_) => Err(ValueError::DoubleWrapping),
        NativeValue::Unsupported(type_name) => Err(ValueError::UnsupportedType {
            type_name: *type_name,
        }),
    }
}

fn array_value(array: &NativeArray) -> Result<Value, ValueError> {
    match array {
        NativeArray::Bool(slots) => copy_slots(slots).map(Value::bool_array),
        NativeArray::I8(slots) => copy_slots(slots).map(Value::int8_array),
        NativeArray::I16(slots) => copy_slots(slots).map(Value::int16_array),
        NativeArray::I32(slots) => copy_slots(slots).map(Value::int32_array),
        NativeArray::I64(slots) => copy_slots(slots).map(Value::int64_array),
        NativeArray::F32(slots) => copy_slots(slots).map(Value::float32_array),
        NativeArray::F64(slots) => copy_slots(slots).map(Value::float64_array),
        NativeArray::Char(slots) => copy_slots(slots).map(Value::char_array),
        NativeArray::String(slots) => copy_slots(slots).map(Value::text_array),
        NativeArray::Unsupported(component) => Err(ValueError::UnsupportedArrayComponentType {
            component: *component,
        }),
    }
}

// Copy every slot into a fresh buffer; one null slot fails the whole array.
fn copy_slots<T: Clone>(slots: &[Option<T>]) -> Result<Vec<T>, ValueError> {
    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.as_ref()
                .cloned()
                .ok_or(ValueError::NullArrayElement { index })
        })
        .collect()
}
