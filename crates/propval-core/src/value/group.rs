use crate::value::{ScalarKind, Value, ValueGroup};

///
/// Canonical Value Group
///
/// Group used as the primary key of cross-variant ordering.
/// Arrays resolve through the array group of their element kind.
///
#[must_use]
pub(super) const fn value_group(value: &Value) -> ValueGroup {
    match scalar_kind(value) {
        None => ValueGroup::NoValue,
        Some(kind) if is_array_repr(value) => kind.array_group(),
        Some(kind) => kind.group(),
    }
}

/// Scalar kind backing a value; element kind for arrays.
#[must_use]
pub(super) const fn scalar_kind(value: &Value) -> Option<ScalarKind> {
    match value {
        Value::NoValue => None,
        Value::Bool(_) | Value::BoolArray(_) => Some(ScalarKind::Bool),
        Value::Int8(_) | Value::Int8Array(_) => Some(ScalarKind::Int8),
        Value::Int16(_) | Value::Int16Array(_) => Some(ScalarKind::Int16),
        Value::Int32(_) | Value::Int32Array(_) => Some(ScalarKind::Int32),
        Value::Int64(_) | Value::Int64Array(_) => Some(ScalarKind::Int64),
        Value::Float32(_) | Value::Float32Array(_) => Some(ScalarKind::Float32),
        Value::Float64(_) | Value::Float64Array(_) => Some(ScalarKind::Float64),
        Value::Char(_) | Value::CharArray(_) => Some(ScalarKind::Char),
        Value::Text(_) | Value::TextArray(_) => Some(ScalarKind::Text),
    }
}

const fn is_array_repr(value: &Value) -> bool {
    matches!(
        value,
        Value::BoolArray(_)
            | Value::Int8Array(_)
            | Value::Int16Array(_)
            | Value::Int32Array(_)
            | Value::Int64Array(_)
            | Value::Float32Array(_)
            | Value::Float64Array(_)
            | Value::CharArray(_)
            | Value::TextArray(_)
    )
}
