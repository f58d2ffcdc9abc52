mod bounds;
mod compare;
mod group;
mod hash;
mod numeric;
mod view;


use crate::error::ValueError;
use numeric::Number;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use view::ArrayRef;

// re-exports
pub use bounds::{MAX_NUMBER, MAX_STRING, MIN_NUMBER, MIN_STRING, NO_VALUE};
pub use compare::{COMPARATOR, GroupOrder, ValueComparator};
pub use propval_primitives::{ScalarKind, ValueGroup};

///
/// Value
///
/// Canonical storable value: one case per supported representation.
///
/// NoValue     → the property is absent; distinct from `""` and `[]`.
/// *Array      → fixed-length payload owned outright by the value.
///
/// Equality, hashing and ordering are magnitude based inside a group:
/// `Int8(1) == Int64(1) == Float64(1.0)` and `Char('a') == Text("a")`.
/// Values from different groups are never equal.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub enum Value {
    #[default]
    NoValue,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Char(char),
    Text(String),
    BoolArray(Vec<bool>),
    Int8Array(Vec<i8>),
    Int16Array(Vec<i16>),
    Int32Array(Vec<i32>),
    Int64Array(Vec<i64>),
    Float32Array(Vec<f32>),
    Float64Array(Vec<f64>),
    CharArray(Vec<char>),
    TextArray(Vec<String>),
}

// Expands one direct scalar constructor per kind.
macro_rules! scalar_constructors {
    ( $( $fn_name:ident($ty:ty) => $variant:ident ),* $(,)? ) => {
        $(
            #[must_use]
            pub const fn $fn_name(value: $ty) -> Self {
                Self::$variant(value)
            }
        )*
    };
}

// Expands one direct (non-copying) array constructor per kind.
macro_rules! array_constructors {
    ( $( $fn_name:ident($ty:ty) => $variant:ident ),* $(,)? ) => {
        $(
            /// Wrap `values` without copying.
            ///
            /// The buffer is moved into the value; its allocation is reused.
            #[must_use]
            pub const fn $fn_name(values: Vec<$ty>) -> Self {
                Self::$variant(values)
            }
        )*
    };
}

// Expands one borrowed slice accessor per array case.
macro_rules! array_accessors {
    ( $( $fn_name:ident($ty:ty) => $variant:ident ),* $(,)? ) => {
        $(
            #[must_use]
            pub const fn $fn_name(&self) -> Option<&[$ty]> {
                if let Self::$variant(values) = self {
                    Some(values.as_slice())
                } else {
                    None
                }
            }
        )*
    };
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    scalar_constructors! {
        bool(bool) => Bool,
        int8(i8) => Int8,
        int16(i16) => Int16,
        int32(i32) => Int32,
        int64(i64) => Int64,
        float32(f32) => Float32,
        float64(f64) => Float64,
        char(char) => Char,
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    array_constructors! {
        bool_array(bool) => BoolArray,
        int8_array(i8) => Int8Array,
        int16_array(i16) => Int16Array,
        int32_array(i32) => Int32Array,
        int64_array(i64) => Int64Array,
        float32_array(f32) => Float32Array,
        float64_array(f64) => Float64Array,
        char_array(char) => CharArray,
        text_array(String) => TextArray,
    }

    ///
    /// TYPES
    ///

    /// Comparability group; the primary key of the total order.
    #[must_use]
    pub const fn group(&self) -> ValueGroup {
        group::value_group(self)
    }

    /// Scalar kind of the payload, or of the elements for arrays.
    #[must_use]
    pub const fn scalar_kind(&self) -> Option<ScalarKind> {
        group::scalar_kind(self)
    }

    /// Stable label of the concrete representation, e.g. `i32` or `i32[]`.
    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        match self {
            Self::NoValue => "NoValue",
            Self::Bool(_) => "bool",
            Self::Int8(_) => "i8",
            Self::Int16(_) => "i16",
            Self::Int32(_) => "i32",
            Self::Int64(_) => "i64",
            Self::Float32(_) => "f32",
            Self::Float64(_) => "f64",
            Self::Char(_) => "char",
            Self::Text(_) => "String",
            Self::BoolArray(_) => "bool[]",
            Self::Int8Array(_) => "i8[]",
            Self::Int16Array(_) => "i16[]",
            Self::Int32Array(_) => "i32[]",
            Self::Int64Array(_) => "i64[]",
            Self::Float32Array(_) => "f32[]",
            Self::Float64Array(_) => "f64[]",
            Self::CharArray(_) => "char[]",
            Self::TextArray(_) => "String[]",
        }
    }

    #[must_use]
    pub const fn is_no_value(&self) -> bool {
        matches!(self, Self::NoValue)
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.group().is_array()
    }

    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self.group(), ValueGroup::Number)
    }

    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns true for `Text` and `Char`.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self.group(), ValueGroup::Text)
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    array_accessors! {
        as_bool_array(bool) => BoolArray,
        as_int8_array(i8) => Int8Array,
        as_int16_array(i16) => Int16Array,
        as_int32_array(i32) => Int32Array,
        as_int64_array(i64) => Int64Array,
        as_float32_array(f32) => Float32Array,
        as_float64_array(f64) => Float64Array,
        as_char_array(char) => CharArray,
        as_text_array(String) => TextArray,
    }

    /// Element count for array values.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        ArrayRef::of(self).map(ArrayRef::len)
    }

    /// Widen a numeric value to `f64`.
    ///
    /// Integral values above 2^53 round to the nearest representable double.
    #[expect(clippy::cast_precision_loss)]
    pub fn coerce_to_f64(&self) -> Result<f64, ValueError> {
        match Number::of(self) {
            Some(Number::Int(i)) => Ok(i as f64),
            Some(Number::Float(f)) => Ok(f),
            None => Err(ValueError::UnsupportedCoercion {
                kind: self.type_label(),
            }),
        }
    }

    ///
    /// ORDERING
    ///

    /// Total order under the default group sequence.
    #[must_use]
    pub fn canonical_cmp(left: &Self, right: &Self) -> Ordering {
        COMPARATOR.compare(left, right)
    }
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for $crate::value::Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool        => Bool,
    i8          => Int8,
    i16         => Int16,
    i32         => Int32,
    i64         => Int64,
    f32         => Float32,
    f64         => Float64,
    char        => Char,
    &str        => Text,
    String      => Text,
    Vec<bool>   => BoolArray,
    Vec<i8>     => Int8Array,
    Vec<i16>    => Int16Array,
    Vec<i32>    => Int32Array,
    Vec<i64>    => Int64Array,
    Vec<f32>    => Float32Array,
    Vec<f64>    => Float64Array,
    Vec<char>   => CharArray,
    Vec<String> => TextArray,
}

impl Eq for Value {}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.group() == other.group() && compare::cmp_same_group(self, other) == Ordering::Equal
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash::write_to_std_hasher(self, state);
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::canonical_cmp(self, other)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
