//! Host-native input model accepted by the normalization factory.
//!
//! `NativeValue` is what arrives from outside the value library: driver
//! parameters, API payloads, decoded literals. It is wider than
//! the property model, so unsupported host types are representable and can
//! be rejected with their name.


use crate::value::Value;
use std::any::type_name;

///
/// NativeValue
///

#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Char(char),
    String(String),
    Array(NativeArray),
    /// An already canonical value; rejected by the factory.
    Value(Box<Value>),
    /// A host type outside the property model, by type name.
    Unsupported(&'static str),
}

impl NativeValue {
    /// Build the marker for an unsupported host type `T`.
    #[must_use]
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::Unsupported(type_name::<T>())
    }

    /// Host type name, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Char(_) => "char",
            Self::String(_) => "String",
            Self::Array(array) => array.type_name(),
            Self::Value(_) => "Value",
            Self::Unsupported(name) => *name,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

///
/// NativeArray
///
/// Host array with nullable slots. Arrays of non-nullable host elements
/// convert with every slot present.
///

#[derive(Clone, Debug, PartialEq)]
pub enum NativeArray {
    Bool(Vec<Option<bool>>),
    I8(Vec<Option<i8>>),
    I16(Vec<Option<i16>>),
    I32(Vec<Option<i32>>),
    I64(Vec<Option<i64>>),
    F32(Vec<Option<f32>>),
    F64(Vec<Option<f64>>),
    Char(Vec<Option<char>>),
    String(Vec<Option<String>>),
    /// Array of a host element type outside the property model.
    Unsupported(&'static str),
}

impl NativeArray {
    #[must_use]
    pub fn unsupported<T>() -> Self {
        Self::Unsupported(type_name::<T>())
    }

    /// Element type name, used in diagnostics.
    #[must_use]
    pub const fn component_type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Char(_) => "char",
            Self::String(_) => "String",
            Self::Unsupported(name) => *name,
        }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool[]",
            Self::I8(_) => "i8[]",
            Self::I16(_) => "i16[]",
            Self::I32(_) => "i32[]",
            Self::I64(_) => "i64[]",
            Self::F32(_) => "f32[]",
            Self::F64(_) => "f64[]",
            Self::Char(_) => "char[]",
            Self::String(_) => "String[]",
            Self::Unsupported(_) => "array",
        }
    }

    /// Slot count, null slots included.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::I8(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::Char(v) => v.len(),
            Self::String(v) => v.len(),
            Self::Unsupported(_) => 0,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Scalars, arrays of scalars and arrays of nullable scalars for each
// supported host type.
macro_rules! impl_native_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for NativeValue {
                fn from(v: $type) -> Self {
                    Self::$variant(v)
                }
            }

            impl From<Vec<$type>> for NativeValue {
                fn from(v: Vec<$type>) -> Self {
                    Self::Array(NativeArray::$variant(v.into_iter().map(Some).collect()))
                }
            }

            impl From<Vec<Option<$type>>> for NativeValue {
                fn from(v: Vec<Option<$type>>) -> Self {
                    Self::Array(NativeArray::$variant(v))
                }
            }
        )*
    };
}

impl_native_from! {
    bool   => Bool,
    i8     => I8,
    i16    => I16,
    i32    => I32,
    i64    => I64,
    f32    => F32,
    f64    => F64,
    char   => Char,
    String => String,
}

// Host types with no property representation.
macro_rules! impl_native_unsupported {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl From<$type> for NativeValue {
                fn from(_: $type) -> Self {
                    Self::unsupported::<$type>()
                }
            }

            impl From<Vec<$type>> for NativeValue {
                fn from(_: Vec<$type>) -> Self {
                    Self::Array(NativeArray::unsupported::<$type>())
                }
            }
        )*
    };
}

impl_native_unsupported!(u8, u16, u32, u64, u128, usize, i128, isize, ());

impl From<&str> for NativeValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<&str>> for NativeValue {
    fn from(v: Vec<&str>) -> Self {
        Self::Array(NativeArray::String(
            v.into_iter().map(|s| Some(s.to_string())).collect(),
        ))
    }
}

impl From<NativeArray> for NativeValue {
    fn from(v: NativeArray) -> Self {
        Self::Array(v)
    }
}

impl From<Value> for NativeValue {
    fn from(v: Value) -> Self {
        Self::Value(Box::new(v))
    }
}

impl<T> From<Option<T>> for NativeValue
where
    T: Into<Self>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Value {
    /// Project back to the nearest native form.
    ///
    /// Array payloads are copied into a fresh buffer; the value is untouched.
    /// `NoValue` projects to `Null`.
    #[must_use]
    pub fn as_native(&self) -> NativeValue {
        fn slots<T: Clone>(values: &[T]) -> Vec<Option<T>> {
            values.iter().cloned().map(Some).collect()
        }

        match self {
            Self::NoValue => NativeValue::Null,
            Self::Bool(v) => NativeValue::Bool(*v),
            Self::Int8(v) => NativeValue::I8(*v),
            Self::Int16(v) => NativeValue::I16(*v),
            Self::Int32(v) => NativeValue::I32(*v),
            Self::Int64(v) => NativeValue::I64(*v),
            Self::Float32(v) => NativeValue::F32(*v),
            Self::Float64(v) => NativeValue::F64(*v),
            Self::Char(v) => NativeValue::Char(*v),
            Self::Text(v) => NativeValue::String(v.clone()),
            Self::BoolArray(v) => NativeArray::Bool(slots(v)).into(),
            Self::Int8Array(v) => NativeArray::I8(slots(v)).into(),
            Self::Int16Array(v) => NativeArray::I16(slots(v)).into(),
            Self::Int32Array(v) => NativeArray::I32(slots(v)).into(),
            Self::Int64Array(v) => NativeArray::I64(slots(v)).into(),
            Self::Float32Array(v) => NativeArray::F32(slots(v)).into(),
            Self::Float64Array(v) => NativeArray::F64(slots(v)).into(),
            Self::CharArray(v) => NativeArray::Char(slots(v)).into(),
            Self::TextArray(v) => NativeArray::String(slots(v)).into(),
        }
    }
}
