//! Borrowed, allocation-free views over value payloads.
//!
//! Comparison and hashing work on these views so that every numeric width
//! and both text representations go through one code path.

use crate::value::{Value, ValueGroup, numeric::Number};

///
/// TextRef
///

#[derive(Clone, Copy, Debug)]
pub(crate) enum TextRef<'a> {
    Char(char),
    Str(&'a str),
}

impl<'a> TextRef<'a> {
    /// Borrow the text as `&str`, encoding a `char` into `buf`.
    pub(crate) fn encode<'b>(self, buf: &'b mut [u8; 4]) -> &'b str
    where
        'a: 'b,
    {
        match self {
            Self::Char(c) => &*c.encode_utf8(buf),
            Self::Str(s) => s,
        }
    }
}

///
/// ScalarRef
///

#[derive(Clone, Copy, Debug)]
pub(crate) enum ScalarRef<'a> {
    Bool(bool),
    Number(Number),
    Text(TextRef<'a>),
}

impl<'a> ScalarRef<'a> {
    pub(crate) fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Char(c) => Some(Self::Text(TextRef::Char(*c))),
            Value::Text(s) => Some(Self::Text(TextRef::Str(s))),
            other => Number::of(other).map(Self::Number),
        }
    }

    pub(crate) const fn group(self) -> ValueGroup {
        match self {
            Self::Bool(_) => ValueGroup::Boolean,
            Self::Number(_) => ValueGroup::Number,
            Self::Text(_) => ValueGroup::Text,
        }
    }
}

///
/// ArrayRef
///

#[derive(Clone, Copy, Debug)]
pub(crate) enum ArrayRef<'a> {
    Bool(&'a [bool]),
    Int8(&'a [i8]),
    Int16(&'a [i16]),
    Int32(&'a [i32]),
    Int64(&'a [i64]),
    Float32(&'a [f32]),
    Float64(&'a [f64]),
    Char(&'a [char]),
    Text(&'a [String]),
}

impl<'a> ArrayRef<'a> {
    pub(crate) fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::BoolArray(v) => Some(Self::Bool(v)),
            Value::Int8Array(v) => Some(Self::Int8(v)),
            Value::Int16Array(v) => Some(Self::Int16(v)),
            Value::Int32Array(v) => Some(Self::Int32(v)),
            Value::Int64Array(v) => Some(Self::Int64(v)),
            Value::Float32Array(v) => Some(Self::Float32(v)),
            Value::Float64Array(v) => Some(Self::Float64(v)),
            Value::CharArray(v) => Some(Self::Char(v)),
            Value::TextArray(v) => Some(Self::Text(v)),
            _ => None,
        }
    }

    pub(crate) const fn len(self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::Int8(v) => v.len(),
            Self::Int16(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::Char(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub(crate) fn get(self, index: usize) -> Option<ScalarRef<'a>> {
        match self {
            Self::Bool(v) => v.get(index).map(|b| ScalarRef::Bool(*b)),
            Self::Int8(v) => v.get(index).map(|n| int(i64::from(*n))),
            Self::Int16(v) => v.get(index).map(|n| int(i64::from(*n))),
            Self::Int32(v) => v.get(index).map(|n| int(i64::from(*n))),
            Self::Int64(v) => v.get(index).map(|n| int(*n)),
            Self::Float32(v) => v.get(index).map(|n| float(f64::from(*n))),
            Self::Float64(v) => v.get(index).map(|n| float(*n)),
            Self::Char(v) => v.get(index).map(|c| ScalarRef::Text(TextRef::Char(*c))),
            Self::Text(v) => v
                .get(index)
                .map(|s| ScalarRef::Text(TextRef::Str(s.as_str()))),
        }
    }

    pub(crate) fn iter(self) -> impl Iterator<Item = ScalarRef<'a>> {
        (0..self.len()).filter_map(move |index| self.get(index))
    }
}

const fn int(n: i64) -> ScalarRef<'static> {
    ScalarRef::Number(Number::Int(n))
}

const fn float(n: f64) -> ScalarRef<'static> {
    ScalarRef::Number(Number::Float(n))
}
