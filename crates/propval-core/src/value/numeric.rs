use crate::value::Value;
use std::cmp::Ordering;

///
/// CONSTANTS
///

/// 2^63 as a double; the first float above every `i64`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

///
/// Number
///
/// Common comparison domain for every numeric width. Integral widths widen to
/// `i64` and floating widths to `f64`; both widenings are exact.
///

#[derive(Clone, Copy, Debug)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

///
/// CanonicalNumber
///
/// Hash-stable normal form: equal numbers normalize to the same case.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CanonicalNumber {
    Int(i64),
    Float(u64),
    NaN,
}

impl Number {
    pub(crate) fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Int8(v) => Some(Self::Int(i64::from(*v))),
            Value::Int16(v) => Some(Self::Int(i64::from(*v))),
            Value::Int32(v) => Some(Self::Int(i64::from(*v))),
            Value::Int64(v) => Some(Self::Int(*v)),
            Value::Float32(v) => Some(Self::Float(f64::from(*v))),
            Value::Float64(v) => Some(Self::Float(*v)),
            _ => None,
        }
    }

    /// Total order by mathematical value.
    ///
    /// NaN sorts above positive infinity and equals every other NaN;
    /// `-0.0` equals `0.0`.
    pub(crate) fn total_cmp(self, other: Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(&b),
            (Self::Float(a), Self::Float(b)) => cmp_float(a, b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).reverse(),
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn canonical(self) -> CanonicalNumber {
        match self {
            Self::Int(i) => CanonicalNumber::Int(i),
            Self::Float(f) if f.is_nan() => CanonicalNumber::NaN,
            // in range and integral, so the cast is exact
            Self::Float(f) if f.trunc() == f && (-TWO_POW_63..TWO_POW_63).contains(&f) => {
                CanonicalNumber::Int(f as i64)
            }
            Self::Float(f) => CanonicalNumber::Float(f.to_bits()),
        }
    }
}

fn cmp_float(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

// Exact i64/f64 comparison: compare the integer part in the i64 domain, then
// let the fractional remainder break the tie.
#[expect(clippy::cast_possible_truncation)]
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() || f >= TWO_POW_63 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    i.cmp(&(whole as i64)).then_with(|| cmp_float(whole, f))
}

///
/// TESTS
///
