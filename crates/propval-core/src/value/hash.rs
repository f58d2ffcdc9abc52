use crate::value::{
    Value,
    numeric::CanonicalNumber,
    view::{ArrayRef, ScalarRef},
};
use std::hash::Hasher;
use xxhash_rust::xxh3::Xxh3;

/// Fingerprint format version byte.
pub(crate) const VALUE_HASH_VERSION: u8 = 1;

/// Stable XXH3 seed used by canonical fingerprints across releases.
pub(crate) const VALUE_HASH_SEED: u64 = 0;

///
/// CanonicalSink
///
/// Byte sink for the canonical encoding; lets fingerprints and `std::hash`
/// share one encoder.
///

trait CanonicalSink {
    fn feed(&mut self, bytes: &[u8]);

    fn feed_u8(&mut self, x: u8) {
        self.feed(&[x]);
    }

    fn feed_u64(&mut self, x: u64) {
        self.feed(&x.to_be_bytes());
    }

    fn feed_i64(&mut self, x: i64) {
        self.feed(&x.to_be_bytes());
    }
}

impl CanonicalSink for Xxh3 {
    fn feed(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

struct StdSink<'a, H: Hasher>(&'a mut H);

impl<H: Hasher> CanonicalSink for StdSink<'_, H> {
    fn feed(&mut self, bytes: &[u8]) {
        self.0.write(bytes);
    }
}

// Canonical byte representation:
// - group byte first, so values from different groups never collide by layout
// - numbers by normal form, so equal magnitudes encode identically across widths
// - text as length-prefixed UTF-8, so `Char('a')` encodes like `Text("a")`
// - arrays as length then 0xFF-separated elements
fn write_value(value: &Value, sink: &mut impl CanonicalSink) {
    sink.feed_u8(value.group().to_u8());

    if let Some(scalar) = ScalarRef::of(value) {
        write_scalar(scalar, sink);
    } else if let Some(array) = ArrayRef::of(value) {
        sink.feed_u64(array.len() as u64);
        for element in array.iter() {
            sink.feed_u8(0xFF);
            write_scalar(element, sink);
        }
    }
}

fn write_scalar(scalar: ScalarRef<'_>, sink: &mut impl CanonicalSink) {
    match scalar {
        ScalarRef::Bool(b) => sink.feed_u8(u8::from(b)),
        ScalarRef::Number(n) => match n.canonical() {
            CanonicalNumber::Int(i) => {
                sink.feed_u8(0x00);
                sink.feed_i64(i);
            }
            CanonicalNumber::Float(bits) => {
                sink.feed_u8(0x01);
                sink.feed_u64(bits);
            }
            CanonicalNumber::NaN => sink.feed_u8(0x02),
        },
        ScalarRef::Text(text) => {
            let mut buf = [0u8; 4];
            let s = text.encode(&mut buf);
            sink.feed_u64(s.len() as u64);
            sink.feed(s.as_bytes());
        }
    }
}

pub(super) fn write_to_std_hasher<H: Hasher>(value: &Value, state: &mut H) {
    write_value(value, &mut StdSink(state));
}

impl Value {
    /// Stable 128-bit fingerprint of the canonical encoding.
    ///
    /// Values equal under `==` always share a fingerprint, whatever their
    /// width or text representation. Suitable for index keys and dedup.
    #[must_use]
    pub fn fingerprint(&self) -> [u8; 16] {
        let mut h = Xxh3::with_seed(VALUE_HASH_SEED);
        h.feed_u8(VALUE_HASH_VERSION);

        write_value(self, &mut h);
        h.digest128().to_be_bytes()
    }
}

///
/// TESTS
///
