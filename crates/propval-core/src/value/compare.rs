use crate::value::{
    Value, ValueGroup,
    view::{ArrayRef, ScalarRef, TextRef},
};
use std::cmp::Ordering;

/// Cross-group ordering policy.
///
/// Must be a total order over `ValueGroup`; ties between distinct groups fall
/// back to declaration order.
pub type GroupOrder = fn(ValueGroup, ValueGroup) -> Ordering;

/// Default comparator: groups in `ValueGroup` declaration order.
pub static COMPARATOR: ValueComparator = ValueComparator::new(declared_group_order);

///
/// ValueComparator
///
/// Total order over all values.
///
/// Ordering rules:
/// 1. Value group, under the injected group order
/// 2. Group-specific comparison for values of the same group
///
/// Stateless and allocation-free; share it freely across threads.
///

#[derive(Clone, Copy, Debug)]
pub struct ValueComparator {
    group_order: GroupOrder,
}

impl ValueComparator {
    #[must_use]
    pub const fn new(group_order: GroupOrder) -> Self {
        Self { group_order }
    }

    #[must_use]
    pub fn compare(&self, left: &Value, right: &Value) -> Ordering {
        let (left_group, right_group) = (left.group(), right.group());
        if left_group != right_group {
            return (self.group_order)(left_group, right_group)
                .then_with(|| left_group.cmp(&right_group));
        }

        cmp_same_group(left, right)
    }
}

impl Default for ValueComparator {
    fn default() -> Self {
        COMPARATOR
    }
}

fn declared_group_order(left: ValueGroup, right: ValueGroup) -> Ordering {
    left.cmp(&right)
}

/// Intra-group comparison. Callers must ensure both values share a group.
pub(super) fn cmp_same_group(left: &Value, right: &Value) -> Ordering {
    if let (Some(left), Some(right)) = (ScalarRef::of(left), ScalarRef::of(right)) {
        return cmp_scalar(left, right);
    }

    match (ArrayRef::of(left), ArrayRef::of(right)) {
        (Some(left), Some(right)) => cmp_array(left, right),
        // NoValue is equal only to itself
        _ => Ordering::Equal,
    }
}

fn cmp_scalar(left: ScalarRef<'_>, right: ScalarRef<'_>) -> Ordering {
    match (left, right) {
        (ScalarRef::Bool(a), ScalarRef::Bool(b)) => a.cmp(&b),
        (ScalarRef::Number(a), ScalarRef::Number(b)) => a.total_cmp(b),
        (ScalarRef::Text(a), ScalarRef::Text(b)) => cmp_text(a, b),
        (a, b) => a.group().cmp(&b.group()),
    }
}

// UTF-8 byte order is code-point order.
fn cmp_text(left: TextRef<'_>, right: TextRef<'_>) -> Ordering {
    let (mut left_buf, mut right_buf) = ([0u8; 4], [0u8; 4]);

    left.encode(&mut left_buf).cmp(right.encode(&mut right_buf))
}

fn cmp_array(left: ArrayRef<'_>, right: ArrayRef<'_>) -> Ordering {
    for (left, right) in left.iter().zip(right.iter()) {
        let cmp = cmp_scalar(left, right);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn reversed_group_order(left: ValueGroup, right: ValueGroup) -> Ordering {
        right.cmp(&left)
    }

    #[test]
    fn injected_group_order_replaces_declared_order() {
        let reversed = ValueComparator::new(reversed_group_order);
        let number = Value::Int32(1);
        let text = Value::text("a");

        assert_eq!(COMPARATOR.compare(&text, &number), Ordering::Less);
        assert_eq!(reversed.compare(&text, &number), Ordering::Greater);
    }

    #[test]
    fn injected_group_order_does_not_change_intra_group_rules() {
        let reversed = ValueComparator::new(reversed_group_order);

        assert_eq!(
            reversed.compare(&Value::Int8(1), &Value::Float64(1.5)),
            Ordering::Less
        );
        assert_eq!(
            reversed.compare(&Value::text("b"), &Value::Char('a')),
            Ordering::Greater
        );
    }

    #[test]
    fn degenerate_group_order_still_separates_groups() {
        let flat = ValueComparator::new(|_, _| Ordering::Equal);

        assert_eq!(
            flat.compare(&Value::NoValue, &Value::Bool(false)),
            Ordering::Less
        );
    }

    #[test]
    fn char_compares_as_one_character_string() {
        assert_eq!(
            cmp_same_group(&Value::Char('b'), &Value::text("ab")),
            Ordering::Greater
        );
        assert_eq!(
            cmp_same_group(&Value::Char('a'), &Value::text("ab")),
            Ordering::Less
        );
        assert_eq!(
            cmp_same_group(&Value::Char('é'), &Value::text("é")),
            Ordering::Equal
        );
    }

    #[test]
    fn arrays_compare_lexicographically_then_by_length() {
        let short = Value::Int32Array(vec![1, 2]);
        let long = Value::Int64Array(vec![1, 2, 0]);
        let bigger = Value::Float64Array(vec![1.0, 2.5]);

        assert_eq!(cmp_same_group(&short, &long), Ordering::Less);
        assert_eq!(cmp_same_group(&long, &bigger), Ordering::Less);
        assert_eq!(
            cmp_same_group(&Value::Int8Array(vec![]), &Value::Float32Array(vec![])),
            Ordering::Equal
        );
    }
}
