//! Scalar-kind and value-group metadata shared by the value library.
//!
//! This crate has no dependencies and no runtime state; every answer is a
//! `const fn` lookup into the scalar registry.

#[macro_use]
mod macros;

use std::fmt;

///
/// ValueGroup
///
/// Coarse comparability class. Declaration order is the default cross-group
/// ordering: `NoValue` sorts first, and `Boolean` immediately follows `Text`
/// so that the first boolean can bound "all strings" from above.
///
/// IMPORTANT:
/// Wire bytes from `to_u8` feed stored fingerprints and must remain fixed.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ValueGroup {
    NoValue = 0,
    Text = 1,
    Boolean = 2,
    Number = 3,
    TextArray = 4,
    BooleanArray = 5,
    NumberArray = 6,
}

impl ValueGroup {
    /// Stable fingerprint byte for this group.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoValue => "NO_VALUE",
            Self::Text => "TEXT",
            Self::Boolean => "BOOLEAN",
            Self::Number => "NUMBER",
            Self::TextArray => "TEXT_ARRAY",
            Self::BooleanArray => "BOOLEAN_ARRAY",
            Self::NumberArray => "NUMBER_ARRAY",
        }
    }

    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::TextArray | Self::BooleanArray | Self::NumberArray
        )
    }

    /// Array group holding elements of this scalar group.
    ///
    /// Returns `None` for array groups and `NoValue`.
    #[must_use]
    pub const fn array_group(self) -> Option<Self> {
        match self {
            Self::Text => Some(Self::TextArray),
            Self::Boolean => Some(Self::BooleanArray),
            Self::Number => Some(Self::NumberArray),
            _ => None,
        }
    }

    /// Scalar group of the elements of this array group.
    #[must_use]
    pub const fn component_group(self) -> Option<Self> {
        match self {
            Self::TextArray => Some(Self::Text),
            Self::BooleanArray => Some(Self::Boolean),
            Self::NumberArray => Some(Self::Number),
            _ => None,
        }
    }
}

impl fmt::Display for ValueGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// ScalarKind
///
/// Concrete scalar representation supported as a property payload.
/// Array values reuse the kind of their elements.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Char,
    Text,
}

impl ScalarKind {
    /// Return the full metadata descriptor for one scalar kind.
    #[must_use]
    pub const fn metadata(self) -> ScalarMetadata {
        scalar_kind_registry!(metadata_from_registry, self)
    }

    #[must_use]
    pub const fn group(self) -> ValueGroup {
        self.metadata().group
    }

    #[must_use]
    pub const fn array_group(self) -> ValueGroup {
        self.metadata().array_group
    }

    /// Native type label, used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    #[must_use]
    pub const fn is_integral(self) -> bool {
        self.metadata().is_integral
    }

    #[must_use]
    pub const fn is_floating(self) -> bool {
        self.metadata().is_floating
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        let meta = self.metadata();
        meta.is_integral || meta.is_floating
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// ScalarMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarMetadata {
    pub group: ValueGroup,
    pub array_group: ValueGroup,
    pub label: &'static str,
    pub is_integral: bool,
    pub is_floating: bool,
    /// Storage width; zero for variable-width kinds.
    pub bits: u8,
}

/// Ordered list of all scalar kinds in registry order.
pub const ALL_SCALAR_KINDS: [ScalarKind; 9] = scalar_kind_registry!(all_kinds_from_registry);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_maps_to_one_scalar_group_and_its_array_group() {
        for kind in ALL_SCALAR_KINDS {
            let group = kind.group();
            assert!(!group.is_array(), "kind: {kind:?}");
            assert_eq!(group.array_group(), Some(kind.array_group()));
            assert_eq!(kind.array_group().component_group(), Some(group));
        }
    }

    #[test]
    fn numeric_kinds_share_the_number_group() {
        let numeric = ALL_SCALAR_KINDS
            .iter()
            .filter(|kind| kind.is_numeric())
            .collect::<Vec<_>>();

        assert_eq!(numeric.len(), 6);
        assert!(numeric.iter().all(|kind| kind.group() == ValueGroup::Number));
        assert!(
            numeric
                .iter()
                .all(|kind| kind.is_integral() != kind.is_floating())
        );
    }

    #[test]
    fn boolean_group_immediately_follows_text() {
        assert!(ValueGroup::NoValue < ValueGroup::Text);
        assert_eq!(
            ValueGroup::Text.to_u8() + 1,
            ValueGroup::Boolean.to_u8(),
            "string range bounds rely on this adjacency"
        );
    }

    #[test]
    fn no_value_has_no_array_or_component_group() {
        assert_eq!(ValueGroup::NoValue.array_group(), None);
        assert_eq!(ValueGroup::NoValue.component_group(), None);
    }
}
