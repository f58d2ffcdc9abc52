use thiserror::Error as ThisError;

///
/// ValueError
///
/// Caller errors raised while normalizing native input or coercing values.
/// None of these are transient; retrying the same input fails the same way.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValueError {
    #[error("[{type_name}] is not a supported property value")]
    UnsupportedType { type_name: &'static str },

    #[error("{component}[] is not a supported property value type")]
    UnsupportedArrayComponentType { component: &'static str },

    #[error("[null] is not a supported property value")]
    NullNotAllowed,

    #[error("property array value elements may not be null (element {index})")]
    NullArrayElement { index: usize },

    #[error("converting a Value to a Value is not supported")]
    DoubleWrapping,

    #[error("cannot coerce {kind} to double")]
    UnsupportedCoercion { kind: &'static str },
}

impl ValueError {
    /// Stable short name of the error kind, used as a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedType { .. } => "unsupported_type",
            Self::UnsupportedArrayComponentType { .. } => "unsupported_array_component_type",
            Self::NullNotAllowed => "null_not_allowed",
            Self::NullArrayElement { .. } => "null_array_element",
            Self::DoubleWrapping => "double_wrapping",
            Self::UnsupportedCoercion { .. } => "unsupported_coercion",
        }
    }
}
