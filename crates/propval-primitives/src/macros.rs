#[macro_export]
macro_rules! scalar_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                Bool,
                Boolean,
                BooleanArray,
                label = "bool",
                is_integral = false,
                is_floating = false,
                bits = 1
            ),
            (
                Int8,
                Number,
                NumberArray,
                label = "i8",
                is_integral = true,
                is_floating = false,
                bits = 8
            ),
            (
                Int16,
                Number,
                NumberArray,
                label = "i16",
                is_integral = true,
                is_floating = false,
                bits = 16
            ),
            (
                Int32,
                Number,
                NumberArray,
                label = "i32",
                is_integral = true,
                is_floating = false,
                bits = 32
            ),
            (
                Int64,
                Number,
                NumberArray,
                label = "i64",
                is_integral = true,
                is_floating = false,
                bits = 64
            ),
            (
                Float32,
                Number,
                NumberArray,
                label = "f32",
                is_integral = false,
                is_floating = true,
                bits = 32
            ),
            (
                Float64,
                Number,
                NumberArray,
                label = "f64",
                is_integral = false,
                is_floating = true,
                bits = 64
            ),
            (
                Char,
                Text,
                TextArray,
                label = "char",
                is_integral = false,
                is_floating = false,
                bits = 32
            ),
            (
                Text,
                Text,
                TextArray,
                label = "String",
                is_integral = false,
                is_floating = false,
                bits = 0
            ),
        }
    };
}

#[macro_export]
macro_rules! scalar_kind_registry {
    ($macro:ident) => {
        $crate::scalar_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::scalar_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($scalar:ident, $group:ident, $array_group:ident, label = $label:expr, is_integral = $is_integral:expr, is_floating = $is_floating:expr, bits = $bits:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ScalarKind::$scalar => $crate::ScalarMetadata {
                    group: $crate::ValueGroup::$group,
                    array_group: $crate::ValueGroup::$array_group,
                    label: $label,
                    is_integral: $is_integral,
                    is_floating: $is_floating,
                    bits: $bits,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($scalar:ident, $group:ident, $array_group:ident, label = $label:expr, is_integral = $is_integral:expr, is_floating = $is_floating:expr, bits = $bits:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
}
