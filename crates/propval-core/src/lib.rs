//! Canonical storable values for graph properties and query results.
//!
//! Every scalar or array attached to a node, relationship or graph is
//! normalized into one immutable [`Value`](value::Value). Values compare
//! equal, hash identically and sort consistently across their concrete
//! representations. Build them from native input through [`factory`].

// public exports are one module level down
pub mod error;
pub mod factory;
pub mod native;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Factory functions and errors stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        native::{NativeArray, NativeValue},
        value::{NO_VALUE, Value, ValueGroup},
    };
}
