//! Value containers for variable metadata.
//!
//! Pairs raw data with [`varmeta_model::Var`] descriptors and implements
//! the component-unpacking algorithm: splitting a composite value (a
//! vector, say) into scalar components along the variable's component
//! axis while deriving matching metadata, keeping both sides in lockstep.

pub mod map;
pub mod unpack;
pub mod val;
pub mod value;

pub use map::ValueMap;
pub use unpack::unpack;
pub use val::Val;
pub use value::Value;
