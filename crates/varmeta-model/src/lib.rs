//! Variable metadata model.
//!
//! Typed, human-readable metadata descriptors ([`Var`]) for raw values:
//! name, units, description, an optional ordered component list for
//! vector-valued quantities, and an optional dtype constraint. The
//! [`VarRegistry`] enforces that a string key never binds two non-equal
//! descriptors, and [`VarMeta`] is the lossless serialization form.

pub mod error;
pub mod registry;
pub mod var;

pub use error::{Result, VarError};
pub use registry::VarRegistry;
pub use var::{Dtype, Var, VarMeta};
