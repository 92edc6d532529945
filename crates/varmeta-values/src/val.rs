//! A single variable/value pair.

use varmeta_model::{Result, Var, VarError};

use crate::unpack::unpack;
use crate::value::Value;

/// A value paired with the variable describing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Val {
    var: Var,
    data: Value,
}

impl Val {
    /// Pair a value with its variable, validating the variable's dtype
    /// constraint.
    pub fn new(var: Var, data: Value) -> Result<Self> {
        if !data.conforms_to(var.dtype()) {
            return Err(VarError::DtypeMismatch {
                key: var.key().to_string(),
                expected: var.dtype().to_string(),
                found: data.kind().to_string(),
            });
        }
        Ok(Self { var, data })
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_parts(self) -> (Var, Value) {
        (self.var, self.data)
    }

    /// Unpack the pair into one [`Val`] per component.
    ///
    /// Delegates to [`unpack`]; errors propagate unchanged.
    pub fn unpack(&self) -> Result<Vec<Val>> {
        let pairs = unpack(&self.var, &self.data)?;
        Ok(pairs
            .into_iter()
            .map(|(var, data)| Val { var, data })
            .collect())
    }
}
