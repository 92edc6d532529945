//! Key-uniqueness-enforcing variable registry.

use indexmap::IndexMap;

use crate::error::{Result, VarError};
use crate::var::{Var, VarMeta};

/// An insertion-ordered collection of [`Var`]s keyed by their string key.
///
/// The registry upholds one invariant: a key is bound to at most one
/// variable, where "one" is judged by content equality (which excludes the
/// key itself). Re-adding a content-equal variable under an existing key is
/// a no-op; adding a different one fails with [`VarError::Conflict`].
///
/// Adding a composite variable also registers its derived component
/// variables, so that later unpack results resolve through the same
/// registry without surprises.
#[derive(Debug, Clone, Default)]
pub struct VarRegistry {
    vars: IndexMap<String, Var>,
}

impl VarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable under its own key.
    ///
    /// Composite variables also register each derived component variable,
    /// under the same conflict rule.
    pub fn add(&mut self, var: Var) -> Result<()> {
        let components = var.component_vars();
        self.add_one(var)?;
        for component in components {
            self.add_one(component)?;
        }
        Ok(())
    }

    fn add_one(&mut self, var: Var) -> Result<()> {
        match self.vars.get(var.key()) {
            Some(existing) if *existing != var => Err(VarError::Conflict {
                key: var.key().to_string(),
                existing: existing.to_string(),
                new: var.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.vars.insert(var.key().to_string(), var);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Result<&Var> {
        self.vars.get(key).ok_or_else(|| VarError::NotFound {
            key: key.to_string(),
        })
    }

    /// Remove and return the variable bound to `key`.
    pub fn remove(&mut self, key: &str) -> Result<Var> {
        // shift_remove keeps the insertion order of the survivors.
        self.vars
            .shift_remove(key)
            .ok_or_else(|| VarError::NotFound {
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Var)> {
        self.vars.iter().map(|(key, var)| (key.as_str(), var))
    }

    /// Snapshot of all registered variables in insertion order.
    pub fn to_list(&self) -> Vec<Var> {
        self.vars.values().cloned().collect()
    }

    /// Snapshot as key -> serialization form, for metadata round-trips.
    pub fn to_dict(&self) -> IndexMap<String, VarMeta> {
        self.vars
            .iter()
            .map(|(key, var)| (key.clone(), var.to_meta()))
            .collect()
    }

    /// Bulk constructor from a metadata mapping.
    ///
    /// Each entry's declared `key` must match the key it is stored under.
    pub fn from_dict(metas: IndexMap<String, VarMeta>) -> Result<Self> {
        let mut registry = Self::new();
        for (key, meta) in metas {
            if meta.key != key {
                return Err(VarError::KeyMismatch {
                    expected: key,
                    found: meta.key,
                });
            }
            registry.add(Var::from_meta(meta))?;
        }
        Ok(registry)
    }
}
