//! Keyed value mapping: variables to data, with string-key lookup.

use indexmap::IndexMap;

use varmeta_model::{Result, Var, VarError, VarMeta, VarRegistry};

use crate::unpack::unpack;
use crate::value::Value;

/// An insertion-ordered mapping from [`Var`] to [`Value`], backed by a
/// [`VarRegistry`] index for O(1) lookup by string key.
///
/// Insertion applies the registry's conflict rule: a string key already
/// bound to a non-equal variable is rejected, so the map and its index
/// never disagree about what a key means.
#[derive(Debug, Clone, Default)]
pub struct ValueMap {
    entries: IndexMap<Var, Value>,
    index: VarRegistry,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (variable, value) pairs, validating each insertion.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Var, Value)>,
    {
        let mut map = Self::new();
        map.update(pairs)?;
        Ok(map)
    }

    /// Build from a data mapping and a parallel metadata mapping.
    ///
    /// Every data key must have a metadata entry; fails with
    /// [`VarError::NotFound`] otherwise.
    pub fn from_dicts(
        data: &IndexMap<String, Value>,
        metas: &IndexMap<String, VarMeta>,
    ) -> Result<Self> {
        let mut map = Self::new();
        for (key, value) in data {
            let meta = metas.get(key).ok_or_else(|| VarError::NotFound {
                key: key.clone(),
            })?;
            map.insert(Var::from_meta(meta.clone()), value.clone())?;
        }
        Ok(map)
    }

    /// Store a pair, registering the variable's string key in the index.
    ///
    /// Content-equal variables share one entry regardless of key; a key
    /// already bound to a non-equal variable is a [`VarError::Conflict`].
    pub fn insert(&mut self, var: Var, data: Value) -> Result<()> {
        self.index.add(var.clone())?;
        self.entries.insert(var, data);
        Ok(())
    }

    /// Insert every pair in the iterator, validating each one.
    pub fn update<I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (Var, Value)>,
    {
        for (var, data) in pairs {
            self.insert(var, data)?;
        }
        Ok(())
    }

    pub fn get(&self, var: &Var) -> Option<&Value> {
        self.entries.get(var)
    }

    /// Resolve a string key to the variable bound to it.
    pub fn find_var(&self, key: &str) -> Result<&Var> {
        self.index.get(key)
    }

    /// Resolve a string key to the data bound to its variable.
    ///
    /// Keys that are registered but carry no data (component keys derived
    /// from a still-packed composite) report [`VarError::NotFound`].
    pub fn find(&self, key: &str) -> Result<&Value> {
        let var = self.index.get(key)?;
        self.entries.get(var).ok_or_else(|| VarError::NotFound {
            key: key.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Var, &Value)> {
        self.entries.iter()
    }

    /// Unpack every entry one level, returning a new map of the sub-pairs.
    ///
    /// All-or-nothing: any non-composite entry fails the whole call with
    /// [`VarError::InvalidOperation`], leaving `self` untouched.
    pub fn unpack(&self) -> Result<ValueMap> {
        tracing::debug!(entries = self.entries.len(), "unpacking value map");
        let mut unpacked = ValueMap::new();
        for (var, data) in &self.entries {
            for (sub_var, sub_data) in unpack(var, data)? {
                unpacked.insert(sub_var, sub_data)?;
            }
        }
        Ok(unpacked)
    }

    /// Snapshot as key -> data.
    pub fn to_dict(&self) -> IndexMap<String, Value> {
        self.entries
            .iter()
            .map(|(var, data)| (var.key().to_string(), data.clone()))
            .collect()
    }

    /// Snapshot of the index as key -> metadata, including derived
    /// component keys.
    pub fn var_meta(&self) -> IndexMap<String, VarMeta> {
        self.index.to_dict()
    }
}
