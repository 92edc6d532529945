//! Multi-level column header material derived from variable metadata.

use varmeta_model::Var;

/// A variable attribute usable as a header level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarAttr {
    Key,
    Name,
    Units,
    Description,
    DataType,
}

impl VarAttr {
    /// Level name as it appears in the header.
    pub fn label(&self) -> &'static str {
        match self {
            VarAttr::Key => "key",
            VarAttr::Name => "name",
            VarAttr::Units => "units",
            VarAttr::Description => "description",
            VarAttr::DataType => "data_type",
        }
    }

    /// Render the attribute's value for one variable.
    pub fn extract(&self, var: &Var) -> String {
        match self {
            VarAttr::Key => var.key().to_string(),
            VarAttr::Name => var.name().to_string(),
            VarAttr::Units => var.units().to_string(),
            VarAttr::Description => var.description().to_string(),
            VarAttr::DataType => var.dtype().as_str().to_string(),
        }
    }
}

/// Header levels used when no attribute set is given: key, name, units.
pub const DEFAULT_ATTRS: [VarAttr; 3] = [VarAttr::Key, VarAttr::Name, VarAttr::Units];

/// Multi-level column header: one named level per attribute, one tuple per
/// column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiIndex {
    /// Level names, one per requested attribute.
    pub names: Vec<String>,
    /// Per-column attribute tuples, `columns[c][l]` = level `l` of column `c`.
    pub columns: Vec<Vec<String>>,
}

impl MultiIndex {
    /// All values of one header level, left to right.
    pub fn level(&self, level: usize) -> Vec<&str> {
        self.columns
            .iter()
            .map(|tuple| tuple[level].as_str())
            .collect()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn depth(&self) -> usize {
        self.names.len()
    }
}

/// Build multi-level header material for an ordered list of variables.
///
/// Order is preserved from the input; no deduplication.
pub fn vars_to_multi_index(vars: &[Var], attrs: &[VarAttr]) -> MultiIndex {
    MultiIndex {
        names: attrs.iter().map(|attr| attr.label().to_string()).collect(),
        columns: vars
            .iter()
            .map(|var| attrs.iter().map(|attr| attr.extract(var)).collect())
            .collect(),
    }
}
