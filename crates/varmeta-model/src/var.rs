//! Variable descriptors and their serialization form.
//!
//! A [`Var`] is an immutable metadata record for a named quantity: display
//! name, units, free-text description, an optional ordered component list
//! for vector-valued quantities, and an optional dtype constraint. The
//! lookup `key` is deliberately excluded from equality, ordering, and
//! hashing: two variables with different keys can describe the same
//! quantity, and registries enforce that one key never binds two
//! non-equal variables.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Optional type constraint for a variable's data.
///
/// Used only for validation at value-container boundaries, never for
/// dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    #[default]
    Unconstrained,
    Bool,
    Int,
    Float,
    Text,
}

impl Dtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dtype::Unconstrained => "unconstrained",
            Dtype::Bool => "bool",
            Dtype::Int => "int",
            Dtype::Float => "float",
            Dtype::Text => "text",
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable variable descriptor.
///
/// Construct with [`Var::new`] and the `with_*` builder methods:
///
/// ```
/// use varmeta_model::Var;
///
/// let force = Var::new("F", "Force", "N", "Force vector")
///     .with_components(["x", "y", "z"]);
/// assert!(force.is_composite());
/// assert_eq!(force.to_string(), "Force [N]");
/// ```
#[derive(Debug, Clone)]
pub struct Var {
    key: String,
    name: String,
    units: String,
    description: String,
    components: Option<Vec<String>>,
    component_axis: usize,
    dtype: Dtype,
}

impl Var {
    /// Create a scalar variable with an unconstrained dtype.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        units: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            units: units.into(),
            description: description.into(),
            components: None,
            component_axis: 0,
            dtype: Dtype::Unconstrained,
        }
    }

    /// Declare the ordered component names of a vector-valued variable.
    pub fn with_components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components = Some(components.into_iter().map(Into::into).collect());
        self
    }

    /// Select which axis of a multi-dimensional value indexes the components.
    pub fn with_component_axis(mut self, axis: usize) -> Self {
        self.component_axis = axis;
        self
    }

    /// Constrain the variable's data to a dtype.
    pub fn with_dtype(mut self, dtype: Dtype) -> Self {
        self.dtype = dtype;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn components(&self) -> Option<&[String]> {
        self.components.as_deref()
    }

    pub fn component_axis(&self) -> usize {
        self.component_axis
    }

    pub fn dtype(&self) -> Dtype {
        self.dtype
    }

    /// True when the variable has a non-empty component list.
    pub fn is_composite(&self) -> bool {
        self.components.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Derive one scalar variable per component, in component order.
    ///
    /// The derived key is `"{key}_{component}"` and the derived name is
    /// `"{name} {component}"`; units, description, and dtype carry over.
    /// Returns an empty vec for scalar variables.
    pub fn component_vars(&self) -> Vec<Var> {
        let Some(components) = self.components.as_deref() else {
            return Vec::new();
        };
        components
            .iter()
            .map(|component| {
                Var::new(
                    format!("{}_{component}", self.key),
                    format!("{} {component}", self.name),
                    self.units.clone(),
                    self.description.clone(),
                )
                .with_dtype(self.dtype)
            })
            .collect()
    }

    /// Snapshot the variable as its serialization form.
    pub fn to_meta(&self) -> VarMeta {
        VarMeta {
            key: self.key.clone(),
            name: self.name.clone(),
            units: self.units.clone(),
            description: self.description.clone(),
            components: self.components.clone(),
            component_axis: self.component_axis,
            data_type: Some(self.dtype),
        }
    }

    /// Rebuild a variable from its serialization form.
    ///
    /// A missing `data_type` reads back as [`Dtype::Unconstrained`].
    pub fn from_meta(meta: VarMeta) -> Self {
        Self {
            key: meta.key,
            name: meta.name,
            units: meta.units,
            description: meta.description,
            components: meta.components,
            component_axis: meta.component_axis,
            dtype: meta.data_type.unwrap_or_default(),
        }
    }

    // Identity excludes `key`.
    fn identity(&self) -> (&str, &str, &str, Option<&[String]>, usize, Dtype) {
        (
            &self.name,
            &self.units,
            &self.description,
            self.components.as_deref(),
            self.component_axis,
            self.dtype,
        )
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Var {}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for Var {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Var {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.units)
    }
}

/// Serialization unit for a [`Var`].
///
/// Field order matches the wire format: `components` serializes as a list
/// or null (never skipped); `data_type` is optional for backward
/// compatibility with metadata written before dtype constraints existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarMeta {
    pub key: String,
    pub name: String,
    pub units: String,
    pub description: String,
    pub components: Option<Vec<String>>,
    pub component_axis: usize,
    #[serde(default)]
    pub data_type: Option<Dtype>,
}
