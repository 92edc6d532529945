//! Table assembly from metadata+value collections.
//!
//! Flattens composite entries one level via the unpack algorithm, then
//! materializes a polars `DataFrame` with one column per flattened
//! variable and a sidecar multi-level header.

use indexmap::IndexMap;
use polars::prelude::{AnyValue, Column, DataFrame, Series};

use varmeta_model::Var;
use varmeta_values::{unpack, Value};

use crate::error::{Result, TableError};
use crate::multi_index::{vars_to_multi_index, MultiIndex, VarAttr, DEFAULT_ATTRS};

/// A materialized table: the data frame plus its header metadata.
///
/// Column names of `data` are the flattened variable keys; `header` carries
/// the requested attribute levels for the same columns, left to right.
#[derive(Debug, Clone)]
pub struct Table {
    pub data: DataFrame,
    pub header: MultiIndex,
}

impl Table {
    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn width(&self) -> usize {
        self.data.width()
    }
}

/// Expand one record's composite entries into flat scalar constituents.
///
/// Iterates `vars` in insertion order; composite entries are replaced in
/// place by their one-level unpack, with component sub-pairs interleaved
/// immediately after the parent's position. Every variable must have a
/// datum and every datum a variable; mismatches fail, never truncate.
pub fn flatten_record(
    vars: &IndexMap<String, Var>,
    data: &IndexMap<String, Value>,
) -> Result<Vec<(Var, Value)>> {
    for key in data.keys() {
        if !vars.contains_key(key) {
            return Err(TableError::UnknownDataKey { key: key.clone() });
        }
    }
    let mut flat = Vec::with_capacity(vars.len());
    for (key, var) in vars {
        let datum = data
            .get(key)
            .ok_or_else(|| TableError::MissingData { key: key.clone() })?;
        if var.is_composite() {
            flat.extend(unpack(var, datum)?);
        } else {
            flat.push((var.clone(), datum.clone()));
        }
    }
    Ok(flat)
}

/// Tabularize a single record with the default header attributes.
pub fn assemble_table(
    vars: &IndexMap<String, Var>,
    data: &IndexMap<String, Value>,
) -> Result<Table> {
    assemble_table_with_attrs(vars, data, &DEFAULT_ATTRS)
}

/// Tabularize a single record with an explicit header attribute set.
pub fn assemble_table_with_attrs(
    vars: &IndexMap<String, Var>,
    data: &IndexMap<String, Value>,
    attrs: &[VarAttr],
) -> Result<Table> {
    let flat = flatten_record(vars, data)?;
    tracing::debug!(columns = flat.len(), "assembling single-record table");
    let columns = flat
        .iter()
        .map(|(var, value)| {
            let cell = scalar_cell(var.key(), value)?;
            let series = Series::from_any_values(var.key().into(), &[cell], false)?;
            Ok(series.into())
        })
        .collect::<Result<Vec<Column>>>()?;
    let flat_vars: Vec<Var> = flat.into_iter().map(|(var, _)| var).collect();
    Ok(Table {
        data: DataFrame::new(columns)?,
        header: vars_to_multi_index(&flat_vars, attrs),
    })
}

/// Tabularize many records, one table row per record.
///
/// Every record is flattened independently; the first record's flattened
/// ordering is canonical for the whole table. Because flattening checks
/// each record's key set against `vars` exactly, a record that would
/// flatten differently fails there rather than producing a ragged table.
pub fn assemble_table_from_records(
    vars: &IndexMap<String, Var>,
    records: &[IndexMap<String, Value>],
) -> Result<Table> {
    assemble_table_from_records_with_attrs(vars, records, &DEFAULT_ATTRS)
}

/// As [`assemble_table_from_records`], with an explicit attribute set.
pub fn assemble_table_from_records_with_attrs(
    vars: &IndexMap<String, Var>,
    records: &[IndexMap<String, Value>],
    attrs: &[VarAttr],
) -> Result<Table> {
    if records.is_empty() {
        return Err(TableError::EmptyRecords);
    }
    let first = flatten_record(vars, &records[0])?;
    let canonical: Vec<String> = first.iter().map(|(var, _)| var.key().to_string()).collect();
    tracing::debug!(
        columns = canonical.len(),
        records = records.len(),
        "assembling multi-record table"
    );

    let mut cells: Vec<Vec<AnyValue<'static>>> =
        vec![Vec::with_capacity(records.len()); canonical.len()];
    let flat_vars: Vec<Var> = first.iter().map(|(var, _)| var.clone()).collect();
    for (column, (var, value)) in cells.iter_mut().zip(&first) {
        column.push(scalar_cell(var.key(), value)?);
    }
    for record in &records[1..] {
        let flat = flatten_record(vars, record)?;
        for (column, (var, value)) in cells.iter_mut().zip(&flat) {
            column.push(scalar_cell(var.key(), value)?);
        }
    }

    let columns = canonical
        .iter()
        .zip(cells)
        .map(|(key, values)| {
            let series = Series::from_any_values(key.as_str().into(), &values, false)?;
            Ok(series.into())
        })
        .collect::<Result<Vec<Column>>>()?;
    Ok(Table {
        data: DataFrame::new(columns)?,
        header: vars_to_multi_index(&flat_vars, attrs),
    })
}

/// A flattened cell must be scalar to materialize; one level of unpacking
/// does not guarantee that for deeply nested values.
fn scalar_cell(key: &str, value: &Value) -> Result<AnyValue<'static>> {
    match value {
        Value::Null => Ok(AnyValue::Null),
        Value::Bool(b) => Ok(AnyValue::Boolean(*b)),
        Value::Int(i) => Ok(AnyValue::Int64(*i)),
        Value::Float(x) => Ok(AnyValue::Float64(*x)),
        Value::Text(s) => Ok(AnyValue::StringOwned(s.as_str().into())),
        Value::List(_) | Value::Array(_) => Err(TableError::NonScalarCell {
            key: key.to_string(),
        }),
    }
}
