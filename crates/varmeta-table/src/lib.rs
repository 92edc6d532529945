//! Tabularization of variable metadata and values.
//!
//! Converts metadata+value collections (a single record or many) into a
//! polars `DataFrame` whose columns carry multi-level metadata headers:
//! key, name, units, or any chosen attribute subset. Composite entries are
//! expanded into their scalar components before materialization.

pub mod assemble;
pub mod error;
pub mod multi_index;

pub use assemble::{
    assemble_table, assemble_table_from_records, assemble_table_from_records_with_attrs,
    assemble_table_with_attrs, flatten_record, Table,
};
pub use error::{Result, TableError};
pub use multi_index::{vars_to_multi_index, MultiIndex, VarAttr, DEFAULT_ATTRS};
