use polars::prelude::PolarsError;
use thiserror::Error;

use varmeta_model::VarError;

#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Var(#[from] VarError),
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("no records to tabulate")]
    EmptyRecords,
    #[error("no data supplied for variable '{key}'")]
    MissingData { key: String },
    #[error("data key '{key}' has no matching variable")]
    UnknownDataKey { key: String },
    #[error("value for column '{key}' is not a scalar")]
    NonScalarCell { key: String },
}

pub type Result<T> = std::result::Result<T, TableError>;
