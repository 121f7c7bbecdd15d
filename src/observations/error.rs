use crate::types::column::ObservationColumn;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Observation file '{0}' not found")]
    FileNotFound(PathBuf),

    #[error("Failed to read observation file '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("Required column '{0}' not found in observation file")]
    MissingColumn(ObservationColumn),

    #[error("Failed to read column '{column}' as text")]
    ColumnRead {
        column: ObservationColumn,
        #[source]
        source: PolarsError,
    },

    #[error("Row {row}: could not parse datetime value '{value}'")]
    DatetimeParse { row: usize, value: String },

    #[error("Row {row}: station value is missing")]
    MissingStation { row: usize },
}
