use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while moving tables in and out of the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Per-record validation failure. One bad record rejects that record only;
/// the rest of the table still derives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("battery identifier is empty")]
    EmptyId,
    #[error("column '{column}' is not a finite number ({value})")]
    NonFinite { column: &'static str, value: f64 },
    #[error("column '{column}' value {value} outside [{min}, {max}]")]
    OutOfRange {
        column: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("column '{column}' must not be negative ({value})")]
    Negative { column: &'static str, value: f64 },
    #[error("column '{column}' must be positive ({value})")]
    NotPositive { column: &'static str, value: f64 },
}
