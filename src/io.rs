//! CSV table reading and writing.
//!
//! The core functions are generic over `io::Read`/`io::Write` so tests run
//! against in-memory buffers; the path variants wrap them with file handling
//! and error context. Tables are UTF-8 throughout, which keeps the °C and
//! mΩ header symbols intact.

use crate::errors::PipelineError;
use crate::models::{BatteryRecord, DerivedRecord};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;

/// Reads a raw telemetry table from any reader.
pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<BatteryRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader.deserialize().collect()
}

/// Reads a raw telemetry table from a CSV file.
pub fn read_records(path: &Path) -> Result<Vec<BatteryRecord>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records =
        read_records_from(BufReader::new(file)).map_err(|source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

fn write_table_to<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes a derived table to any writer, headers included.
pub fn write_derived_to<W: Write>(writer: W, rows: &[DerivedRecord]) -> Result<(), csv::Error> {
    write_table_to(writer, rows)
}

/// Writes the derived table to a CSV file.
pub fn write_derived(path: &Path, rows: &[DerivedRecord]) -> Result<(), PipelineError> {
    write_table(path, rows)?;
    info!("Wrote {} derived records to {}", rows.len(), path.display());
    Ok(())
}

/// Writes a raw telemetry table to a CSV file (the generator's output).
pub fn write_raw(path: &Path, rows: &[BatteryRecord]) -> Result<(), PipelineError> {
    write_table(path, rows)?;
    info!("Wrote {} raw records to {}", rows.len(), path.display());
    Ok(())
}

fn write_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), PipelineError> {
    let file = File::create(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_table_to(BufWriter::new(file), rows).map_err(|source| PipelineError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
