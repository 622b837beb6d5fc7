//! Writing harvested records as two-column CSV.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::model::SpeciesRecord;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Cannot create output '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Truncates `path` and writes one `identifier,description` row per record,
/// without a header. An empty slice still creates an empty file.
pub fn write_results(path: &Path, records: &[SpeciesRecord]) -> Result<(), OutputError> {
    let io_err = |source: std::io::Error| OutputError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = std::fs::File::create(path).map_err(io_err)?;
    write_records(file, records)?;
    info!(path = %path.display(), rows = records.len(), "Wrote descriptions");
    Ok(())
}

/// Same as [`write_results`] over any writer.
pub fn write_records<W: std::io::Write>(writer: W, records: &[SpeciesRecord]) -> Result<(), OutputError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer
        .flush()
        .map_err(|e| OutputError::Csv(csv::Error::from(e)))?;
    Ok(())
}
