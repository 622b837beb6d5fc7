//! Loading species codes from the taxonomy reference.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::model::{IdentifierSet, SpeciesId};

/// Errors while reading the taxonomy. All of them are fatal for a run.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("Cannot open taxonomy '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed taxonomy: {0}")]
    Csv(#[from] csv::Error),
    #[error("Taxonomy line {line} has no column {column}")]
    MissingColumn { line: u64, column: usize },
}

/// Reads every row of the taxonomy and collects the codes in `column`,
/// skipping rows whose code equals `skip_value`.
pub fn load_identifiers(
    path: &Path,
    column: usize,
    skip_value: &str,
) -> Result<IdentifierSet, TaxonomyError> {
    let file = std::fs::File::open(path).map_err(|source| TaxonomyError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let ids = read_identifiers(file, column, skip_value)?;
    info!(path = %path.display(), count = ids.len(), "Loaded species codes");
    Ok(ids)
}

/// Same as [`load_identifiers`] over any reader.
pub fn read_identifiers<R: std::io::Read>(
    reader: R,
    column: usize,
    skip_value: &str,
) -> Result<IdentifierSet, TaxonomyError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut ids = IdentifierSet::new();
    for row in csv_reader.records() {
        let row = row?;
        let code = row.get(column).ok_or_else(|| TaxonomyError::MissingColumn {
            line: row.position().map(|p| p.line()).unwrap_or(0),
            column,
        })?;

        if code == skip_value {
            continue;
        }
        if code.is_empty() {
            debug!(line = row.position().map(|p| p.line()), "Skipping empty species code");
            continue;
        }
        ids.insert(SpeciesId::new(code));
    }
    Ok(ids)
}
