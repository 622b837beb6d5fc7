//! Literal run constants and the [`HarvestConfig`] that carries them.

use std::path::PathBuf;

/// Taxonomy reference read at startup.
pub const TAXONOMY_PATH: &str = "taxonomy.csv";

/// Output file, truncated on every run.
pub const OUTPUT_PATH: &str = "descriptions.csv";

/// Species pages live at `<base><code>`.
pub const SPECIES_BASE_URL: &str = "https://ebird.org/species/";

/// Value marking the taxonomy header row.
pub const HEADER_SENTINEL: &str = "SPECIES_CODE";

/// Zero-based column holding the species code.
pub const SPECIES_CODE_COLUMN: usize = 2;

/// Settings for one harvest run.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub taxonomy_path: PathBuf,
    pub output_path: PathBuf,
    pub base_url: String,
    pub header_sentinel: String,
    pub code_column: usize,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            taxonomy_path: PathBuf::from(TAXONOMY_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            base_url: SPECIES_BASE_URL.to_string(),
            header_sentinel: HEADER_SENTINEL.to_string(),
            code_column: SPECIES_CODE_COLUMN,
        }
    }
}

impl HarvestConfig {
    pub fn with_taxonomy_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.taxonomy_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Sets the species page prefix. A trailing `/` is added if missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.base_url = base;
        self
    }

    /// URL of the species page for `code`.
    pub fn species_url(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }
}
