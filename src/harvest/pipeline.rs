//! Harvest run coordinator.
//!
//! [`HarvestPipeline`] executes the stages of one run in order
//! (Load → Harvest → Persist) with:
//! - One awaited request at a time via `tokio`
//! - Structured logging via `tracing`
//! - Per-stage timing in [`HarvestStats`]
//!
//! Load and persist failures abort the run. Fetch failures only drop the
//! affected identifier.

use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use crate::executor::HarvesterExecutor;
use crate::harvest::config::HarvestConfig;
use crate::harvest::fetch::HttpPageSource;
use crate::harvest::output::{write_results, OutputError};
use crate::harvest::taxonomy::{load_identifiers, TaxonomyError};
use crate::model::{SpeciesId, SpeciesRecord};
use crate::traits::{FetchError, PageSource};

// ============================================================================
// Pipeline Types
// ============================================================================

/// Complete result of a harvest run.
#[derive(Debug)]
pub struct HarvestResult {
    /// Records written to the output file, in write order
    pub records: Vec<SpeciesRecord>,

    /// Identifiers skipped because their fetch failed
    pub failures: Vec<(SpeciesId, FetchError)>,

    /// Path the records were written to
    pub output_path: PathBuf,

    /// Timing and counts
    pub stats: HarvestStats,
}

/// Statistics about a harvest run.
#[derive(Debug, Default, Clone)]
pub struct HarvestStats {
    /// Total time for the run (milliseconds)
    pub total_duration_ms: u64,

    /// Time spent loading the taxonomy (milliseconds)
    pub load_duration_ms: u64,

    /// Time spent fetching pages (milliseconds)
    pub fetch_duration_ms: u64,

    /// Distinct identifiers loaded
    pub identifiers: usize,

    /// Identifiers with a record in the output
    pub succeeded: usize,

    /// Identifiers skipped after a fetch failure
    pub failed: usize,
}

// ============================================================================
// Pipeline Errors
// ============================================================================

/// Errors that end a harvest run.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Taxonomy could not be read
    #[error("Load failed: {0}")]
    Load(#[from] TaxonomyError),

    /// Output file could not be written
    #[error("Persist failed: {0}")]
    Persist(#[from] OutputError),

    /// HTTP client could not be built
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] reqwest::Error),
}

// ============================================================================
// Pipeline Executor
// ============================================================================

/// One harvest run over a [`PageSource`].
///
/// # Example
///
/// ```ignore
/// use species_harvester::harvest::{HarvestConfig, HarvestPipeline};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pipeline = HarvestPipeline::http(HarvestConfig::default())?;
///     let result = pipeline.execute().await?;
///     println!("Harvested {} species", result.stats.succeeded);
///     Ok(())
/// }
/// ```
pub struct HarvestPipeline<S: PageSource> {
    source: S,
    config: HarvestConfig,
}

impl HarvestPipeline<HttpPageSource> {
    /// Pipeline fetching over HTTP with a fresh `reqwest` client.
    pub fn http(config: HarvestConfig) -> Result<Self, PipelineError> {
        Ok(Self::new(HttpPageSource::new()?, config))
    }
}

impl<S: PageSource> HarvestPipeline<S> {
    pub fn new(source: S, config: HarvestConfig) -> Self {
        Self { source, config }
    }

    /// Runs Load → Harvest → Persist.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if the taxonomy cannot be read or the output
    /// cannot be written. Nothing is written when loading fails.
    pub async fn execute(&self) -> Result<HarvestResult, PipelineError> {
        let start = Instant::now();
        let mut stats = HarvestStats::default();

        // ====================================================================
        // Stage 1: Load
        // ====================================================================

        let load_start = Instant::now();
        let identifiers = load_identifiers(
            &self.config.taxonomy_path,
            self.config.code_column,
            &self.config.header_sentinel,
        )?;
        stats.load_duration_ms = load_start.elapsed().as_millis() as u64;
        stats.identifiers = identifiers.len();

        // ====================================================================
        // Stage 2: Harvest
        // ====================================================================

        let fetch_start = Instant::now();
        let outcome = HarvesterExecutor::new(&self.source, &self.config)
            .harvest_all(&identifiers)
            .await;
        stats.fetch_duration_ms = fetch_start.elapsed().as_millis() as u64;
        stats.succeeded = outcome.records.len();
        stats.failed = outcome.failures.len();

        // ====================================================================
        // Stage 3: Persist
        // ====================================================================

        write_results(&self.config.output_path, &outcome.records)?;

        stats.total_duration_ms = start.elapsed().as_millis() as u64;
        info!(
            identifiers = stats.identifiers,
            succeeded = stats.succeeded,
            failed = stats.failed,
            duration_ms = stats.total_duration_ms,
            "Harvest run completed"
        );

        Ok(HarvestResult {
            records: outcome.records,
            failures: outcome.failures,
            output_path: self.config.output_path.clone(),
            stats,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
