//! Harvest module - species description scraping pipeline.
//!
//! - **Config**: run constants via [`HarvestConfig`]
//! - **Taxonomy**: species code loading via [`load_identifiers`]
//! - **Fetch**: page retrieval and description extraction via [`fetch_description`]
//! - **Output**: CSV persistence via [`write_results`]
//! - **Pipeline**: the full run via [`pipeline::HarvestPipeline`]

pub mod config;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod taxonomy;

pub use config::HarvestConfig;
pub use fetch::{extract_description, fetch_description, HttpPageSource};
pub use output::{write_results, OutputError};
pub use pipeline::{HarvestPipeline, HarvestResult, HarvestStats, PipelineError};
pub use taxonomy::{load_identifiers, TaxonomyError};
