use crate::harvest::config::HarvestConfig;
use crate::harvest::fetch::fetch_description;
use crate::model::{IdentifierSet, SpeciesId, SpeciesRecord};
use crate::traits::{FetchError, PageSource};
use tracing::{info, instrument, warn};

/// Outcome of harvesting a whole identifier set.
#[derive(Debug, Default)]
pub struct HarvestOutcome {
    /// Successful records, in identifier order.
    pub records: Vec<SpeciesRecord>,

    /// Identifiers that produced no record, with the reason.
    pub failures: Vec<(SpeciesId, FetchError)>,
}

impl HarvestOutcome {
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Runs one fetch per identifier, strictly one after another.
pub struct HarvesterExecutor<'a, S: PageSource + ?Sized> {
    source: &'a S,
    config: &'a HarvestConfig,
}

impl<'a, S: PageSource + ?Sized> HarvesterExecutor<'a, S> {
    pub fn new(source: &'a S, config: &'a HarvestConfig) -> Self {
        Self { source, config }
    }

    /// Fetches every identifier in `identifiers`. Failed fetches are logged and
    /// recorded in [`HarvestOutcome::failures`]; they never stop the loop.
    #[instrument(skip_all, fields(count = identifiers.len()))]
    pub async fn harvest_all(&self, identifiers: &IdentifierSet) -> HarvestOutcome {
        let mut outcome = HarvestOutcome::default();

        for id in identifiers {
            info!("Trying {}", id);
            match fetch_description(self.source, self.config, id).await {
                Ok(record) => outcome.records.push(record),
                Err(e) => {
                    warn!(species = %id, "{}", e);
                    outcome.failures.push((id.clone(), e));
                }
            }
        }

        info!(
            succeeded = outcome.records.len(),
            failed = outcome.failures.len(),
            "Harvest loop finished"
        );
        outcome
    }
}
