use species_harvester::harvest::{HarvestConfig, HarvestPipeline};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();

    let pipeline = HarvestPipeline::http(HarvestConfig::default())?;
    pipeline.execute().await?;
    Ok(())
}
