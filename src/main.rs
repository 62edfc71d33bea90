use color_eyre::Result;
use overhead_flight::{describe_overhead, logging, Config, Fr24Client};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    let _log_guard = logging::initialize_logging(&config.logging.directory);
    info!(
        "Center ({}, {}), bounds {}",
        config.center.lat,
        config.center.lon,
        config.bounds.query_value()
    );

    let client = Fr24Client::new(&config.api)?;
    let sentence = describe_overhead(&client, &config)
        .await
        .inspect_err(|e| error!("Lookup failed: {}", e))?;

    println!("{}", sentence);
    Ok(())
}
