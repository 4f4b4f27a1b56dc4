//! Writes a simulated device-adoption dataset to the configured data path
//!
//! The output location follows `ADOPTION_DATA_PATH` (default
//! `~/Desktop/Simulated_device_adoption/device_adoption_data.csv`) and the
//! seed can be set with `ADOPTION_SEED`.

use adoption_metrics::config::DashboardConfig;
use adoption_metrics::simulation::{SimulationConfig, simulate_records, write_csv};
use log::{info, warn};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::from_env();
    let mut simulation = SimulationConfig::default();
    if let Ok(seed) = std::env::var("ADOPTION_SEED") {
        match seed.parse::<u64>() {
            Ok(seed) => simulation.seed = seed,
            Err(e) => warn!("Ignoring invalid ADOPTION_SEED '{seed}': {e}"),
        }
    }

    let start = Instant::now();
    let records = simulate_records(&simulation);
    write_csv(&records, &config.data_path)?;
    info!(
        "Simulated dataset written to {} in {:?}",
        config.data_path.display(),
        start.elapsed()
    );

    Ok(())
}
