use adoption_metrics::config::{DashboardConfig, OutputFormat};
use adoption_metrics::utils::logging::print_dashboard;
use adoption_metrics::{compute_dashboard, load_with_config};
use std::process::ExitCode;

use anyhow::Context;
use log::{error, info};

fn main() -> anyhow::Result<ExitCode> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::from_env();
    info!("Loading procedure data from: {}", config.data_path.display());

    let records = match load_with_config(&config.data_path, &config) {
        Ok(records) => records,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    let view = compute_dashboard(&records, &config.selection);
    if view.is_empty() {
        info!(
            "No records match region={} specialty={}",
            config.selection.region, config.selection.specialty
        );
    }

    match config.output {
        OutputFormat::Text => print_dashboard(&view),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&view).context("Failed to serialize dashboard view")?;
            println!("{json}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
