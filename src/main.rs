use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use rankedstats::cli::Args;
use rankedstats::riot::{Platform, RiotClient};
use rankedstats::{AppError, Config, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let _log_guard = logging::init();

    info!("🐙 Starting...");

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "❌ Collection failed");
            if let AppError::InvalidRegion(_) = e {
                eprintln!("Valid regions: {}", Platform::valid_codes());
            }
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: &Args) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let client = RiotClient::new(&config)?;

    let result = rankedstats::run(&client, &config, &args.region, &args.summoner_name).await;
    client.metrics().log_summary();

    result.map(|_| ())
}
