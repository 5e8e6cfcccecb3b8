use clap::Parser;
use sample_fetch::utils::{logger, validation::Validate};
use sample_fetch::{report, FetchConfig, Fetcher, LocalStorage, SampleFile};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = FetchConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sample-fetch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        return ExitCode::from(e.exit_code());
    }

    let sample = SampleFile::from_config(&config);

    let fetcher = Fetcher::new(LocalStorage::new());

    match fetcher.run(&sample).await {
        Ok(outcome) => {
            report(&sample, &outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ Fetch aborted: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            ExitCode::from(e.exit_code())
        }
    }
}
