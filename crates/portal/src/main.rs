//! Employee Portal - CLI entry point
//!
//! Dispatches one command against the employee service.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppError, LogConfig};
use portal_lib::{cli::Cli, commands, config::PortalConfig};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PortalConfig::from_env()
        .with_api_url(cli.api_url.clone())
        .with_verbose(cli.verbose);

    init_tracing(&config.log, cli.verbose);
    tracing::debug!("Using employee service at {}", config.api.base_url);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = commands::execute(cli.command, &config, &mut stdout).await {
        tracing::debug!("Command failed: {:?}", e);
        match &e {
            AppError::Validation(report) => eprintln!("{}", report),
            other => eprintln!("error: {}", other.user_message()),
        }
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber (verbose mode forces debug level)
fn init_tracing(log: &LogConfig, verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new(&log.default_filter)
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.default_filter))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
