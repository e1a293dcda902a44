pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use adapters::{cli::Cli, parse_ip::normalize_ip, report::Reporter};
use application::services::lookup_service::LookupService;
use infrastructure::repository::aries_repository::AriesRepository;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_normalized();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .map(EnvFilter::new)
                .unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let service = match build_service(&cli) {
        Ok(service) => service,
        Err(e) => {
            tracing::debug!(error = ?e, "Startup failed");
            let mut stderr = Reporter::new(std::io::stderr().lock(), !cli.no_color);
            if stderr.startup_error(&e).is_err() {
                eprintln!("{e:#}");
            }
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = Reporter::new(std::io::stdout().lock(), !cli.no_color);
    let ip = normalize_ip(cli.ip.as_deref());

    match service.resolve_and_report(ip, &mut reporter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Lookup failed");
            if let Err(write_err) = reporter.error(&e) {
                eprintln!("{e}: {write_err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn build_service(cli: &Cli) -> anyhow::Result<LookupService<AriesRepository>> {
    let config = config::AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!(
        lookup_url = %config.lookup_url,
        ip_echo_url = %config.ip_echo_url,
        "Configuration loaded"
    );

    let repo = AriesRepository::new(&config).context("Failed to build HTTP client")?;
    Ok(LookupService::new(repo))
}
