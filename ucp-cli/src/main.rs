use clap::Parser;
use ucp_cli::UcpCli;
use ucp_observability::{TracingConfig, setup_tracing};

#[tokio::main]
async fn main() {
    let cli = UcpCli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = setup_tracing(TracingConfig::from_env("ucp", log_level)) {
        eprintln!("Failed to setup tracing: {e}");
    }

    if let Err(e) = ucp_cli::run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
