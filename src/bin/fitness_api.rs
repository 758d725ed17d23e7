//! fitness-api - Fitness WebApp API development server

use clap::Parser;
use fitness_webapp::cli::ServeArgs;
use fitness_webapp::logging::init_tracing;
use fitness_webapp::server::{self, ServerConfig};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = ServeArgs::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig::from(&args);
    tracing::debug!("fitness-api v{} on {}", env!("CARGO_PKG_VERSION"), config.socket_addr());

    server::run(config).await?;
    Ok(())
}
