//! sslprobe CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sslprobe::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => {
            sslprobe::cli::commands::check::execute(args, cli.json, cli.config).await
        }
        Commands::Scan(args) => {
            sslprobe::cli::commands::scan::execute(args, cli.json, cli.config).await
        }
        Commands::Endpoint(args) => {
            sslprobe::cli::commands::endpoint::execute(args, cli.json, cli.config).await
        }
        Commands::Register(args) => {
            sslprobe::cli::commands::register::execute(args, cli.json, cli.config).await
        }
    };

    if let Err(err) = result {
        sslprobe::cli::handle_error(err, cli.json);
    }
}
