use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use csvgate::cli::{self, Args};
use csvgate::config::load_storage_config;
use csvgate::storage::CsvGateway;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let config = match load_storage_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return cli::exit_code(args.action(), false);
        }
    };
    let gateway = CsvGateway::new(config);
    cli::run(args, &gateway).await
}

// Log to stderr so `--list` output on stdout stays machine readable.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
