mod aggregate;
mod args;
mod export;
mod insights;
mod models;
mod run;
mod session;
mod ui;

use args::Args;
use clap::Parser;
use session::Session;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level());
    debug!("Log level set to {}", args.log_level().to_string().to_lowercase());

    match main_inner(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(args: &Args) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let session = if args.seed() {
        Session::seeded(today)
    } else {
        Session::new(session::default_categories(), today)
    }
    .with_view(args.view());

    match args.command() {
        None => run::as_tui(session),
        Some(command) => run::as_cli(command, &session, today),
    }
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise only this crate logs, at the requested level.
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
