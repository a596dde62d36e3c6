use std::io;
use std::process::ExitCode;

use clap::Parser;
use deadball_cli::{run, Args, Config};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr so --stdout output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let mut stdout = io::stdout().lock();
    match run(&args, &config, &mut stdout) {
        Ok(files) => {
            tracing::info!("Done, {} file(s) written", files.len());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_empty_state() => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
