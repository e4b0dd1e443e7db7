// src/main.rs
use anyhow::Result;
use clap::Parser;
use sort_strategy::cli::{execute_command, Cli};

fn main() -> Result<()> {
    // Initialize environment
    dotenv::dotenv().ok();

    // Initialize logging on stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, &mut out)?;

    Ok(())
}
