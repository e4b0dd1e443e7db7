// src/cli.rs
use crate::config::AppConfig;
use crate::context::Context;
use crate::strategy::{Ascending, Descending, StrategyKind};
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use tracing::info;

#[derive(Parser)]
#[command(name = "sort-strategy")]
#[command(about = "Sort data with interchangeable strategies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Sort the demo data ascending, then swap to descending and sort again
    Demo,

    /// Sort items with a single strategy
    Run {
        /// Strategy to use (defaults to the configured one)
        #[arg(short, long, value_parser = str::parse::<StrategyKind>)]
        strategy: Option<StrategyKind>,

        /// Items to sort (defaults to the configured data)
        items: Vec<String>,
    },

    /// List the available strategies
    List,
}

/// Execute a command from the CLI, writing user-facing output to `out`
pub fn execute_command<W: Write>(command: Option<Commands>, out: &mut W) -> Result<()> {
    match command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(out),

        Commands::Run { strategy, items } => {
            let config = AppConfig::load().context("Failed to load configuration")?;
            let kind = strategy.unwrap_or(config.strategy);
            let mut items = if items.is_empty() { config.items() } else { items };

            info!("Sorting {} items with {} strategy", items.len(), kind);

            let context: Context<String> = Context::with_strategy(kind.build());
            let result = context.execute(&mut items)?;
            writeln!(out, "{}", result)?;
            Ok(())
        }

        Commands::List => {
            for kind in StrategyKind::ALL {
                writeln!(out, "{:<12} {}", kind, kind.description())?;
            }
            Ok(())
        }
    }
}

/// The client side of the demonstration: pick a strategy, run, swap, run again
pub fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut context: Context<String> = Context::new();

    writeln!(out, "Client: Strategy is set to normal sorting.")?;
    context.set_strategy(Box::new(Ascending));
    context.do_some_business_logic(out)?;

    writeln!(out)?;

    writeln!(out, "Client: Strategy is set to reverse sorting.")?;
    context.set_strategy(Box::new(Descending));
    context.do_some_business_logic(out)?;

    Ok(())
}
