//! SalesLens - sales history lookup for recorded sales calls
//!
//! Loads the merged bulk/live history and prints command results as JSON on
//! stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use saleslens_lib::commands;
use saleslens_lib::AppContext;
use serde::Serialize;
use tracing::{info, warn};

/// Command-line arguments for saleslens
#[derive(Parser, Debug)]
#[command(name = "saleslens")]
#[command(about = "Resolve recorded sales calls against the merged sales history")]
#[command(version)]
struct Args {
    /// Live spreadsheet id, overriding the configured one
    #[arg(long, env = "SALESLENS_SHEET_ID")]
    sheet_id: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load both sources and print a summary (default)
    Load,
    /// Resolve a call recording filename to its analysis context
    Call {
        /// e.g. myrecordings_20250301_103000_out_0812345678_0898765432.m4a
        filename: String,
    },
    /// Search customers by phone digits or name
    Customers { term: String },
    /// Print one customer's purchase history
    History { phone: String },
    /// Print source health after loading
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so SALESLENS_* variables are visible to the loader
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();

    let mut config = saleslens_infra::config::load().context("failed to load configuration")?;
    if let Some(sheet_id) = args.sheet_id {
        config.live.spreadsheet_id = Some(sheet_id);
    }
    saleslens_infra::init_logging(&config.logging).context("failed to initialise logging")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => warn!(error = %e, "no .env file loaded"),
    }

    let ctx = AppContext::new_with_config(config).context("failed to build application context")?;
    let view = commands::load_history(&ctx).await?;

    match args.command.unwrap_or(Command::Load) {
        Command::Load => print_json(&commands::history_summary(&view))?,
        Command::Call { filename } => {
            print_json(&commands::resolve_call(&ctx, &filename).await?)?;
        }
        Command::Customers { term } => {
            print_json(&commands::find_customers(&ctx, &term).await?)?;
        }
        Command::History { phone } => {
            print_json(&commands::customer_history(&ctx, &phone).await?)?;
        }
        Command::Health => print_json(&ctx.health_check())?,
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
