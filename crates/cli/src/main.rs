//! Ledgerline CLI - demo data seeding and ledger audit tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the data directory with demo users and accounts
//! ledgerline-cli seed --data-dir data
//!
//! # Overwrite existing collection files
//! ledgerline-cli seed --data-dir data --force
//!
//! # Check stored balances against transaction history
//! ledgerline-cli audit --data-dir data
//! ```
//!
//! # Commands
//!
//! - `seed` - Write demo users, accounts, transactions, and notifications
//! - `audit` - Recompute balances from transactions and report drift

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ledgerline-cli")]
#[command(author, version, about = "Ledgerline CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the data directory with demo data
    Seed {
        /// Directory holding the JSON collection files
        #[arg(long, default_value = "data")]
        data_dir: String,

        /// Overwrite existing collection files
        #[arg(long)]
        force: bool,
    },
    /// Check stored balances against transaction history
    Audit {
        /// Directory holding the JSON collection files
        #[arg(long, default_value = "data")]
        data_dir: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { data_dir, force } => commands::seed::run(&data_dir, force).await?,
        Commands::Audit { data_dir } => commands::audit::run(&data_dir).await?,
    }
    Ok(())
}
