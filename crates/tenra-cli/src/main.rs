//! # tenra CLI Entry Point
//!
//! Assembles subcommands and dispatches to demo drivers.

use clap::Parser;

/// Tenra Stack CLI — rental escrow and arbitration engine demos.
///
/// Drives the engine end to end against an in-memory ledger: the
/// happy-path rental lifecycle and the jury-arbitrated dispute flow.
#[derive(Parser, Debug)]
#[command(name = "tenra", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Happy-path rental lifecycle demo.
    Rental(tenra_cli::rental::RentalArgs),
    /// Dispute arbitration demo.
    Dispute(tenra_cli::dispute::DisputeArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Rental(args) => tenra_cli::rental::run(args),
        Commands::Dispute(args) => tenra_cli::dispute::run(args),
    }
}
