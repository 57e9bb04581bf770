//! AC Quantum Command-Line Interface
//!
//! Manage experiments on the AC Quantum cloud service: create them, upload
//! circuits, run them on the simulator or the device, and fetch results.
//!
//! Session credentials come from `ACQ_CSRF_TOKEN` / `ACQ_SESSION_COOKIE`,
//! a `.env` file, or `~/.acq/config.yaml`.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{backends, create, delete, list, result, run, show, update, validate};

/// acq - client for the AC Quantum cloud service
#[derive(Parser)]
#[command(name = "acq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ~/.acq/config.yaml when present)
    #[arg(short, long, global = true, env = "ACQ_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty experiment
    Create {
        /// Experiment name
        name: String,

        /// Number of qubit lines
        #[arg(short = 'w', long)]
        bit_width: u32,

        /// Backend type (simulate, real)
        #[arg(short, long, default_value = "simulate")]
        backend: String,
    },

    /// Upload a circuit (JSON array of gate objects) to an experiment
    Update {
        /// Experiment ID
        id: u64,

        /// Circuit file
        #[arg(short, long)]
        input: String,

        /// Code text stored alongside the circuit
        #[arg(long)]
        code: Option<String>,

        /// Put the new gates in front of the stored ones instead of replacing them
        #[arg(long)]
        append: bool,
    },

    /// Show one experiment and its circuit
    Show {
        /// Experiment ID
        id: u64,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List experiments
    List {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Run an experiment
    Run {
        /// Experiment ID
        id: u64,

        /// Backend type (simulate, real)
        #[arg(short, long, default_value = "simulate")]
        backend: String,

        /// Number of shots
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Bit width (defaults to the stored experiment's)
        #[arg(short = 'w', long)]
        bit_width: Option<u32>,

        /// Simulator seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Retrieve results for an experiment
    Result {
        /// Experiment ID
        id: u64,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Delete an experiment
    Delete {
        /// Experiment ID
        id: u64,
    },

    /// Delete a single result
    DeleteResult {
        /// Result ID
        result_id: u64,
    },

    /// Check a circuit file offline
    Validate {
        /// Circuit file
        #[arg(short, long)]
        input: String,
    },

    /// List available backends
    Backends,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Create {
            name,
            bit_width,
            backend,
        } => create::execute(config, &name, bit_width, &backend).await,

        Commands::Update {
            id,
            input,
            code,
            append,
        } => update::execute(config, id, &input, code.as_deref(), append).await,

        Commands::Show { id, format } => show::execute(config, id, &format).await,

        Commands::List { format } => list::execute(config, &format).await,

        Commands::Run {
            id,
            backend,
            shots,
            bit_width,
            seed,
        } => run::execute(config, id, &backend, shots, bit_width, seed).await,

        Commands::Result { id, format } => result::execute(config, id, &format).await,

        Commands::Delete { id } => delete::execute_experiment(config, id).await,

        Commands::DeleteResult { result_id } => delete::execute_result(config, result_id).await,

        Commands::Validate { input } => validate::execute(&input),

        Commands::Backends => {
            backends::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
