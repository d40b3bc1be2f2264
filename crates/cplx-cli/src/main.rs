use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    merge::{self, MergeArgs},
    query::{self, QueryArgs},
    translate::{self, TranslateArgs},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

const DEFAULT_FILTER: &str = "cplx=info";

#[derive(Parser, Debug)]
#[command(
    name = "cplx",
    version,
    about = "Merge classical and quantum algorithm complexity tables"
)]
struct Cli {
    /// Log filter applied to every cplx crate (for example `debug`); takes
    /// precedence over `RUST_LOG`.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full merge pipeline described by a YAML configuration.
    Merge(MergeArgs),
    /// Translate notation strings and print the canonical formulas.
    Translate(TranslateArgs),
    /// Look up variants in a previously written result document.
    Query(QueryArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;
    match cli.command {
        Command::Merge(args) => merge::run(&args),
        Command::Translate(args) => translate::run(&args),
        Command::Query(args) => query::run(&args),
    }
}

// Logs go to stderr so JSON on stdout stays machine readable.
fn init_tracing(level: Option<&str>) -> Result<(), Box<dyn Error>> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(format!("cplx={level}"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
