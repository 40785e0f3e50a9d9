use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fridge::report;
use fridge::{RecordStore, Style};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fridge", about = "List the fruits in a fridge with either iterator style")]
struct Cli {
    /// Log iterator activity to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pull fruits from a stateful cursor.
    External {
        /// Records file (`<kind>\t<name>\t<quantity>` per line). Defaults to the sample fridge.
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Push fruits into a callback.
    Internal {
        /// Records file (`<kind>\t<name>\t<quantity>` per line). Defaults to the sample fridge.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (style, input) = match cli.command {
        Commands::External { input } => (Style::External, input),
        Commands::Internal { input } => (Style::Internal, input),
    };

    let fridge = match input {
        Some(path) => load_store(&path)?,
        None => RecordStore::sample(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run(style, &fridge, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_store(path: &Path) -> Result<RecordStore> {
    let file = File::open(path)
        .with_context(|| format!("failed to open records file {}", path.display()))?;
    RecordStore::read_from(BufReader::new(file))
        .with_context(|| format!("failed to load records from {}", path.display()))
}
