//! Hand each fruit in the sample fridge to a callback.

use std::io::{self, Write};

use anyhow::{Context, Result};
use fridge::report;
use fridge::RecordStore;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(io::stderr)
        .init();

    let fridge = RecordStore::sample();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run_internal(&fridge, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
