//! Pull the fruits out of the sample fridge one at a time.

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
    report::run_external(&fridge, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
