//! Output lines and the two driver runs shared by the binaries

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::iter::{try_for_each_fruit, FruitIterator};
use crate::record::Record;
use crate::store::RecordStore;

/// Which iteration style produced a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Pull-based cursor
    External,
    /// Push-based traversal
    Internal,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::External => f.write_str("external"),
            Style::Internal => f.write_str("internal"),
        }
    }
}

/// Render one report line: `<style> iterator! fruit: <name>, <quantity>`
pub fn format_line(style: Style, record: &Record) -> String {
    format!(
        "{} iterator! fruit: {}, {}",
        style,
        record.name(),
        record.quantity()
    )
}

/// Report every fruit by pulling from a [`FruitIterator`]
///
/// Returns the number of lines written.
pub fn run_external<W: Write>(fridge: &RecordStore, out: &mut W) -> Result<usize> {
    let mut iterator = FruitIterator::new(fridge);
    let mut written = 0;

    while iterator.has_next() {
        let fruit = iterator.get_next()?;
        writeln!(out, "{}", format_line(Style::External, fruit))
            .with_context(|| format!("failed to write fruit {}", fruit.name()))?;
        written += 1;
    }

    debug!(written, "external run complete");
    Ok(written)
}

/// Report every fruit through [`try_for_each_fruit`]
///
/// Returns the number of lines written.
pub fn run_internal<W: Write>(fridge: &RecordStore, out: &mut W) -> Result<usize> {
    let mut written = 0;

    try_for_each_fruit(fridge, |fruit| {
        writeln!(out, "{}", format_line(Style::Internal, fruit))
            .with_context(|| format!("failed to write fruit {}", fruit.name()))?;
        written += 1;
        Ok::<(), anyhow::Error>(())
    })?;

    debug!(written, "internal run complete");
    Ok(written)
}

/// Dispatch to the driver for `style`
pub fn run<W: Write>(style: Style, fridge: &RecordStore, out: &mut W) -> Result<usize> {
    match style {
        Style::External => run_external(fridge, out),
        Style::Internal => run_internal(fridge, out),
    }
}
