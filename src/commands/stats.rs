//! Show persisted statistics

use crate::output::print_statistics;
use crate::stats::Statistics;
use anyhow::{Context, Result};
use std::path::Path;

/// Print the statistics stored at `path`
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn show_stats(path: &Path) -> Result<Statistics> {
    let stats = Statistics::load(path)
        .with_context(|| format!("cannot read statistics from {}", path.display()))?;
    print_statistics(&stats);
    Ok(stats)
}
