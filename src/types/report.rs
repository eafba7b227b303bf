//! Summary of a bundling run.

use serde::Serialize;
use std::path::PathBuf;

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BundleReport {
    /// Output file that was written
    pub output: PathBuf,

    /// Header files discovered
    pub headers: usize,

    /// Source files discovered
    pub sources: usize,

    /// Files listed as skipped because they could not be read
    pub skipped: Vec<PathBuf>,

    /// Local include lines dropped across all files
    pub removed_includes: usize,
}

impl BundleReport {
    /// Whether discovery found nothing and a placeholder was written.
    pub fn is_empty(&self) -> bool {
        self.headers == 0 && self.sources == 0
    }

    /// Files whose content made it into the bundle.
    pub fn bundled(&self) -> usize {
        (self.headers + self.sources).saturating_sub(self.skipped.len())
    }
}
