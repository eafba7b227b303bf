//! End-to-end bundling pipeline: discover, filter, write.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::discovery::{discover, DiscoveredFiles};
use crate::error::BundleError;
use crate::output::BundleWriter;
use crate::processing::FileProcessor;
use crate::types::{BundleConfig, BundleReport, FileKind};

/// Runs a full bundling pass for one configuration.
pub struct Bundler {
    config: BundleConfig,
    base_dir: PathBuf,
    processor: FileProcessor,
}

impl Bundler {
    /// Create a bundler. Banner paths are shown relative to `base_dir`.
    pub fn new(config: BundleConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
            processor: FileProcessor::new(),
        }
    }

    /// Discover, process and write.
    ///
    /// Unreadable input files are logged and listed as skipped. Traversal
    /// and output errors abort the run.
    pub fn run(&self) -> Result<BundleReport, BundleError> {
        let discovered = discover(&self.config.root_dir, &self.config.exclude_prefixes)?;
        let writer = BundleWriter::new(&self.config.output, &self.base_dir);

        let mut report = BundleReport {
            output: self.config.output.clone(),
            headers: discovered.headers.len(),
            sources: discovered.sources.len(),
            ..Default::default()
        };

        if discovered.is_empty() {
            warn!("No header or source files found matching the criteria.");
            writer.write_empty(&self.config.root_dir, &self.config.exclude_prefixes)?;
            return Ok(report);
        }

        let contents = self.process_all(&discovered, &mut report);
        writer.write_bundle(&discovered, &contents)?;

        info!(
            bundled = report.bundled(),
            skipped = report.skipped.len(),
            removed_includes = report.removed_includes,
            "Bundling complete"
        );

        Ok(report)
    }

    /// Read and filter every discovered file, headers first.
    fn process_all(
        &self,
        discovered: &DiscoveredFiles,
        report: &mut BundleReport,
    ) -> HashMap<PathBuf, String> {
        let mut contents = HashMap::with_capacity(discovered.len());

        for kind in [FileKind::Header, FileKind::Source] {
            let files = discovered.files(kind);
            info!(
                "Processing {} {} files (removing local includes)...",
                files.len(),
                kind
            );

            for path in files {
                match self.processor.process(path, kind) {
                    Ok(processed) => {
                        report.removed_includes += processed.removed_includes;
                        contents.insert(processed.path, processed.content);
                    }
                    Err(e) => {
                        warn!(error = %e, "Warning: Could not read file {}", path.display());
                        report.skipped.push(path.clone());
                    }
                }
            }
        }

        contents
    }
}
