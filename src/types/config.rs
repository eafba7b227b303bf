//! Configuration types for bundling.

use serde::Serialize;
use std::path::PathBuf;

use crate::{DEFAULT_EXCLUDE_PREFIXES, DEFAULT_OUTPUT_FILE, DEFAULT_ROOT_DIR};

/// Configuration for a single bundling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleConfig {
    /// Directory to search, as given by the user
    pub root_dir: PathBuf,

    /// Path of the bundled output file
    pub output: PathBuf,

    /// Directory name prefixes to prune from the walk
    pub exclude_prefixes: Vec<String>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            exclude_prefixes: default_exclude_prefixes(),
        }
    }
}

/// The default exclude prefixes as owned strings.
pub fn default_exclude_prefixes() -> Vec<String> {
    DEFAULT_EXCLUDE_PREFIXES.iter().map(|s| s.to_string()).collect()
}

impl BundleConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `BUNDLER_ROOT_DIR`, `BUNDLER_OUTPUT` and `BUNDLER_EXCLUDE`
    /// (comma separated). Unset variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            root_dir: lookup("BUNDLER_ROOT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.root_dir),
            output: lookup("BUNDLER_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output),
            exclude_prefixes: lookup("BUNDLER_EXCLUDE")
                .map(|s| parse_prefix_list(&s))
                .unwrap_or(defaults.exclude_prefixes),
        }
    }

    /// Set the root directory.
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Replace the exclude prefixes.
    pub fn with_exclude_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }
}

/// Split a comma separated prefix list. An empty string yields no prefixes.
fn parse_prefix_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}
