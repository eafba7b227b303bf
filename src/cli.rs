//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::types::BundleConfig;
use crate::{DEFAULT_EXCLUDE_PREFIXES, DEFAULT_OUTPUT_FILE};

/// Bundle C++ header and source files into a single file, keeping system
/// includes (#include <...>) and removing local includes (#include "...").
#[derive(Debug, Parser)]
#[command(
    name = "cpp-bundler",
    version,
    after_help = "Example:\n  cpp-bundler ./my_project -o bundled.cpp -e build .git venv\n\n\
                  Searches ./my_project, skips directories starting with 'build', '.git'\n\
                  or 'venv' and writes the bundle to bundled.cpp."
)]
pub struct Cli {
    /// Root directory to search for C++/H files [default: .]
    pub root_dir: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = format!("Output bundle file [default: {DEFAULT_OUTPUT_FILE}]")
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "PREFIX",
        num_args = 0..,
        help = format!(
            "Directory name prefixes to exclude [default: {}]",
            DEFAULT_EXCLUDE_PREFIXES.join(" ")
        )
    )]
    pub exclude: Option<Vec<String>>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line values on top of `base`.
    ///
    /// `-e` with no values clears the exclude set; omitting it keeps the
    /// base prefixes.
    pub fn into_config(self, base: BundleConfig) -> BundleConfig {
        BundleConfig {
            root_dir: self.root_dir.unwrap_or(base.root_dir),
            output: self.output.unwrap_or(base.output),
            exclude_prefixes: self.exclude.unwrap_or(base.exclude_prefixes),
        }
    }
}
