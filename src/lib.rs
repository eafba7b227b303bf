//! C++ Bundler Library
//!
//! Collects C++ headers and sources from a directory tree, drops local
//! `#include "..."` directives and concatenates everything into a single
//! annotated file.

pub mod bundle;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod paths;
pub mod processing;
pub mod types;

pub use bundle::Bundler;
pub use discovery::{discover, DiscoveredFiles};
pub use error::BundleError;
pub use output::BundleWriter;
pub use processing::{FileProcessor, IncludeFilter};
pub use types::{BundleConfig, BundleReport, FileKind, ProcessedFile};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::bundle::Bundler;
    pub use crate::discovery::*;
    pub use crate::error::BundleError;
    pub use crate::output::BundleWriter;
    pub use crate::processing::*;
    pub use crate::types::*;
}

/// Header file extensions (compared case-insensitively)
pub const HEADER_EXTENSIONS: &[&str] = &["h", "hpp"];

/// Source file extensions (compared case-insensitively)
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cxx", "cc"];

/// Directory name prefixes excluded when none are given: cmake build
/// trees, hidden directories and underscore directories.
pub const DEFAULT_EXCLUDE_PREFIXES: &[&str] = &["cmake-", ".", "_"];

/// Output file written when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "bundled_code_sys_includes.cpp";

/// Root directory searched when none is given
pub const DEFAULT_ROOT_DIR: &str = ".";
