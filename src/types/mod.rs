//! Core types for the bundler.

mod config;
mod report;
mod source;

pub use config::{default_exclude_prefixes, BundleConfig};
pub use report::BundleReport;
pub use source::{FileKind, ProcessedFile};
