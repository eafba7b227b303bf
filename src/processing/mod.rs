//! Processing module for file classification and content filtering.
//!
//! This module provides:
//! - File kind detection from extensions
//! - Directory filtering by name prefix
//! - Local include stripping with tolerant decoding

pub mod file_processor;
pub mod filter;
pub mod includes;
pub mod language;

pub use file_processor::FileProcessor;
pub use filter::DirectoryFilter;
pub use includes::{include_kind, physical_lines, FilteredContent, IncludeFilter, IncludeKind};
pub use language::classify;
