//! Output module for writing the bundled file.

mod writer;

pub use writer::BundleWriter;
