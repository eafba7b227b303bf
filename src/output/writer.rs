//! Bundle writer.
//!
//! Renders processed file contents into one C++ file framed by `//`
//! comment banners, headers first, then sources.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::discovery::DiscoveredFiles;
use crate::error::BundleError;
use crate::paths;
use crate::types::FileKind;

const RULE: &str = "// ==================================================";

/// Writes the bundled output file.
#[derive(Debug, Clone)]
pub struct BundleWriter {
    output: PathBuf,
    base_dir: PathBuf,
}

impl BundleWriter {
    /// Create a writer for `output`. Banner paths are shown relative to
    /// `base_dir`, normally the current working directory.
    pub fn new(output: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            base_dir: base_dir.into(),
        }
    }

    /// Write the full bundle.
    ///
    /// `contents` maps each discovered path to its processed content. A
    /// discovered path missing from the map is listed as skipped.
    pub fn write_bundle(
        &self,
        discovered: &DiscoveredFiles,
        contents: &HashMap<PathBuf, String>,
    ) -> Result<(), BundleError> {
        info!(
            "Writing bundled code (keeping system includes) to {}...",
            self.output.display()
        );
        self.write_file(|w| self.render_bundle(w, discovered, contents))?;
        info!(
            "Successfully bundled files (keeping system includes) into {}",
            self.output.display()
        );
        Ok(())
    }

    /// Write the placeholder used when no files were found.
    pub fn write_empty(&self, root: &Path, exclude_prefixes: &[String]) -> Result<(), BundleError> {
        self.write_file(|w| self.render_empty(w, root, exclude_prefixes))?;
        info!("Created empty output file: {}", self.output.display());
        Ok(())
    }

    /// Render the full bundle into `w`.
    pub fn render_bundle<W: Write>(
        &self,
        w: &mut W,
        discovered: &DiscoveredFiles,
        contents: &HashMap<PathBuf, String>,
    ) -> io::Result<()> {
        let headers = discovered.files(FileKind::Header);
        let sources = discovered.files(FileKind::Source);

        writeln!(w, "{RULE}")?;
        writeln!(w, "// Bundled C++ Code (Local #includes removed)")?;
        writeln!(w, "// System includes (#include <...>) are kept in place.")?;
        writeln!(w, "// Generated by script from:")?;
        if !headers.is_empty() {
            writeln!(w, "//   {} Header Files (.h, .hpp)", headers.len())?;
        }
        if !sources.is_empty() {
            writeln!(w, "//   {} Source Files (.cpp, .cxx, .cc)", sources.len())?;
        }
        writeln!(w, "// Target file: {}", self.target_name())?;
        writeln!(w, "{RULE}\n")?;

        self.render_section(w, FileKind::Header, headers, contents)?;
        self.render_section(w, FileKind::Source, sources, contents)?;

        writeln!(w, "{RULE}")?;
        writeln!(w, "// End of Bundled Code")?;
        writeln!(w, "{RULE}")?;
        Ok(())
    }

    /// Render the "nothing found" placeholder into `w`.
    pub fn render_empty<W: Write>(
        &self,
        w: &mut W,
        root: &Path,
        exclude_prefixes: &[String],
    ) -> io::Result<()> {
        writeln!(w, "// Bundled C++ Code - Generated by script")?;
        writeln!(w, "// Target file: {}", self.target_name())?;
        writeln!(
            w,
            "// No source or header files found in '{}' (excluding prefixes: {})",
            root.display(),
            quoted_list(exclude_prefixes)
        )?;
        writeln!(
            w,
            "// NOTE: This script version removes local #includes and keeps system #includes."
        )?;
        Ok(())
    }

    fn render_section<W: Write>(
        &self,
        w: &mut W,
        kind: FileKind,
        files: &[PathBuf],
        contents: &HashMap<PathBuf, String>,
    ) -> io::Result<()> {
        writeln!(w, "{RULE}")?;
        writeln!(w, "// {} Content ({} files)", kind.section_label(), files.len())?;
        writeln!(w, "{RULE}\n")?;

        if files.is_empty() {
            writeln!(w, "// --- No {} files found ---\n", kind.noun())?;
            return Ok(());
        }

        for path in files {
            let rel_path = self.display_path(path);
            match contents.get(path) {
                Some(content) => {
                    writeln!(w, "// --- Content From: {rel_path} ---\n")?;
                    writeln!(w, "{}", content.trim())?;
                    writeln!(w, "\n// --- End Content From: {rel_path} ---\n")?;
                }
                None => {
                    writeln!(w, "// --- Skipped (Error Reading?): {rel_path} ---\n")?;
                }
            }
        }
        Ok(())
    }

    /// Path shown in banners, relative to the base directory.
    pub fn display_path(&self, path: &Path) -> String {
        paths::relative_to(path, &self.base_dir).display().to_string()
    }

    /// Base name of the output file.
    fn target_name(&self) -> String {
        self.output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output.display().to_string())
    }

    fn write_file<F>(&self, render: F) -> Result<(), BundleError>
    where
        F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
    {
        let to_error = |source: io::Error| BundleError::Output {
            path: self.output.clone(),
            source,
        };

        let file = File::create(&self.output).map_err(to_error)?;
        let mut writer = BufWriter::new(file);
        render(&mut writer).map_err(to_error)?;
        writer.flush().map_err(to_error)
    }
}

/// Render a list as `['a', 'b']`.
fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}
