//! File discovery.
//!
//! Walks a directory tree top-down, prunes excluded directories before
//! descending into them and collects header and source files into two
//! sorted lists.

use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use crate::error::BundleError;
use crate::paths;
use crate::processing::{classify, DirectoryFilter};
use crate::types::FileKind;

/// Files found under a root directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredFiles {
    /// Absolute, normalized root that was walked
    pub root: PathBuf,
    /// Exclude prefixes that were active
    pub exclude_prefixes: Vec<String>,
    /// Header files, sorted ascending, no duplicates
    pub headers: Vec<PathBuf>,
    /// Source files, sorted ascending, no duplicates
    pub sources: Vec<PathBuf>,
}

impl DiscoveredFiles {
    /// Whether no header and no source file was found.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.sources.is_empty()
    }

    /// Total number of discovered files.
    pub fn len(&self) -> usize {
        self.headers.len() + self.sources.len()
    }

    /// The list for one file kind.
    pub fn files(&self, kind: FileKind) -> &[PathBuf] {
        match kind {
            FileKind::Header => &self.headers,
            FileKind::Source => &self.sources,
        }
    }

    /// All files, headers first, each with its kind.
    pub fn iter(&self) -> impl Iterator<Item = (FileKind, &Path)> {
        self.headers
            .iter()
            .map(|p| (FileKind::Header, p.as_path()))
            .chain(self.sources.iter().map(|p| (FileKind::Source, p.as_path())))
    }
}

/// Find header and source files under `root`.
///
/// Directories whose bare name starts with one of `exclude_prefixes` are
/// skipped along with everything below them. The root itself is never
/// skipped. Any traversal error aborts discovery.
pub fn discover(root: &Path, exclude_prefixes: &[String]) -> Result<DiscoveredFiles, BundleError> {
    let abs_root = paths::absolute(root).map_err(|source| BundleError::Root {
        path: root.to_path_buf(),
        source,
    })?;
    let filter = DirectoryFilter::from_prefixes(exclude_prefixes);

    info!("Starting search in: {}", abs_root.display());
    info!("Excluding directories starting with: {:?}", exclude_prefixes);

    let mut headers = Vec::new();
    let mut sources = Vec::new();

    let walker = WalkDir::new(&abs_root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            match filter.excluded_by(&name) {
                Some(prefix) => {
                    info!(prefix, "  Excluding directory: {}", entry.path().display());
                    false
                }
                None => true,
            }
        });

    for entry in walker {
        let entry = entry?;

        if entry.file_type().is_dir() {
            continue;
        }
        // Symlinked directories are listed but never followed
        if entry.path_is_symlink() && entry.path().is_dir() {
            continue;
        }

        match classify(entry.path()) {
            Some(FileKind::Header) => headers.push(entry.into_path()),
            Some(FileKind::Source) => sources.push(entry.into_path()),
            None => {}
        }
    }

    sort_paths(&mut headers);
    sort_paths(&mut sources);

    info!(
        "Found {} header files and {} source files.",
        headers.len(),
        sources.len()
    );

    Ok(DiscoveredFiles {
        root: abs_root,
        exclude_prefixes: exclude_prefixes.to_vec(),
        headers,
        sources,
    })
}

/// Sort by the raw path string and drop duplicates.
fn sort_paths(paths: &mut Vec<PathBuf>) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    paths.dedup();
}
