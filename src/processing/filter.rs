//! Directory filtering rules.
//!
//! Prunes directories whose bare name starts with a configured prefix
//! (e.g. `cmake-build-debug`, `.git`, `__pycache__`).

/// Directory filter for deciding which subtrees to walk.
#[derive(Debug, Clone, Default)]
pub struct DirectoryFilter {
    /// Directory name prefixes to exclude. Matching is case-sensitive.
    exclude_prefixes: Vec<String>,
}

impl DirectoryFilter {
    /// Create a filter from a list of prefixes.
    pub fn from_prefixes(prefixes: &[String]) -> Self {
        Self {
            exclude_prefixes: prefixes.to_vec(),
        }
    }

    /// Check if a directory should be pruned.
    ///
    /// Returns the matching prefix if the bare directory name starts with
    /// any configured prefix.
    pub fn excluded_by(&self, dir_name: &str) -> Option<&str> {
        self.exclude_prefixes
            .iter()
            .find(|prefix| dir_name.starts_with(prefix.as_str()))
            .map(String::as_str)
    }

    /// Check if a directory should be pruned.
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.excluded_by(dir_name).is_some()
    }
}
