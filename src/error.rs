//! Error types for the bundling pipeline.

use std::path::PathBuf;

/// Errors raised while discovering, reading or writing files.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// Directory traversal failed (missing root, permission denied, ...).
    #[error("failed to walk directory tree: {source}")]
    Walk {
        #[from]
        source: walkdir::Error,
    },

    /// The root directory could not be resolved to an absolute path.
    #[error("could not resolve root directory {}: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single input file could not be read. Recoverable.
    #[error("could not read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("error writing to output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BundleError {
    /// Process exit status for a fatal error.
    pub fn exit_code(&self) -> u8 {
        match self {
            BundleError::Output { .. } => 1,
            BundleError::Walk { .. } | BundleError::Root { .. } => 3,
            // Read errors never reach main, but keep them distinct.
            BundleError::Read { .. } => 4,
        }
    }

    /// Whether the run may continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BundleError::Read { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let output = BundleError::Output {
            path: PathBuf::from("out.cpp"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(output.exit_code(), 1);
        assert!(!output.is_recoverable());

        let read = BundleError::Read {
            path: PathBuf::from("a.h"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(read.is_recoverable());
        assert!(read.to_string().contains("a.h"));

        let root = BundleError::Root {
            path: PathBuf::from("."),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no cwd"),
        };
        assert_eq!(root.exit_code(), 3);
        assert!(!root.is_recoverable());

        let dir = tempfile::TempDir::new().unwrap();
        let walk_err = walkdir::WalkDir::new(dir.path().join("missing"))
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err();
        let walk = BundleError::from(walk_err);
        assert_eq!(walk.exit_code(), 3);
        assert!(!walk.is_recoverable());
    }
}
