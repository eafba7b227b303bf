//! Lexical path helpers.
//!
//! Nothing here touches the filesystem apart from reading the current
//! working directory.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current working directory and fold
/// `.` and `..` components.
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    Ok(normalize(&std::env::current_dir()?.join(path)))
}

/// Fold `.` and `..` components without resolving symlinks.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Express `path` relative to `base`. Both should be absolute.
///
/// Returns `.` when they are equal. When they share no root (different
/// Windows drives) `path` is returned unchanged.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize(path);
    let base = normalize(base);

    let mut path_iter = path.components().peekable();
    let mut base_iter = base.components().peekable();

    let mut shared = 0;
    while let (Some(p), Some(b)) = (path_iter.peek(), base_iter.peek()) {
        if p != b {
            break;
        }
        path_iter.next();
        base_iter.next();
        shared += 1;
    }

    if shared == 0 && path.has_root() {
        return path;
    }

    let mut rel = PathBuf::new();
    for _ in base_iter {
        rel.push("..");
    }
    for component in path_iter {
        rel.push(component.as_os_str());
    }

    if rel.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        rel
    }
}
