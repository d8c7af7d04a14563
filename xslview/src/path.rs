//! Cleaning of user- and OS-supplied paths
//!
//! Paths arrive from file dialogs, drag-and-drop payloads and command lines,
//! often wrapped in quotes or carrying `.`/`..` segments. [`clean`] turns them
//! into a [`FilePath`] that the rest of the crate can trust.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A cleaned, lexically normalized path.
///
/// The empty value means "no path": it is what [`clean`] returns for empty
/// or unusable input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilePath(PathBuf);

impl FilePath {
    /// The "no path" marker
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.0.clone()
    }

    /// Whether the path currently names a regular file
    pub fn is_file(&self) -> bool {
        !self.is_empty() && self.0.is_file()
    }

    /// Case-insensitive extension test, `ext` given without the dot
    pub fn has_extension(&self, ext: &str) -> bool {
        self.0
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|e| e.eq_ignore_ascii_case(ext))
    }

    /// The path with every backslash shown as a forward slash
    pub fn display_slashes(&self) -> String {
        self.0.to_string_lossy().replace('\\', "/")
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}

/// Clean a raw path string.
///
/// Trims whitespace, removes one layer of matching `"` or `'` quotes, then
/// normalizes separators and `.`/`..` segments with the host's path rules.
/// Never fails; empty input gives [`FilePath::empty`].
pub fn clean(raw: &str) -> FilePath {
    let unquoted = strip_quotes(raw.trim());
    if unquoted.is_empty() {
        return FilePath::empty();
    }
    FilePath(normalize(Path::new(unquoted)))
}

/// Clean an OS string, e.g. a command-line argument.
///
/// Strings that are not valid UTF-8 are treated as unusable input.
pub fn clean_os(raw: &OsStr) -> FilePath {
    raw.to_str().map(clean).unwrap_or_default()
}

fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return s[1..s.len() - 1].trim();
        }
    }
    s
}

/// Lexically normalize a path without touching the filesystem.
///
/// `..` removes the preceding normal segment, is dropped directly after a
/// root, and is kept at the start of a relative path. A path that collapses
/// to nothing becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
