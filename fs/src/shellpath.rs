//! The shell path scheme: absolute paths rooted at the `0:` drive with
//! backslash separators (`0:\Documents\notes.txt`). Directory paths are
//! canonically written with a trailing backslash; every helper accepts
//! both forms.

use crate::vfs::{VfsError, VfsResult};

pub const ROOT: &str = "0:\\";
pub const SEPARATOR: char = '\\';

const DRIVE_PREFIX: &str = "0:";

#[inline]
pub fn is_absolute(path: &str) -> bool {
    let rest = match path.strip_prefix(DRIVE_PREFIX) {
        Some(rest) => rest,
        None => return false,
    };
    rest.is_empty() || rest.starts_with(SEPARATOR)
}

#[inline]
pub fn is_root(path: &str) -> bool {
    matches!(path.strip_prefix(DRIVE_PREFIX), Some("") | Some("\\"))
}

/// Join a base directory and a relative name.
pub fn join(base: &str, name: &str) -> String {
    let base = base.trim_end_matches(SEPARATOR);
    let name = name.trim_start_matches(SEPARATOR);
    format!("{base}{SEPARATOR}{name}")
}

/// Canonical directory form: trailing separator.
pub fn ensure_dir(path: &str) -> String {
    if path.ends_with(SEPARATOR) {
        path.to_string()
    } else {
        format!("{path}{SEPARATOR}")
    }
}

/// Parent directory in canonical form. The root is its own parent.
pub fn parent(path: &str) -> String {
    if is_root(path) {
        return ROOT.to_string();
    }
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(idx) => ensure_dir(&trimmed[..=idx]),
        None => ROOT.to_string(),
    }
}

/// Final path component, without separators.
pub fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Split an absolute path into its components below the drive root.
/// Empty components (doubled separators) are skipped; `.`/`..` are not
/// resolved here and are rejected to keep implementations honest.
pub fn segments(path: &str) -> VfsResult<Vec<&str>> {
    if !is_absolute(path) {
        return Err(VfsError::InvalidPath);
    }
    let rest = &path[DRIVE_PREFIX.len()..];
    let mut out = Vec::new();
    for seg in rest.split(SEPARATOR) {
        match seg {
            "" => continue,
            "." | ".." => return Err(VfsError::InvalidPath),
            _ => out.push(seg),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_recognized() {
        assert!(is_root("0:\\"));
        assert!(is_root("0:"));
        assert!(!is_root("0:\\Documents"));
    }

    #[test]
    fn join_and_parent_round_trip() {
        let docs = ensure_dir(&join(ROOT, "Documents"));
        assert_eq!(docs, "0:\\Documents\\");
        assert_eq!(parent(&docs), ROOT);
        assert_eq!(parent("0:\\a\\b\\c.txt"), "0:\\a\\b\\");
    }

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(file_name("0:\\a\\b\\c.txt"), "c.txt");
        assert_eq!(file_name("0:\\Documents\\"), "Documents");
    }

    #[test]
    fn segments_reject_relative_paths() {
        assert_eq!(segments("Documents"), Err(VfsError::InvalidPath));
        assert_eq!(segments("0:\\a\\b").unwrap(), vec!["a", "b"]);
        assert!(segments("0:\\a\\..\\b").is_err());
    }
}
