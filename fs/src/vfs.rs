use thiserror::Error;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub full_path: String,
    pub is_dir: bool,
}

pub type VfsResult<T> = Result<T, VfsError>;

/// Errors that can cross the filesystem boundary. Content handlers
/// catch every one of these and turn it into a single output line;
/// nothing here ever reaches the dispatcher.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VfsError {
    #[error("not found")]
    NotFound,
    #[error("not a directory")]
    NotDirectory,
    #[error("is a directory")]
    IsDirectory,
    #[error("invalid path")]
    InvalidPath,
    #[error("already exists")]
    AlreadyExists,
    #[error("I/O error: {0}")]
    Io(String),
}

/// The filesystem side of the platform boundary.
///
/// All paths are absolute shell paths (see [`crate::shellpath`]).
/// Directory paths may carry a trailing backslash or not; both forms
/// refer to the same directory.
pub trait FileSystem {
    fn exists(&self, path: &str) -> bool;

    fn is_dir(&self, path: &str) -> bool;

    /// List a directory. Entry order is implementation-defined but
    /// stable across calls.
    fn list_dir(&self, path: &str) -> VfsResult<Vec<DirEntry>>;

    fn read_to_string(&self, path: &str) -> VfsResult<String>;

    /// File contents split into lines; the terminating newline does not
    /// produce a trailing empty line.
    fn read_lines(&self, path: &str) -> VfsResult<Vec<String>> {
        Ok(self
            .read_to_string(path)?
            .lines()
            .map(String::from)
            .collect())
    }

    /// Create or truncate `path` with the given contents.
    fn write_all(&mut self, path: &str, text: &str) -> VfsResult<()>;

    fn create_dir(&mut self, path: &str) -> VfsResult<()>;

    /// Remove a file or an empty directory.
    fn remove(&mut self, path: &str) -> VfsResult<()>;
}
