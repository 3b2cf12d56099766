//! Host-directory filesystem: maps the `0:\` namespace onto a directory
//! of the machine running the shell. `0:\Documents\a.txt` becomes
//! `<root>/Documents/a.txt`.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::shellpath;
use crate::vfs::{DirEntry, FileSystem, VfsError, VfsResult};

pub struct HostFs {
    root: PathBuf,
}

impl HostFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> VfsResult<PathBuf> {
        let segs = shellpath::segments(path)?;
        let mut out = self.root.clone();
        for seg in segs {
            out.push(seg);
        }
        Ok(out)
    }
}

fn map_io(err: io::Error) -> VfsError {
    match err.kind() {
        io::ErrorKind::NotFound => VfsError::NotFound,
        io::ErrorKind::AlreadyExists => VfsError::AlreadyExists,
        _ => VfsError::Io(err.to_string()),
    }
}

impl FileSystem for HostFs {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.exists()).unwrap_or(false)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_dir()).unwrap_or(false)
    }

    fn list_dir(&self, path: &str) -> VfsResult<Vec<DirEntry>> {
        let host = self.resolve(path)?;
        if !host.is_dir() {
            return Err(if host.exists() {
                VfsError::NotDirectory
            } else {
                VfsError::NotFound
            });
        }
        let mut entries = Vec::new();
        for item in fs::read_dir(&host).map_err(map_io)? {
            let item = item.map_err(map_io)?;
            let name = item.file_name().to_string_lossy().into_owned();
            let is_dir = item.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push(DirEntry {
                full_path: shellpath::join(path, &name),
                name,
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &str) -> VfsResult<String> {
        let host = self.resolve(path)?;
        if host.is_dir() {
            return Err(VfsError::IsDirectory);
        }
        fs::read_to_string(&host).map_err(map_io)
    }

    fn write_all(&mut self, path: &str, text: &str) -> VfsResult<()> {
        let host = self.resolve(path)?;
        fs::write(&host, text).map_err(map_io)
    }

    fn create_dir(&mut self, path: &str) -> VfsResult<()> {
        let host = self.resolve(path)?;
        fs::create_dir(&host).map_err(map_io)
    }

    fn remove(&mut self, path: &str) -> VfsResult<()> {
        let host = self.resolve(path)?;
        if host.is_dir() {
            fs::remove_dir(&host).map_err(map_io)
        } else {
            fs::remove_file(&host).map_err(map_io)
        }
    }
}
