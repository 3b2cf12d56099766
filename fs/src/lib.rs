//! Filesystem boundary for the Vesper shell.
//!
//! Content handlers speak the shell path scheme (`0:\Documents\a.txt`,
//! backslash-separated, rooted at the `0:` drive) against the
//! [`FileSystem`] trait. Two implementations ship in-tree: [`RamFs`]
//! (in-memory, used by tests and embedders) and [`HostFs`] (maps the
//! shell namespace onto a host directory).

pub mod hostfs;
pub mod ramfs;
pub mod shellpath;
pub mod vfs;

#[cfg(test)]
mod tests;

pub use hostfs::HostFs;
pub use ramfs::RamFs;
pub use vfs::{DirEntry, FileSystem, VfsError, VfsResult};
