//! In-memory filesystem. Tests and embedders seed it with
//! [`RamFs::add_dir`] / [`RamFs::add_file`]; the shell then reads and
//! writes it like any other [`FileSystem`].

use std::collections::BTreeMap;

use crate::shellpath;
use crate::vfs::{DirEntry, FileSystem, VfsError, VfsResult};

enum Node {
    File(String),
    Dir(BTreeMap<String, Node>),
}

impl Node {
    fn is_dir(&self) -> bool {
        matches!(self, Node::Dir(_))
    }
}

pub struct RamFs {
    root: BTreeMap<String, Node>,
}

impl RamFs {
    pub fn new() -> Self {
        Self {
            root: BTreeMap::new(),
        }
    }

    /// Seed a directory, creating intermediate directories as needed.
    pub fn add_dir(&mut self, path: &str) -> VfsResult<()> {
        let segs = shellpath::segments(path)?;
        let mut cur = &mut self.root;
        for seg in segs {
            let node = cur
                .entry(seg.to_string())
                .or_insert_with(|| Node::Dir(BTreeMap::new()));
            match node {
                Node::Dir(children) => cur = children,
                Node::File(_) => return Err(VfsError::NotDirectory),
            }
        }
        Ok(())
    }

    /// Seed a file, creating parent directories as needed.
    pub fn add_file(&mut self, path: &str, contents: &str) -> VfsResult<()> {
        self.add_dir(&shellpath::parent(path))?;
        self.write_all(path, contents)
    }

    fn lookup(&self, path: &str) -> VfsResult<&Node> {
        let segs = shellpath::segments(path)?;
        if segs.is_empty() {
            return Ok(&ROOT_NODE);
        }
        let mut cur = &self.root;
        let last = segs.len() - 1;
        for (i, seg) in segs.iter().enumerate() {
            let node = cur.get(*seg).ok_or(VfsError::NotFound)?;
            if i == last {
                return Ok(node);
            }
            match node {
                Node::Dir(children) => cur = children,
                Node::File(_) => return Err(VfsError::NotDirectory),
            }
        }
        unreachable!()
    }

    fn dir_children(&self, path: &str) -> VfsResult<&BTreeMap<String, Node>> {
        if shellpath::is_root(path) {
            return Ok(&self.root);
        }
        match self.lookup(path)? {
            Node::Dir(children) => Ok(children),
            Node::File(_) => Err(VfsError::NotDirectory),
        }
    }

    fn parent_children_mut(&mut self, path: &str) -> VfsResult<&mut BTreeMap<String, Node>> {
        let parent = shellpath::parent(path);
        if shellpath::is_root(&parent) {
            return Ok(&mut self.root);
        }
        let segs = shellpath::segments(&parent)?;
        let mut cur = &mut self.root;
        for seg in segs {
            match cur.get_mut(seg).ok_or(VfsError::NotFound)? {
                Node::Dir(children) => cur = children,
                Node::File(_) => return Err(VfsError::NotDirectory),
            }
        }
        Ok(cur)
    }
}

static ROOT_NODE: Node = Node::Dir(BTreeMap::new());

impl Default for RamFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RamFs {
    fn exists(&self, path: &str) -> bool {
        shellpath::is_root(path) || self.lookup(path).is_ok()
    }

    fn is_dir(&self, path: &str) -> bool {
        shellpath::is_root(path)
            || self
                .lookup(path)
                .map(|node| node.is_dir())
                .unwrap_or(false)
    }

    fn list_dir(&self, path: &str) -> VfsResult<Vec<DirEntry>> {
        let children = self.dir_children(path)?;
        Ok(children
            .iter()
            .map(|(name, node)| DirEntry {
                name: name.clone(),
                full_path: shellpath::join(path, name),
                is_dir: node.is_dir(),
            })
            .collect())
    }

    fn read_to_string(&self, path: &str) -> VfsResult<String> {
        match self.lookup(path)? {
            Node::File(contents) => Ok(contents.clone()),
            Node::Dir(_) => Err(VfsError::IsDirectory),
        }
    }

    fn write_all(&mut self, path: &str, text: &str) -> VfsResult<()> {
        let name = shellpath::file_name(path).to_string();
        if name.is_empty() {
            return Err(VfsError::InvalidPath);
        }
        let children = self.parent_children_mut(path)?;
        match children.get(&name) {
            Some(Node::Dir(_)) => Err(VfsError::IsDirectory),
            _ => {
                children.insert(name, Node::File(text.to_string()));
                Ok(())
            }
        }
    }

    fn create_dir(&mut self, path: &str) -> VfsResult<()> {
        let name = shellpath::file_name(path).to_string();
        if name.is_empty() {
            return Err(VfsError::InvalidPath);
        }
        let children = self.parent_children_mut(path)?;
        if children.contains_key(&name) {
            return Err(VfsError::AlreadyExists);
        }
        children.insert(name, Node::Dir(BTreeMap::new()));
        Ok(())
    }

    fn remove(&mut self, path: &str) -> VfsResult<()> {
        let name = shellpath::file_name(path).to_string();
        let children = self.parent_children_mut(path)?;
        match children.get(&name) {
            None => Err(VfsError::NotFound),
            Some(Node::Dir(grandchildren)) if !grandchildren.is_empty() => {
                Err(VfsError::IsDirectory)
            }
            Some(_) => {
                children.remove(&name);
                Ok(())
            }
        }
    }
}
