//! Temporary directory trees

use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for a temporary photo tree
#[derive(Debug, Default)]
pub struct TreeBuilder {
    root_name: Option<String>,
    directories: Vec<PathBuf>,
    files: Vec<(PathBuf, Vec<u8>)>,
}

/// A built tree; removed from disk when dropped
#[derive(Debug)]
pub struct TestTree {
    dir: TempDir,
    root: PathBuf,
}

impl TreeBuilder {
    /// Create a new tree builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the tree in a named subdirectory of the temporary directory,
    /// so the root's own name is known to the test
    pub fn with_root_name(mut self, name: &str) -> Self {
        self.root_name = Some(name.to_string());
        self
    }

    /// Add a directory (and its parents), relative to the root
    pub fn dir(mut self, path: &str) -> Self {
        self.directories.push(PathBuf::from(path));
        self
    }

    /// Add several directories
    pub fn dirs<'a>(mut self, paths: impl IntoIterator<Item = &'a str>) -> Self {
        self.directories.extend(paths.into_iter().map(PathBuf::from));
        self
    }

    /// Add a file with content, creating its parent directories
    pub fn file(mut self, path: &str, content: &[u8]) -> Self {
        self.files.push((PathBuf::from(path), content.to_vec()));
        self
    }

    /// Write the tree to disk
    pub fn build(self) -> io::Result<TestTree> {
        let dir = TempDir::new()?;
        let root = match &self.root_name {
            Some(name) => dir.path().join(name),
            None => dir.path().to_path_buf(),
        };
        std::fs::create_dir_all(&root)?;

        for directory in &self.directories {
            std::fs::create_dir_all(root.join(directory))?;
        }

        for (path, content) in &self.files {
            let full_path = root.join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(full_path, content)?;
        }

        Ok(TestTree { dir, root })
    }
}

impl TestTree {
    /// Root of the tree
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// The temporary directory holding the tree
    pub fn temp_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of an entry relative to the root
    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}
