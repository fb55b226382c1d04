use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Working directory the repository tracks files from
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path relative to the workspace root when `file_path` lies inside it,
    /// otherwise the path as given.
    pub fn relative_path(&self, file_path: &Path) -> PathBuf {
        file_path
            .strip_prefix(self.path.as_ref())
            .map(PathBuf::from)
            .unwrap_or_else(|_| file_path.to_path_buf())
    }

    pub fn read_file(&self, file_path: &Path) -> crate::Result<Bytes> {
        let content = std::fs::read(self.path.join(file_path))?;

        Ok(content.into())
    }
}
