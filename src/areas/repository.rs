use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::lock::RepositoryLock;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::config::Config;
use crate::errors::Error;
use std::path::Path;

/// Handle on one repository
///
/// All state lives on disk under `<root>/<repository_dir>`; the handle only
/// knows where. Several handles, even on different repositories, can coexist
/// in one process.
#[derive(Debug)]
pub struct Repository {
    path: Box<Path>,
    config: Config,
    database: Database,
    index: Index,
    refs: Refs,
    workspace: Workspace,
}

impl Repository {
    /// Build a handle without checking that the repository exists.
    pub fn new(root: impl AsRef<Path>, config: Config) -> Self {
        let root = root.as_ref();
        let repository_path = root.join(&config.repository_dir);

        Repository {
            database: Database::new(repository_path.join("objects").into_boxed_path()),
            index: Index::new(repository_path.join("index").into_boxed_path()),
            refs: Refs::new(repository_path.clone().into_boxed_path()),
            workspace: Workspace::new(root.to_path_buf().into_boxed_path()),
            path: repository_path.into_boxed_path(),
            config,
        }
    }

    /// Open an existing repository with the default configuration.
    pub fn open(root: impl AsRef<Path>) -> crate::Result<Self> {
        Self::open_with_config(root, Config::default())
    }

    pub fn open_with_config(root: impl AsRef<Path>, config: Config) -> crate::Result<Self> {
        let repository = Self::new(root, config);

        if !repository.path().is_dir() {
            return Err(Error::NotARepository {
                path: repository.path().to_path_buf(),
            });
        }

        Ok(repository)
    }

    /// Directory holding objects, refs, HEAD and the index
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Take the write lock for the duration of a mutating operation.
    pub fn lock(&self) -> crate::Result<RepositoryLock> {
        RepositoryLock::acquire(&self.path)
    }
}
