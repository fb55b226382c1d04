use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::config::Config;
use std::fs;
use std::path::Path;

impl Repository {
    /// Create the repository layout under the handle's path.
    ///
    /// Running it again on an existing repository only fills in what is
    /// missing: HEAD and existing refs are left alone.
    pub fn init(&self) -> crate::Result<()> {
        fs::create_dir_all(self.database().objects_path())?;
        fs::create_dir_all(self.refs().refs_path())?;

        let _lock = self.lock()?;

        let default_branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        if !self.refs().head_path().exists() {
            self.refs().write_head(&default_branch)?;
        }

        // make sure the default branch ref exists so HEAD always resolves
        if !self.refs().branch_exists(&default_branch) {
            self.refs().create_branch(&default_branch, None)?;
        }

        tracing::info!(path = %self.path().display(), "initialized repository");

        Ok(())
    }

    /// Create (or complete) a repository under `root` and open it.
    pub fn init_repo(root: impl AsRef<Path>, config: Config) -> crate::Result<Self> {
        let repository = Self::new(root, config);
        repository.init()?;

        Ok(repository)
    }
}
