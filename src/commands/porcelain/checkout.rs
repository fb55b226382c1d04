use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::Error;

impl Repository {
    /// Point HEAD at another existing branch.
    ///
    /// Working files are not touched. Fails with `DirtyIndex` while anything
    /// is staged, since the index is shared by all branches.
    pub fn checkout(&self, branch_name: &str) -> crate::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;

        let _lock = self.lock()?;

        if !self.refs().branch_exists(&branch_name) {
            return Err(Error::BranchNotFound {
                name: branch_name.to_string(),
            });
        }

        let staged = self.index().read_all()?;
        if !staged.is_empty() {
            return Err(Error::DirtyIndex {
                count: staged.len(),
            });
        }

        self.refs().write_head(&branch_name)?;
        tracing::info!(branch = %branch_name, "switched branch");

        Ok(())
    }
}
