use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::rev_list::{CommitRecord, RevList};
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// History of a branch, newest first. Empty when the branch has no commits.
    pub fn log(&self, branch: &str) -> crate::Result<Vec<CommitRecord>> {
        let branch_name = BranchName::try_parse(branch.to_string())?;
        let start = self.refs().read_ref(&branch_name)?;

        RevList::new(self.database(), start).collect()
    }

    /// History of the current branch.
    pub fn log_head(&self) -> crate::Result<Vec<CommitRecord>> {
        let start = self.refs().read_head_oid()?;

        RevList::new(self.database(), start).collect()
    }

    /// A single commit, without walking its parents.
    pub fn read_commit(&self, commit_id: &ObjectId) -> crate::Result<CommitRecord> {
        let commit = self.database().parse_object_as_commit(commit_id)?;

        Ok(CommitRecord::from_commit(commit_id.clone(), commit))
    }
}
