use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Error;

impl Repository {
    /// Store a tree of `blob_ids` and a commit on top of the current branch,
    /// then move the branch to the new commit.
    ///
    /// The ref update is the last write: if anything fails before it, the
    /// objects already written are unreachable but harmless. The caller must
    /// hold the repository lock.
    pub(crate) fn write_commit(
        &self,
        blob_ids: &[ObjectId],
        message: &str,
    ) -> crate::Result<ObjectId> {
        if let Some(missing) = blob_ids.iter().find(|oid| !self.database().contains(oid)) {
            return Err(Error::ObjectNotFound {
                oid: missing.clone(),
            });
        }

        let tree_id = self.database().store(&Tree::new(blob_ids.to_vec()))?;

        let branch_name = self.refs().read_head()?;
        // the first commit on a branch creates its ref file if it is missing
        let parent = match self.refs().read_ref(&branch_name) {
            Ok(parent) => parent,
            Err(Error::BranchNotFound { .. }) => None,
            Err(err) => return Err(err),
        };

        let date = self.config().commit_timestamp();
        let commit = Commit::new(parent, tree_id, date, message.to_string());
        let commit_id = self.database().store(&commit)?;

        self.refs().write_ref(&branch_name, &commit_id)?;
        tracing::info!(
            branch = %branch_name,
            commit = %commit_id,
            parent = ?commit.parent().map(ObjectId::to_short_oid),
            "recorded commit"
        );

        Ok(commit_id)
    }
}
