use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Blob IDs recorded by a commit, in commit order.
    pub fn ls_tree(&self, commit_id: &ObjectId) -> crate::Result<Vec<ObjectId>> {
        let commit = self.database().parse_object_as_commit(commit_id)?;
        let tree = self.database().parse_object_as_tree(commit.tree_oid())?;

        Ok(tree.entries().to_vec())
    }
}
