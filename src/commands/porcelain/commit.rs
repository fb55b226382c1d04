use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;

impl Repository {
    /// Commit an explicit list of blob IDs on the current branch.
    ///
    /// The index is not read or cleared.
    pub fn commit(&self, blob_ids: &[ObjectId], message: &str) -> crate::Result<ObjectId> {
        let _lock = self.lock()?;

        self.write_commit(blob_ids, message.trim())
    }

    /// Commit everything in the index, in staging order, then clear it.
    pub fn commit_staged(&self, message: &str) -> crate::Result<ObjectId> {
        let _lock = self.lock()?;

        let blob_ids = self
            .index()
            .read_all()?
            .into_iter()
            .map(|entry| entry.oid)
            .collect::<Vec<_>>();
        if blob_ids.is_empty() {
            return Err(Error::NothingStaged);
        }

        let commit_id = self.write_commit(&blob_ids, message.trim())?;
        self.index().clear()?;

        Ok(commit_id)
    }
}
