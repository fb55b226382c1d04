use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::Path;

impl Repository {
    /// Blob ID of a workspace file; stores the blob when `write` is set.
    pub fn hash_object(&self, file_path: impl AsRef<Path>, write: bool) -> crate::Result<ObjectId> {
        let object_data = self.workspace().read_file(file_path.as_ref())?;
        let blob = Blob::new(object_data);

        if !write {
            return Ok(blob.object_id());
        }

        let _lock = self.lock()?;
        self.database().store(&blob)
    }
}
