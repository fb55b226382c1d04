use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use std::path::Path;

impl Repository {
    /// Store a workspace file as a blob and append it to the index.
    ///
    /// The blob is written before the index line, so every staged ID names
    /// an existing object. Paths containing a line break are rejected since
    /// each index entry is one line.
    pub fn stage_file(&self, file_path: impl AsRef<Path>) -> crate::Result<ObjectId> {
        let _lock = self.lock()?;

        let file_path = self.workspace().relative_path(file_path.as_ref());
        if file_path.to_string_lossy().contains(['\n', '\r']) {
            return Err(Error::InvalidPath { path: file_path });
        }
        let data = self.workspace().read_file(&file_path)?;

        let blob_id = self.database().store(&Blob::new(data))?;
        self.index()
            .stage(&IndexEntry::new(blob_id.clone(), file_path))?;

        Ok(blob_id)
    }
}
