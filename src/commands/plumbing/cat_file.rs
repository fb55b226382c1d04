use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;

impl Repository {
    /// Raw, uncompressed bytes of a stored object.
    pub fn cat_file(&self, object_id: &str) -> crate::Result<Bytes> {
        let object_id = ObjectId::try_parse(object_id.trim().to_string())?;

        self.database().load(&object_id)
    }
}
