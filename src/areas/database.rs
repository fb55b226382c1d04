//! Content-addressed object store
//!
//! Objects are written once, zlib-compressed, to `objects/<hex id>`. The ID
//! is the SHA-1 of the uncompressed bytes, so storing identical content twice
//! is a no-op and nothing is ever rewritten or deleted.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::errors::Error;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Store a raw payload and return its ID.
    pub fn put(&self, content: Bytes) -> crate::Result<ObjectId> {
        let object_id = ObjectId::hash(&content);
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if object_path.exists() {
            tracing::trace!(oid = %object_id, "object already stored");
        } else {
            self.write_object(object_path, content)?;
            tracing::debug!(oid = %object_id, "stored object");
        }

        Ok(object_id)
    }

    pub fn store(&self, object: &impl Object) -> crate::Result<ObjectId> {
        let object_id = self.put(object.serialize())?;
        tracing::trace!(oid = %object_id, kind = %object.object_type(), "stored typed object");

        Ok(object_id)
    }

    /// Read and decompress the raw payload stored under `object_id`.
    pub fn load(&self, object_id: &ObjectId) -> crate::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        let object_content = std::fs::read(&object_path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::ObjectNotFound {
                oid: object_id.clone(),
            },
            _ => Error::Io(err),
        })?;

        Self::decompress(&object_content).map_err(|err| Error::CorruptObject {
            oid: object_id.clone(),
            reason: err.to_string(),
        })
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> crate::Result<Blob> {
        self.parse_object(object_id)
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> crate::Result<Tree> {
        self.parse_object(object_id)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> crate::Result<Commit> {
        self.parse_object(object_id)
    }

    fn parse_object<T: Unpackable>(&self, object_id: &ObjectId) -> crate::Result<T> {
        let object_content = self.load(object_id)?;

        T::deserialize(Cursor::new(object_content)).map_err(|err| Error::CorruptObject {
            oid: object_id.clone(),
            reason: format!("{err:#}"),
        })
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> crate::Result<()> {
        std::fs::create_dir_all(&self.path)?;
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let object_content = Self::compress(&object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)?;
        file.write_all(&object_content)?;
        file.sync_all()?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path)?;

        Ok(())
    }

    fn compress(data: &[u8]) -> std::io::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;

        encoder.finish().map(Bytes::from)
    }

    /// Inflate a stored payload. A stream cut short before the zlib trailer
    /// fails with `UnexpectedEof`.
    fn decompress(data: &[u8]) -> std::io::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// IDs of every stored object, sorted.
    pub fn list_objects(&self) -> crate::Result<Vec<ObjectId>> {
        let mut object_ids = std::fs::read_dir(&self.path)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                ObjectId::try_parse(entry.file_name().to_string_lossy().into()).ok()
            })
            .collect::<Vec<_>>();
        object_ids.sort();

        Ok(object_ids)
    }
}
