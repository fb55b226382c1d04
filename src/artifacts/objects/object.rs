use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

pub trait Packable {
    fn serialize(&self) -> Bytes;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// Digest of the uncompressed serialized form.
    fn object_id(&self) -> ObjectId {
        ObjectId::hash(&self.serialize())
    }
}

/// SHA-1 of a raw payload, lowercase hex.
pub(crate) fn hex_digest(content: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content);

    format!("{:x}", hasher.finalize())
}
