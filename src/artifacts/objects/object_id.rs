//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. Each object is
//! stored in a single file named after its full ID directly under `objects/`.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::hex_digest;
use crate::errors::Error;
use std::path::PathBuf;

/// Object identifier (SHA-1 hash)
///
/// Construction always validates length and alphabet, so every `ObjectId`
/// in the crate is safe to use as a file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Uppercase hex is rejected: digests are always written lowercase, and
    /// accepting both would give one object two names.
    pub fn try_parse(id: String) -> crate::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH
            || !id
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(Error::InvalidObjectId { id });
        }

        Ok(Self(id))
    }

    /// Compute the ID of a raw payload.
    pub fn hash(content: &[u8]) -> Self {
        Self(hex_digest(content))
    }

    /// File name of the object relative to the objects directory.
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
