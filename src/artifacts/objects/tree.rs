//! Tree object
//!
//! A tree here is a flat, ordered list of blob IDs joined by newlines. It
//! records no paths and no nesting; the index is the only place that maps
//! paths to blobs.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Tree {
    entries: Vec<ObjectId>,
}

impl Tree {
    pub fn entries(&self) -> &[ObjectId] {
        &self.entries
    }
}

impl Packable for Tree {
    fn serialize(&self) -> Bytes {
        let lines = self
            .entries
            .iter()
            .map(|oid| oid.as_ref())
            .collect::<Vec<_>>()
            .join("\n");

        Bytes::from(lines)
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let entries = reader
            .lines()
            .map(|line| -> anyhow::Result<ObjectId> { Ok(ObjectId::try_parse(line?)?) })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self::new(entries))
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn tree_keeps_blob_order_and_duplicates() {
        let first = ObjectId::hash(b"one");
        let second = ObjectId::hash(b"two");
        let tree = Tree::new(vec![second.clone(), first.clone(), second.clone()]);

        let raw = tree.serialize();
        assert_eq!(
            std::str::from_utf8(&raw).unwrap(),
            format!("{second}\n{first}\n{second}")
        );

        let parsed = Tree::deserialize(Cursor::new(raw)).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn empty_tree_serializes_to_nothing() {
        let tree = Tree::new(vec![]);

        assert!(tree.serialize().is_empty());
        assert_eq!(Tree::deserialize(Cursor::new(Bytes::new())).unwrap(), tree);
    }

    #[test]
    fn tree_with_garbage_line_fails_to_decode() {
        assert!(Tree::deserialize(Cursor::new("not-a-digest")).is_err());
    }
}
