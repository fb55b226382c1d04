//! Commit object
//!
//! Commits link a tree to an optional parent commit, a timestamp and a
//! message. Only one parent is ever recorded: history is a forest of
//! singly-parented chains.
//!
//! ## Format
//!
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! date <unix-epoch-seconds>
//! message <commit message>
//! ```
//!
//! `parent` is omitted for root commits. Field order is part of the commit's
//! identity. The message is always last and runs to the end of the object, so
//! it may contain newlines.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    /// Parent commit ID (absent for the first commit on a branch)
    parent: Option<ObjectId>,
    /// Tree object ID listing the committed blobs
    tree_oid: ObjectId,
    /// Seconds since the Unix epoch
    date: i64,
    message: String,
}

impl Commit {
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn date(&self) -> i64 {
        self.date
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        let mut lines = vec![format!("tree {}", self.tree_oid)];
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("date {}", self.date));
        lines.push(format!("message {}", self.message));

        Bytes::from(lines.join("\n"))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: not valid UTF-8")?;

        let (tree_line, rest) = content
            .split_once('\n')
            .context("Invalid commit object: missing date line")?;
        let tree_oid = tree_line
            .strip_prefix("tree ")
            .context("Invalid commit object: invalid tree line")?;
        let tree_oid = ObjectId::try_parse(tree_oid.to_string())?;

        let (next_line, mut rest) = rest
            .split_once('\n')
            .context("Invalid commit object: missing message line")?;

        let (parent, date_line) = match next_line.strip_prefix("parent ") {
            Some(parent_oid) => {
                let parent = ObjectId::try_parse(parent_oid.to_string())?;
                let (date_line, after_date) = rest
                    .split_once('\n')
                    .context("Invalid commit object: missing message line")?;
                rest = after_date;

                (Some(parent), date_line)
            }
            None => (None, next_line),
        };

        let date = date_line
            .strip_prefix("date ")
            .context("Invalid commit object: invalid date line")?
            .parse::<i64>()
            .context("Invalid commit object: invalid timestamp")?;

        let message = rest
            .strip_prefix("message ")
            .context("Invalid commit object: invalid message line")?;

        Ok(Self::new(parent, tree_oid, date, message.to_string()))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
