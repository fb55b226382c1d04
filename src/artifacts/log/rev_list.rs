use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use std::collections::HashSet;

/// One commit as reported by `log`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub oid: ObjectId,
    pub parent: Option<ObjectId>,
    pub date: i64,
    pub message: String,
}

impl CommitRecord {
    pub fn from_commit(oid: ObjectId, commit: Commit) -> Self {
        CommitRecord {
            oid,
            parent: commit.parent().cloned(),
            date: commit.date(),
            message: commit.message().to_string(),
        }
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Commit date as a UTC timestamp, if it is representable.
    pub fn timestamp(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.date, 0)
    }
}

/// Iterator over a parent chain, newest commit first
///
/// Stops after the root commit. A commit seen twice, or a parent that is
/// missing or is not a commit, ends the walk with `CorruptHistory`; after
/// yielding an error the iterator is exhausted.
pub struct RevList<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
    visited: HashSet<ObjectId>,
    is_start: bool,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: Option<ObjectId>) -> Self {
        RevList {
            database,
            current_commit_oid: start,
            visited: HashSet::new(),
            is_start: true,
        }
    }

    fn load(&self, commit_oid: &ObjectId) -> crate::Result<Commit> {
        match self.database.parse_object_as_commit(commit_oid) {
            Ok(commit) => Ok(commit),
            // the tip is whatever the ref says; only links below it are history
            Err(err) if self.is_start => Err(err),
            Err(err) => Err(Error::CorruptHistory {
                oid: commit_oid.clone(),
                reason: format!("unresolvable parent: {err}"),
            }),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = crate::Result<CommitRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        if !self.visited.insert(commit_oid.clone()) {
            return Some(Err(Error::CorruptHistory {
                oid: commit_oid,
                reason: "parent chain loops back on itself".to_string(),
            }));
        }

        let commit = match self.load(&commit_oid) {
            Ok(commit) => commit,
            Err(err) => return Some(Err(err)),
        };
        self.is_start = false;

        // Move to the parent commit for the next iteration
        self.current_commit_oid = commit.parent().cloned();

        Some(Ok(CommitRecord::from_commit(commit_oid, commit)))
    }
}

/// Whether `ancestor` is reachable from `descendant` by parent links.
///
/// A commit counts as its own ancestor.
pub fn is_ancestor(
    database: &Database,
    ancestor: &ObjectId,
    descendant: &ObjectId,
) -> crate::Result<bool> {
    for record in RevList::new(database, Some(descendant.clone())) {
        if &record?.oid == ancestor {
            return Ok(true);
        }
    }

    Ok(false)
}
