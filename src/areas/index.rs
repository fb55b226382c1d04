//! Staging index
//!
//! The index lists blobs waiting for the next commit. It is an append-only
//! text file between commits: staging appends a line, committing deletes the
//! file. A missing file is an empty index, not an error.
//!
//! The index is shared by all branches. Checkout refuses to switch while it
//! has entries so staged work cannot silently move to another branch.

use crate::artifacts::index::index_entry::IndexEntry;
use file_guard::Lock;
use std::io::{ErrorKind, Write};
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.mygit/index`)
    path: Box<Path>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry, creating the index if needed.
    ///
    /// Earlier entries for the same path are kept.
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the index file while appending.
    pub fn stage(&self, entry: &IndexEntry) -> crate::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, Lock::Exclusive, 0, 1)?;

        writeln!(lock.deref_mut(), "{}", entry.to_line())?;
        tracing::debug!(oid = %entry.oid, path = %entry.path.display(), "staged entry");

        Ok(())
    }

    /// Read every staged entry in staging order.
    ///
    /// Malformed lines are skipped rather than failing the whole read.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn read_all(&self) -> crate::Result<Vec<IndexEntry>> {
        let mut index_file = match std::fs::File::open(self.path()) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let mut lock = file_guard::lock(&mut index_file, Lock::Shared, 0, 1)?;
        let content = std::io::read_to_string(lock.deref_mut())?;

        Ok(content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .filter_map(|(line_number, line)| {
                let entry = IndexEntry::parse_line(line);
                if entry.is_none() {
                    tracing::warn!(line = line_number + 1, "skipping malformed index line");
                }
                entry
            })
            .collect())
    }

    pub fn is_empty(&self) -> crate::Result<bool> {
        Ok(self.read_all()?.is_empty())
    }

    /// Delete the index. Clearing an absent index succeeds.
    pub fn clear(&self) -> crate::Result<()> {
        match std::fs::remove_file(self.path()) {
            Ok(()) => {
                tracing::debug!("cleared index");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
