//! Repository write lock
//!
//! Every mutating operation holds a `RepositoryLock` for its whole duration.
//! The lock is an exclusive `file_guard` lock on the `lock` file inside the
//! repository directory. The kernel drops it when the owning process exits,
//! so a writer that crashes never leaves the repository locked. The file
//! itself stays in place between runs.
//!
//! `fcntl` locks belong to a process, not to a file handle, so handles in the
//! same process are also serialized through a process-wide set of held lock
//! paths. A second writer fails fast with `Error::Locked` instead of racing
//! on HEAD or the refs.

use crate::errors::Error;
use file_guard::{FileGuard, Lock};
use std::collections::HashSet;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Name of the lock file inside the repository directory
pub const LOCK_FILE_NAME: &str = "lock";

static HELD_LOCKS: LazyLock<Mutex<HashSet<PathBuf>>> =
    LazyLock::new(|| Mutex::new(HashSet::new()));

fn held_locks() -> MutexGuard<'static, HashSet<PathBuf>> {
    HELD_LOCKS
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug)]
pub struct RepositoryLock {
    path: PathBuf,
    guard: Option<FileGuard<Box<File>>>,
}

impl RepositoryLock {
    pub fn acquire(repository_path: &Path) -> crate::Result<Self> {
        let repository_path = repository_path
            .canonicalize()
            .unwrap_or_else(|_| repository_path.to_path_buf());
        let path = repository_path.join(LOCK_FILE_NAME);

        if !held_locks().insert(path.clone()) {
            return Err(Error::Locked { path });
        }

        match Self::lock_file(&path) {
            Ok(guard) => {
                tracing::trace!(path = %path.display(), "acquired repository lock");
                Ok(RepositoryLock {
                    path,
                    guard: Some(guard),
                })
            }
            Err(err) => {
                held_locks().remove(&path);
                Err(err)
            }
        }
    }

    fn lock_file(path: &Path) -> crate::Result<FileGuard<Box<File>>> {
        let lock_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        file_guard::try_lock(Box::new(lock_file), Lock::Exclusive, 0, 1).map_err(|err| {
            match err.kind() {
                ErrorKind::WouldBlock => Error::Locked {
                    path: path.to_path_buf(),
                },
                _ => Error::Io(err),
            }
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RepositoryLock {
    fn drop(&mut self) {
        // unlock the file before another handle in this process may claim it
        drop(self.guard.take());
        held_locks().remove(&self.path);
        tracing::trace!(path = %self.path.display(), "released repository lock");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;

    #[test]
    fn second_acquire_fails_until_first_is_dropped() {
        let dir = TempDir::new().unwrap();

        let lock = RepositoryLock::acquire(dir.path()).unwrap();
        assert!(lock.path().exists());
        assert!(matches!(
            RepositoryLock::acquire(dir.path()),
            Err(Error::Locked { .. })
        ));

        drop(lock);
        assert!(RepositoryLock::acquire(dir.path()).is_ok());
    }

    #[test]
    fn leftover_lock_file_does_not_block() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(LOCK_FILE_NAME), "").unwrap();

        assert!(RepositoryLock::acquire(dir.path()).is_ok());
    }
}
