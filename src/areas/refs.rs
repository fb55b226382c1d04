//! References (branches and HEAD)
//!
//! Branches are plain files under `refs/` holding a single commit ID, or
//! nothing when the branch has no commits yet. HEAD holds the path of the
//! current branch's ref file (e.g. `refs/master`); it never holds a commit ID
//! directly.
//!
//! ## File Format
//!
//! - `refs/<branch>`: a 40-character SHA-1 hash, or empty
//! - `HEAD`: `refs/<branch>`

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use file_guard::Lock;
use std::io::{ErrorKind, Write};
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// References manager
///
/// Ref files are only ever overwritten whole, under an exclusive lock.
#[derive(Debug)]
pub struct Refs {
    /// Path to the repository directory (typically `.mygit`)
    path: Box<Path>,
}

impl Refs {
    pub fn new(path: Box<Path>) -> Self {
        Refs { path }
    }

    /// Name of the branch HEAD points at.
    pub fn read_head(&self) -> crate::Result<BranchName> {
        let content = std::fs::read_to_string(self.head_path()).map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::RefUnresolvable {
                name: HEAD_REF_NAME.to_string(),
            },
            _ => Error::Io(err),
        })?;

        BranchName::try_parse_sym_ref_name(&content)
    }

    /// Point HEAD at another branch. The branch does not need to exist.
    pub fn write_head(&self, branch_name: &BranchName) -> crate::Result<()> {
        let sym_ref_name = SymRefName::from(branch_name);
        self.update_ref_file(&self.head_path(), sym_ref_name.as_ref_path())?;
        tracing::debug!(head = %sym_ref_name, "updated HEAD");

        Ok(())
    }

    /// Commit the current branch points at.
    ///
    /// Fails with `RefUnresolvable` when HEAD names a branch whose ref file
    /// is missing.
    pub fn read_head_oid(&self) -> crate::Result<Option<ObjectId>> {
        let branch_name = self.read_head()?;

        self.read_ref(&branch_name).map_err(|err| match err {
            Error::BranchNotFound { .. } => Error::RefUnresolvable {
                name: SymRefName::from(&branch_name).to_string(),
            },
            err => err,
        })
    }

    /// Commit a branch points at, `None` if it has no commits yet.
    pub fn read_ref(&self, branch_name: &BranchName) -> crate::Result<Option<ObjectId>> {
        let ref_path = self.branch_path(branch_name);
        let content = std::fs::read_to_string(&ref_path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::BranchNotFound {
                name: branch_name.to_string(),
            },
            _ => Error::Io(err),
        })?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(ObjectId::try_parse(content.to_string())?))
        }
    }

    /// Overwrite a branch with a new commit ID, creating the ref if needed.
    ///
    /// # Locking
    ///
    /// Acquires exclusive lock on the reference file during update.
    pub fn write_ref(&self, branch_name: &BranchName, oid: &ObjectId) -> crate::Result<()> {
        self.update_ref_file(&self.branch_path(branch_name), oid.as_ref())?;
        tracing::debug!(branch = %branch_name, oid = %oid, "updated ref");

        Ok(())
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    /// Create a branch pointing at `source_oid`, or empty when `None`.
    pub fn create_branch(
        &self,
        branch_name: &BranchName,
        source_oid: Option<&ObjectId>,
    ) -> crate::Result<()> {
        let branch_path = self.branch_path(branch_name);
        if let Some(parent) = branch_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // CREAT | EXCL so two writers cannot both create the same branch
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&branch_path)
            .map_err(|err| match err.kind() {
                ErrorKind::AlreadyExists => Error::BranchExists {
                    name: branch_name.to_string(),
                },
                _ => Error::Io(err),
            })?;

        if let Some(oid) = source_oid {
            let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
            lock.deref_mut().write_all(oid.as_ref().as_bytes())?;
        }
        tracing::debug!(
            branch = %branch_name,
            source = ?source_oid.map(ObjectId::to_string),
            "created branch"
        );

        Ok(())
    }

    /// All branches with the commit they point at, sorted by name.
    pub fn list_branches(&self) -> crate::Result<Vec<(BranchName, Option<ObjectId>)>> {
        let refs_path = self.refs_path();
        let mut branches = WalkDir::new(&refs_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&refs_path).ok()?;
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                BranchName::try_parse(name).ok()
            })
            .map(|branch_name| {
                let oid = self.read_ref(&branch_name)?;
                Ok((branch_name, oid))
            })
            .collect::<crate::Result<Vec<_>>>()?;
        branches.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(branches)
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> crate::Result<()> {
        // create all the parent directories if they don't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // open the ref file as WRONLY and CREAT to write the new value to it
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.path
            .join(SymRefName::from(branch_name).as_ref_path())
            .into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }
}
