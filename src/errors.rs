//! Error types for repository operations.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while operating on a repository.
///
/// The core never turns these into user-facing text; that is left to the
/// binary.
#[derive(Debug, Error)]
pub enum Error {
    /// No object is stored under the digest.
    #[error("object not found: {oid}")]
    ObjectNotFound { oid: ObjectId },

    /// A stored object could not be decompressed or decoded.
    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },

    /// The parent chain revisits a commit or points at something that is not a commit.
    #[error("corrupt history at {oid}: {reason}")]
    CorruptHistory { oid: ObjectId, reason: String },

    /// The branch has no ref file.
    #[error("branch not found: {name}")]
    BranchNotFound { name: String },

    /// A branch with this name already exists.
    #[error("branch already exists: {name}")]
    BranchExists { name: String },

    /// HEAD names a ref that does not exist, or HEAD itself is unreadable.
    #[error("cannot resolve ref: {name}")]
    RefUnresolvable { name: String },

    /// The requested operation would need a merge commit.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// The name is not a valid ref identifier.
    #[error("invalid branch name: {name}")]
    InvalidBranchName { name: String },

    /// The string is not a 40-character lowercase hex digest.
    #[error("invalid object id: {id}")]
    InvalidObjectId { id: String },

    /// The path cannot be recorded on a single index line.
    #[error("invalid path: {}", path.display())]
    InvalidPath { path: PathBuf },

    /// The staging index has entries that would leak into another branch.
    #[error("index has {count} staged entries; commit them before switching branches")]
    DirtyIndex { count: usize },

    /// Commit was requested with an empty index.
    #[error("nothing staged to commit")]
    NothingStaged,

    /// The repository directory does not exist.
    #[error("not a repository: {}", path.display())]
    NotARepository { path: PathBuf },

    /// Another writer holds the repository lock.
    #[error("repository is locked by another process: {}", path.display())]
    Locked { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
