//! Plumbing operations
//!
//! - `hash_object`: Compute a file's blob ID, optionally storing it
//! - `cat_file`: Read an object's raw bytes
//! - `ls_tree`: List the blobs recorded by a commit
//! - `write_commit`: Build tree and commit objects and advance the current
//!   branch (no locking; callers hold the repository lock)

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
pub mod write_commit;
