//! Stored object types and operations
//!
//! Every piece of repository content is an immutable object identified by the
//! SHA-1 digest of its uncompressed bytes. There are three logical kinds:
//!
//! - **Blob**: exact file content
//! - **Tree**: newline-joined list of blob digests (flat, no paths)
//! - **Commit**: `tree`, optional `parent`, `date` and `message` lines
//!
//! Unlike git, objects carry no `<type> <size>\0` header: the kind is known
//! only from the context that references the digest.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
