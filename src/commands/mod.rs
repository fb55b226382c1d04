//! Repository operations
//!
//! Operations are `impl Repository` blocks, split the way git splits its
//! commands:
//!
//! - `plumbing`: Low-level object access (hash-object, cat-file, ls-tree,
//!   write-commit)
//! - `porcelain`: Version control workflows (init, add, commit, log, branch,
//!   checkout, merge, status)
//!
//! Every porcelain operation that changes repository state holds the
//! repository lock until it returns. Nothing here prints.

pub mod plumbing;
pub mod porcelain;
