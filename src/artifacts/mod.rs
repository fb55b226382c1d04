//! Repository data structures and algorithms
//!
//! - `branch`: Branch names and HEAD contents
//! - `core`: Configuration
//! - `index`: Staging index entries
//! - `log`: Commit history traversal
//! - `merge`: Fast-forward merge decisions
//! - `objects`: Object types (blob, tree, commit)

pub mod branch;
pub mod core;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
