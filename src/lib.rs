//! A minimal content-addressed version-control store.
//!
//! Files are stored as zlib-compressed blobs keyed by SHA-1, staged in a
//! plain-text index, and committed into singly-parented chains that branches
//! point into. Merging is fast-forward only.
//!
//! All state lives on disk under a repository directory:
//!
//! ```text
//! <root>/.mygit/
//!   objects/<hex id>   compressed object payload
//!   refs/<branch>      commit id, or empty
//!   HEAD               refs/<branch>
//!   index              "<hex id> <path>" lines
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::repository::Repository;
pub use artifacts::core::config::Config;
pub use errors::{Error, Result};
