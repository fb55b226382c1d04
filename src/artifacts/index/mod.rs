//! Staging index data structures
//!
//! The index file is plain text, one entry per line:
//!
//! ```text
//! <40-hex blob id> <file path>
//! ```
//!
//! Entries are kept in staging order and are never deduplicated by path.

pub mod index_entry;
