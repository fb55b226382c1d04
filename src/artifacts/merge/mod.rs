//! Merge decisions
//!
//! - `fast_forward`: decides whether a branch can simply move to another
//!   branch's commit. Merge commits are not supported.

pub mod fast_forward;
