//! Commit history traversal
//!
//! - `rev_list`: walks a branch's parent chain, newest first

pub mod rev_list;
