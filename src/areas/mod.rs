//! Core repository components
//!
//! This module contains the on-disk building blocks of a repository:
//!
//! - `database`: Content-addressed object store for blobs, trees, and commits
//! - `index`: Staging area for blobs awaiting the next commit
//! - `lock`: Exclusive lock held by mutating operations
//! - `refs`: Branch refs and HEAD
//! - `repository`: Handle bundling all areas rooted at one directory
//! - `workspace`: Working directory file reads

pub mod database;
pub mod index;
pub mod lock;
pub mod refs;
pub mod repository;
pub mod workspace;
