//! Porcelain operations (version control workflows)
//!
//! - `init`: Create the repository layout
//! - `add`: Stage a file
//! - `commit`: Commit staged or explicit blobs on the current branch
//! - `log`: Walk a branch's history
//! - `branch`: Create and list branches
//! - `checkout`: Switch the current branch
//! - `merge`: Fast-forward the current branch
//! - `status`: Inspect HEAD and the index

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod status;
