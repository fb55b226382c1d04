//! Shared settings
//!
//! - `config`: environment-driven repository configuration

pub mod config;
