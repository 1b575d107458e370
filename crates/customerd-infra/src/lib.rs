//! Infrastructure layer for customerd.
//!
//! Contains the SQLite implementation of the repository trait defined in
//! `customerd-core` and the configuration file loader.

pub mod config;
pub mod sqlite;
