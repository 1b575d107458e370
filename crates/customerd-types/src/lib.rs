//! Shared domain types for customerd.
//!
//! This crate contains the core domain types used across the service:
//! the Customer record, its request payload, validation, service
//! configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod customer;
pub mod error;
