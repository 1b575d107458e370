//! Business logic and repository trait definitions for customerd.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements. It depends only on `customerd-types` -- never on
//! `customerd-infra` or any database/IO crate.

pub mod repository;
pub mod service;
