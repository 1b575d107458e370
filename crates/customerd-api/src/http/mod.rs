//! HTTP/REST API layer for customerd.
//!
//! Axum-based CRUD API over `/customers` with plain-text error bodies.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
