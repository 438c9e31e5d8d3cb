//! HTTP API
//!
//! Routes, handlers and extractors for the REST endpoints.

pub mod extractors;
pub mod handlers;
pub mod routes;
