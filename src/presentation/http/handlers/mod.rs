//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod booking;
pub mod guide;
pub mod health;
