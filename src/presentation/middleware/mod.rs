//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod metrics;
pub mod problem_details;

pub use metrics::track_http_metrics;
pub use problem_details::problem_details;
