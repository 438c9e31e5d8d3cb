//! # Domain Layer
//!
//! Guides, bookings and the repository contracts they are stored through.
//! Independent of any external frameworks or infrastructure concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - A booking refers to its guide by id; loading the guide is explicit

pub mod entities;

// Re-export commonly used types
pub use entities::*;
