//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the domain
//! layer.
//!
//! ## Available Repositories
//!
//! - **PgGuideRepository** / **PgBookingRepository** - PostgreSQL, the
//!   `guide` and `hunting_booking` tables
//! - **MemoryGuideRepository** / **MemoryBookingRepository** - process-local
//!   tables sharing one [`InMemoryStore`]
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use crate::infrastructure::repositories::{PgBookingRepository, PgGuideRepository};
//!
//! let guide_repo = PgGuideRepository::new(pool.clone());
//! let booking_repo = PgBookingRepository::new(pool);
//! ```

pub mod booking_repository;
pub mod guide_repository;
pub mod memory;

pub use booking_repository::PgBookingRepository;
pub use guide_repository::PgGuideRepository;
pub use memory::{InMemoryStore, MemoryBookingRepository, MemoryGuideRepository};
