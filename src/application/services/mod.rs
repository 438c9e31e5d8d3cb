//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **GuideService**: Guide CRUD
//! - **BookingService**: Booking creation with date, capacity and conflict rules
//! - **MeteredGuideService / MeteredBookingService**: metrics decorators over either

pub mod booking_service;
pub mod guide_service;
pub mod metered;

// Re-export guide service types
pub use guide_service::{CreateGuideDto, GuideError, GuideService, GuideServiceImpl, UpdateGuideDto};

// Re-export booking service types
pub use booking_service::{
    parse_booking_date, BookingDetails, BookingError, BookingService, BookingServiceImpl,
    CreateBookingDto,
};

pub use metered::{MeteredBookingService, MeteredGuideService};
