//! # Domain Entities
//!
//! Core domain entities. Both map directly to their database tables.
//!
//! - **Guide**: a bookable guide with experience and an active flag
//! - **HuntingBooking**: one guide reserved for one day by a hunting party
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod booking;
mod guide;

pub use guide::{Guide, GuideRepository, NewGuide};

pub use booking::{
    BookingRepository, HuntingBooking, NewHuntingBooking, MAX_PARTICIPANTS, MIN_PARTICIPANTS,
};

#[cfg(test)]
pub use booking::MockBookingRepository;
#[cfg(test)]
pub use guide::MockGuideRepository;
