//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{CreateBookingRequest, CreateGuideRequest, GuidesListQuery, UpdateGuideRequest};
pub use response::{BookingResponse, GuideListResponse, GuideResponse};
