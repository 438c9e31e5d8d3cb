//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::BookingDetails;
use crate::domain::Guide;

/// Guide response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideResponse {
    pub id: i64,
    pub name: String,
    pub experience_years: i32,
    pub is_active: bool,
}

impl From<Guide> for GuideResponse {
    fn from(guide: Guide) -> Self {
        Self {
            id: guide.id,
            name: guide.name,
            experience_years: guide.experience_years,
            is_active: guide.is_active,
        }
    }
}

/// Guide list envelope
#[derive(Debug, Serialize)]
pub struct GuideListResponse {
    pub items: Vec<GuideResponse>,
    pub total: usize,
}

impl From<Vec<Guide>> for GuideListResponse {
    fn from(guides: Vec<Guide>) -> Self {
        let items: Vec<GuideResponse> = guides.into_iter().map(GuideResponse::from).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Created booking, with its guide embedded
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub tour_name: String,
    pub hunter_name: String,
    /// YYYY-MM-DD
    pub date: String,
    pub participants_count: i32,
    pub guide: GuideResponse,
}

impl From<BookingDetails> for BookingResponse {
    fn from(details: BookingDetails) -> Self {
        let BookingDetails { booking, guide } = details;
        Self {
            id: booking.id,
            tour_name: booking.tour_name,
            hunter_name: booking.hunter_name,
            date: booking.date.format("%Y-%m-%d").to_string(),
            participants_count: booking.participants_count,
            guide: guide.into(),
        }
    }
}
