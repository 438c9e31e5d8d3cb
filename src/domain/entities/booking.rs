//! Hunting booking entity and repository trait.
//!
//! Maps to the `hunting_booking` table in the database schema.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::shared::error::AppError;

/// Participant bounds for a single booking, inclusive.
pub const MIN_PARTICIPANTS: i32 = 1;
pub const MAX_PARTICIPANTS: i32 = 10;

/// A reservation of one guide for one day.
///
/// Maps to the `hunting_booking` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - guide_id: BIGINT NOT NULL REFERENCES guide(id) ON DELETE CASCADE
/// - tour_name, hunter_name: VARCHAR(255) NOT NULL
/// - date: DATE NOT NULL
/// - participants_count: INTEGER NOT NULL (1-10)
/// - UNIQUE (guide_id, date)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuntingBooking {
    pub id: i64,
    pub guide_id: i64,
    pub tour_name: String,
    pub hunter_name: String,
    pub date: NaiveDate,
    pub participants_count: i32,
}

/// A booking that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHuntingBooking {
    pub guide_id: i64,
    pub tour_name: String,
    pub hunter_name: String,
    pub date: NaiveDate,
    pub participants_count: i32,
}

impl NewHuntingBooking {
    pub fn into_booking(self, id: i64) -> HuntingBooking {
        HuntingBooking {
            id,
            guide_id: self.guide_id,
            tour_name: self.tour_name,
            hunter_name: self.hunter_name,
            date: self.date,
            participants_count: self.participants_count,
        }
    }
}

/// Repository trait for booking data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Whether the guide already has a booking on `date`.
    async fn exists_for_guide_on_date(&self, guide_id: i64, date: NaiveDate)
        -> Result<bool, AppError>;

    /// Insert a booking. A second booking for the same guide and date fails
    /// with [`AppError::Conflict`].
    async fn create(&self, booking: &NewHuntingBooking) -> Result<HuntingBooking, AppError>;
}
