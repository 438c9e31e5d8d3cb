//! Booking Service
//!
//! Creates hunting bookings. Checks run in a fixed order so that the same
//! bad request always reports the same problem:
//! date format, participant bounds, guide existence, guide active, date conflict.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{
    BookingRepository, Guide, GuideRepository, HuntingBooking, NewHuntingBooking,
    MAX_PARTICIPANTS, MIN_PARTICIPANTS,
};
use crate::shared::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Booking service trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Book a guide for one day
    async fn create(&self, request: CreateBookingDto) -> Result<BookingDetails, BookingError>;
}

/// Create booking request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingDto {
    pub tour_name: String,
    pub hunter_name: String,
    pub guide_id: i64,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    pub participants_count: i32,
}

/// A persisted booking together with the guide it was loaded against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub booking: HuntingBooking,
    pub guide: Guide,
}

/// Booking service errors
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),

    #[error("Guide #{0} not found")]
    GuideNotFound(i64),

    #[error("Guide #{0} is inactive")]
    GuideInactive(i64),

    #[error("Guide #{guide_id} already booked on {date}")]
    GuideAlreadyBooked { guide_id: i64, date: NaiveDate },

    #[error(transparent)]
    Storage(#[from] AppError),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(msg) => AppError::Validation(msg),
            BookingError::GuideNotFound(id) => AppError::GuideNotFound(id),
            BookingError::GuideInactive(id) => AppError::GuideInactive(id),
            BookingError::GuideAlreadyBooked { guide_id, date } => {
                AppError::GuideAlreadyBooked { guide_id, date }
            }
            BookingError::Storage(e) => e,
        }
    }
}

/// Parse a strict `YYYY-MM-DD` date. The input must survive a
/// parse/format round trip, which rejects "2025-02-30" and "2025-1-5".
pub fn parse_booking_date(raw: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == raw)
        .ok_or_else(|| BookingError::Validation("Invalid date format, expected YYYY-MM-DD".into()))
}

/// Booking service implementation
pub struct BookingServiceImpl<B, G>
where
    B: BookingRepository,
    G: GuideRepository,
{
    booking_repo: Arc<B>,
    guide_repo: Arc<G>,
}

impl<B, G> BookingServiceImpl<B, G>
where
    B: BookingRepository,
    G: GuideRepository,
{
    pub fn new(booking_repo: Arc<B>, guide_repo: Arc<G>) -> Self {
        Self {
            booking_repo,
            guide_repo,
        }
    }
}

#[async_trait]
impl<B, G> BookingService for BookingServiceImpl<B, G>
where
    B: BookingRepository + 'static,
    G: GuideRepository + 'static,
{
    async fn create(&self, request: CreateBookingDto) -> Result<BookingDetails, BookingError> {
        let date = parse_booking_date(&request.date)?;

        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&request.participants_count) {
            return Err(BookingError::Validation(format!(
                "participants_count must be between {} and {}",
                MIN_PARTICIPANTS, MAX_PARTICIPANTS
            )));
        }

        let guide = self
            .guide_repo
            .find_by_id(request.guide_id)
            .await?
            .ok_or(BookingError::GuideNotFound(request.guide_id))?;

        if !guide.is_active {
            return Err(BookingError::GuideInactive(guide.id));
        }

        // Pre-check only. The unique (guide_id, date) index decides races and
        // surfaces the loser as AppError::Conflict from `create`.
        if self
            .booking_repo
            .exists_for_guide_on_date(guide.id, date)
            .await?
        {
            return Err(BookingError::GuideAlreadyBooked {
                guide_id: guide.id,
                date,
            });
        }

        let booking = self
            .booking_repo
            .create(&NewHuntingBooking {
                guide_id: guide.id,
                tour_name: request.tour_name,
                hunter_name: request.hunter_name,
                date,
                participants_count: request.participants_count,
            })
            .await?;

        tracing::info!(
            booking_id = booking.id,
            guide_id = guide.id,
            date = %date,
            "Booking created"
        );

        Ok(BookingDetails { booking, guide })
    }
}
