//! Booking Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::CreateBookingRequest;
use crate::application::dto::response::BookingResponse;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Book a guide for one day
///
/// POST /api/bookings
///
/// ## Errors
/// - 404 if the guide does not exist
/// - 409 if the guide already has a booking on that date
/// - 422 if the guide is inactive, the date is not a calendar date, or the
///   participant count is out of range
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let details = state.bookings.create(body.into_dto()).await?;
    Ok((StatusCode::CREATED, Json(details.into())))
}
