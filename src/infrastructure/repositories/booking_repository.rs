//! Hunting Booking Repository Implementation
//!
//! PostgreSQL implementation of the BookingRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::{BookingRepository, HuntingBooking, NewHuntingBooking};
use crate::shared::error::AppError;

/// Database row representation of the `hunting_booking` table.
#[derive(Debug, sqlx::FromRow)]
struct HuntingBookingRow {
    id: i64,
    guide_id: i64,
    tour_name: String,
    hunter_name: String,
    date: NaiveDate,
    participants_count: i32,
}

impl HuntingBookingRow {
    fn into_booking(self) -> HuntingBooking {
        HuntingBooking {
            id: self.id,
            guide_id: self.guide_id,
            tour_name: self.tour_name,
            hunter_name: self.hunter_name,
            date: self.date,
            participants_count: self.participants_count,
        }
    }
}

/// PostgreSQL hunting booking repository implementation.
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn exists_for_guide_on_date(
        &self,
        guide_id: i64,
        date: NaiveDate,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM hunting_booking WHERE guide_id = $1 AND date = $2)",
        )
        .bind(guide_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, booking: &NewHuntingBooking) -> Result<HuntingBooking, AppError> {
        let row = sqlx::query_as::<_, HuntingBookingRow>(
            r#"
            INSERT INTO hunting_booking (guide_id, tour_name, hunter_name, date, participants_count)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, guide_id, tour_name, hunter_name, date, participants_count
            "#,
        )
        .bind(booking.guide_id)
        .bind(&booking.tour_name)
        .bind(&booking.hunter_name)
        .bind(booking.date)
        .bind(booking.participants_count)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::Conflict(
                format!(
                    "Guide #{} already has a booking on {}",
                    booking.guide_id, booking.date
                ),
            ),
            _ => AppError::Database(e),
        })?;

        Ok(row.into_booking())
    }
}
