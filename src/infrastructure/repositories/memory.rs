//! In-Memory Repository Implementations
//!
//! A process-local store used when `storage.backend = "memory"` and by the
//! HTTP test suite. It mirrors the relational schema closely enough for the
//! service layer to behave identically: ids are sequential, a guide can hold
//! one booking per date, bookings must reference an existing guide and are
//! removed together with it.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::domain::{
    BookingRepository, Guide, GuideRepository, HuntingBooking, NewGuide, NewHuntingBooking,
};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    guides: BTreeMap<i64, Guide>,
    bookings: BTreeMap<i64, HuntingBooking>,
    last_guide_id: i64,
    last_booking_id: i64,
}

/// Shared tables behind both in-memory repositories.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn guide_count(&self) -> usize {
        self.tables.read().guides.len()
    }

    pub fn booking_count(&self) -> usize {
        self.tables.read().bookings.len()
    }

    /// The booking a guide holds on `date`, if any.
    pub fn booking_on(&self, guide_id: i64, date: NaiveDate) -> Option<HuntingBooking> {
        self.tables
            .read()
            .bookings
            .values()
            .find(|b| b.guide_id == guide_id && b.date == date)
            .cloned()
    }
}

fn sorted(mut guides: Vec<Guide>) -> Vec<Guide> {
    guides.sort_by(|a, b| {
        b.experience_years
            .cmp(&a.experience_years)
            .then_with(|| a.name.cmp(&b.name))
    });
    guides
}

/// [`GuideRepository`] over an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryGuideRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryGuideRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GuideRepository for MemoryGuideRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Guide>, AppError> {
        Ok(self.store.tables.read().guides.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Guide>, AppError> {
        Ok(self
            .store
            .tables
            .read()
            .guides
            .values()
            .find(|g| g.name == name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Guide>, AppError> {
        let guides = self.store.tables.read().guides.values().cloned().collect();
        Ok(sorted(guides))
    }

    async fn find_active(&self, min_experience: Option<i32>) -> Result<Vec<Guide>, AppError> {
        let guides = self
            .store
            .tables
            .read()
            .guides
            .values()
            .filter(|g| g.is_active && g.has_experience(min_experience))
            .cloned()
            .collect();
        Ok(sorted(guides))
    }

    async fn create(&self, guide: &NewGuide) -> Result<Guide, AppError> {
        let mut tables = self.store.tables.write();
        tables.last_guide_id += 1;
        let created = guide.clone().into_guide(tables.last_guide_id);
        tables.guides.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, guide: &Guide) -> Result<Guide, AppError> {
        let mut tables = self.store.tables.write();
        let stored = tables
            .guides
            .get_mut(&guide.id)
            .ok_or(AppError::GuideNotFound(guide.id))?;
        *stored = guide.clone();
        Ok(guide.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.store.tables.write();
        if tables.guides.remove(&id).is_none() {
            return Err(AppError::GuideNotFound(id));
        }
        tables.bookings.retain(|_, b| b.guide_id != id);
        Ok(())
    }
}

/// [`BookingRepository`] over an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryBookingRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryBookingRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepository {
    async fn exists_for_guide_on_date(
        &self,
        guide_id: i64,
        date: NaiveDate,
    ) -> Result<bool, AppError> {
        Ok(self.store.booking_on(guide_id, date).is_some())
    }

    async fn create(&self, booking: &NewHuntingBooking) -> Result<HuntingBooking, AppError> {
        let mut tables = self.store.tables.write();

        if !tables.guides.contains_key(&booking.guide_id) {
            return Err(AppError::Internal(format!(
                "hunting_booking references missing guide #{}",
                booking.guide_id
            )));
        }
        if tables
            .bookings
            .values()
            .any(|b| b.guide_id == booking.guide_id && b.date == booking.date)
        {
            return Err(AppError::Conflict(format!(
                "Guide #{} already has a booking on {}",
                booking.guide_id, booking.date
            )));
        }

        tables.last_booking_id += 1;
        let created = booking.clone().into_booking(tables.last_booking_id);
        tables.bookings.insert(created.id, created.clone());
        Ok(created)
    }
}
