//! Metrics Decorators
//!
//! Wrappers that implement the service traits around an inner service and
//! record one counter increment and one duration observation per write.
//! Reads pass straight through.
//!
//! Recording is tied to a guard's `Drop`, so it also happens when the inner
//! future panics or is cancelled; in that case the result is
//! `unexpected_error`. The inner result is returned untouched.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use super::booking_service::{BookingDetails, BookingError, BookingService, CreateBookingDto};
use super::guide_service::{CreateGuideDto, GuideError, GuideService, UpdateGuideDto};
use crate::application::metrics::{
    BookingCreateResult, BookingMetrics, GuideMetrics, GuideWriteOperation, GuideWriteResult,
};
use crate::domain::Guide;

impl GuideWriteResult {
    fn of<T>(outcome: &Result<T, GuideError>) -> Self {
        match outcome {
            Ok(_) => GuideWriteResult::Success,
            Err(GuideError::NotFound(_)) => GuideWriteResult::NotFound,
            Err(GuideError::Storage(_)) => GuideWriteResult::UnexpectedError,
        }
    }
}

impl BookingCreateResult {
    fn of<T>(outcome: &Result<T, BookingError>) -> Self {
        match outcome {
            Ok(_) => BookingCreateResult::Success,
            Err(BookingError::Validation(_)) => BookingCreateResult::ValidationError,
            Err(BookingError::GuideNotFound(_)) => BookingCreateResult::GuideNotFound,
            Err(BookingError::GuideInactive(_)) => BookingCreateResult::GuideInactive,
            Err(BookingError::GuideAlreadyBooked { .. }) => BookingCreateResult::GuideAlreadyBooked,
            Err(BookingError::Storage(_)) => BookingCreateResult::UnexpectedError,
        }
    }
}

struct GuideWriteGuard<'a> {
    metrics: &'a dyn GuideMetrics,
    operation: GuideWriteOperation,
    result: GuideWriteResult,
    started: Instant,
}

impl<'a> GuideWriteGuard<'a> {
    fn start(metrics: &'a dyn GuideMetrics, operation: GuideWriteOperation) -> Self {
        Self {
            metrics,
            operation,
            result: GuideWriteResult::UnexpectedError,
            started: Instant::now(),
        }
    }
}

impl Drop for GuideWriteGuard<'_> {
    fn drop(&mut self) {
        self.metrics
            .observe_write(self.operation, self.result, self.started.elapsed());
    }
}

struct BookingCreateGuard<'a> {
    metrics: &'a dyn BookingMetrics,
    result: BookingCreateResult,
    started: Instant,
}

impl Drop for BookingCreateGuard<'_> {
    fn drop(&mut self) {
        self.metrics.observe_create(self.result, self.started.elapsed());
    }
}

/// [`GuideService`] that records write metrics around `S`.
pub struct MeteredGuideService<S> {
    inner: S,
    metrics: Arc<dyn GuideMetrics>,
}

impl<S: GuideService> MeteredGuideService<S> {
    pub fn new(inner: S, metrics: Arc<dyn GuideMetrics>) -> Self {
        Self { inner, metrics }
    }
}

#[async_trait]
impl<S: GuideService> GuideService for MeteredGuideService<S> {
    async fn get_by_id(&self, id: i64) -> Result<Guide, GuideError> {
        self.inner.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<Guide>, GuideError> {
        self.inner.get_all().await
    }

    async fn find_active(&self, min_experience: Option<i32>) -> Result<Vec<Guide>, GuideError> {
        self.inner.find_active(min_experience).await
    }

    async fn create(&self, request: CreateGuideDto) -> Result<Guide, GuideError> {
        let mut guard = GuideWriteGuard::start(self.metrics.as_ref(), GuideWriteOperation::Create);
        let outcome = self.inner.create(request).await;
        guard.result = GuideWriteResult::of(&outcome);
        outcome
    }

    async fn update(&self, id: i64, request: UpdateGuideDto) -> Result<Guide, GuideError> {
        let mut guard = GuideWriteGuard::start(self.metrics.as_ref(), GuideWriteOperation::Update);
        let outcome = self.inner.update(id, request).await;
        guard.result = GuideWriteResult::of(&outcome);
        outcome
    }

    async fn delete(&self, id: i64) -> Result<(), GuideError> {
        let mut guard = GuideWriteGuard::start(self.metrics.as_ref(), GuideWriteOperation::Delete);
        let outcome = self.inner.delete(id).await;
        guard.result = GuideWriteResult::of(&outcome);
        outcome
    }
}

/// [`BookingService`] that records create metrics around `S`.
pub struct MeteredBookingService<S> {
    inner: S,
    metrics: Arc<dyn BookingMetrics>,
}

impl<S: BookingService> MeteredBookingService<S> {
    pub fn new(inner: S, metrics: Arc<dyn BookingMetrics>) -> Self {
        Self { inner, metrics }
    }
}

#[async_trait]
impl<S: BookingService> BookingService for MeteredBookingService<S> {
    async fn create(&self, request: CreateBookingDto) -> Result<BookingDetails, BookingError> {
        let mut guard = BookingCreateGuard {
            metrics: self.metrics.as_ref(),
            result: BookingCreateResult::UnexpectedError,
            started: Instant::now(),
        };
        let outcome = self.inner.create(request).await;
        guard.result = BookingCreateResult::of(&outcome);
        outcome
    }
}
