//! Business Metrics Contracts
//!
//! Result and operation tags recorded around service writes. The Prometheus
//! implementation lives in `infrastructure::metrics`.

use std::time::Duration;

/// Guide write operation, used as the `operation` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideWriteOperation {
    Create,
    Update,
    Delete,
}

impl GuideWriteOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideWriteOperation::Create => "create",
            GuideWriteOperation::Update => "update",
            GuideWriteOperation::Delete => "delete",
        }
    }
}

/// Outcome of a guide write, used as the `result` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideWriteResult {
    Success,
    NotFound,
    UnexpectedError,
}

impl GuideWriteResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuideWriteResult::Success => "success",
            GuideWriteResult::NotFound => "not_found",
            GuideWriteResult::UnexpectedError => "unexpected_error",
        }
    }
}

/// Outcome of a booking create attempt, used as the `result` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingCreateResult {
    Success,
    GuideNotFound,
    GuideInactive,
    GuideAlreadyBooked,
    ValidationError,
    UnexpectedError,
}

impl BookingCreateResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingCreateResult::Success => "success",
            BookingCreateResult::GuideNotFound => "guide_not_found",
            BookingCreateResult::GuideInactive => "guide_inactive",
            BookingCreateResult::GuideAlreadyBooked => "guide_already_booked",
            BookingCreateResult::ValidationError => "validation_error",
            BookingCreateResult::UnexpectedError => "unexpected_error",
        }
    }
}

/// Sink for guide write metrics.
pub trait GuideMetrics: Send + Sync {
    fn observe_write(
        &self,
        operation: GuideWriteOperation,
        result: GuideWriteResult,
        duration: Duration,
    );
}

/// Sink for booking create metrics.
pub trait BookingMetrics: Send + Sync {
    fn observe_create(&self, result: BookingCreateResult, duration: Duration);
}
