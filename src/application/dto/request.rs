//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use validator::Validate;

use crate::application::services::{CreateBookingDto, CreateGuideDto, UpdateGuideDto};
use crate::shared::validation::{not_blank, DATE_RE};

fn default_active() -> bool {
    true
}

/// Create guide request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGuideRequest {
    #[validate(
        custom(function = "not_blank"),
        length(min = 2, max = 255, message = "Name must be 2-255 characters")
    )]
    pub name: String,

    #[validate(range(min = 0, message = "experience_years must be zero or positive"))]
    pub experience_years: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl CreateGuideRequest {
    pub fn into_dto(self) -> CreateGuideDto {
        CreateGuideDto {
            name: self.name,
            experience_years: self.experience_years,
            is_active: self.is_active,
        }
    }
}

/// Update guide request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGuideRequest {
    #[validate(
        custom(function = "not_blank"),
        length(min = 2, max = 255, message = "Name must be 2-255 characters")
    )]
    pub name: String,

    #[validate(range(min = 0, message = "experience_years must be zero or positive"))]
    pub experience_years: i32,

    pub is_active: bool,
}

impl UpdateGuideRequest {
    pub fn into_dto(self) -> UpdateGuideDto {
        UpdateGuideDto {
            name: self.name,
            experience_years: self.experience_years,
            is_active: self.is_active,
        }
    }
}

/// Active guides query: `?min_experience=3`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct GuidesListQuery {
    #[validate(range(min = 0, message = "min_experience must be zero or positive"))]
    pub min_experience: Option<i32>,
}

/// Create hunting booking request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(
        custom(function = "not_blank"),
        length(min = 2, max = 255, message = "Tour name must be 2-255 characters")
    )]
    pub tour_name: String,

    #[validate(
        custom(function = "not_blank"),
        length(min = 2, max = 255, message = "Hunter name must be 2-255 characters")
    )]
    pub hunter_name: String,

    #[validate(range(min = 1, message = "guide_id must be positive"))]
    pub guide_id: i64,

    /// YYYY-MM-DD
    #[validate(regex(path = *DATE_RE, message = "Date must be in format YYYY-MM-DD"))]
    pub date: String,

    #[validate(range(min = 1, max = 10, message = "participants_count must be between 1 and 10"))]
    pub participants_count: i32,
}

impl CreateBookingRequest {
    pub fn into_dto(self) -> CreateBookingDto {
        CreateBookingDto {
            tour_name: self.tour_name,
            hunter_name: self.hunter_name,
            guide_id: self.guide_id,
            date: self.date,
            participants_count: self.participants_count,
        }
    }
}
