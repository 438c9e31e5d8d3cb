//! Guide entity and repository trait.
//!
//! Maps to the `guide` table in the database schema.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// A bookable hunting guide.
///
/// Maps to the `guide` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(255) NOT NULL
/// - experience_years: INTEGER NOT NULL (>= 0)
/// - is_active: BOOLEAN NOT NULL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guide {
    /// Storage-assigned identifier
    pub id: i64,

    /// Display name (2-255 characters)
    pub name: String,

    /// Years of guiding experience
    pub experience_years: i32,

    /// Inactive guides cannot take bookings
    pub is_active: bool,
}

impl Guide {
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Whether this guide passes the optional minimum-experience filter.
    pub fn has_experience(&self, min_experience: Option<i32>) -> bool {
        min_experience.map_or(true, |min| self.experience_years >= min)
    }
}

/// A guide that has not been persisted yet and so has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuide {
    pub name: String,
    pub experience_years: i32,
    pub is_active: bool,
}

impl NewGuide {
    /// Attach the storage-assigned id.
    pub fn into_guide(self, id: i64) -> Guide {
        Guide {
            id,
            name: self.name,
            experience_years: self.experience_years,
            is_active: self.is_active,
        }
    }
}

/// Repository trait for Guide data access operations.
///
/// Listing methods return guides ordered by experience descending, then
/// name ascending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuideRepository: Send + Sync {
    /// Find a guide by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Guide>, AppError>;

    /// Find a guide by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Guide>, AppError>;

    /// All guides.
    async fn find_all(&self) -> Result<Vec<Guide>, AppError>;

    /// Active guides, optionally with at least `min_experience` years.
    async fn find_active(&self, min_experience: Option<i32>) -> Result<Vec<Guide>, AppError>;

    /// Insert a new guide and return it with its assigned id.
    async fn create(&self, guide: &NewGuide) -> Result<Guide, AppError>;

    /// Overwrite name, experience and active flag of an existing guide.
    async fn update(&self, guide: &Guide) -> Result<Guide, AppError>;

    /// Delete a guide. Its bookings are removed by the storage cascade.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
