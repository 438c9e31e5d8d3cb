//! Guide Service
//!
//! Guide CRUD on top of the guide repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Guide, GuideRepository, NewGuide};
use crate::shared::error::AppError;

/// Guide service trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuideService: Send + Sync {
    /// Get a guide by ID
    async fn get_by_id(&self, id: i64) -> Result<Guide, GuideError>;

    /// All guides, most experienced first
    async fn get_all(&self) -> Result<Vec<Guide>, GuideError>;

    /// Active guides with at least `min_experience` years, if given
    async fn find_active(&self, min_experience: Option<i32>) -> Result<Vec<Guide>, GuideError>;

    /// Create a guide
    async fn create(&self, request: CreateGuideDto) -> Result<Guide, GuideError>;

    /// Replace name, experience and active flag of a guide
    async fn update(&self, id: i64, request: UpdateGuideDto) -> Result<Guide, GuideError>;

    /// Delete a guide together with its bookings
    async fn delete(&self, id: i64) -> Result<(), GuideError>;
}

/// Create guide request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGuideDto {
    pub name: String,
    pub experience_years: i32,
    pub is_active: bool,
}

/// Update guide request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGuideDto {
    pub name: String,
    pub experience_years: i32,
    pub is_active: bool,
}

/// Guide service errors
#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("Guide #{0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Storage(AppError),
}

/// A guide removed between load and write surfaces as `NotFound`.
impl From<AppError> for GuideError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::GuideNotFound(id) => GuideError::NotFound(id),
            other => GuideError::Storage(other),
        }
    }
}

impl From<GuideError> for AppError {
    fn from(err: GuideError) -> Self {
        match err {
            GuideError::NotFound(id) => AppError::GuideNotFound(id),
            GuideError::Storage(e) => e,
        }
    }
}

/// Guide service implementation
pub struct GuideServiceImpl<G>
where
    G: GuideRepository,
{
    guide_repo: Arc<G>,
}

impl<G> GuideServiceImpl<G>
where
    G: GuideRepository,
{
    pub fn new(guide_repo: Arc<G>) -> Self {
        Self { guide_repo }
    }

    async fn load(&self, id: i64) -> Result<Guide, GuideError> {
        self.guide_repo
            .find_by_id(id)
            .await?
            .ok_or(GuideError::NotFound(id))
    }
}

#[async_trait]
impl<G> GuideService for GuideServiceImpl<G>
where
    G: GuideRepository + 'static,
{
    async fn get_by_id(&self, id: i64) -> Result<Guide, GuideError> {
        self.load(id).await
    }

    async fn get_all(&self) -> Result<Vec<Guide>, GuideError> {
        Ok(self.guide_repo.find_all().await?)
    }

    async fn find_active(&self, min_experience: Option<i32>) -> Result<Vec<Guide>, GuideError> {
        Ok(self.guide_repo.find_active(min_experience).await?)
    }

    async fn create(&self, request: CreateGuideDto) -> Result<Guide, GuideError> {
        let guide = NewGuide {
            name: request.name,
            experience_years: request.experience_years,
            is_active: request.is_active,
        };

        let created = self.guide_repo.create(&guide).await?;
        tracing::debug!(guide_id = created.id, "Guide created");
        Ok(created)
    }

    async fn update(&self, id: i64, request: UpdateGuideDto) -> Result<Guide, GuideError> {
        let mut guide = self.load(id).await?;

        guide.name = request.name;
        guide.experience_years = request.experience_years;
        if request.is_active {
            guide.activate();
        } else {
            guide.deactivate();
        }

        Ok(self.guide_repo.update(&guide).await?)
    }

    async fn delete(&self, id: i64) -> Result<(), GuideError> {
        let guide = self.load(id).await?;

        self.guide_repo.delete(guide.id).await?;
        tracing::debug!(guide_id = id, "Guide deleted");
        Ok(())
    }
}
