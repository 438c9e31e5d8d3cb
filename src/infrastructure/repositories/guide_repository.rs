//! Guide Repository Implementation
//!
//! PostgreSQL implementation of the GuideRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Guide, GuideRepository, NewGuide};
use crate::shared::error::AppError;

/// Database row representation of the `guide` table.
#[derive(Debug, sqlx::FromRow)]
struct GuideRow {
    id: i64,
    name: String,
    experience_years: i32,
    is_active: bool,
}

impl GuideRow {
    fn into_guide(self) -> Guide {
        Guide {
            id: self.id,
            name: self.name,
            experience_years: self.experience_years,
            is_active: self.is_active,
        }
    }
}

/// PostgreSQL guide repository implementation.
#[derive(Clone)]
pub struct PgGuideRepository {
    pool: PgPool,
}

impl PgGuideRepository {
    /// Create a new PgGuideRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuideRepository for PgGuideRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Guide>, AppError> {
        let row = sqlx::query_as::<_, GuideRow>(
            r#"
            SELECT id, name, experience_years, is_active
            FROM guide
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_guide()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Guide>, AppError> {
        let row = sqlx::query_as::<_, GuideRow>(
            r#"
            SELECT id, name, experience_years, is_active
            FROM guide
            WHERE name = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_guide()))
    }

    async fn find_all(&self) -> Result<Vec<Guide>, AppError> {
        let rows = sqlx::query_as::<_, GuideRow>(
            r#"
            SELECT id, name, experience_years, is_active
            FROM guide
            ORDER BY experience_years DESC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_guide()).collect())
    }

    /// A NULL bound disables the experience filter.
    async fn find_active(&self, min_experience: Option<i32>) -> Result<Vec<Guide>, AppError> {
        let rows = sqlx::query_as::<_, GuideRow>(
            r#"
            SELECT id, name, experience_years, is_active
            FROM guide
            WHERE is_active = TRUE
              AND ($1::INTEGER IS NULL OR experience_years >= $1)
            ORDER BY experience_years DESC, name ASC
            "#,
        )
        .bind(min_experience)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_guide()).collect())
    }

    async fn create(&self, guide: &NewGuide) -> Result<Guide, AppError> {
        let row = sqlx::query_as::<_, GuideRow>(
            r#"
            INSERT INTO guide (name, experience_years, is_active)
            VALUES ($1, $2, $3)
            RETURNING id, name, experience_years, is_active
            "#,
        )
        .bind(&guide.name)
        .bind(guide.experience_years)
        .bind(guide.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_guide())
    }

    async fn update(&self, guide: &Guide) -> Result<Guide, AppError> {
        let row = sqlx::query_as::<_, GuideRow>(
            r#"
            UPDATE guide
            SET name = $2,
                experience_years = $3,
                is_active = $4
            WHERE id = $1
            RETURNING id, name, experience_years, is_active
            "#,
        )
        .bind(guide.id)
        .bind(&guide.name)
        .bind(guide.experience_years)
        .bind(guide.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::GuideNotFound(guide.id))?;

        Ok(row.into_guide())
    }

    /// Bookings go with the guide through `ON DELETE CASCADE`.
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM guide WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::GuideNotFound(id));
        }

        Ok(())
    }
}
