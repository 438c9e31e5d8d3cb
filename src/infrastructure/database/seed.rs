//! Demo guides loaded at startup when `storage.seed_demo_guides` is set.

use crate::domain::{GuideRepository, NewGuide};
use crate::shared::error::AppError;

/// `(name, experience_years, is_active)`
pub const DEMO_GUIDES: [(&str, i32, bool); 7] = [
    ("Иван Иванов", 5, true),
    ("Петр Петров", 2, true),
    ("Александр Александров", 8, false),
    ("Сергей Сергеев", 10, true),
    ("Сидр Сидоров", 2, true),
    ("Василий Васильев", 4, true),
    ("Николай Николаев", 1, false),
];

/// Upsert the demo guides by name. Running it twice leaves the same rows.
///
/// Returns the number of guides that were created.
pub async fn seed_demo_guides<R>(repo: &R) -> Result<usize, AppError>
where
    R: GuideRepository + ?Sized,
{
    let mut created = 0;

    for (name, experience_years, is_active) in DEMO_GUIDES {
        match repo.find_by_name(name).await? {
            Some(mut guide) => {
                guide.experience_years = experience_years;
                if is_active {
                    guide.activate();
                } else {
                    guide.deactivate();
                }
                repo.update(&guide).await?;
            }
            None => {
                repo.create(&NewGuide {
                    name: name.to_string(),
                    experience_years,
                    is_active,
                })
                .await?;
                created += 1;
            }
        }
    }

    tracing::info!(created, total = DEMO_GUIDES.len(), "Demo guides seeded");
    Ok(created)
}
