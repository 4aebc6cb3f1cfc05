use async_trait::async_trait;
use db::models::{course, lesson};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::content;
use crate::error::SeedError;
use crate::seed::{SeedOutcome, Seeder};

/// Creates the courses and their lessons that the content seeders attach to.
///
/// Courses are keyed by slug and lessons by `(course_id, sort_order)`, so existing
/// rows keep their ids across runs.
pub struct CourseCatalogSeeder;

#[async_trait]
impl Seeder for CourseCatalogSeeder {
    fn name(&self) -> String {
        "catalog".to_string()
    }

    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome, SeedError> {
        let mut lessons_written = 0;

        for definition in content::all() {
            let course = course::Model::upsert(
                db,
                definition.slug,
                definition.title,
                Some(definition.description),
            )
            .await?;

            for entry in definition.lessons {
                lesson::Model::upsert(db, course.id, entry.sort_order, entry.title).await?;
            }

            info!(
                course = definition.slug,
                lessons = definition.lessons.len(),
                "course catalog seeded"
            );
            lessons_written += definition.lessons.len();
        }

        Ok(SeedOutcome::Seeded {
            rows: lessons_written,
        })
    }
}
