use std::collections::BTreeMap;

use async_trait::async_trait;
use db::models::{course, lesson, lesson_exercise};
use db::models::lesson_exercise::ExerciseFields;
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::content::CourseContent;
use crate::error::SeedError;
use crate::seed::{SeedOutcome, Seeder};

/// An exercise bound to the id of the lesson it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub lesson_id: i64,
    pub sort_order: i32,
    pub fields: ExerciseFields,
}

/// Binds each exercise block of `content` to the lesson at its `sort_order`.
///
/// Blocks whose lesson does not exist are left out.
pub fn build_exercise_records(
    content: &CourseContent,
    lessons: &BTreeMap<i32, lesson::Model>,
) -> Vec<ExerciseRecord> {
    let mut records = Vec::with_capacity(content.exercises.len());

    for exercise in content.exercises {
        let Some(lesson) = lessons.get(&exercise.sort_order) else {
            info!(
                course = content.slug,
                sort_order = exercise.sort_order,
                "no lesson at position, exercise skipped"
            );
            continue;
        };

        records.push(ExerciseRecord {
            lesson_id: lesson.id,
            sort_order: exercise.sort_order,
            fields: ExerciseFields {
                title: exercise.title.to_string(),
                language: exercise.language.to_string(),
                description: exercise.description.to_string(),
                starter_code: exercise.starter_code.to_string(),
                solution_code: exercise.solution_code.to_string(),
            },
        });
    }

    records
}

/// Writes the coding exercises of one course.
pub struct ExerciseSeeder {
    content: &'static CourseContent,
}

impl ExerciseSeeder {
    pub fn new(content: &'static CourseContent) -> Self {
        Self { content }
    }
}

#[async_trait]
impl Seeder for ExerciseSeeder {
    fn name(&self) -> String {
        format!("exercises:{}", self.content.slug)
    }

    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome, SeedError> {
        let Some(course) = course::Model::find_by_slug(db, self.content.slug).await? else {
            warn!(course = self.content.slug, "course not found, exercises skipped");
            return Ok(SeedOutcome::Skipped {
                reason: format!("course '{}' not found", self.content.slug),
            });
        };

        let lessons = lesson::Model::keyed_by_sort_order(db, course.id).await?;
        let records = build_exercise_records(self.content, &lessons);

        for record in &records {
            lesson_exercise::Model::upsert_for_lesson(db, record.lesson_id, &record.fields)
                .await?;
        }

        info!(
            course = self.content.slug,
            exercises = records.len(),
            "exercises seeded"
        );
        Ok(SeedOutcome::Seeded {
            rows: records.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use chrono::Utc;

    fn lesson_at(id: i64, sort_order: i32) -> lesson::Model {
        lesson::Model {
            id,
            course_id: 1,
            title: format!("Lección {sort_order}"),
            sort_order,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn binds_every_block_when_all_lessons_exist() {
        let course = content::find("django").unwrap();
        let lessons: BTreeMap<i32, lesson::Model> = course
            .lessons
            .iter()
            .map(|l| (l.sort_order, lesson_at(100 + l.sort_order as i64, l.sort_order)))
            .collect();

        let records = build_exercise_records(course, &lessons);

        assert_eq!(records.len(), course.exercises.len());
        for (record, block) in records.iter().zip(course.exercises) {
            assert_eq!(record.sort_order, block.sort_order);
            assert_eq!(record.lesson_id, 100 + block.sort_order as i64);
            assert_eq!(record.fields.title, block.title);
        }
    }

    #[test]
    fn skips_blocks_without_lesson() {
        let course = content::find("php").unwrap();
        let first = course.exercises[0].sort_order;
        let lessons = BTreeMap::from([(first, lesson_at(7, first))]);

        let records = build_exercise_records(course, &lessons);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lesson_id, 7);
    }

    #[test]
    fn no_lessons_no_records() {
        let course = content::find("react").unwrap();
        assert!(build_exercise_records(course, &BTreeMap::new()).is_empty());
    }
}
