use async_trait::async_trait;
use db::models::{course, quiz, quiz_option, quiz_question};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, warn};

use crate::content::CourseContent;
use crate::error::SeedError;
use crate::seed::{SeedOutcome, Seeder};

/// Writes the quiz of one course.
///
/// The quiz row is upserted by `course_id`; its questions and options are deleted
/// and recreated on every run, so answers added at runtime do not survive a reseed.
pub struct QuizSeeder {
    content: &'static CourseContent,
}

impl QuizSeeder {
    pub fn new(content: &'static CourseContent) -> Self {
        Self { content }
    }
}

#[async_trait]
impl Seeder for QuizSeeder {
    fn name(&self) -> String {
        format!("quizzes:{}", self.content.slug)
    }

    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome, SeedError> {
        let Some(course) = course::Model::find_by_slug(db, self.content.slug).await? else {
            warn!(course = self.content.slug, "course not found, quiz skipped");
            return Ok(SeedOutcome::Skipped {
                reason: format!("course '{}' not found", self.content.slug),
            });
        };

        let definition = &self.content.quiz;
        let txn = db.begin().await?;

        let quiz = quiz::Model::upsert_for_course(
            &txn,
            course.id,
            definition.title,
            definition.description,
        )
        .await?;

        let removed = quiz_question::Model::delete_for_quiz(&txn, quiz.id).await?;
        debug!(quiz_id = quiz.id, removed, "previous questions removed");

        for (index, question) in definition.questions.iter().enumerate() {
            let created = quiz_question::Model::create(
                &txn,
                quiz.id,
                index as i32 + 1,
                question.question,
                question.explanation,
            )
            .await?;

            for (option_index, option) in question.options.iter().enumerate() {
                quiz_option::Model::create(
                    &txn,
                    created.id,
                    option_index as i32 + 1,
                    option.text,
                    option.correct,
                )
                .await?;
            }
        }

        txn.commit().await?;

        info!(
            course = self.content.slug,
            questions = definition.questions.len(),
            "quiz seeded"
        );
        Ok(SeedOutcome::Seeded {
            rows: definition.questions.len(),
        })
    }
}
