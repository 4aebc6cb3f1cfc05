use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202601150001_create_users::Migration),
            Box::new(migrations::m202601150002_create_courses::Migration),
            Box::new(migrations::m202601150003_create_lessons::Migration),
            Box::new(migrations::m202601150004_create_lesson_exercises::Migration),
            Box::new(migrations::m202601150005_create_quizzes::Migration),
            Box::new(migrations::m202601150006_create_quiz_questions::Migration),
            Box::new(migrations::m202601150007_create_quiz_options::Migration),
        ]
    }
}
