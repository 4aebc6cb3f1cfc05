pub mod m202601150001_create_users;
pub mod m202601150002_create_courses;
pub mod m202601150003_create_lessons;
pub mod m202601150004_create_lesson_exercises;
pub mod m202601150005_create_quizzes;
pub mod m202601150006_create_quiz_questions;
pub mod m202601150007_create_quiz_options;
