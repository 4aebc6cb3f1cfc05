pub mod course;
pub mod lesson;
pub mod lesson_exercise;
pub mod quiz;
pub mod quiz_option;
pub mod quiz_question;
pub mod user;

pub use course::Entity as Course;
pub use lesson::Entity as Lesson;
pub use lesson_exercise::Entity as LessonExercise;
pub use quiz::Entity as Quiz;
pub use quiz_option::Entity as QuizOption;
pub use quiz_question::Entity as QuizQuestion;
pub use user::Entity as User;
