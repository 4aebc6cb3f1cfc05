//! Static course content.
//!
//! Each course module exposes one [`CourseContent`] table. Exercises are bound to
//! lessons by `sort_order`, never by title, so lessons can be renamed freely.

mod django;
mod flask;
mod laravel;
mod node;
mod php;
mod react;

/// A lesson of the course catalog.
#[derive(Debug)]
pub struct LessonDef {
    pub sort_order: i32,
    pub title: &'static str,
}

/// The exercise of the lesson at `sort_order`.
#[derive(Debug)]
pub struct ExerciseDef {
    pub sort_order: i32,
    pub title: &'static str,
    pub language: &'static str,
    pub description: &'static str,
    pub starter_code: &'static str,
    pub solution_code: &'static str,
}

#[derive(Debug)]
pub struct OptionDef {
    pub text: &'static str,
    pub correct: bool,
}

#[derive(Debug)]
pub struct QuestionDef {
    pub question: &'static str,
    pub explanation: Option<&'static str>,
    pub options: &'static [OptionDef],
}

#[derive(Debug)]
pub struct QuizDef {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub questions: &'static [QuestionDef],
}

#[derive(Debug)]
pub struct CourseContent {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub lessons: &'static [LessonDef],
    pub exercises: &'static [ExerciseDef],
    pub quiz: QuizDef,
}

/// Every course, in seeding order.
pub fn all() -> [&'static CourseContent; 6] {
    [
        &django::COURSE,
        &flask::COURSE,
        &laravel::COURSE,
        &node::COURSE,
        &php::COURSE,
        &react::COURSE,
    ]
}

pub fn find(slug: &str) -> Option<&'static CourseContent> {
    all().into_iter().find(|course| course.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = all().iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), all().len());
    }

    #[test]
    fn lesson_sort_orders_are_unique_per_course() {
        for course in all() {
            let orders: HashSet<_> = course.lessons.iter().map(|l| l.sort_order).collect();
            assert_eq!(orders.len(), course.lessons.len(), "{}", course.slug);
        }
    }

    #[test]
    fn every_exercise_targets_a_catalog_lesson_once() {
        for course in all() {
            let lessons: HashSet<_> = course.lessons.iter().map(|l| l.sort_order).collect();
            let mut seen = HashSet::new();
            for exercise in course.exercises {
                assert!(
                    lessons.contains(&exercise.sort_order),
                    "{}: exercise '{}' has no lesson {}",
                    course.slug,
                    exercise.title,
                    exercise.sort_order
                );
                assert!(seen.insert(exercise.sort_order), "{}: duplicate", course.slug);
            }
        }
    }

    #[test]
    fn every_lesson_after_the_introduction_has_an_exercise() {
        for course in all() {
            let covered: HashSet<_> = course.exercises.iter().map(|e| e.sort_order).collect();
            let uncovered: Vec<_> = course
                .lessons
                .iter()
                .map(|l| l.sort_order)
                .filter(|order| !covered.contains(order))
                .collect();
            assert_eq!(uncovered, vec![1], "{}", course.slug);
            assert_eq!(course.exercises.len(), 19, "{}", course.slug);
        }
    }

    #[test]
    fn every_question_has_exactly_one_correct_option() {
        for course in all() {
            for question in course.quiz.questions {
                let correct = question.options.iter().filter(|o| o.correct).count();
                assert_eq!(correct, 1, "{}: {}", course.slug, question.question);
                assert!(question.options.len() >= 2);
            }
        }
    }

    #[test]
    fn exercise_code_is_not_empty() {
        for course in all() {
            for exercise in course.exercises {
                assert!(!exercise.starter_code.trim().is_empty(), "{}", exercise.title);
                assert!(!exercise.solution_code.trim().is_empty(), "{}", exercise.title);
                assert_ne!(exercise.starter_code, exercise.solution_code, "{}", exercise.title);
            }
        }
    }

    #[test]
    fn find_by_slug() {
        assert_eq!(find("react").map(|c| c.title), Some(react::COURSE.title));
        assert!(find("cobol").is_none());
    }
}
