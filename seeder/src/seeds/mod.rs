pub mod catalog;
pub mod exercise;
pub mod quiz;
pub mod user;

use crate::content;
use crate::seed::Seeder;

use catalog::CourseCatalogSeeder;
use exercise::ExerciseSeeder;
use quiz::QuizSeeder;
use user::AdminUserSeeder;

/// Every seeder in run order: users, catalog, exercises per course, quizzes per course.
pub fn all() -> Vec<Box<dyn Seeder>> {
    let mut seeders: Vec<Box<dyn Seeder>> =
        vec![Box::new(AdminUserSeeder), Box::new(CourseCatalogSeeder)];

    for course in content::all() {
        seeders.push(Box::new(ExerciseSeeder::new(course)));
    }
    for course in content::all() {
        seeders.push(Box::new(QuizSeeder::new(course)));
    }

    seeders
}

/// Keeps the seeders selected by any of `filters`; no filters keeps all of them.
pub fn select(seeders: Vec<Box<dyn Seeder>>, filters: &[String]) -> Vec<Box<dyn Seeder>> {
    if filters.is_empty() {
        return seeders;
    }
    seeders
        .into_iter()
        .filter(|seeder| filters.iter().any(|f| seeder.matches(f)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(seeders: &[Box<dyn Seeder>]) -> Vec<String> {
        seeders.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn run_order_puts_prerequisites_first() {
        let names = names(&all());
        assert_eq!(names[0], "users");
        assert_eq!(names[1], "catalog");
        assert_eq!(names.len(), 2 + 2 * content::all().len());
        let first_quiz = names.iter().position(|n| n.starts_with("quizzes:")).unwrap();
        assert!(names[..first_quiz].iter().skip(2).all(|n| n.starts_with("exercises:")));
    }

    #[test]
    fn select_by_course_slug_and_kind() {
        let by_slug = select(all(), &["django".to_string()]);
        assert_eq!(names(&by_slug), vec!["exercises:django", "quizzes:django"]);

        let quizzes = select(all(), &["quizzes".to_string()]);
        assert_eq!(quizzes.len(), content::all().len());

        let exact = select(all(), &["catalog".to_string(), "quizzes:react".to_string()]);
        assert_eq!(names(&exact), vec!["catalog", "quizzes:react"]);
    }

    #[test]
    fn select_without_filters_keeps_everything() {
        assert_eq!(select(all(), &[]).len(), all().len());
        assert!(select(all(), &["cobol".to_string()]).is_empty());
    }
}
