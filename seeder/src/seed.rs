use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

use async_trait::async_trait;
use colored::*;
use futures::FutureExt;
use sea_orm::DatabaseConnection;

use crate::error::SeedError;

const STATUS_COLUMN: usize = 80;

/// Result of a seeder that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// `rows` top-level records were written (exercises, questions, lessons, ...).
    Seeded { rows: usize },
    /// A prerequisite record was missing; nothing was written.
    Skipped { reason: String },
}

impl SeedOutcome {
    pub fn rows(&self) -> usize {
        match self {
            SeedOutcome::Seeded { rows } => *rows,
            SeedOutcome::Skipped { .. } => 0,
        }
    }
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::Seeded { rows } => write!(f, "{rows} rows"),
            SeedOutcome::Skipped { reason } => write!(f, "{reason}"),
        }
    }
}

#[async_trait]
pub trait Seeder: Send + Sync {
    /// Name shown in the status line and matched by command-line filters,
    /// e.g. `exercises:django`.
    fn name(&self) -> String;

    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome, SeedError>;

    /// Whether any of the filter words selects this seeder. A word matches the
    /// full name or any `:`-separated part of it.
    fn matches(&self, filter: &str) -> bool {
        let name = self.name();
        name == filter || name.split(':').any(|part| part == filter)
    }
}

/// Runs one seeder and prints a dotted status line for it.
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    db: &DatabaseConnection,
) -> Result<SeedOutcome, SeedError> {
    let name = seeder.name();
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = std::panic::AssertUnwindSafe(seeder.seed(db))
        .catch_unwind()
        .await
        .unwrap_or_else(|_| Err(SeedError::Panicked(name.clone())));

    let time_str = format!("({:.2?})", start.elapsed()).dimmed();
    match &result {
        Ok(SeedOutcome::Seeded { rows }) => {
            println!("{} {} {}", "done".green(), format!("{rows} rows").dimmed(), time_str);
            tracing::info!(seeder = %name, rows, "seeded");
        }
        Ok(SeedOutcome::Skipped { reason }) => {
            println!("{} {}", "skipped".yellow(), reason.dimmed());
        }
        Err(err) => {
            println!("{}", "failed".red());
            tracing::error!(seeder = %name, error = %err, "seeding failed");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::test_utils::setup_test_db;

    struct Exploding;

    #[async_trait]
    impl Seeder for Exploding {
        fn name(&self) -> String {
            "exploding".into()
        }

        async fn seed(&self, _db: &DatabaseConnection) -> Result<SeedOutcome, SeedError> {
            panic!("boom");
        }
    }

    struct Absent;

    #[async_trait]
    impl Seeder for Absent {
        fn name(&self) -> String {
            "quizzes:cobol".into()
        }

        async fn seed(&self, _db: &DatabaseConnection) -> Result<SeedOutcome, SeedError> {
            Ok(SeedOutcome::Skipped {
                reason: "course 'cobol' not found".into(),
            })
        }
    }

    #[tokio::test]
    async fn panicking_seeder_is_reported_as_panicked() {
        let db = setup_test_db().await;

        let err = run_seeder(&Exploding, &db).await.unwrap_err();

        assert!(matches!(&err, SeedError::Panicked(name) if name == "exploding"));
        assert_eq!(err.to_string(), "Seeder exploding panicked");
    }

    #[tokio::test]
    async fn skipped_outcome_passes_through() {
        let db = setup_test_db().await;

        let outcome = run_seeder(&Absent, &db).await.unwrap();

        assert_eq!(outcome.rows(), 0);
        assert_eq!(outcome.to_string(), "course 'cobol' not found");
    }

    #[test]
    fn filters_match_name_parts() {
        assert!(Absent.matches("quizzes"));
        assert!(Absent.matches("cobol"));
        assert!(Absent.matches("quizzes:cobol"));
        assert!(!Absent.matches("quiz"));
    }
}
