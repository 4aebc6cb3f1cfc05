use sea_orm::DbErr;

/// Errors that abort a seeding run.
///
/// A missing course or lesson is not an error; seeders report it as
/// [`SeedOutcome::Skipped`](crate::SeedOutcome::Skipped).
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Seeder {0} panicked")]
    Panicked(String),
}
