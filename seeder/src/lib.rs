//! Course content seeders.
//!
//! Every seeder writes fixed content (courses, lessons, coding exercises and quizzes)
//! with idempotent upserts, so the whole set can be re-run against the same database.

pub mod content;
pub mod error;
pub mod seed;
pub mod seeds;

pub use error::SeedError;
pub use seed::{SeedOutcome, Seeder, run_seeder};
