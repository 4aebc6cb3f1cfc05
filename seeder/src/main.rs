use std::{env, process};

use colored::*;
use common::{config, logger};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use seeder::{SeedOutcome, run_seeder, seeds};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let _log_guard = logger::init_logging(
        &config::log_file(),
        &config::log_level(),
        config::log_to_stdout(),
    );

    let db = match db::connect().await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("Failed to connect to {}: {err}", config::database_path());
            process::exit(1);
        }
    };

    if let Err(err) = Migrator::up(&db, None).await {
        eprintln!("Failed to migrate {}: {err}", config::database_path());
        process::exit(1);
    }

    let filters: Vec<String> = env::args().skip(1).collect();
    let selected = seeds::select(seeds::all(), &filters);
    if selected.is_empty() {
        eprintln!("No seeder matches {}", filters.join(", "));
        process::exit(1);
    }

    let mut total_rows = 0;
    let mut skipped = 0;
    for seeder in &selected {
        match run_seeder(seeder.as_ref(), &db).await {
            Ok(outcome) => {
                if matches!(outcome, SeedOutcome::Skipped { .. }) {
                    skipped += 1;
                }
                total_rows += outcome.rows();
            }
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
        }
    }

    println!(
        "{} {}: {} seeders, {} rows written, {} skipped",
        "Finished".green().bold(),
        config::project_name(),
        selected.len(),
        total_rows,
        skipped
    );
}
