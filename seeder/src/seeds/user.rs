use async_trait::async_trait;
use common::config;
use db::models::user::Model as UserModel;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::error::SeedError;
use crate::seed::{SeedOutcome, Seeder};

/// Ensures the configured administrator account exists.
pub struct AdminUserSeeder;

#[async_trait]
impl Seeder for AdminUserSeeder {
    fn name(&self) -> String {
        "users".to_string()
    }

    async fn seed(&self, db: &DatabaseConnection) -> Result<SeedOutcome, SeedError> {
        let email = config::admin_email();
        let password_hash = UserModel::hash_password(&config::admin_password())
            .map_err(|e| SeedError::PasswordHash(e.to_string()))?;

        let admin = UserModel::upsert(db, &config::admin_name(), &email, &password_hash, true)
            .await?;

        info!(user_id = admin.id, email = %admin.email, "admin user seeded");
        Ok(SeedOutcome::Seeded { rows: 1 })
    }
}
