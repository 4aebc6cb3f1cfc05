use argon2::{
    Argon2,
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};
use serde::Serialize;

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unique email address; the upsert key for seeded users.
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string())
    }

    /// Returns `true` if `password` matches the stored hash.
    pub fn verify_password(&self, password: &str) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    pub async fn find_by_email<C>(db: &C, email: &str) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    /// Inserts the user or, if the email already exists, overwrites its name,
    /// hash and admin flag.
    pub async fn upsert<C>(
        db: &C,
        name: &str,
        email: &str,
        password_hash: &str,
        admin: bool,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        let active = ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            admin: Set(admin),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Email)
                    .update_columns([
                        Column::Name,
                        Column::PasswordHash,
                        Column::Admin,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Self::find_by_email(db, email)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {email} after upsert")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_upsert_hashes_and_overwrites() {
        let db = setup_test_db().await;

        let first_hash = Model::hash_password("secret").expect("hash");
        let first = Model::upsert(&db, "Admin", "admin@example.com", &first_hash, true)
            .await
            .expect("Failed to upsert user");
        assert!(first.admin);
        assert!(first.verify_password("secret"));
        assert!(!first.verify_password("wrong"));

        let second_hash = Model::hash_password("changed").expect("hash");
        let second = Model::upsert(&db, "Root", "admin@example.com", &second_hash, true)
            .await
            .expect("Failed to upsert user again");

        assert_eq!(second.id, first.id);
        assert_eq!(second.name, "Root");
        assert!(second.verify_password("changed"));
        assert_eq!(Entity::find().count(&db).await.unwrap(), 1);
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = Model::hash_password("same").unwrap();
        let b = Model::hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2"));
    }
}
