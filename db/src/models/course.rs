use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

/// A course, looked up by its unique slug.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::lesson::Entity")]
    Lesson,
    #[sea_orm(has_one = "super::quiz::Entity")]
    Quiz,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_by_slug<C>(db: &C, slug: &str) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find().filter(Column::Slug.eq(slug)).one(db).await
    }

    /// Creates the course or refreshes the title and description of the existing one.
    pub async fn upsert<C>(
        db: &C,
        slug: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        let active = ActiveModel {
            slug: Set(slug.to_owned()),
            title: Set(title.to_owned()),
            description: Set(description.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Slug)
                    .update_columns([Column::Title, Column::Description, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Self::find_by_slug(db, slug)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("course {slug} after upsert")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_upsert_is_keyed_by_slug() {
        let db = setup_test_db().await;

        let created = Model::upsert(&db, "django", "Django", None).await.unwrap();
        let updated = Model::upsert(&db, "django", "Django desde cero", Some("Curso completo"))
            .await
            .unwrap();

        assert_eq!(created.id, updated.id);
        assert_eq!(updated.title, "Django desde cero");
        assert_eq!(updated.description.as_deref(), Some("Curso completo"));
        assert_eq!(Entity::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_slug_missing() {
        let db = setup_test_db().await;
        let found = Model::find_by_slug(&db, "cobol").await.unwrap();
        assert!(found.is_none());
    }
}
