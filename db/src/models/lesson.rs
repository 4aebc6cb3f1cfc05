use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

/// A lesson of a course. `sort_order` is unique within the course and is the key
/// content is attached by.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(has_one = "super::lesson_exercise::Entity")]
    LessonExercise,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::lesson_exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonExercise.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// All lessons of a course ordered by `sort_order`.
    pub async fn get_by_course_id<C>(db: &C, course_id: i64) -> Result<Vec<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::SortOrder)
            .all(db)
            .await
    }

    /// The lessons of a course keyed by their `sort_order`.
    pub async fn keyed_by_sort_order<C>(
        db: &C,
        course_id: i64,
    ) -> Result<BTreeMap<i32, Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(Self::get_by_course_id(db, course_id)
            .await?
            .into_iter()
            .map(|lesson| (lesson.sort_order, lesson))
            .collect())
    }

    pub async fn find_by_position<C>(
        db: &C,
        course_id: i64,
        sort_order: i32,
    ) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::SortOrder.eq(sort_order))
            .one(db)
            .await
    }

    /// Creates the lesson at `(course_id, sort_order)` or renames the existing one.
    pub async fn upsert<C>(
        db: &C,
        course_id: i64,
        sort_order: i32,
        title: &str,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        let active = ActiveModel {
            course_id: Set(course_id),
            sort_order: Set(sort_order),
            title: Set(title.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Entity::insert(active)
            .on_conflict(
                OnConflict::columns([Column::CourseId, Column::SortOrder])
                    .update_columns([Column::Title, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Self::find_by_position(db, course_id, sort_order)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("lesson {course_id}/{sort_order} after upsert"))
            })
    }

    pub async fn delete_by_id<C>(db: &C, id: i64) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::delete_by_id(id).exec(db).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_keyed_by_sort_order() {
        let db = setup_test_db().await;
        let course = course::Model::upsert(&db, "flask", "Flask", None).await.unwrap();

        Model::upsert(&db, course.id, 3, "Plantillas").await.unwrap();
        Model::upsert(&db, course.id, 1, "Introducción").await.unwrap();
        Model::upsert(&db, course.id, 2, "Rutas").await.unwrap();

        let keyed = Model::keyed_by_sort_order(&db, course.id).await.unwrap();
        assert_eq!(keyed.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(keyed[&2].title, "Rutas");
    }

    #[tokio::test]
    async fn test_upsert_same_position_renames() {
        let db = setup_test_db().await;
        let course = course::Model::upsert(&db, "php", "PHP", None).await.unwrap();

        let first = Model::upsert(&db, course.id, 1, "Hola").await.unwrap();
        let second = Model::upsert(&db, course.id, 1, "Hola mundo").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.title, "Hola mundo");
        assert_eq!(Model::get_by_course_id(&db, course.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_positions_are_scoped_per_course() {
        let db = setup_test_db().await;
        let a = course::Model::upsert(&db, "react", "React", None).await.unwrap();
        let b = course::Model::upsert(&db, "laravel", "Laravel", None).await.unwrap();

        let la = Model::upsert(&db, a.id, 1, "JSX").await.unwrap();
        let lb = Model::upsert(&db, b.id, 1, "Rutas").await.unwrap();

        assert_ne!(la.id, lb.id);
        assert!(Model::find_by_position(&db, a.id, 2).await.unwrap().is_none());
    }
}
