use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect, Set};
use serde::{Deserialize, Serialize};

/// A coding exercise attached to exactly one lesson.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lesson_exercises")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub lesson_id: i64,
    pub title: String,
    /// Editor language of the starter and solution code (`python`, `php`, `typescript`, ...).
    pub language: String,
    /// Markdown prompt shown to the student.
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub starter_code: String,
    #[sea_orm(column_type = "Text")]
    pub solution_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id"
    )]
    Lesson,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values of an exercise, independent of the lesson it is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseFields {
    pub title: String,
    pub language: String,
    pub description: String,
    pub starter_code: String,
    pub solution_code: String,
}

impl Model {
    pub async fn find_by_lesson_id<C>(db: &C, lesson_id: i64) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::LessonId.eq(lesson_id))
            .one(db)
            .await
    }

    /// Writes the exercise of `lesson_id`, replacing every content column of an
    /// existing row. `created_at` keeps the value of the first insert.
    pub async fn upsert_for_lesson<C>(
        db: &C,
        lesson_id: i64,
        fields: &ExerciseFields,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        let active = ActiveModel {
            lesson_id: Set(lesson_id),
            title: Set(fields.title.clone()),
            language: Set(fields.language.clone()),
            description: Set(fields.description.clone()),
            starter_code: Set(fields.starter_code.clone()),
            solution_code: Set(fields.solution_code.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::LessonId)
                    .update_columns([
                        Column::Title,
                        Column::Language,
                        Column::Description,
                        Column::StarterCode,
                        Column::SolutionCode,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await
            .map(|_| ())
    }

    /// Exercises of every lesson of the course.
    pub async fn get_by_course_id<C>(db: &C, course_id: i64) -> Result<Vec<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .inner_join(super::lesson::Entity)
            .filter(super::lesson::Column::CourseId.eq(course_id))
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{course, lesson};
    use crate::test_utils::setup_test_db;
    use sea_orm::PaginatorTrait;

    fn fields(title: &str) -> ExerciseFields {
        ExerciseFields {
            title: title.to_string(),
            language: "python".to_string(),
            description: "## Ejercicio".to_string(),
            starter_code: "def main():\n    pass\n".to_string(),
            solution_code: "def main():\n    return 1\n".to_string(),
        }
    }

    #[tokio::test]
    async fn test_upsert_for_lesson_keeps_one_row() {
        let db = setup_test_db().await;
        let course = course::Model::upsert(&db, "django", "Django", None).await.unwrap();
        let lesson = lesson::Model::upsert(&db, course.id, 1, "Modelos").await.unwrap();

        Model::upsert_for_lesson(&db, lesson.id, &fields("Primero")).await.unwrap();
        let first = Model::find_by_lesson_id(&db, lesson.id).await.unwrap().unwrap();

        Model::upsert_for_lesson(&db, lesson.id, &fields("Segundo")).await.unwrap();
        let second = Model::find_by_lesson_id(&db, lesson.id).await.unwrap().unwrap();

        assert_eq!(Entity::find().count(&db).await.unwrap(), 1);
        assert_eq!(first.id, second.id);
        assert_eq!(second.title, "Segundo");
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
    }

    #[tokio::test]
    async fn test_get_by_course_id_filters_other_courses() {
        let db = setup_test_db().await;
        let django = course::Model::upsert(&db, "django", "Django", None).await.unwrap();
        let flask = course::Model::upsert(&db, "flask", "Flask", None).await.unwrap();
        let l1 = lesson::Model::upsert(&db, django.id, 1, "Vistas").await.unwrap();
        let l2 = lesson::Model::upsert(&db, flask.id, 1, "Rutas").await.unwrap();

        Model::upsert_for_lesson(&db, l1.id, &fields("Vistas")).await.unwrap();
        Model::upsert_for_lesson(&db, l2.id, &fields("Rutas")).await.unwrap();

        let found = Model::get_by_course_id(&db, django.id).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].lesson_id, l1.id);
    }
}
