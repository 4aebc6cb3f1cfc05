use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use serde::{Deserialize, Serialize};

use super::quiz_option;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quiz_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quiz_id: i64,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub explanation: Option<String>,
    /// 1-based order within the quiz.
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id"
    )]
    Quiz,
    #[sea_orm(has_many = "super::quiz_option::Entity")]
    QuizOption,
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::quiz_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuizOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(
        db: &C,
        quiz_id: i64,
        position: i32,
        question: &str,
        explanation: Option<&str>,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        ActiveModel {
            quiz_id: Set(quiz_id),
            position: Set(position),
            question: Set(question.to_owned()),
            explanation: Set(explanation.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn get_by_quiz_id<C>(db: &C, quiz_id: i64) -> Result<Vec<Self>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::QuizId.eq(quiz_id))
            .order_by_asc(Column::Position)
            .all(db)
            .await
    }

    /// Removes every question of the quiz together with its options.
    ///
    /// Options are deleted explicitly so the result does not depend on SQLite's
    /// `foreign_keys` pragma. Returns the number of questions removed.
    pub async fn delete_for_quiz<C>(db: &C, quiz_id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let question_ids: Vec<i64> = Self::get_by_quiz_id(db, quiz_id)
            .await?
            .into_iter()
            .map(|q| q.id)
            .collect();

        if question_ids.is_empty() {
            return Ok(0);
        }

        quiz_option::Entity::delete_many()
            .filter(quiz_option::Column::QuizQuestionId.is_in(question_ids.clone()))
            .exec(db)
            .await?;

        let result = Entity::delete_many()
            .filter(Column::Id.is_in(question_ids))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{course, quiz};
    use crate::test_utils::setup_test_db;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_delete_for_quiz_removes_options() {
        let db = setup_test_db().await;
        let course = course::Model::upsert(&db, "node", "Node.js", None).await.unwrap();
        let quiz = quiz::Model::upsert_for_course(&db, course.id, "Quiz", None)
            .await
            .unwrap();

        for position in 1..=2 {
            let q = Model::create(&db, quiz.id, position, "¿Pregunta?", None)
                .await
                .unwrap();
            quiz_option::Model::create(&db, q.id, 1, "Sí", true).await.unwrap();
            quiz_option::Model::create(&db, q.id, 2, "No", false).await.unwrap();
        }

        let removed = Model::delete_for_quiz(&db, quiz.id).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(Entity::find().count(&db).await.unwrap(), 0);
        assert_eq!(quiz_option::Entity::find().count(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_for_quiz_leaves_other_quizzes() {
        let db = setup_test_db().await;
        let a = course::Model::upsert(&db, "php", "PHP", None).await.unwrap();
        let b = course::Model::upsert(&db, "react", "React", None).await.unwrap();
        let qa = quiz::Model::upsert_for_course(&db, a.id, "A", None).await.unwrap();
        let qb = quiz::Model::upsert_for_course(&db, b.id, "B", None).await.unwrap();

        Model::create(&db, qa.id, 1, "a", None).await.unwrap();
        Model::create(&db, qb.id, 1, "b", Some("porque sí")).await.unwrap();

        Model::delete_for_quiz(&db, qa.id).await.unwrap();

        let remaining = Model::get_by_quiz_id(&db, qb.id).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].explanation.as_deref(), Some("porque sí"));
        assert!(Model::get_by_quiz_id(&db, qa.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_for_empty_quiz() {
        let db = setup_test_db().await;
        assert_eq!(Model::delete_for_quiz(&db, 42).await.unwrap(), 0);
    }
}
