use db::models::{course, lesson, lesson_exercise, quiz, quiz_option, quiz_question, user};
use db::test_utils::setup_test_db;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use seeder::content;
use seeder::seeds::catalog::CourseCatalogSeeder;
use seeder::seeds::exercise::ExerciseSeeder;
use seeder::seeds::quiz::QuizSeeder;
use seeder::seeds::user::AdminUserSeeder;
use seeder::{SeedOutcome, Seeder, run_seeder};

async fn seeded_catalog() -> DatabaseConnection {
    let db = setup_test_db().await;
    CourseCatalogSeeder.seed(&db).await.expect("catalog seeding failed");
    db
}

async fn exercise_count(db: &DatabaseConnection) -> u64 {
    lesson_exercise::Entity::find().count(db).await.unwrap()
}

#[tokio::test]
async fn exercises_match_literal_blocks_for_every_course() {
    let db = seeded_catalog().await;

    for course in content::all() {
        let outcome = ExerciseSeeder::new(course).seed(&db).await.unwrap();
        assert_eq!(
            outcome,
            SeedOutcome::Seeded {
                rows: course.exercises.len()
            },
            "{}",
            course.slug
        );
    }

    let expected: usize = content::all().iter().map(|c| c.exercises.len()).sum();
    assert_eq!(exercise_count(&db).await as usize, expected);
}

#[tokio::test]
async fn reseeding_exercises_keeps_row_count() {
    let db = seeded_catalog().await;
    let django = content::find("django").unwrap();
    let seeder = ExerciseSeeder::new(django);

    seeder.seed(&db).await.unwrap();
    let first = exercise_count(&db).await;
    seeder.seed(&db).await.unwrap();
    let second = exercise_count(&db).await;

    assert_eq!(first, second);
    assert_eq!(first as usize, django.exercises.len());
}

#[tokio::test]
async fn missing_course_writes_nothing() {
    let db = setup_test_db().await;
    let flask = content::find("flask").unwrap();

    let exercises = ExerciseSeeder::new(flask).seed(&db).await.unwrap();
    let quizzes = QuizSeeder::new(flask).seed(&db).await.unwrap();

    assert!(matches!(exercises, SeedOutcome::Skipped { .. }));
    assert!(matches!(quizzes, SeedOutcome::Skipped { .. }));
    assert_eq!(exercise_count(&db).await, 0);
    assert_eq!(quiz::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(quiz_question::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn exercises_belong_to_lessons_of_the_same_course() {
    let db = seeded_catalog().await;

    for definition in content::all() {
        ExerciseSeeder::new(definition).seed(&db).await.unwrap();
    }

    for definition in content::all() {
        let course = course::Model::find_by_slug(&db, definition.slug)
            .await
            .unwrap()
            .unwrap();
        let lessons = lesson::Model::keyed_by_sort_order(&db, course.id).await.unwrap();
        let exercises = lesson_exercise::Model::get_by_course_id(&db, course.id)
            .await
            .unwrap();

        assert_eq!(exercises.len(), definition.exercises.len());
        for exercise in exercises {
            let owner = lessons
                .values()
                .find(|l| l.id == exercise.lesson_id)
                .expect("exercise bound to a lesson of another course");
            let block = definition
                .exercises
                .iter()
                .find(|e| e.sort_order == owner.sort_order)
                .expect("no literal block for lesson");
            assert_eq!(exercise.title, block.title);
            assert_eq!(exercise.language, block.language);
        }
    }
}

#[tokio::test]
async fn missing_lesson_skips_only_its_block() {
    let db = seeded_catalog().await;
    let react = content::find("react").unwrap();
    let course = course::Model::find_by_slug(&db, "react").await.unwrap().unwrap();

    let removed = react.exercises[0].sort_order;
    let lesson = lesson::Model::find_by_position(&db, course.id, removed)
        .await
        .unwrap()
        .unwrap();
    lesson::Model::delete_by_id(&db, lesson.id).await.unwrap();

    let outcome = ExerciseSeeder::new(react).seed(&db).await.unwrap();

    assert_eq!(outcome.rows(), react.exercises.len() - 1);
    assert_eq!(exercise_count(&db).await as usize, react.exercises.len() - 1);
}

#[tokio::test]
async fn every_seeded_question_has_one_correct_option() {
    let db = seeded_catalog().await;

    for definition in content::all() {
        QuizSeeder::new(definition).seed(&db).await.unwrap();
    }

    for question in quiz_question::Entity::find().all(&db).await.unwrap() {
        let options = quiz_option::Model::get_by_question_id(&db, question.id)
            .await
            .unwrap();
        let correct = options.iter().filter(|o| o.is_correct).count();
        assert_eq!(correct, 1, "{}", question.question);
    }
}

#[tokio::test]
async fn reseeding_quiz_replaces_questions() {
    let db = seeded_catalog().await;
    let laravel = content::find("laravel").unwrap();
    let seeder = QuizSeeder::new(laravel);

    seeder.seed(&db).await.unwrap();
    let course = course::Model::find_by_slug(&db, "laravel").await.unwrap().unwrap();
    let seeded_quiz = quiz::Model::find_by_course_id(&db, course.id)
        .await
        .unwrap()
        .unwrap();

    // Added outside the seeder; must not survive the next run.
    let extra = quiz_question::Model::create(&db, seeded_quiz.id, 99, "¿Extra?", None)
        .await
        .unwrap();
    quiz_option::Model::create(&db, extra.id, 1, "Sí", true).await.unwrap();

    let options_before = quiz_option::Entity::find().count(&db).await.unwrap();
    seeder.seed(&db).await.unwrap();

    let questions = quiz_question::Model::get_by_quiz_id(&db, seeded_quiz.id)
        .await
        .unwrap();
    assert_eq!(questions.len(), laravel.quiz.questions.len());
    assert!(questions.iter().all(|q| q.question != "¿Extra?"));
    assert_eq!(
        questions.iter().map(|q| q.position).collect::<Vec<_>>(),
        (1..=laravel.quiz.questions.len() as i32).collect::<Vec<_>>()
    );
    assert_eq!(
        quiz_option::Entity::find().count(&db).await.unwrap(),
        options_before - 1
    );

    let quiz_after = quiz::Model::find_by_course_id(&db, course.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(quiz_after.id, seeded_quiz.id);
    assert_eq!(quiz::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn catalog_is_idempotent() {
    let db = seeded_catalog().await;
    let courses = course::Entity::find().count(&db).await.unwrap();
    let lessons = lesson::Entity::find().count(&db).await.unwrap();

    let outcome = CourseCatalogSeeder.seed(&db).await.unwrap();

    let expected_lessons: usize = content::all().iter().map(|c| c.lessons.len()).sum();
    assert_eq!(outcome.rows(), expected_lessons);
    assert_eq!(courses as usize, content::all().len());
    assert_eq!(course::Entity::find().count(&db).await.unwrap(), courses);
    assert_eq!(lesson::Entity::find().count(&db).await.unwrap(), lessons);
}

#[tokio::test]
async fn admin_user_is_upserted_once() {
    let db = setup_test_db().await;

    AdminUserSeeder.seed(&db).await.unwrap();
    AdminUserSeeder.seed(&db).await.unwrap();

    let users = user::Entity::find().all(&db).await.unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].admin);
    assert!(users[0].password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn full_run_in_order_seeds_everything() {
    let db = setup_test_db().await;

    for seeder in seeder::seeds::all() {
        let outcome = run_seeder(seeder.as_ref(), &db).await.unwrap();
        assert!(
            matches!(outcome, SeedOutcome::Seeded { .. }),
            "{} was skipped",
            seeder.name()
        );
    }

    let questions: usize = content::all().iter().map(|c| c.quiz.questions.len()).sum();
    assert_eq!(
        quiz_question::Entity::find().count(&db).await.unwrap() as usize,
        questions
    );
    assert_eq!(
        quiz::Entity::find().count(&db).await.unwrap() as usize,
        content::all().len()
    );
}
