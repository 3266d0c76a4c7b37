//! End-to-end enrollment flow tests against the in-memory repository.
//!
//! These exercise the full path: store a routine template, enroll a user
//! over a date range, and verify the per-day completion records.

use chrono::NaiveDate;

use routinely::api::{Routine, RoutineId, UserId};
use routinely::db::repository::{EnrollmentRepository, RepositoryError, RoutineRepository};
use routinely::db::LocalRepository;
use routinely::services::{enroll_routine, expand_enrollment};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_routine(title: &str) -> Routine {
    Routine {
        id: None,
        title: title.to_string(),
        sub_title: "sub".to_string(),
        content: "content".to_string(),
        image: None,
        video_url: None,
        category: vec!["fitness".to_string()],
        celebrity: "nobody".to_string(),
        theme: "default".to_string(),
        popular: 0,
    }
}

async fn stored_routine(repo: &LocalRepository, title: &str) -> RoutineId {
    repo.store_routine(&sample_routine(title)).await.unwrap()
}

#[tokio::test]
async fn test_enroll_creates_one_completion_per_day() {
    let repo = LocalRepository::new();
    let user = UserId::new(1);
    let routine_id = stored_routine(&repo, "Stretching").await;

    let today = date(2030, 3, 1);
    let outcome = enroll_routine(
        &repo,
        user,
        routine_id,
        date(2030, 3, 10),
        date(2030, 3, 16),
        today,
    )
    .await
    .unwrap();

    assert_eq!(outcome.completions_created, 7);

    let completions = repo
        .completions_for_enrollment(user, outcome.enrollment_id)
        .await
        .unwrap();
    assert_eq!(completions.len(), 7);
    assert!(completions.iter().all(|c| !c.completed));
    assert_eq!(completions.first().unwrap().date, date(2030, 3, 10));
    assert_eq!(completions.last().unwrap().date, date(2030, 3, 16));
}

#[tokio::test]
async fn test_enroll_bumps_popularity() {
    let repo = LocalRepository::new();
    let routine_id = stored_routine(&repo, "Meditation").await;

    let today = date(2030, 3, 1);
    for user_id in 1..=3 {
        enroll_routine(
            &repo,
            UserId::new(user_id),
            routine_id,
            date(2030, 3, 5),
            date(2030, 3, 5),
            today,
        )
        .await
        .unwrap();
    }

    let routine = repo.get_routine(routine_id).await.unwrap();
    assert_eq!(routine.popular, 3);
}

#[tokio::test]
async fn test_re_expansion_is_idempotent() {
    let repo = LocalRepository::new();
    let user = UserId::new(1);
    let routine_id = stored_routine(&repo, "Reading").await;

    let outcome = enroll_routine(
        &repo,
        user,
        routine_id,
        date(2030, 4, 1),
        date(2030, 4, 5),
        date(2030, 3, 1),
    )
    .await
    .unwrap();
    assert_eq!(outcome.completions_created, 5);

    // Flip one day, then expand the same range again: nothing is created
    // and the flipped flag survives.
    repo.set_completion(user, outcome.enrollment_id, date(2030, 4, 3), true)
        .await
        .unwrap();

    let created = expand_enrollment(
        &repo,
        user,
        outcome.enrollment_id,
        date(2030, 4, 1),
        date(2030, 4, 5),
    )
    .await
    .unwrap();
    assert_eq!(created, 0);

    let completion = repo
        .get_completion(user, outcome.enrollment_id, date(2030, 4, 3))
        .await
        .unwrap();
    assert!(completion.completed);
}

#[tokio::test]
async fn test_enroll_rejects_inverted_range() {
    let repo = LocalRepository::new();
    let routine_id = stored_routine(&repo, "Running").await;

    let err = enroll_routine(
        &repo,
        UserId::new(1),
        routine_id,
        date(2030, 5, 10),
        date(2030, 5, 1),
        date(2030, 1, 1),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_enroll_rejects_past_end_date() {
    let repo = LocalRepository::new();
    let routine_id = stored_routine(&repo, "Running").await;

    let err = enroll_routine(
        &repo,
        UserId::new(1),
        routine_id,
        date(2030, 5, 1),
        date(2030, 5, 10),
        date(2030, 6, 1),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_enroll_unknown_routine_is_not_found() {
    let repo = LocalRepository::new();

    let err = enroll_routine(
        &repo,
        UserId::new(1),
        RoutineId::new(999),
        date(2030, 5, 1),
        date(2030, 5, 2),
        date(2030, 1, 1),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_enroll_rejects_overlapping_enrollment_same_routine() {
    let repo = LocalRepository::new();
    let user = UserId::new(1);
    let routine_id = stored_routine(&repo, "Yoga").await;
    let today = date(2030, 1, 1);

    enroll_routine(&repo, user, routine_id, date(2030, 6, 1), date(2030, 6, 30), today)
        .await
        .unwrap();

    // New range starts inside the existing one.
    let err = enroll_routine(
        &repo,
        user,
        routine_id,
        date(2030, 6, 15),
        date(2030, 7, 15),
        today,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));

    // A range starting after the existing one ends is fine.
    enroll_routine(&repo, user, routine_id, date(2030, 7, 1), date(2030, 7, 10), today)
        .await
        .unwrap();

    // Another user can overlap freely.
    enroll_routine(
        &repo,
        UserId::new(2),
        routine_id,
        date(2030, 6, 15),
        date(2030, 6, 20),
        today,
    )
    .await
    .unwrap();
}
