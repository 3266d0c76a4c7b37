use chrono::NaiveDate;

use crate::api::{Month, Routine, RoutineCompletion, RoutineId, ScheduleItem, UserId};
use crate::db::repositories::LocalRepository;
use crate::db::repository::{
    EnrollmentRepository, FullRepository, RoutineRepository, ScheduleRepository,
};
use crate::services::calendar::{all_completed, daily_view, monthly_view};
use crate::services::enrollment::enroll_routine;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, d).unwrap()
}

fn test_routine(title: &str) -> Routine {
    Routine {
        id: None,
        title: title.to_string(),
        sub_title: String::new(),
        content: "content".to_string(),
        image: None,
        video_url: None,
        category: vec![],
        celebrity: "Celeb".to_string(),
        theme: "morning".to_string(),
        popular: 0,
    }
}

async fn add_item(repo: &dyn FullRepository, user: UserId, day: NaiveDate, completed: bool) {
    let item = ScheduleItem {
        id: None,
        user,
        title: "item".to_string(),
        description: String::new(),
        date: day,
        completed,
    };
    let id = repo.store_schedule_item(&item).await.unwrap();
    if completed {
        let mut stored = repo.get_schedule_item(user, id, day).await.unwrap();
        stored.completed = true;
        repo.update_schedule_item(&stored).await.unwrap();
    }
}

#[tokio::test]
async fn test_daily_view_empty() {
    let repo = LocalRepository::new();
    let view = daily_view(&repo, UserId::new(1), date(1)).await.unwrap();
    assert!(view.schedules.is_empty());
    assert!(view.routines.is_empty());
}

#[tokio::test]
async fn test_daily_view_includes_active_enrollments_only() {
    let repo = LocalRepository::new();
    let user = UserId::new(1);
    let routine_id = repo.store_routine(&test_routine("stretch")).await.unwrap();
    let other_id = repo.store_routine(&test_routine("run")).await.unwrap();

    enroll_routine(&repo, user, routine_id, date(1), date(5), date(1))
        .await
        .unwrap();
    enroll_routine(&repo, user, other_id, date(10), date(12), date(1))
        .await
        .unwrap();

    let view = daily_view(&repo, user, date(3)).await.unwrap();
    assert_eq!(view.routines.len(), 1);
    assert_eq!(view.routines[0].routine_id, routine_id);
    assert_eq!(view.routines[0].title, "stretch");
    assert!(!view.routines[0].completed);
}

#[tokio::test]
async fn test_daily_view_reflects_completion_flag() {
    let repo = LocalRepository::new();
    let user = UserId::new(1);
    let routine_id = repo.store_routine(&test_routine("stretch")).await.unwrap();

    let outcome = enroll_routine(&repo, user, routine_id, date(1), date(3), date(1))
        .await
        .unwrap();
    repo.set_completion(user, outcome.enrollment_id, date(2), true)
        .await
        .unwrap();

    let view = daily_view(&repo, user, date(2)).await.unwrap();
    assert!(view.routines[0].completed);

    // other days untouched
    let view = daily_view(&repo, user, date(1)).await.unwrap();
    assert!(!view.routines[0].completed);
}

#[tokio::test]
async fn test_daily_view_includes_schedule_items() {
    let repo = LocalRepository::new();
    let user = UserId::new(1);
    add_item(&repo, user, date(4), false).await;
    add_item(&repo, user, date(5), false).await;

    let view = daily_view(&repo, user, date(4)).await.unwrap();
    assert_eq!(view.schedules.len(), 1);
    assert_eq!(view.schedules[0].date, date(4));
}

#[tokio::test]
async fn test_daily_view_scoped_to_user() {
    let repo = LocalRepository::new();
    add_item(&repo, UserId::new(1), date(4), false).await;

    let view = daily_view(&repo, UserId::new(2), date(4)).await.unwrap();
    assert!(view.schedules.is_empty());
}

#[tokio::test]
async fn test_monthly_view_empty_days_are_completed() {
    let repo = LocalRepository::new();
    let month = Month::new(2030, 6).unwrap();

    let view = monthly_view(&repo, UserId::new(1), month).await.unwrap();
    assert_eq!(view.days.len(), 30);
    assert!(view.days.iter().all(|d| d.completed));
}

#[tokio::test]
async fn test_monthly_view_incomplete_item_marks_day() {
    let repo = LocalRepository::new();
    let user = UserId::new(1);
    let month = Month::new(2030, 6).unwrap();
    add_item(&repo, user, date(15), false).await;

    let view = monthly_view(&repo, user, month).await.unwrap();
    let day = view.days.iter().find(|d| d.date == date(15)).unwrap();
    assert!(!day.completed);
    // every other day is still vacuously completed
    assert_eq!(view.completed_dates().len(), 29);
}

#[tokio::test]
async fn test_monthly_view_completed_item_keeps_day_completed() {
    let repo = LocalRepository::new();
    let user = UserId::new(1);
    let month = Month::new(2030, 6).unwrap();
    add_item(&repo, user, date(15), true).await;

    let view = monthly_view(&repo, user, month).await.unwrap();
    let day = view.days.iter().find(|d| d.date == date(15)).unwrap();
    assert!(day.completed);
}

#[tokio::test]
async fn test_monthly_view_tracks_routine_completions() {
    let repo = LocalRepository::new();
    let user = UserId::new(1);
    let month = Month::new(2030, 6).unwrap();
    let routine_id = repo.store_routine(&test_routine("stretch")).await.unwrap();

    let outcome = enroll_routine(&repo, user, routine_id, date(10), date(11), date(1))
        .await
        .unwrap();

    // both days incomplete after expansion
    let view = monthly_view(&repo, user, month).await.unwrap();
    assert!(!view.days[9].completed);
    assert!(!view.days[10].completed);

    // completing one day flips only that day
    repo.set_completion(user, outcome.enrollment_id, date(10), true)
        .await
        .unwrap();
    let view = monthly_view(&repo, user, month).await.unwrap();
    assert!(view.days[9].completed);
    assert!(!view.days[10].completed);
}

#[tokio::test]
async fn test_monthly_view_mixed_sources_must_all_complete() {
    let repo = LocalRepository::new();
    let user = UserId::new(1);
    let month = Month::new(2030, 6).unwrap();
    let routine_id = repo.store_routine(&test_routine("stretch")).await.unwrap();

    let outcome = enroll_routine(&repo, user, routine_id, date(20), date(20), date(1))
        .await
        .unwrap();
    add_item(&repo, user, date(20), true).await;

    // schedule item done, routine not: day incomplete
    let view = monthly_view(&repo, user, month).await.unwrap();
    assert!(!view.days[19].completed);

    repo.set_completion(user, outcome.enrollment_id, date(20), true)
        .await
        .unwrap();
    let view = monthly_view(&repo, user, month).await.unwrap();
    assert!(view.days[19].completed);
}

#[test]
fn test_all_completed_vacuous() {
    assert!(all_completed(&[], &[]));
}

#[test]
fn test_all_completed_mixed() {
    let user = UserId::new(1);
    let done = RoutineCompletion {
        user,
        enrollment: crate::api::EnrollmentId::new(1),
        date: date(1),
        completed: true,
    };
    let pending = RoutineCompletion {
        completed: false,
        ..done.clone()
    };

    assert!(all_completed(&[done.clone()], &[]));
    assert!(!all_completed(&[done, pending], &[]));
}
