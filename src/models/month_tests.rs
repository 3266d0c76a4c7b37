use crate::models::{days_inclusive, Month};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_month_new() {
    let month = Month::new(2024, 7).unwrap();
    assert_eq!(month.year(), 2024);
    assert_eq!(month.month(), 7);
}

#[test]
fn test_month_new_out_of_range() {
    assert!(Month::new(2024, 0).is_none());
    assert!(Month::new(2024, 13).is_none());
}

#[test]
fn test_month_first_and_last_day() {
    let month = Month::new(2024, 7).unwrap();
    assert_eq!(month.first_day(), date(2024, 7, 1));
    assert_eq!(month.last_day(), date(2024, 7, 31));
}

#[test]
fn test_month_last_day_december() {
    let month = Month::new(2023, 12).unwrap();
    assert_eq!(month.last_day(), date(2023, 12, 31));
}

#[test]
fn test_month_leap_february() {
    let month = Month::new(2024, 2).unwrap();
    assert_eq!(month.last_day(), date(2024, 2, 29));
    assert_eq!(month.days().count(), 29);
}

#[test]
fn test_month_non_leap_february() {
    let month = Month::new(2023, 2).unwrap();
    assert_eq!(month.last_day(), date(2023, 2, 28));
    assert_eq!(month.days().count(), 28);
}

#[test]
fn test_month_days_ordered() {
    let month = Month::new(2024, 7).unwrap();
    let days: Vec<_> = month.days().collect();
    assert_eq!(days.len(), 31);
    assert_eq!(days[0], date(2024, 7, 1));
    assert_eq!(days[30], date(2024, 7, 31));
}

#[test]
fn test_month_contains() {
    let month = Month::new(2024, 7).unwrap();
    assert!(month.contains(date(2024, 7, 15)));
    assert!(!month.contains(date(2024, 8, 1)));
    assert!(!month.contains(date(2023, 7, 15)));
}

#[test]
fn test_month_containing() {
    let month = Month::containing(date(2024, 7, 15));
    assert_eq!(month, Month::new(2024, 7).unwrap());
}

#[test]
fn test_month_from_str() {
    let month: Month = "2024-07".parse().unwrap();
    assert_eq!(month.year(), 2024);
    assert_eq!(month.month(), 7);
}

#[test]
fn test_month_from_str_invalid() {
    assert!("2024".parse::<Month>().is_err());
    assert!("2024-13".parse::<Month>().is_err());
    assert!("july".parse::<Month>().is_err());
    assert!("2024-7x".parse::<Month>().is_err());
}

#[test]
fn test_month_display_roundtrip() {
    let month = Month::new(2024, 3).unwrap();
    assert_eq!(month.to_string(), "2024-03");
    let parsed: Month = month.to_string().parse().unwrap();
    assert_eq!(parsed, month);
}

#[test]
fn test_month_serde_as_string() {
    let month = Month::new(2024, 11).unwrap();
    let json = serde_json::to_string(&month).unwrap();
    assert_eq!(json, "\"2024-11\"");
    let back: Month = serde_json::from_str(&json).unwrap();
    assert_eq!(back, month);
}

#[test]
fn test_days_inclusive_three_days() {
    let days: Vec<_> = days_inclusive(date(2024, 7, 30), date(2024, 8, 1)).collect();
    assert_eq!(
        days,
        vec![date(2024, 7, 30), date(2024, 7, 31), date(2024, 8, 1)]
    );
}

#[test]
fn test_days_inclusive_single_day() {
    let days: Vec<_> = days_inclusive(date(2024, 7, 1), date(2024, 7, 1)).collect();
    assert_eq!(days.len(), 1);
}

#[test]
fn test_days_inclusive_empty_when_reversed() {
    let days: Vec<_> = days_inclusive(date(2024, 7, 2), date(2024, 7, 1)).collect();
    assert!(days.is_empty());
}
