use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Completion rollup for a single day.
///
/// `completed` is true when every routine completion and every schedule item
/// recorded for the day is done; a day with no records counts as completed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DayCompletion {
    pub date: NaiveDate,
    pub completed: bool,
}

/// Per-day completion rollup for a whole month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyViewData {
    pub days: Vec<DayCompletion>,
}

impl MonthlyViewData {
    /// Dates of the month on which everything was completed.
    pub fn completed_dates(&self) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|d| d.completed)
            .map(|d| d.date)
            .collect()
    }
}

pub const GET_MONTHLY_VIEW: &str = "get_monthly_view";

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[test]
    fn test_completed_dates_filters() {
        let data = MonthlyViewData {
            days: vec![
                DayCompletion {
                    date: date(1),
                    completed: true,
                },
                DayCompletion {
                    date: date(2),
                    completed: false,
                },
                DayCompletion {
                    date: date(3),
                    completed: true,
                },
            ],
        };
        assert_eq!(data.completed_dates(), vec![date(1), date(3)]);
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_MONTHLY_VIEW, "get_monthly_view");
    }
}
