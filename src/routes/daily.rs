use crate::api::{EnrollmentId, RoutineId, ScheduleItem};
use serde::{Deserialize, Serialize};

/// One routine enrollment active on the queried date, annotated with that
/// day's completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRoutineEntry {
    pub enrollment_id: EnrollmentId,
    pub routine_id: RoutineId,
    pub title: String,
    pub completed: bool,
}

/// Everything attached to a single calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyViewData {
    pub schedules: Vec<ScheduleItem>,
    pub routines: Vec<DailyRoutineEntry>,
}

pub const GET_DAILY_VIEW: &str = "get_daily_view";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_routine_entry_clone() {
        let entry = DailyRoutineEntry {
            enrollment_id: EnrollmentId::new(5),
            routine_id: RoutineId::new(3),
            title: "Morning stretch".to_string(),
            completed: false,
        };
        let cloned = entry.clone();
        assert_eq!(cloned.enrollment_id.value(), 5);
        assert_eq!(cloned.routine_id.value(), 3);
        assert!(!cloned.completed);
    }

    #[test]
    fn test_daily_view_data_debug() {
        let data = DailyViewData {
            schedules: vec![],
            routines: vec![],
        };
        let debug_str = format!("{:?}", data);
        assert!(debug_str.contains("DailyViewData"));
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_DAILY_VIEW, "get_daily_view");
    }
}
