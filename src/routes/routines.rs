use crate::api::RoutineId;
use serde::{Deserialize, Serialize};

/// Lightweight routine listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineInfo {
    pub routine_id: RoutineId,
    pub title: String,
    pub popular: i64,
}

pub const LIST_ROUTINES: &str = "list_routines";
pub const POST_ROUTINE: &str = "store_routine";
pub const ENROLL_ROUTINE: &str = "enroll_routine";
