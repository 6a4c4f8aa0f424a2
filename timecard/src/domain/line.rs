use serde::{Deserialize, Serialize};

use super::DayOfWeek;

/// A raw timecard line as submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardLine {
    /// ISO week number, expected to be within 1..=53.
    pub week: i32,
    pub year: i32,
    pub day: DayOfWeek,
    pub hours: f64,
    pub project: String,
}

impl TimecardLine {
    pub fn new(
        year: i32,
        week: i32,
        day: DayOfWeek,
        hours: f64,
        project: impl Into<String>,
    ) -> Self {
        Self {
            week,
            year,
            day,
            hours,
            project: project.into(),
        }
    }
}
