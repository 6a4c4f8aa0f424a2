use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{DayOfWeek, TimecardLine};
use crate::TimecardError;

/// A partial update of a timecard line. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimecardLinePatch {
    pub week: Option<i32>,
    pub year: Option<i32>,
    pub day: Option<DayOfWeek>,
    pub hours: Option<f64>,
    pub project: Option<String>,
}

impl TimecardLinePatch {
    pub fn with_week(mut self, week: i32) -> Self {
        self.week = Some(week);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_day(mut self, day: DayOfWeek) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours = Some(hours);
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `line` with the present fields of this patch applied.
    pub fn merged_into(&self, line: &TimecardLine) -> TimecardLine {
        TimecardLine {
            week: self.week.unwrap_or(line.week),
            year: self.year.unwrap_or(line.year),
            day: self.day.unwrap_or(line.day),
            hours: self.hours.unwrap_or(line.hours),
            project: self
                .project
                .clone()
                .unwrap_or_else(|| line.project.clone()),
        }
    }
}

impl TryFrom<&Value> for TimecardLinePatch {
    type Error = TimecardError;

    /// Reads a loosely-typed update document such as `{"hours": 8, "day": "friday"}`.
    ///
    /// Every present field is parsed before the patch is returned, so a document is either
    /// accepted whole or rejected. `null` counts as absent and unknown keys are ignored.
    fn try_from(document: &Value) -> Result<Self, Self::Error> {
        let fields = document.as_object().ok_or_else(|| {
            TimecardError::InvalidDocument(format!("expected an object, got {}", kind(document)))
        })?;

        let day = match present(fields, "day") {
            Some(Value::String(name)) => Some(
                name.parse::<DayOfWeek>()
                    .map_err(|_| TimecardError::UnknownDay(name.clone()))?,
            ),
            Some(other) => {
                return Err(TimecardError::invalid_field(
                    "day",
                    format!("expected a day name, got {}", kind(other)),
                ))
            }
            None => None,
        };

        Ok(Self {
            week: field(fields, "week")?,
            year: field(fields, "year")?,
            day,
            hours: field(fields, "hours")?,
            project: field(fields, "project")?,
        })
    }
}

fn present<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|value| !value.is_null())
}

fn field<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<T>, TimecardError> {
    present(fields, name)
        .map(|value| {
            serde_json::from_value(value.clone())
                .map_err(|e| TimecardError::invalid_field(name, e))
        })
        .transpose()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
