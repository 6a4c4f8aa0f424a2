use thiserror::Error;

/// Errors raised while deriving dates for, or mutating, a timecard line.
///
/// Every variant describes rejected client input; the entity involved is left as it was.
#[derive(Debug, Error, PartialEq)]
pub enum TimecardError {
    #[error("week {week} is outside 1..=53")]
    WeekOutOfRange { week: i32 },
    #[error("year {year} cannot be represented")]
    YearOutOfRange { year: i32 },
    #[error("'{0}' is not a day of the week")]
    UnknownDay(String),
    #[error("field '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("invalid update document: {0}")]
    InvalidDocument(String),
    #[error("hours must not be negative, got {0}")]
    NegativeHours(f64),
    #[error("hours must be a finite number, got {0}")]
    NonFiniteHours(f64),
    #[error("{hours} hours exceeds the limit of {limit}")]
    HoursAboveLimit { hours: f64, limit: f64 },
    #[error("project must not be empty")]
    EmptyProject,
}

impl TimecardError {
    pub fn invalid_field(field: &'static str, reason: impl ToString) -> Self {
        Self::InvalidField {
            field,
            reason: reason.to_string(),
        }
    }

    /// Whether the error should be reported back to the caller as a rejected request.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::WeekOutOfRange { .. }
            | Self::YearOutOfRange { .. }
            | Self::UnknownDay(_)
            | Self::InvalidField { .. }
            | Self::InvalidDocument(_)
            | Self::NegativeHours(_)
            | Self::NonFiniteHours(_)
            | Self::HoursAboveLimit { .. }
            | Self::EmptyProject => true,
        }
    }
}
