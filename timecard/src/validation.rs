use serde::Deserialize;

use crate::{TimecardError, TimecardLine};

/// Entry-point checks for submitted lines.
///
/// Date derivation only needs a week in range; these rules cover the remaining fields and are
/// applied by the caller before a line is constructed or updated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    pub reject_negative_hours: bool,
    /// Upper bound for the hours of a single line, if any.
    pub max_hours: Option<f64>,
    pub require_project: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            reject_negative_hours: true,
            max_hours: Some(24.0),
            require_project: true,
        }
    }
}

impl ValidationSettings {
    pub fn check(&self, line: &TimecardLine) -> Result<(), TimecardError> {
        if !line.hours.is_finite() {
            return Err(TimecardError::NonFiniteHours(line.hours));
        }

        if self.reject_negative_hours && line.hours < 0.0 {
            return Err(TimecardError::NegativeHours(line.hours));
        }

        if let Some(limit) = self.max_hours {
            if line.hours > limit {
                return Err(TimecardError::HoursAboveLimit {
                    hours: line.hours,
                    limit,
                });
            }
        }

        if self.require_project && line.project.trim().is_empty() {
            return Err(TimecardError::EmptyProject);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DayOfWeek;

    fn line(hours: f64, project: &str) -> TimecardLine {
        TimecardLine::new(2024, 10, DayOfWeek::Monday, hours, project)
    }

    #[test]
    fn reasonable_line_is_accepted() {
        assert_eq!(ValidationSettings::default().check(&line(7.5, "Acme")), Ok(()));
        assert_eq!(ValidationSettings::default().check(&line(0.0, "Acme")), Ok(()));
    }

    #[test]
    fn negative_hours_are_rejected_unless_allowed() {
        let strict = ValidationSettings::default();
        assert_eq!(
            strict.check(&line(-1.0, "Acme")),
            Err(TimecardError::NegativeHours(-1.0))
        );

        let lenient = ValidationSettings {
            reject_negative_hours: false,
            ..Default::default()
        };
        assert_eq!(lenient.check(&line(-1.0, "Acme")), Ok(()));
    }

    #[test]
    fn non_finite_hours_are_always_rejected() {
        let lenient = ValidationSettings {
            reject_negative_hours: false,
            max_hours: None,
            require_project: false,
        };

        assert!(matches!(
            lenient.check(&line(f64::NAN, "Acme")),
            Err(TimecardError::NonFiniteHours(_))
        ));
        assert_eq!(
            lenient.check(&line(f64::INFINITY, "Acme")),
            Err(TimecardError::NonFiniteHours(f64::INFINITY))
        );
    }

    #[test]
    fn hours_above_limit_are_rejected() {
        assert_eq!(
            ValidationSettings::default().check(&line(25.0, "Acme")),
            Err(TimecardError::HoursAboveLimit {
                hours: 25.0,
                limit: 24.0
            })
        );
    }

    #[test]
    fn blank_project_is_rejected() {
        assert_eq!(
            ValidationSettings::default().check(&line(1.0, "   ")),
            Err(TimecardError::EmptyProject)
        );
    }
}
