use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::Serialize;

use super::DayOfWeek;
use crate::TimecardError;

pub const MIN_WEEK: i32 = 1;
pub const MAX_WEEK: i32 = 53;

/// Returns the Monday that starts ISO week `week_of_year` of `year`.
///
/// Week 1 is the week holding the year's first Thursday. Week 53 of a year with only 52 weeks
/// rolls over to the Monday of week 1 of the following year.
pub fn first_date_of_iso_week(year: i32, week_of_year: i32) -> Result<NaiveDate, TimecardError> {
    if !(MIN_WEEK..=MAX_WEEK).contains(&week_of_year) {
        return Err(TimecardError::WeekOutOfRange { week: week_of_year });
    }

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(TimecardError::YearOutOfRange { year })?;

    // Thursday is 4 when counting from Sunday, so this lands within -2..=4 days of January 1.
    let days_offset = 4 - i64::from(jan1.weekday().num_days_from_sunday());
    let first_thursday = jan1
        .checked_add_signed(TimeDelta::days(days_offset))
        .ok_or(TimecardError::YearOutOfRange { year })?;

    // A first Thursday in late December belongs to the previous year's last week.
    let week_num = if first_thursday.iso_week().week() <= 1 {
        week_of_year - 1
    } else {
        week_of_year
    };

    first_thursday
        .checked_add_signed(TimeDelta::days(i64::from(week_num) * 7 - 3))
        .ok_or(TimecardError::YearOutOfRange { year })
}

/// A reporting period: seven days from a Monday (inclusive) to the next Monday (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl Period {
    pub fn for_week(year: i32, week: i32) -> Result<Self, TimecardError> {
        let from = first_date_of_iso_week(year, week)?;
        let to = from
            .checked_add_signed(TimeDelta::days(7))
            .ok_or(TimecardError::YearOutOfRange { year })?;

        Ok(Self { from, to })
    }

    /// The calendar date of `day` within this period.
    pub fn work_date(&self, day: DayOfWeek) -> NaiveDate {
        // `to` is representable, so every date before it is too.
        self.from + TimeDelta::days(i64::from(day.days_from_monday()))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date < self.to
    }

    /// The seven dates of the period, Monday first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.from.iter_days().take_while({
            let to = self.to;
            move |date| *date < to
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use strum::IntoEnumIterator;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn first_week_starts_on_fourth_of_january_when_year_starts_on_friday() {
        assert_eq!(first_date_of_iso_week(2021, 1), Ok(date(2021, 1, 4)));
        assert_eq!(first_date_of_iso_week(2016, 1), Ok(date(2016, 1, 4)));
    }

    #[test]
    fn first_week_can_start_in_previous_december() {
        // 2025-01-01 is a Wednesday.
        assert_eq!(first_date_of_iso_week(2025, 1), Ok(date(2024, 12, 30)));
        // 2019-01-01 is a Tuesday.
        assert_eq!(first_date_of_iso_week(2019, 1), Ok(date(2018, 12, 31)));
    }

    #[test]
    fn first_week_when_year_starts_on_weekend() {
        // 2022-01-01 is a Saturday, 2023-01-01 a Sunday.
        assert_eq!(first_date_of_iso_week(2022, 1), Ok(date(2022, 1, 3)));
        assert_eq!(first_date_of_iso_week(2023, 1), Ok(date(2023, 1, 2)));
    }

    #[test]
    fn week_53_of_long_year() {
        assert_eq!(first_date_of_iso_week(2020, 53), Ok(date(2020, 12, 28)));
        assert_eq!(first_date_of_iso_week(2015, 53), Ok(date(2015, 12, 28)));
    }

    #[test]
    fn week_53_of_short_year_rolls_into_next_year() {
        assert_eq!(first_date_of_iso_week(2021, 53), Ok(date(2022, 1, 3)));
    }

    #[test]
    fn matches_chrono_iso_week_dates() {
        for year in 1990..=2040 {
            for week in MIN_WEEK..=MAX_WEEK {
                let Some(expected) = NaiveDate::from_isoywd_opt(year, week as u32, Weekday::Mon)
                else {
                    continue;
                };
                assert_eq!(
                    first_date_of_iso_week(year, week),
                    Ok(expected),
                    "year {year} week {week}"
                );
            }
        }
    }

    #[test]
    fn week_outside_range_is_rejected() {
        assert_eq!(
            first_date_of_iso_week(2024, 0),
            Err(TimecardError::WeekOutOfRange { week: 0 })
        );
        assert_eq!(
            first_date_of_iso_week(2024, 54),
            Err(TimecardError::WeekOutOfRange { week: 54 })
        );
    }

    #[test]
    fn unrepresentable_year_is_rejected() {
        assert_eq!(
            first_date_of_iso_week(i32::MAX, 1),
            Err(TimecardError::YearOutOfRange { year: i32::MAX })
        );
    }

    #[test]
    fn period_spans_seven_days_from_a_monday() {
        for year in [1999, 2016, 2020, 2021, 2024] {
            for week in MIN_WEEK..=MAX_WEEK {
                let period = Period::for_week(year, week).expect("period");
                assert_eq!(period.from.weekday(), Weekday::Mon);
                assert_eq!(period.to, period.from + TimeDelta::days(7));
            }
        }
    }

    #[test]
    fn work_dates_are_consecutive_and_inside_period() {
        let period = Period::for_week(2024, 10).expect("period");
        let mut days: Vec<DayOfWeek> = DayOfWeek::iter().collect();
        days.sort_by_key(|day| day.days_from_monday());

        let work_dates: Vec<NaiveDate> = days.iter().map(|day| period.work_date(*day)).collect();

        assert_eq!(work_dates, period.days().collect::<Vec<_>>());
        assert_eq!(work_dates.len(), 7);
        assert_eq!(work_dates[0], period.from);
        for (day, work_date) in days.iter().zip(&work_dates) {
            assert!(period.contains(*work_date));
            assert_eq!(DayOfWeek::from(work_date.weekday()), *day);
        }
    }

    #[test]
    fn period_end_is_exclusive() {
        let period = Period::for_week(2024, 10).expect("period");
        assert!(period.contains(date(2024, 3, 4)));
        assert!(period.contains(date(2024, 3, 10)));
        assert!(!period.contains(date(2024, 3, 11)));
        assert!(!period.contains(date(2024, 3, 3)));
    }
}
