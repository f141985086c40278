//! Error types for the caption-calendar crate.

/// Error type for all fallible calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// A day-of-year value outside the month lookup table.
    #[error("day {day} is outside the calendar year (1..={max})")]
    DayOutOfRange {
        /// The 1-based day that was provided.
        day: i64,
        /// The last day covered by the month table.
        max: i64,
    },

    /// A month number with no configured name.
    #[error("invalid month: {month} (must be 1..=12)")]
    MonthOutOfRange {
        /// The invalid month number.
        month: i64,
    },

    /// A day-of-week number with no configured name.
    #[error("invalid day of week: {day} (must be 1..=6)")]
    WeekdayOutOfRange {
        /// The invalid day-of-week number.
        day: i64,
    },

    /// A name table with the wrong number of entries.
    #[error("expected {expected} {table} names, got {actual}")]
    InvalidNameTable {
        /// Which table failed, `"month"` or `"day"`.
        table: &'static str,
        /// Required entry count.
        expected: usize,
        /// Entry count found.
        actual: usize,
    },

    /// A unit length that is zero or negative.
    #[error("calendar unit '{field}' must be positive, got {value}")]
    InvalidUnits {
        /// Field name of the offending unit.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The calendar year does not fit in an `i64`.
    #[error("year {years} + base year {base_year} is out of range")]
    YearOutOfRange {
        /// Whole years elapsed since the epoch.
        years: i64,
        /// The configured base year.
        base_year: i64,
    },

    /// The configuration text could not be parsed.
    #[error("calendar config parse error: {0}")]
    Parse(String),
}

impl From<serde_yaml::Error> for CalendarError {
    fn from(err: serde_yaml::Error) -> Self {
        CalendarError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(err: serde_json::Error) -> Self {
        CalendarError::Parse(err.to_string())
    }
}

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_day_out_of_range() {
        let err = CalendarError::DayOutOfRange { day: 500, max: 426 };
        assert_eq!(
            err.to_string(),
            "day 500 is outside the calendar year (1..=426)"
        );
    }

    #[test]
    fn error_invalid_name_table() {
        let err = CalendarError::InvalidNameTable {
            table: "month",
            expected: 12,
            actual: 11,
        };
        assert_eq!(err.to_string(), "expected 12 month names, got 11");
    }

    #[test]
    fn error_year_out_of_range() {
        let err = CalendarError::YearOutOfRange {
            years: 1,
            base_year: i64::MAX,
        };
        assert_eq!(
            err.to_string(),
            "year 1 + base year 9223372036854775807 is out of range"
        );
    }

    #[test]
    fn error_from_yaml() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
        let err: CalendarError = yaml_err.into();
        assert!(matches!(err, CalendarError::Parse(_)));
    }
}
