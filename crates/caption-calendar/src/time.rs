//! Splitting a scalar time value into calendar components.

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// Unit lengths of a calendar.
///
/// Every field must be positive; [`CalendarUnits::validate`] enforces this and
/// deserialisation through [`CalendarConfig`](crate::CalendarConfig) calls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarUnits {
    pub seconds_per_minute: i64,
    pub minutes_per_hour: i64,
    pub hours_per_day: i64,
    pub days_per_year: i64,
}

impl CalendarUnits {
    /// Six-hour days and 426-day years.
    pub const fn kerbin() -> Self {
        Self {
            seconds_per_minute: 60,
            minutes_per_hour: 60,
            hours_per_day: 6,
            days_per_year: 426,
        }
    }

    /// Twenty-four-hour days and 365-day years.
    pub const fn earth() -> Self {
        Self {
            seconds_per_minute: 60,
            minutes_per_hour: 60,
            hours_per_day: 24,
            days_per_year: 365,
        }
    }

    pub fn seconds_per_hour(&self) -> i64 {
        self.seconds_per_minute * self.minutes_per_hour
    }

    pub fn seconds_per_day(&self) -> i64 {
        self.seconds_per_hour() * self.hours_per_day
    }

    pub fn seconds_per_year(&self) -> i64 {
        self.seconds_per_day() * self.days_per_year
    }

    /// Checks that every unit length is positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("seconds_per_minute", self.seconds_per_minute),
            ("minutes_per_hour", self.minutes_per_hour),
            ("hours_per_day", self.hours_per_day),
            ("days_per_year", self.days_per_year),
        ];
        for (field, value) in fields {
            if value <= 0 {
                return Err(CalendarError::InvalidUnits { field, value });
            }
        }
        Ok(())
    }

    /// Breaks `ut` (seconds) into seconds, minutes, hours, days and years.
    ///
    /// Fractional seconds are floored. Negative times borrow from the larger
    /// units so every component except `years` stays non-negative.
    pub fn split(&self, ut: f64) -> TimeParts {
        let total = ut.floor() as i64;

        let seconds = total.rem_euclid(self.seconds_per_minute);
        let rest = total.div_euclid(self.seconds_per_minute);
        let minutes = rest.rem_euclid(self.minutes_per_hour);
        let rest = rest.div_euclid(self.minutes_per_hour);
        let hours = rest.rem_euclid(self.hours_per_day);
        let rest = rest.div_euclid(self.hours_per_day);
        let days = rest.rem_euclid(self.days_per_year);
        let years = rest.div_euclid(self.days_per_year);

        TimeParts {
            seconds,
            minutes,
            hours,
            days,
            years,
        }
    }
}

impl Default for CalendarUnits {
    fn default() -> Self {
        Self::kerbin()
    }
}

/// A time value broken into calendar components.
///
/// `days` and `years` are zero-based counts: the first day of the first year
/// is `days == 0, years == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeParts {
    pub seconds: i64,
    pub minutes: i64,
    pub hours: i64,
    pub days: i64,
    pub years: i64,
}

impl TimeParts {
    /// Components in `[seconds, minutes, hours, days, years]` order.
    pub fn to_array(self) -> [i64; 5] {
        [
            self.seconds,
            self.minutes,
            self.hours,
            self.days,
            self.years,
        ]
    }

    /// 1-based day of the year, as used by the month and weekday lookups.
    pub fn day_of_year(&self) -> i64 {
        self.days + 1
    }
}

impl From<[i64; 5]> for TimeParts {
    fn from([seconds, minutes, hours, days, years]: [i64; 5]) -> Self {
        Self {
            seconds,
            minutes,
            hours,
            days,
            years,
        }
    }
}

/// Splits `ut` with the given unit lengths. See [`CalendarUnits::split`].
pub fn split(ut: f64, units: &CalendarUnits) -> TimeParts {
    units.split(ut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_zero() {
        assert_eq!(split(0.0, &CalendarUnits::kerbin()), TimeParts::default());
    }

    #[test]
    fn split_each_unit() {
        let units = CalendarUnits::kerbin();
        assert_eq!(units.split(59.0).to_array(), [59, 0, 0, 0, 0]);
        assert_eq!(units.split(60.0).to_array(), [0, 1, 0, 0, 0]);
        assert_eq!(units.split(3600.0).to_array(), [0, 0, 1, 0, 0]);
        assert_eq!(units.split(21_600.0).to_array(), [0, 0, 0, 1, 0]);
        assert_eq!(units.split(9_201_600.0).to_array(), [0, 0, 0, 0, 1]);
    }

    #[test]
    fn split_mixed() {
        let units = CalendarUnits::kerbin();
        let ut = 2.0 * 9_201_600.0 + 76.0 * 21_600.0 + 5.0 * 3600.0 + 7.0 * 60.0 + 9.5;
        assert_eq!(units.split(ut).to_array(), [9, 7, 5, 76, 2]);
    }

    #[test]
    fn split_earth_units() {
        let units = CalendarUnits::earth();
        assert_eq!(units.split(86_400.0 * 366.0).to_array(), [0, 0, 0, 1, 1]);
    }

    #[test]
    fn split_negative_borrows() {
        let parts = CalendarUnits::kerbin().split(-1.0);
        assert_eq!(parts.to_array(), [59, 59, 5, 425, -1]);
    }

    #[test]
    fn seconds_per_year() {
        assert_eq!(CalendarUnits::kerbin().seconds_per_year(), 9_201_600);
        assert_eq!(CalendarUnits::earth().seconds_per_year(), 31_536_000);
    }

    #[test]
    fn validate_rejects_zero() {
        let units = CalendarUnits {
            hours_per_day: 0,
            ..CalendarUnits::kerbin()
        };
        assert_eq!(
            units.validate(),
            Err(CalendarError::InvalidUnits {
                field: "hours_per_day",
                value: 0
            })
        );
    }

    #[test]
    fn array_round_trip_order() {
        let parts = TimeParts::from([1, 2, 3, 4, 5]);
        assert_eq!(parts.seconds, 1);
        assert_eq!(parts.years, 5);
        assert_eq!(parts.day_of_year(), 5);
    }
}
