//! Calendar configuration: name tables, base year and unit lengths.
//!
//! A [`CalendarConfig`] is supplied by an external loader and treated as
//! read-only while formatting. It can be built in code or parsed from YAML or
//! JSON:
//!
//! ```rust
//! use caption_calendar::CalendarConfig;
//!
//! let config = CalendarConfig::from_yaml(r#"
//! months: [Jan, Feb, Mar, Apr, May, Jun, Jul, Aug, Sep, Oct, Nov, Dec]
//! days: [Mon, Tue, Wed, Thu, Fri, Sat]
//! base_year: 1950
//! "#).unwrap();
//!
//! assert_eq!(config.month_name(2).unwrap(), "Feb");
//! assert_eq!(config.base_year(), 1950);
//! ```
//!
//! Omitted fields fall back to [`CalendarConfig::default`]. Deserialisation
//! fails unless there are exactly 12 month names and 6 day names and every
//! unit length is positive.

use serde::{Deserialize, Serialize};

use crate::dates::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use crate::error::{CalendarError, Result};
use crate::time::{CalendarUnits, TimeParts};

const DEFAULT_MONTHS: [&str; MONTHS_PER_YEAR] = [
    "Gelus", "Ventis", "Floris", "Pluvis", "Solaris", "Aestas", "Fervor", "Messis", "Vinea",
    "Nebula", "Pruina", "Hiems",
];

const DEFAULT_DAYS: [&str; DAYS_PER_WEEK] =
    ["Akday", "Bolday", "Cenday", "Dunday", "Elday", "Funday"];

/// Month and day name tables plus the numeric calendar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarConfig")]
pub struct CalendarConfig {
    months: Vec<String>,
    days: Vec<String>,
    base_year: i64,
    units: CalendarUnits,
}

/// Unvalidated shape used for deserialisation.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCalendarConfig {
    months: Vec<String>,
    days: Vec<String>,
    base_year: i64,
    units: CalendarUnits,
}

impl Default for RawCalendarConfig {
    fn default() -> Self {
        let config = CalendarConfig::default();
        Self {
            months: config.months,
            days: config.days,
            base_year: config.base_year,
            units: config.units,
        }
    }
}

impl TryFrom<RawCalendarConfig> for CalendarConfig {
    type Error = CalendarError;

    fn try_from(raw: RawCalendarConfig) -> Result<Self> {
        Self::new(raw.months, raw.days)
            .and_then(|config| config.with_units(raw.units))
            .map(|config| config.with_base_year(raw.base_year))
    }
}

impl CalendarConfig {
    /// Creates a config from the two name tables, with base year 0 and the
    /// default unit lengths.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidNameTable`] unless there are exactly
    /// 12 month names and 6 day names.
    pub fn new<M, D>(months: M, days: D) -> Result<Self>
    where
        M: IntoIterator,
        M::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let months: Vec<String> = months.into_iter().map(Into::into).collect();
        let days: Vec<String> = days.into_iter().map(Into::into).collect();

        if months.len() != MONTHS_PER_YEAR {
            return Err(CalendarError::InvalidNameTable {
                table: "month",
                expected: MONTHS_PER_YEAR,
                actual: months.len(),
            });
        }
        if days.len() != DAYS_PER_WEEK {
            return Err(CalendarError::InvalidNameTable {
                table: "day",
                expected: DAYS_PER_WEEK,
                actual: days.len(),
            });
        }

        Ok(Self {
            months,
            days,
            base_year: 0,
            units: CalendarUnits::default(),
        })
    }

    /// Parses a config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_base_year(mut self, base_year: i64) -> Self {
        self.base_year = base_year;
        self
    }

    /// Replaces the unit lengths.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidUnits`] if any unit is not positive.
    pub fn with_units(mut self, units: CalendarUnits) -> Result<Self> {
        units.validate()?;
        self.units = units;
        Ok(self)
    }

    pub fn base_year(&self) -> i64 {
        self.base_year
    }

    pub fn units(&self) -> &CalendarUnits {
        &self.units
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Name of a 1-based month.
    pub fn month_name(&self, month: i64) -> Result<&str> {
        usize::try_from(month - 1)
            .ok()
            .and_then(|index| self.months.get(index))
            .map(String::as_str)
            .ok_or(CalendarError::MonthOutOfRange { month })
    }

    /// Name of a 1-based day of the week.
    pub fn day_name(&self, day: i64) -> Result<&str> {
        usize::try_from(day - 1)
            .ok()
            .and_then(|index| self.days.get(index))
            .map(String::as_str)
            .ok_or(CalendarError::WeekdayOutOfRange { day })
    }

    /// Splits `ut` with this calendar's unit lengths.
    pub fn split(&self, ut: f64) -> TimeParts {
        self.units.split(ut)
    }

    /// Calendar year for the given parts: `years + base_year + 1`.
    ///
    /// Fails with [`CalendarError::YearOutOfRange`] when the sum overflows.
    pub fn year_of(&self, parts: &TimeParts) -> Result<i64> {
        parts
            .years
            .checked_add(self.base_year)
            .and_then(|year| year.checked_add(1))
            .ok_or(CalendarError::YearOutOfRange {
                years: parts.years,
                base_year: self.base_year,
            })
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            months: DEFAULT_MONTHS.iter().map(|s| s.to_string()).collect(),
            days: DEFAULT_DAYS.iter().map(|s| s.to_string()).collect(),
            base_year: 0,
            units: CalendarUnits::default(),
        }
    }
}
