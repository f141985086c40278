//! Month and weekday lookups for the twelve-month calendar.
//!
//! Months are irregular: their first days are listed in
//! [`FIRST_DAY_OF_MONTH`], and the month of a day is found with the
//! `floor((day - 0.01) / 35.5) + 1` rule the table was built from. The week has
//! six days. All day numbers here are 1-based days of the year.

use crate::error::{CalendarError, Result};

/// 1-based day of the year on which each month starts.
pub const FIRST_DAY_OF_MONTH: [i64; 12] = [1, 36, 72, 107, 143, 178, 214, 249, 285, 320, 356, 391];

/// Last day of the year covered by the month table.
pub const LAST_DAY: i64 = 426;

pub const MONTHS_PER_YEAR: usize = 12;
pub const DAYS_PER_WEEK: usize = 6;

const MONTH_LENGTH: f64 = 35.5;

fn check_day(day: i64) -> Result<()> {
    if (1..=LAST_DAY).contains(&day) {
        Ok(())
    } else {
        Err(CalendarError::DayOutOfRange { day, max: LAST_DAY })
    }
}

/// Month (1..=12) containing the given day of the year.
pub fn month_of(day: i64) -> Result<i64> {
    check_day(day)?;
    Ok(((day as f64 - 0.01) / MONTH_LENGTH).floor() as i64 + 1)
}

/// Day of the month (1-based) for the given day of the year.
pub fn day_of_month(day: i64) -> Result<i64> {
    let month = month_of(day)?;
    Ok(day - FIRST_DAY_OF_MONTH[(month - 1) as usize] + 1)
}

/// Day of the week (1..=6) for the given day of the year.
pub fn day_of_week(day: i64) -> i64 {
    (day - 1).rem_euclid(DAYS_PER_WEEK as i64) + 1
}
