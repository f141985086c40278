//! Pattern-based date formatting.
//!
//! A pattern is read left to right in runs of identical characters. The run
//! length picks the width or style of the field:
//!
//! | run | output |
//! |-----|--------|
//! | `h`, `H` | hour; hours never exceed one digit, so longer runs add no padding |
//! | `m` / `mm` | minute, unpadded / zero-padded to 2 |
//! | `s` / `ss` | second, unpadded / zero-padded to 2 |
//! | `d` / `dd` | day of month, unpadded / zero-padded to 2 |
//! | `ddd` / `dddd` | weekday name, first 3 characters / full |
//! | `M` / `MM` | month number, unpadded / zero-padded to 2 |
//! | `MMM` / `MMMM` | month name, first 3 characters / full |
//! | `y`... | year (`years + base_year + 1`), zero-padded to the run length |
//!
//! Any other character is copied through unchanged.
//!
//! ```rust
//! use caption_calendar::{format, CalendarConfig, TimeParts};
//!
//! let config = CalendarConfig::default();
//! let parts = TimeParts { days: 76, ..TimeParts::default() };
//! assert_eq!(format(&parts, "dd/MM/yyy", &config).unwrap(), "06/03/001");
//! ```

use std::fmt::Write;

use crate::config::CalendarConfig;
use crate::dates::{day_of_month, day_of_week, month_of};
use crate::error::Result;
use crate::time::TimeParts;

const HOUR_WIDTH: usize = 1;
const MINUTE_WIDTH: usize = 2;
const DAY_WIDTH: usize = 2;
const MONTH_WIDTH: usize = 2;
const ABBREVIATION: usize = 3;

/// Formats `parts` according to `pattern` using the names and base year in
/// `config`.
///
/// # Errors
///
/// Returns a [`CalendarError`](crate::CalendarError) when a day or month
/// field is requested for a day outside the month table, or when a year
/// field overflows.
pub fn format(parts: &TimeParts, pattern: &str, config: &CalendarConfig) -> Result<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let day = parts.day_of_year();

    let mut pos = 0;
    while pos < chars.len() {
        let ch = chars[pos];
        let run = chars[pos..].iter().take_while(|&&c| c == ch).count();

        match ch {
            'h' | 'H' => pad(&mut out, parts.hours, run.min(HOUR_WIDTH)),
            'm' => pad(&mut out, parts.minutes, run.min(MINUTE_WIDTH)),
            's' => pad(&mut out, parts.seconds, run.min(MINUTE_WIDTH)),
            'd' => match run {
                1 | 2 => pad(&mut out, day_of_month(day)?, run.min(DAY_WIDTH)),
                3 => out.extend(config.day_name(day_of_week(day))?.chars().take(ABBREVIATION)),
                _ => out.push_str(config.day_name(day_of_week(day))?),
            },
            'M' => match run {
                1 | 2 => pad(&mut out, month_of(day)?, run.min(MONTH_WIDTH)),
                3 => out.extend(config.month_name(month_of(day)?)?.chars().take(ABBREVIATION)),
                _ => out.push_str(config.month_name(month_of(day)?)?),
            },
            'y' => pad(&mut out, config.year_of(parts)?, run),
            literal => out.extend(std::iter::repeat(literal).take(run)),
        }

        pos += run;
    }

    Ok(out)
}

fn pad(out: &mut String, value: i64, width: usize) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{:0width$}", value, width = width);
}

impl CalendarConfig {
    /// Formats `parts` with this calendar. See [`format`].
    pub fn format(&self, parts: &TimeParts, pattern: &str) -> Result<String> {
        format(parts, pattern, self)
    }

    /// Splits `ut` and formats the result. See [`format`].
    pub fn format_ut(&self, ut: f64, pattern: &str) -> Result<String> {
        format(&self.split(ut), pattern, self)
    }
}
