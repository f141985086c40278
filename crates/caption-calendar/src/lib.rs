//! # caption-calendar
//!
//! Time splitting and date formatting for a fixed twelve-month calendar with
//! six-day weeks.
//!
//! ## Pipeline
//!
//! ```text
//! ut (seconds) --split()--> TimeParts --format(pattern)--> "dd MMMM yyy" text
//!                                 ^
//!                     CalendarConfig (names, base year, units)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use caption_calendar::{CalendarConfig, CalendarUnits};
//!
//! let config = CalendarConfig::default();
//! let parts = config.split(76.0 * 21_600.0);
//! assert_eq!(parts.days, 76);
//!
//! let text = config.format(&parts, "dd/MM/yyy").unwrap();
//! assert_eq!(text, "06/03/001");
//! # let _ = CalendarUnits::kerbin();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `time` | Unit lengths, `TimeParts` and the time splitter |
//! | `dates` | Month table, day-of-month and weekday lookups |
//! | `config` | Name tables and calendar settings |
//! | `format` | Pattern formatter |
//! | `error` | Error types |

mod config;
pub mod dates;
mod error;
mod format;
mod time;

pub use config::CalendarConfig;
pub use dates::{day_of_month, day_of_week, month_of, FIRST_DAY_OF_MONTH};
pub use error::{CalendarError, Result};
pub use format::format;
pub use time::{split, CalendarUnits, TimeParts};
