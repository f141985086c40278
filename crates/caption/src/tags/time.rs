use std::fmt::Write;

use caption_calendar::CalendarConfig;

use crate::error::TagError;
use crate::expander::Scope;
use crate::registry::TagRegistryBuilder;

pub(super) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    builder
        .tag("UT", universal_time)
        .tag("T+", mission_time)
        .tag("Date", date)
        .tag("Year", |out: &mut String, scope: &Scope<'_>, _: &[String]| -> Result<(), TagError> {
            let calendar = scope.calendar();
            let parts = calendar.split(scope.snapshot().ut);
            push_number(out, calendar.year_of(&parts)?)
        })
        .tag("Day", |out: &mut String, scope: &Scope<'_>, _: &[String]| {
            push_number(out, scope.calendar().split(scope.snapshot().ut).day_of_year())
        })
        .tag("Hour", |out: &mut String, scope: &Scope<'_>, _: &[String]| {
            push_number(out, scope.calendar().split(scope.snapshot().ut).hours)
        })
        .tag("Minute", |out: &mut String, scope: &Scope<'_>, _: &[String]| {
            push_number(out, scope.calendar().split(scope.snapshot().ut).minutes)
        })
        .tag("Second", |out: &mut String, scope: &Scope<'_>, _: &[String]| {
            push_number(out, scope.calendar().split(scope.snapshot().ut).seconds)
        })
}

fn push_number(out: &mut String, value: i64) -> Result<(), TagError> {
    let _ = write!(out, "{}", value);
    Ok(())
}

/// `Y1, D01, 0:00:00`
fn universal_time(out: &mut String, scope: &Scope<'_>, _: &[String]) -> Result<(), TagError> {
    let calendar = scope.calendar();
    let parts = calendar.split(scope.snapshot().ut);
    let year = calendar.year_of(&parts)?;
    let clock = calendar.format(&parts, "h:mm:ss")?;
    let _ = write!(out, "Y{}, D{:02}, {}", year, parts.day_of_year(), clock);
    Ok(())
}

/// `T+ 1d, 2:03:04`, or `T- ...` before launch.
fn mission_time(out: &mut String, scope: &Scope<'_>, _: &[String]) -> Result<(), TagError> {
    let met = scope.vessel()?.mission_time;
    out.push_str(if met < 0.0 { "T- " } else { "T+ " });
    push_duration(out, scope.calendar(), met.abs())
}

/// Calendar-formatted UT. Arguments are rejoined with `", "` since the
/// tokenizer splits patterns that contain commas.
fn date(out: &mut String, scope: &Scope<'_>, args: &[String]) -> Result<(), TagError> {
    let pattern = if args.iter().any(|arg| !arg.is_empty()) {
        args.join(", ")
    } else {
        scope.overlay().date_format.clone()
    };
    out.push_str(&scope.calendar().format_ut(scope.snapshot().ut, &pattern)?);
    Ok(())
}

/// Elapsed time as `[Ny, ][Nd, ]h:mm:ss`.
pub(super) fn push_duration(
    out: &mut String,
    calendar: &CalendarConfig,
    seconds: f64,
) -> Result<(), TagError> {
    let parts = calendar.split(seconds);
    if parts.years > 0 {
        let _ = write!(out, "{}y, ", parts.years);
    }
    if parts.years > 0 || parts.days > 0 {
        let _ = write!(out, "{}d, ", parts.days);
    }
    out.push_str(&calendar.format(&parts, "h:mm:ss")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlayConfig;
    use crate::context::{RenderContext, Snapshot, Vessel};
    use crate::expander::expand;
    use crate::registry::default_registry;
    use crate::tags::testing::{render, render_with};
    use caption_calendar::CalendarUnits;
    use caption_tokenizer::tokenize;

    const DAY: f64 = 21_600.0;
    const YEAR: f64 = 9_201_600.0;

    fn launched(mission_time: f64) -> Snapshot {
        Snapshot::default().with_vessel(Vessel {
            mission_time,
            ..Vessel::default()
        })
    }

    mod universal {
        use super::*;

        #[test]
        fn epoch() {
            assert_eq!(render("<UT>", &Snapshot::at(0.0)), "Y1, D01, 0:00:00");
        }

        #[test]
        fn later() {
            let ut = YEAR + 4.0 * DAY + 2.0 * 3600.0 + 3.0 * 60.0 + 4.0;
            assert_eq!(render("<UT>", &Snapshot::at(ut)), "Y2, D05, 2:03:04");
        }

        #[test]
        fn components() {
            let ut = YEAR + 4.0 * DAY + 2.0 * 3600.0 + 3.0 * 60.0 + 4.0;
            assert_eq!(
                render("<Year>/<Day>/<Hour>/<Minute>/<Second>", &Snapshot::at(ut)),
                "2/5/2/3/4"
            );
        }
    }

    mod mission {
        use super::*;

        #[test]
        fn short_mission() {
            assert_eq!(render("<T+>", &launched(3725.0)), "T+ 1:02:05");
        }

        #[test]
        fn days_are_shown_once_non_zero() {
            assert_eq!(render("<T+>", &launched(2.0 * DAY + 3600.0)), "T+ 2d, 1:00:00");
        }

        #[test]
        fn years_include_days() {
            assert_eq!(render("<T+>", &launched(YEAR + 30.0)), "T+ 1y, 0d, 0:00:30");
        }

        #[test]
        fn before_launch() {
            assert_eq!(render("<T+>", &launched(-65.0)), "T- 0:01:05");
        }

        #[test]
        fn without_vessel() {
            assert_eq!(
                render("<T+>", &Snapshot::default()),
                "Error expanding <T+>"
            );
        }
    }

    mod dates {
        use super::*;

        #[test]
        fn default_pattern() {
            assert_eq!(render("<Date>", &Snapshot::at(76.0 * DAY)), "001-03-06");
        }

        #[test]
        fn configured_default_pattern() {
            let overlay = OverlayConfig::default().with_date_format("MMMM d");
            assert_eq!(
                render_with("<Date>", &Snapshot::at(76.0 * DAY), &overlay),
                "Floris 6"
            );
        }

        #[test]
        fn pattern_argument() {
            assert_eq!(
                render("<Date(dd/MM/yyy)>", &Snapshot::at(76.0 * DAY)),
                "06/03/001"
            );
        }

        #[test]
        fn pattern_with_comma() {
            assert_eq!(
                render("<Date(d MMMM, yyy)>", &Snapshot::at(76.0 * DAY)),
                "6 Floris, 001"
            );
        }

        #[test]
        fn empty_argument_uses_default() {
            assert_eq!(render("<Date()>", &Snapshot::at(0.0)), "001-01-01");
        }

        #[test]
        fn calendar_error_becomes_marker() {
            let calendar = CalendarConfig::default()
                .with_units(CalendarUnits {
                    days_per_year: 1000,
                    ..CalendarUnits::kerbin()
                })
                .unwrap();
            let snapshot = Snapshot::at(600.0 * DAY);
            let overlay = OverlayConfig::default();
            let ctx = RenderContext::new(&snapshot, &calendar, &overlay);
            let out = expand(&tokenize("<Date> <Year>"), &ctx, default_registry(), true);
            assert_eq!(out, "Error expanding <Date> 1");
        }

        #[test]
        fn overflowing_year_becomes_marker() {
            let calendar = CalendarConfig::from_yaml("base_year: 9223372036854775807").unwrap();
            let snapshot = Snapshot::at(0.0);
            let overlay = OverlayConfig::default();
            let ctx = RenderContext::new(&snapshot, &calendar, &overlay);
            let out = expand(
                &tokenize("a <Year> b <Date(yyy)> c <UT> <Date(dd/MM)>"),
                &ctx,
                default_registry(),
                true,
            );
            assert_eq!(
                out,
                "a Error expanding <Year> b Error expanding <Date> c Error expanding <UT> 01/01"
            );
        }
    }
}
