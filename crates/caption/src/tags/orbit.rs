use std::fmt::Write;

use crate::context::Orbit;
use crate::error::TagError;
use crate::expander::Scope;
use crate::registry::TagRegistryBuilder;
use crate::util::si_distance;

use super::time::push_duration;

/// Registers a tag that writes one formatted orbital element.
macro_rules! orbit_tag {
    ($builder:expr, $name:expr, |$orbit:ident| $body:expr) => {
        $builder.tag(
            $name,
            |out: &mut String, scope: &Scope<'_>, _: &[String]| -> Result<(), TagError> {
                let $orbit: &Orbit = scope.orbit()?;
                let _ = write!(out, "{}", $body);
                Ok(())
            },
        )
    };
}

pub(super) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    let builder = orbit_tag!(builder, "Ap", |o| si_distance(o.apoapsis));
    let builder = orbit_tag!(builder, "Pe", |o| si_distance(o.periapsis));
    let builder = orbit_tag!(builder, "Inc", |o| format!("{:.3}°", o.inclination));
    let builder = orbit_tag!(builder, "Ecc", |o| format!("{:.3}", o.eccentricity));
    let builder = orbit_tag!(builder, "LAN", |o| format!("{:.3}°", o.lan));
    let builder = orbit_tag!(builder, "ArgPe", |o| format!("{:.3}°", o.argument_of_periapsis));
    let builder = orbit_tag!(builder, "Orbit", |o| format!(
        "{} x {}",
        si_distance(o.apoapsis),
        si_distance(o.periapsis)
    ));

    builder.tag("Period", period)
}

fn period(out: &mut String, scope: &Scope<'_>, _: &[String]) -> Result<(), TagError> {
    let orbit = scope.orbit()?;
    push_duration(out, scope.calendar(), orbit.period)
}
