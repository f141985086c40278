use std::fmt::Write;

use crate::context::Vessel;
use crate::error::TagError;
use crate::expander::Scope;
use crate::registry::TagRegistryBuilder;
use crate::util::{latitude, longitude, si_distance};

/// Registers a tag that writes one formatted field of the active vessel.
macro_rules! vessel_tag {
    ($builder:expr, $name:expr, |$vessel:ident| $body:expr) => {
        $builder.tag(
            $name,
            |out: &mut String, scope: &Scope<'_>, _: &[String]| -> Result<(), TagError> {
                let $vessel: &Vessel = scope.vessel()?;
                let _ = write!(out, "{}", $body);
                Ok(())
            },
        )
    };
}

pub(super) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    let builder = vessel_tag!(builder, "Vessel", |v| v.name);
    let builder = vessel_tag!(builder, "Body", |v| v.body);
    let builder = vessel_tag!(builder, "Situation", |v| v.situation);
    let builder = vessel_tag!(builder, "Altitude", |v| si_distance(v.altitude));
    let builder = vessel_tag!(builder, "Mach", |v| format!("{:.1}", v.mach));
    let builder = vessel_tag!(builder, "Speed", |v| format!("{:.1} m/s", v.speed));
    let builder = vessel_tag!(builder, "SrfSpeed", |v| format!("{:.1} m/s", v.surface_speed));
    let builder = vessel_tag!(builder, "OrbSpeed", |v| format!("{:.1} m/s", v.orbital_speed));
    let builder = vessel_tag!(builder, "Heading", |v| format!("{:.1}°", v.heading));
    let builder = vessel_tag!(builder, "Lat", |v| latitude(v.latitude));
    let builder = vessel_tag!(builder, "Lon", |v| longitude(v.longitude));
    let builder = vessel_tag!(builder, "LatLon", |v| format!(
        "{}, {}",
        latitude(v.latitude),
        longitude(v.longitude)
    ));
    let builder = vessel_tag!(builder, "Mass", |v| format!("{:.1} t", v.mass));
    let builder = vessel_tag!(builder, "Throttle", |v| format!("{:.0}%", v.throttle * 100.0));

    builder
        .tag("Biome", biome)
        .tag("LandingZone", landing_zone)
        .tag("Target", target)
}

fn biome(out: &mut String, scope: &Scope<'_>, _: &[String]) -> Result<(), TagError> {
    let biome = scope
        .vessel()?
        .biome
        .as_deref()
        .ok_or(TagError::MissingData("biome"))?;
    out.push_str(biome);
    Ok(())
}

/// The named site the vessel sits on, falling back to the biome.
fn landing_zone(out: &mut String, scope: &Scope<'_>, _: &[String]) -> Result<(), TagError> {
    let vessel = scope.vessel()?;
    let zone = vessel
        .landed_at
        .as_deref()
        .or(vessel.biome.as_deref())
        .ok_or(TagError::MissingData("landing zone"))?;
    out.push_str(zone);
    Ok(())
}

fn target(out: &mut String, scope: &Scope<'_>, _: &[String]) -> Result<(), TagError> {
    let target = scope
        .snapshot()
        .target
        .as_deref()
        .ok_or(TagError::MissingData("target"))?;
    out.push_str(target);
    Ok(())
}
