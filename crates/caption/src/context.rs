//! Read-only data available to tag handlers.
//!
//! The host game fills a [`Snapshot`] with the state at the moment a screenshot
//! is taken; the overlay settings live in [`OverlayConfig`](crate::OverlayConfig)
//! and the calendar in [`CalendarConfig`]. [`RenderContext`] bundles borrowed
//! references to all three for one render pass.
//!
//! Snapshots can be built in code or deserialised from YAML/JSON:
//!
//! ```rust
//! use caption::Snapshot;
//!
//! let snapshot: Snapshot = serde_yaml::from_str(r#"
//! ut: 1500.0
//! vessel:
//!   name: Kestrel II
//!   body: Mun
//!   situation: orbiting
//!   crew:
//!     - { name: Valentina Kerman, role: pilot }
//! "#).unwrap();
//!
//! assert_eq!(snapshot.vessel.unwrap().crew.len(), 1);
//! ```

use std::fmt;

use caption_calendar::CalendarConfig;
use serde::{Deserialize, Serialize};

use crate::config::OverlayConfig;

/// Game state at the moment of the screenshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Snapshot {
    /// Universal time in seconds.
    pub ut: f64,

    /// The active vessel, if any. Absent in menus and the space center.
    pub vessel: Option<Vessel>,

    /// Name of the current navigation target.
    pub target: Option<String>,
}

impl Snapshot {
    pub fn at(ut: f64) -> Self {
        Self {
            ut,
            ..Self::default()
        }
    }

    pub fn with_vessel(mut self, vessel: Vessel) -> Self {
        self.vessel = Some(vessel);
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// State of the active vessel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Vessel {
    pub name: String,
    /// Name of the body whose sphere of influence the vessel is in.
    pub body: String,
    pub situation: Situation,
    pub biome: Option<String>,
    /// Named launch site or facility the vessel is sitting on.
    pub landed_at: Option<String>,
    /// Mission elapsed time in seconds.
    pub mission_time: f64,
    /// Altitude above sea level in meters.
    pub altitude: f64,
    pub mach: f64,
    /// Speed in m/s in the current navball reference frame.
    pub speed: f64,
    pub surface_speed: f64,
    pub orbital_speed: f64,
    /// Degrees, 0 = north.
    pub heading: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Total mass in tonnes.
    pub mass: f64,
    /// Throttle setting in `0.0..=1.0`.
    pub throttle: f64,
    pub orbit: Option<Orbit>,
    pub crew: Vec<CrewMember>,
}

/// Orbital elements of the active vessel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Orbit {
    /// Apoapsis altitude in meters.
    pub apoapsis: f64,
    /// Periapsis altitude in meters.
    pub periapsis: f64,
    /// Degrees.
    pub inclination: f64,
    pub eccentricity: f64,
    /// Longitude of the ascending node, degrees.
    pub lan: f64,
    /// Argument of periapsis, degrees.
    pub argument_of_periapsis: f64,
    /// Seconds.
    pub period: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub role: CrewRole,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, role: CrewRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// The first word of the name.
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewRole {
    Pilot,
    Engineer,
    Scientist,
    Tourist,
}

/// Flight situation of a vessel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Situation {
    #[default]
    Prelaunch,
    Landed,
    Splashed,
    Flying,
    SubOrbital,
    Orbiting,
    Escaping,
    Docked,
}

impl Situation {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Situation::Prelaunch => "Prelaunch",
            Situation::Landed => "Landed",
            Situation::Splashed => "Splashed down",
            Situation::Flying => "Flying",
            Situation::SubOrbital => "Sub-orbital",
            Situation::Orbiting => "Orbiting",
            Situation::Escaping => "Escaping",
            Situation::Docked => "Docked",
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a render pass reads, borrowed for its duration.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub snapshot: &'a Snapshot,
    pub calendar: &'a CalendarConfig,
    pub overlay: &'a OverlayConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        snapshot: &'a Snapshot,
        calendar: &'a CalendarConfig,
        overlay: &'a OverlayConfig,
    ) -> Self {
        Self {
            snapshot,
            calendar,
            overlay,
        }
    }
}
