//! Built-in tags.
//!
//! | Group | Tags |
//! |-------|------|
//! | text | `N`, `Custom` |
//! | time | `UT`, `T+`, `Date`, `Year`, `Day`, `Hour`, `Minute`, `Second` |
//! | vessel | `Vessel`, `Body`, `Situation`, `Biome`, `LandingZone`, `Altitude`, `Mach`, `Speed`, `SrfSpeed`, `OrbSpeed`, `Heading`, `Lat`, `Lon`, `LatLon`, `Mass`, `Throttle`, `Target` |
//! | orbit | `Ap`, `Pe`, `Inc`, `Ecc`, `LAN`, `ArgPe`, `Period`, `Orbit` |
//! | crew | `Crew`, `Pilots`, `Engineers`, `Scientists`, `Tourists` |

mod crew;
mod orbit;
mod text;
mod time;
mod vessel;

use crate::registry::TagRegistryBuilder;

pub(crate) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    let builder = text::register(builder);
    let builder = time::register(builder);
    let builder = vessel::register(builder);
    let builder = orbit::register(builder);
    crew::register(builder)
}
