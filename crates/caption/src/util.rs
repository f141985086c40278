//! Number formatting shared by the built-in tags.

const SI_PREFIXES: [(f64, &str); 3] = [(1e9, "Gm"), (1e6, "Mm"), (1e3, "km")];

/// Formats a distance in meters with an SI prefix and one decimal.
///
/// ```text
/// 950.0      -> "950.0 m"
/// 75_000.0   -> "75.0 km"
/// 12_000_000 -> "12.0 Mm"
/// ```
pub fn si_distance(meters: f64) -> String {
    let magnitude = meters.abs();
    for (scale, unit) in SI_PREFIXES {
        if magnitude >= scale {
            return format!("{:.1} {}", meters / scale, unit);
        }
    }
    format!("{:.1} m", meters)
}

/// Latitude with two decimals and a hemisphere letter.
pub fn latitude(degrees: f64) -> String {
    let hemisphere = if degrees < 0.0 { 'S' } else { 'N' };
    format!("{:.2}° {}", degrees.abs(), hemisphere)
}

/// Longitude with two decimals and a hemisphere letter.
pub fn longitude(degrees: f64) -> String {
    let hemisphere = if degrees < 0.0 { 'W' } else { 'E' };
    format!("{:.2}° {}", degrees.abs(), hemisphere)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_units() {
        assert_eq!(si_distance(0.0), "0.0 m");
        assert_eq!(si_distance(950.0), "950.0 m");
        assert_eq!(si_distance(1000.0), "1.0 km");
        assert_eq!(si_distance(75_000.0), "75.0 km");
        assert_eq!(si_distance(12_000_000.0), "12.0 Mm");
        assert_eq!(si_distance(13_600_000_000.0), "13.6 Gm");
    }

    #[test]
    fn negative_distance_keeps_sign() {
        assert_eq!(si_distance(-250_000.0), "-250.0 km");
    }

    #[test]
    fn hemispheres() {
        assert_eq!(latitude(-0.0972), "0.10° S");
        assert_eq!(latitude(12.5), "12.50° N");
        assert_eq!(longitude(-74.5575), "74.56° W");
        assert_eq!(longitude(3.0), "3.00° E");
    }
}
