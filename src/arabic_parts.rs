//! # Arabic parts
//!
//! Lots computed from the longitudes of the Sun, the Moon and the Ascendant. The
//! Ascendant comes from the houses collaborator; this module only combines longitudes.
//!
//! | Part    | Day chart          | Night chart        |
//! |---------|--------------------|--------------------|
//! | Fortune | ASC + Moon − Sun   | ASC + Sun − Moon   |
//! | Spirit  | ASC + Sun − Moon   | ASC + Moon − Sun   |
//!
//! A chart is diurnal when the Sun lies above the horizon, i.e. in the half of the zodiac
//! running from the Descendant to the Ascendant: `normalize(sun − asc) ∈ [180, 360)`.

use serde::{Deserialize, Serialize};

use crate::{constants::Degree, conversion::normalize_degrees};

/// The supported lots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArabicPart {
    Fortune,
    Spirit,
}

/// Sect of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sect {
    Day,
    Night,
}

/// Sect of the chart for a Sun and Ascendant longitude (degrees).
pub fn sect(sun: Degree, ascendant: Degree) -> Sect {
    if normalize_degrees(sun - ascendant) >= 180.0 {
        Sect::Day
    } else {
        Sect::Night
    }
}

/// Longitude of an Arabic part.
///
/// Arguments
/// ---------
/// * `part`: the lot to compute.
/// * `ascendant`, `sun`, `moon`: ecliptic longitudes (degrees, any real value).
///
/// Return
/// ------
/// * Longitude of the part in [0, 360), with the formula reversed in night charts.
pub fn part_longitude(part: ArabicPart, ascendant: Degree, sun: Degree, moon: Degree) -> Degree {
    let moon_minus_sun = match (part, sect(sun, ascendant)) {
        (ArabicPart::Fortune, Sect::Day) | (ArabicPart::Spirit, Sect::Night) => moon - sun,
        (ArabicPart::Fortune, Sect::Night) | (ArabicPart::Spirit, Sect::Day) => sun - moon,
    };
    normalize_degrees(ascendant + moon_minus_sun)
}

/// Part of Fortune.
pub fn part_of_fortune(ascendant: Degree, sun: Degree, moon: Degree) -> Degree {
    part_longitude(ArabicPart::Fortune, ascendant, sun, moon)
}

/// Part of Spirit.
pub fn part_of_spirit(ascendant: Degree, sun: Degree, moon: Degree) -> Degree {
    part_longitude(ArabicPart::Spirit, ascendant, sun, moon)
}

#[cfg(test)]
mod arabic_parts_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sect() {
        // Sun 90° behind the Ascendant: upper half, culminating
        assert_eq!(sect(10.0, 100.0), Sect::Day);
        // Sun 90° past the Ascendant: below the horizon
        assert_eq!(sect(190.0, 100.0), Sect::Night);
        // Sun on the Ascendant is counted as night, on the Descendant as day
        assert_eq!(sect(100.0, 100.0), Sect::Night);
        assert_eq!(sect(280.0, 100.0), Sect::Day);
    }

    #[test]
    fn test_fortune_day_and_night() {
        // Day: ASC + Moon − Sun
        assert_relative_eq!(part_of_fortune(100.0, 10.0, 50.0), 140.0);
        // Night: ASC + Sun − Moon
        assert_relative_eq!(part_of_fortune(100.0, 190.0, 50.0), 240.0);
    }

    #[test]
    fn test_spirit_mirrors_fortune() {
        for (asc, sun, moon) in [(100.0, 10.0, 50.0), (100.0, 190.0, 350.0), (5.0, 300.0, 2.0)] {
            let fortune = part_of_fortune(asc, sun, moon);
            let spirit = part_of_spirit(asc, sun, moon);
            // Fortune and Spirit are symmetric about the Ascendant
            assert_relative_eq!(
                normalize_degrees(fortune + spirit),
                normalize_degrees(2.0 * asc),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_wraps_into_range() {
        let lot = part_of_fortune(350.0, 300.0, 330.0);
        assert_relative_eq!(lot, 20.0, epsilon = 1e-12);
    }
}
