//! # Earth heliocentric reference
//!
//! The Earth's heliocentric longitude and distance, taken from the truncated VSOP87 Earth
//! series with the latitude set to zero. Every heliocentric body is brought to the
//! geocentric frame against this reference, and the Sun model is its mirror image.

use serde::{Deserialize, Serialize};

use crate::{
    constants::{AstronomicalUnit, JulianDate, Radian},
    conversion::{spherical_to_rectangular, RectangularVector},
    kepler::principal_angle,
    time::julian_millennia,
    vsop87::EARTH,
};

/// Heliocentric position of the Earth in the ecliptic plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarthReference {
    /// Heliocentric longitude L in [0, 2π)
    pub longitude: Radian,
    /// Earth–Sun distance R (AU)
    pub distance: AstronomicalUnit,
}

impl EarthReference {
    /// Evaluate the Earth reference at a Julian Date (TT).
    pub fn at(jd: JulianDate) -> Self {
        let tau = julian_millennia(jd);
        EarthReference {
            longitude: principal_angle(EARTH.longitude.evaluate(tau)),
            distance: EARTH.radius.evaluate(tau),
        }
    }

    /// Rectangular heliocentric vector with `z = 0`.
    pub fn rectangular(&self) -> RectangularVector {
        spherical_to_rectangular(self.longitude, 0.0, self.distance)
    }
}

#[cfg(test)]
mod earth_test {
    use super::*;
    use crate::constants::RADEG;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_matches_full_series() {
        let jd = 2448908.5;
        let reference = EarthReference::at(jd);
        let full = EARTH.heliocentric_spherical(jd);
        assert_eq!(reference.longitude, full.longitude);
        assert_eq!(reference.distance, full.radius);
        assert_relative_eq!(reference.longitude / RADEG, 19.907372, epsilon = 1e-5);
    }

    #[test]
    fn test_rectangular_is_in_ecliptic_plane() {
        let v = EarthReference::at(2460000.5).rectangular();
        assert_eq!(v.z, 0.0);
        assert!(v.norm() > 0.98 && v.norm() < 1.02);
    }

    #[test]
    fn test_perihelion_and_aphelion_distances() {
        // Early January perihelion, early July aphelion
        let perihelion = EarthReference::at(2451547.5).distance;
        let aphelion = EarthReference::at(2451731.5).distance;
        assert!(perihelion < 0.984, "perihelion {perihelion}");
        assert!(aphelion > 1.016, "aphelion {aphelion}");
    }
}
