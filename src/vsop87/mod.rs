//! # VSOP87 planetary series
//!
//! Heliocentric positions of Mercury to Neptune (and of the Earth) from truncated VSOP87
//! series, as a single parameterized record [`Vsop87Body`] evaluated by one generic routine.
//!
//! Each body carries three [`SeriesTable`]s (`L`, `B`, `R`) whose time argument is
//! `τ`, the number of Julian millennia since J2000.0 (TT). Outputs are referred to the
//! mean ecliptic and equinox of date.
//!
//! ## See also
//! * [`crate::series`] – Generic Poisson series evaluator.
//! * [`crate::earth`] – Earth reference built on [`EARTH`].
//! * [`crate::geocentric`] – Heliocentric to geocentric conversion.

mod earth;
mod jupiter;
mod mars;
mod mercury;
mod neptune;
mod saturn;
mod uranus;
mod venus;

pub use earth::EARTH;
pub use jupiter::JUPITER;
pub use mars::MARS;
pub use mercury::MERCURY;
pub use neptune::NEPTUNE;
pub use saturn::SATURN;
pub use uranus::URANUS;
pub use venus::VENUS;

use crate::{
    constants::{AstronomicalUnit, JulianDate, Radian},
    conversion::{spherical_to_rectangular, RectangularVector},
    kepler::principal_angle,
    series::SeriesTable,
    time::julian_millennia,
};

/// Series tables of one VSOP87 body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vsop87Body {
    /// Heliocentric ecliptic longitude L (radians)
    pub longitude: SeriesTable,
    /// Heliocentric ecliptic latitude B (radians)
    pub latitude: SeriesTable,
    /// Heliocentric distance R (AU)
    pub radius: SeriesTable,
}

/// Heliocentric spherical coordinates produced by a series-driven body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricSpherical {
    /// Longitude L in [0, 2π)
    pub longitude: Radian,
    /// Latitude B
    pub latitude: Radian,
    /// Radius vector R
    pub radius: AstronomicalUnit,
}

impl HeliocentricSpherical {
    /// Rectangular form of these coordinates.
    pub fn to_rectangular(&self) -> RectangularVector {
        spherical_to_rectangular(self.longitude, self.latitude, self.radius)
    }
}

impl Vsop87Body {
    /// Evaluate L, B and R at a Julian Date.
    ///
    /// Arguments
    /// ---------
    /// * `jd`: Julian Date (TT).
    ///
    /// Return
    /// ------
    /// * [`HeliocentricSpherical`] with L reduced to [0, 2π).
    pub fn heliocentric_spherical(&self, jd: JulianDate) -> HeliocentricSpherical {
        let tau = julian_millennia(jd);
        HeliocentricSpherical {
            longitude: principal_angle(self.longitude.evaluate(tau)),
            latitude: self.latitude.evaluate(tau),
            radius: self.radius.evaluate(tau),
        }
    }

    /// Heliocentric rectangular ecliptic vector (AU) at a Julian Date.
    pub fn heliocentric_position(&self, jd: JulianDate) -> RectangularVector {
        self.heliocentric_spherical(jd).to_rectangular()
    }
}

#[cfg(test)]
mod vsop87_test {
    use super::*;
    use crate::constants::RADEG;
    use approx::assert_relative_eq;

    #[test]
    fn test_earth_meeus_example() {
        // Meeus, Astronomical Algorithms, example 32.a/25.b (JDE 2448908.5)
        let earth = EARTH.heliocentric_spherical(2448908.5);
        assert_relative_eq!(earth.longitude / RADEG, 19.907372, epsilon = 1e-5);
        assert_relative_eq!(earth.latitude / RADEG, -0.000179, epsilon = 1e-5);
        assert_relative_eq!(earth.radius, 0.99760775, epsilon = 1e-7);
    }

    #[test]
    fn test_venus_meeus_example() {
        // Meeus example 32.a (JDE 2448976.5)
        let venus = VENUS.heliocentric_spherical(2448976.5);
        assert_relative_eq!(venus.longitude / RADEG, 26.11428, epsilon = 1e-4);
        assert_relative_eq!(venus.latitude / RADEG, -2.62070, epsilon = 1e-4);
        assert_relative_eq!(venus.radius, 0.724603, epsilon = 1e-5);
    }

    #[test]
    fn test_radius_ranges_at_j2000() {
        let expected = [
            (MERCURY, 0.30, 0.47),
            (VENUS, 0.71, 0.73),
            (MARS, 1.38, 1.67),
            (JUPITER, 4.95, 5.46),
            (SATURN, 9.0, 10.1),
            (URANUS, 18.2, 20.1),
            (NEPTUNE, 29.8, 30.4),
        ];
        for (body, min, max) in expected {
            let r = body.heliocentric_spherical(2451545.0).radius;
            assert!(r > min && r < max, "radius {r} outside [{min}, {max}]");
        }
    }

    #[test]
    fn test_rectangular_norm_matches_radius() {
        let jd = 2455000.5;
        let sph = SATURN.heliocentric_spherical(jd);
        let v = SATURN.heliocentric_position(jd);
        assert_relative_eq!(v.norm(), sph.radius, epsilon = 1e-12);
    }

    #[test]
    fn test_table_degrees() {
        assert_eq!(SATURN.radius.degree(), 5);
        assert_eq!(EARTH.longitude.degree(), 5);
        assert!(EARTH.longitude.term_count() > 100);
    }
}
