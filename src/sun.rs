//! # Sun
//!
//! The geocentric Sun is the mirror image of the Earth reference: longitude `L⊕ + 180°`,
//! distance `R⊕`, latitude taken as zero. The orbital eccentricity enters through the
//! Earth series itself (its leading periodic terms are the equation of center). The apparent
//! longitude adds the nutation in longitude and the annual aberration `−20.4898″ / R`.
//!
//! [`low_precision_longitude`] gives the classical mean longitude + equation of center
//! solution, used as an independent cross-check.

use crate::{
    constants::{Degree, JulianDate, ARCSEC_PER_DEGREE, RADEG, SOLAR_ABERRATION},
    conversion::{normalize_degrees, SphericalPosition},
    earth::EarthReference,
    ref_system::nutation,
    time::{horner, julian_centuries},
};

/// Geometric geocentric position of the Sun (no nutation, no aberration).
pub fn geometric_position(jd: JulianDate) -> SphericalPosition {
    let earth = EarthReference::at(jd);
    SphericalPosition::new(earth.longitude / RADEG + 180.0, 0.0, earth.distance)
}

/// Apparent geocentric position of the Sun.
///
/// Arguments
/// ---------
/// * `jd`: Julian Date (TT).
///
/// Return
/// ------
/// * [`SphericalPosition`] whose longitude is the geometric longitude corrected by the
///   nutation in longitude Δψ and the annual aberration `−20.4898″ / R`.
pub fn apparent_position(jd: JulianDate) -> SphericalPosition {
    let geometric = geometric_position(jd);
    let correction =
        nutation(jd).longitude + SOLAR_ABERRATION / geometric.distance;
    SphericalPosition::new(
        geometric.longitude + correction / ARCSEC_PER_DEGREE,
        geometric.latitude,
        geometric.distance,
    )
}

/// Equation of center of the Sun (degrees) from the Earth's orbital eccentricity.
///
/// `C = (1.914602 − 0.004817T − 0.000014T²)·sin M + (0.019993 − 0.000101T)·sin 2M + 0.000289·sin 3M`
pub fn equation_of_center(jd: JulianDate) -> Degree {
    let t = julian_centuries(jd);
    let m = mean_anomaly(t) * RADEG;

    horner(t, &[1.914602, -0.004817, -0.000014]) * m.sin()
        + horner(t, &[0.019993, -0.000101]) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin()
}

/// Low-accuracy apparent longitude of the Sun (about 0.01°): geometric mean longitude plus
/// the equation of center, minus aberration and the main nutation term.
pub fn low_precision_longitude(jd: JulianDate) -> Degree {
    let t = julian_centuries(jd);
    let mean_longitude = horner(t, &[280.46646, 36000.76983, 0.0003032]);
    let omega = (125.04 - 1934.136 * t) * RADEG;

    normalize_degrees(mean_longitude + equation_of_center(jd) - 0.00569 - 0.00478 * omega.sin())
}

fn mean_anomaly(t: f64) -> Degree {
    horner(t, &[357.52911, 35999.05029, -0.0001537])
}

#[cfg(test)]
mod sun_test {
    use super::*;
    use crate::{
        constants::J2000,
        conversion::{angular_distance, signed_angle_difference},
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_apparent_longitude_at_j2000() {
        let sun = apparent_position(J2000);
        assert!(angular_distance(sun.longitude, 280.37) < 0.01, "{}", sun.longitude);
        assert_eq!(sun.latitude, 0.0);
        assert_relative_eq!(sun.distance, 0.98333, epsilon = 1e-4);
    }

    #[test]
    fn test_meeus_example_25b() {
        // 1992 October 13.0 TD: apparent longitude 199°54'21.818"
        let sun = apparent_position(2448908.5);
        assert_relative_eq!(sun.longitude, 199.906060, epsilon = 1e-4);
    }

    #[test]
    fn test_meeus_example_25a() {
        // Low accuracy method, same date
        assert_relative_eq!(equation_of_center(2448908.5), -1.89732, epsilon = 1e-5);
        assert_relative_eq!(low_precision_longitude(2448908.5), 199.90895, epsilon = 1e-4);
    }

    #[test]
    fn test_models_agree() {
        for k in 0..40 {
            let jd = J2000 + 91.3 * k as f64;
            let diff = signed_angle_difference(
                apparent_position(jd).longitude,
                low_precision_longitude(jd),
            );
            assert!(diff.abs() < 0.01, "jd {jd}: {diff}");
        }
    }
}
