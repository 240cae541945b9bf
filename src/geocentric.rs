//! # Geocentric transform
//!
//! Converts a heliocentric rectangular position into a geocentric ecliptic position:
//!
//! 1. subtract the Earth reference vector (`z = 0`),
//! 2. longitude = atan2(Δy, Δx), latitude = atan2(Δz, √(Δx²+Δy²)), distance = ‖Δ‖,
//! 3. add the fixed aberration correction [`ABERRATION_CORRECTION`] (−0.005694°) to the
//!    longitude and reduce it again into [0, 360).
//!
//! The correction is the same first-order value for every body whatever its velocity.
//! The transform cannot fail.

use crate::{
    constants::ABERRATION_CORRECTION,
    conversion::{RectangularVector, SphericalPosition},
    earth::EarthReference,
};

/// Geometric geocentric position (no aberration) of a heliocentric vector.
pub fn geometric_geocentric_position(
    heliocentric: &RectangularVector,
    earth: &EarthReference,
) -> SphericalPosition {
    SphericalPosition::from_rectangular(&(heliocentric - earth.rectangular()))
}

/// Geocentric position of a heliocentric vector, with the fixed aberration correction.
///
/// Arguments
/// ---------
/// * `heliocentric`: body position, heliocentric ecliptic of date, AU.
/// * `earth`: Earth reference at the same instant.
///
/// Return
/// ------
/// * [`SphericalPosition`] with longitude in [0, 360), latitude in [−90, 90] and distance in AU.
///
/// See also
/// --------
/// * [`geometric_geocentric_position`] – Same conversion without the aberration term.
pub fn geocentric_position(
    heliocentric: &RectangularVector,
    earth: &EarthReference,
) -> SphericalPosition {
    let geometric = geometric_geocentric_position(heliocentric, earth);
    SphericalPosition::new(
        geometric.longitude + ABERRATION_CORRECTION,
        geometric.latitude,
        geometric.distance,
    )
}

#[cfg(test)]
mod geocentric_test {
    use super::*;
    use crate::{
        constants::RADEG,
        conversion::{angular_distance, normalize_degrees, signed_angle_difference},
        vsop87::{JUPITER, MARS, MERCURY, SATURN, URANUS, VENUS},
    };
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    const J2000: f64 = 2451545.0;

    #[test]
    fn test_sun_seen_from_earth() {
        let earth = EarthReference::at(J2000);
        let sun = geometric_geocentric_position(&Vector3::zeros(), &earth);
        assert_relative_eq!(
            sun.longitude,
            normalize_degrees(earth.longitude / RADEG + 180.0),
            epsilon = 1e-9
        );
        assert_eq!(sun.latitude, 0.0);
        assert_relative_eq!(sun.distance, earth.distance, epsilon = 1e-15);
    }

    #[test]
    fn test_aberration_shift() {
        let vernal_earth = EarthReference {
            longitude: 0.0,
            distance: 1.0,
        };
        let cases = [
            (EarthReference::at(2455197.5), Vector3::new(3.0, -1.0, 0.2)),
            // geometric longitude just above 0°, apparent just below 360°
            (vernal_earth, Vector3::new(3.0, 1e-5, 0.1)),
        ];
        for (earth, body) in cases {
            let geometric = geometric_geocentric_position(&body, &earth);
            let apparent = geocentric_position(&body, &earth);
            assert_relative_eq!(
                signed_angle_difference(apparent.longitude, geometric.longitude),
                ABERRATION_CORRECTION,
                epsilon = 1e-10
            );
            assert_eq!(apparent.latitude, geometric.latitude);
        }
    }

    #[test]
    fn test_aberration_wraps_below_zero() {
        // A body exactly on the vernal point moves to just below 360
        let earth = EarthReference {
            longitude: 0.0,
            distance: 1.0,
        };
        let pos = geocentric_position(&Vector3::new(3.0, 0.0, 0.0), &earth);
        assert_relative_eq!(pos.longitude, 360.0 + ABERRATION_CORRECTION, epsilon = 1e-12);
    }

    #[test]
    fn test_planets_at_j2000() {
        // Geocentric apparent longitudes at 2000-01-01 12h TT
        let earth = EarthReference::at(J2000);
        let expected = [
            (MERCURY, 271.89),
            (VENUS, 241.57),
            (MARS, 327.96),
            (JUPITER, 25.25),
            (SATURN, 40.40),
            (URANUS, 314.81),
        ];
        for (body, lon) in expected {
            let pos = geocentric_position(&body.heliocentric_position(J2000), &earth);
            assert!(
                angular_distance(pos.longitude, lon) < 0.034,
                "got {} expected {lon}",
                pos.longitude
            );
        }
    }
}
