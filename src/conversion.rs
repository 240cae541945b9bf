//! Angle normalization and spherical/rectangular conversions shared by every position model.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Degree, Radian, RADEG};

/// Heliocentric or geocentric rectangular ecliptic vector, in AU.
pub type RectangularVector = Vector3<f64>;

/// Reduce an angle in degrees into [0, 360).
///
/// `rem_euclid` can round up to exactly 360 for tiny negative inputs; that case folds to 0.
pub fn normalize_degrees(angle: Degree) -> Degree {
    let reduced = angle.rem_euclid(360.0);
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Signed angular difference `to − from`, in (−180, 180].
///
/// Arguments
/// ---------
/// * `to`: final angle in degrees (any real value).
/// * `from`: initial angle in degrees (any real value).
///
/// Return
/// ------
/// * The shortest signed rotation taking `from` onto `to`. Exactly opposite angles give +180.
pub fn signed_angle_difference(to: Degree, from: Degree) -> Degree {
    let diff = normalize_degrees(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Unsigned angular distance between two directions on a circle, in [0, 180].
pub fn angular_distance(a: Degree, b: Degree) -> Degree {
    signed_angle_difference(a, b).abs()
}

/// Convert spherical coordinates (radians, AU) into a rectangular vector.
pub fn spherical_to_rectangular(
    longitude: Radian,
    latitude: Radian,
    distance: AstronomicalUnit,
) -> RectangularVector {
    let (sin_lon, cos_lon) = longitude.sin_cos();
    let (sin_lat, cos_lat) = latitude.sin_cos();
    Vector3::new(
        distance * cos_lat * cos_lon,
        distance * cos_lat * sin_lon,
        distance * sin_lat,
    )
}

/// Ecliptic spherical position: longitude and latitude in degrees, distance in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalPosition {
    /// Ecliptic longitude, in [0, 360)
    pub longitude: Degree,
    /// Ecliptic latitude, in [−90, 90]
    pub latitude: Degree,
    /// Distance (AU)
    pub distance: AstronomicalUnit,
}

impl SphericalPosition {
    /// Build a position, reducing the longitude into [0, 360).
    pub fn new(longitude: Degree, latitude: Degree, distance: AstronomicalUnit) -> Self {
        SphericalPosition {
            longitude: normalize_degrees(longitude),
            latitude,
            distance,
        }
    }

    /// Spherical form of a rectangular vector.
    ///
    /// longitude = atan2(y, x), latitude = atan2(z, √(x²+y²)), distance = ‖v‖.
    /// The null vector maps to (0, 0, 0).
    pub fn from_rectangular(v: &RectangularVector) -> Self {
        let rho = v.x.hypot(v.y);
        SphericalPosition::new(
            v.y.atan2(v.x) / RADEG,
            v.z.atan2(rho) / RADEG,
            v.norm(),
        )
    }

    /// Rectangular form of this position.
    pub fn to_rectangular(&self) -> RectangularVector {
        spherical_to_rectangular(
            self.longitude * RADEG,
            self.latitude * RADEG,
            self.distance,
        )
    }
}

#[cfg(test)]
mod conversion_test {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        let tiny = normalize_degrees(-1e-15);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_signed_angle_difference() {
        assert_relative_eq!(signed_angle_difference(1.0, 359.0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(signed_angle_difference(359.0, 1.0), -2.0, epsilon = 1e-12);
        assert_eq!(signed_angle_difference(180.0, 0.0), 180.0);
        assert_eq!(signed_angle_difference(0.0, 180.0), 180.0);
        assert_eq!(signed_angle_difference(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_angular_distance() {
        assert_relative_eq!(angular_distance(350.0, 10.0), 20.0, epsilon = 1e-12);
        assert_relative_eq!(angular_distance(10.0, 350.0), 20.0, epsilon = 1e-12);
        assert_eq!(angular_distance(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_rectangular_roundtrip() {
        let pos = SphericalPosition::new(-30.0, 12.5, 2.7);
        assert_relative_eq!(pos.longitude, 330.0);
        let back = SphericalPosition::from_rectangular(&pos.to_rectangular());
        assert_relative_eq!(back.longitude, 330.0, epsilon = 1e-10);
        assert_relative_eq!(back.latitude, 12.5, epsilon = 1e-10);
        assert_relative_eq!(back.distance, 2.7, epsilon = 1e-12);
    }

    #[test]
    fn test_null_vector() {
        let pos = SphericalPosition::from_rectangular(&Vector3::zeros());
        assert_eq!(pos, SphericalPosition::new(0.0, 0.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_normalize_is_wrap_invariant(angle in 0.0..360.0f64, k in -50i32..50) {
            let shifted = normalize_degrees(angle + 360.0 * k as f64);
            prop_assert!(angular_distance(shifted, angle) < 1e-9);
            prop_assert!((0.0..360.0).contains(&shifted));
        }

        #[test]
        fn prop_signed_difference_range(a in -1000.0..1000.0f64, b in -1000.0..1000.0f64) {
            let d = signed_angle_difference(a, b);
            prop_assert!(d > -180.0 && d <= 180.0);
        }
    }
}
