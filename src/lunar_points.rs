//! # Lunar nodes and Lilith
//!
//! Sensitive points of the lunar orbit, reported as geocentric ecliptic positions with zero
//! latitude:
//!
//! * the **ascending (north) node**, where the Moon crosses the ecliptic northwards, and the
//!   descending (south) node exactly opposite;
//! * **Lilith** (the Black Moon), the apogee of the lunar orbit.
//!
//! Each point exists in two flavours selected by [`PointModel`]:
//!
//! * `Mean` – secular polynomial in Julian centuries. The mean node regresses steadily
//!   (about −0.053°/day) and is always retrograde.
//! * `True` – mean value plus a periodic correction in the lunar arguments D, M, M' and F.
//!   The true node oscillates around the mean one by up to 1.7° and briefly moves direct;
//!   true Lilith approximates the osculating apogee and departs from the mean apogee by
//!   up to 30°.
//!
//! Distances are conventional: the mean Earth–Moon distance for the nodes and the mean
//! apogee distance for Lilith.

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, JulianDate, Kilometer, AU},
    conversion::{normalize_degrees, SphericalPosition},
    moon::{LunarArguments, MEAN_LUNAR_DISTANCE},
    time::{horner, julian_centuries},
};

/// Mean distance of the lunar apogee (km).
pub const MEAN_APOGEE_DISTANCE: Kilometer = 405_504.0;

/// Mean or true variant of a lunar point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointModel {
    #[default]
    Mean,
    True,
}

/// Periodic correction of the true node: multipliers of (D, M, M', F) and sine amplitude (°).
const TRUE_NODE_TERMS: &[([i8; 4], f64)] = &[
    ([2, 0, 0, -2], -1.4979),
    ([0, 1, 0, 0], -0.1500),
    ([2, 0, 0, 0], -0.1226),
    ([0, 0, 0, 2], 0.1176),
    ([0, 0, 2, -2], -0.0801),
];

/// Periodic correction from the mean to the osculating apogee, least-squares fitted:
/// multipliers of (D, M, M', F) and sine amplitude (°).
const TRUE_APOGEE_TERMS: &[([i8; 4], f64)] = &[
    ([2, 0, -1, 0], -15.4541),
    ([2, 0, -2, 0], -9.6473),
    ([0, 0, 1, 0], -2.7128),
    ([4, 0, -3, 0], 2.6082),
    ([4, 0, -2, 0], 2.0912),
    ([2, 0, 1, 0], 1.4786),
    ([4, 0, -4, 0], 0.9688),
    ([2, -1, -1, 0], -0.9498),
    ([6, 0, -4, 0], -0.7031),
    ([2, 0, 0, 0], -0.6626),
    ([2, 0, -3, 0], -0.5699),
    ([0, 0, 2, 0], -0.5230),
    ([6, 0, -5, 0], -0.4847),
    ([0, 1, 0, 0], 0.4803),
    ([6, 0, -3, 0], -0.3715),
    ([2, -1, -2, 0], -0.3378),
    ([0, 0, 3, 0], -0.3148),
    ([8, 0, -6, 0], 0.1898),
    ([8, 0, -5, 0], 0.1892),
    ([2, 0, -4, 0], -0.1849),
    ([6, 0, -6, 0], -0.1572),
    ([4, 0, -5, 0], 0.1482),
    ([0, 0, 2, -2], -0.1087),
];

fn periodic_correction(terms: &[([i8; 4], f64)], jd: JulianDate) -> Degree {
    let args = LunarArguments::at(jd);
    terms
        .iter()
        .map(|(mult, amplitude)| amplitude * args.combine(*mult).0.sin())
        .sum()
}

/// Longitude of the mean ascending node of the Moon (degrees, unreduced).
///
/// `Ω = 125.0445479° − 1934.1362891°·T + 0.0020754°·T² + T³/467441 − T⁴/60616000`
pub fn mean_node_longitude(jd: JulianDate) -> Degree {
    horner(
        julian_centuries(jd),
        &[125.0445479, -1934.1362891, 0.0020754, 1.0 / 467441.0, -1.0 / 60616000.0],
    )
}

/// Longitude of the mean lunar perigee (degrees, unreduced).
pub fn mean_perigee_longitude(jd: JulianDate) -> Degree {
    horner(
        julian_centuries(jd),
        &[83.3532465, 4069.0137287, -0.0103200, -1.0 / 80053.0, 1.0 / 18999000.0],
    )
}

/// Ecliptic longitude of the north node for the chosen model, in [0, 360).
pub fn north_node_longitude(jd: JulianDate, model: PointModel) -> Degree {
    let mean = mean_node_longitude(jd);
    match model {
        PointModel::Mean => normalize_degrees(mean),
        PointModel::True => normalize_degrees(mean + periodic_correction(TRUE_NODE_TERMS, jd)),
    }
}

/// Ecliptic longitude of Lilith for the chosen model, in [0, 360).
///
/// The mean apogee is the mean perigee plus 180°.
pub fn lilith_longitude(jd: JulianDate, model: PointModel) -> Degree {
    let mean = mean_perigee_longitude(jd) + 180.0;
    match model {
        PointModel::Mean => normalize_degrees(mean),
        PointModel::True => normalize_degrees(mean + periodic_correction(TRUE_APOGEE_TERMS, jd)),
    }
}

/// Geocentric position of the north (ascending) lunar node.
///
/// Arguments
/// ---------
/// * `jd`: Julian Date (TT).
/// * `model`: mean or true node.
///
/// Return
/// ------
/// * [`SphericalPosition`] on the ecliptic, at the mean lunar distance.
pub fn north_node(jd: JulianDate, model: PointModel) -> SphericalPosition {
    SphericalPosition::new(
        north_node_longitude(jd, model),
        0.0,
        MEAN_LUNAR_DISTANCE / AU,
    )
}

/// Geocentric position of the south (descending) lunar node, opposite the north node.
pub fn south_node(jd: JulianDate, model: PointModel) -> SphericalPosition {
    let north = north_node(jd, model);
    SphericalPosition::new(north.longitude + 180.0, 0.0, north.distance)
}

/// Geocentric position of Lilith (lunar apogee), projected on the ecliptic.
///
/// See also
/// --------
/// * [`lilith_longitude`] – Longitude only.
pub fn lilith(jd: JulianDate, model: PointModel) -> SphericalPosition {
    SphericalPosition::new(
        lilith_longitude(jd, model),
        0.0,
        MEAN_APOGEE_DISTANCE / AU,
    )
}

#[cfg(test)]
mod lunar_points_test {
    use super::*;
    use crate::{
        constants::J2000,
        conversion::{angular_distance, signed_angle_difference},
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_node_at_j2000() {
        assert_relative_eq!(
            north_node(J2000, PointModel::Mean).longitude,
            125.0445479,
            epsilon = 1e-10
        );
        assert!(angular_distance(north_node_longitude(J2000, PointModel::True), 123.93) < 0.01);
    }

    #[test]
    fn test_meeus_example_47a_node() {
        // 1992 April 12.0 TD, Ω = 274.400656°
        assert_relative_eq!(
            north_node_longitude(2448724.5, PointModel::Mean),
            274.400656,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_mean_node_regresses() {
        // One full revolution in about 18.6 years
        let daily = signed_angle_difference(
            north_node_longitude(J2000 + 1.0, PointModel::Mean),
            north_node_longitude(J2000, PointModel::Mean),
        );
        assert_relative_eq!(daily, -0.052954, epsilon = 1e-5);
    }

    #[test]
    fn test_true_node_stays_near_mean() {
        for k in 0..400 {
            let jd = J2000 + 11.3 * k as f64;
            let gap = angular_distance(
                north_node_longitude(jd, PointModel::True),
                north_node_longitude(jd, PointModel::Mean),
            );
            assert!(gap < 2.0, "jd {jd}: {gap}");
        }
    }

    #[test]
    fn test_south_node_opposite() {
        for model in [PointModel::Mean, PointModel::True] {
            let jd = 2460310.5;
            let north = north_node(jd, model);
            let south = south_node(jd, model);
            assert!(
                (angular_distance(south.longitude, north.longitude) - 180.0).abs() < 1e-6
            );
            assert_eq!(south.distance, north.distance);
        }
    }

    #[test]
    fn test_mean_lilith() {
        assert_relative_eq!(
            lilith(J2000, PointModel::Mean).longitude,
            263.3532465,
            epsilon = 1e-10
        );
        // Apsidal line advances once in about 8.85 years
        let daily = signed_angle_difference(
            lilith_longitude(J2000 + 1.0, PointModel::Mean),
            lilith_longitude(J2000, PointModel::Mean),
        );
        assert_relative_eq!(daily, 0.111404, epsilon = 1e-5);
    }

    #[test]
    fn test_true_lilith_oscillation() {
        let max_gap = (0..2000)
            .map(|k| {
                let jd = J2000 + 0.91 * k as f64;
                angular_distance(
                    lilith_longitude(jd, PointModel::True),
                    lilith_longitude(jd, PointModel::Mean),
                )
            })
            .fold(0.0, f64::max);
        assert!(max_gap > 15.0 && max_gap < 35.0, "{max_gap}");
    }

    #[test]
    fn test_point_model_serde() {
        assert_eq!(serde_json::to_string(&PointModel::True).unwrap(), "\"true\"");
        let parsed: PointModel = serde_json::from_str("\"mean\"").unwrap();
        assert_eq!(parsed, PointModel::Mean);
        assert_eq!(PointModel::default(), PointModel::Mean);
    }
}
