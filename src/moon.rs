//! # Moon
//!
//! Geocentric position of the Moon from the truncated ELP-2000/82 series: 60 periodic
//! terms in longitude and distance, 60 in latitude, plus the additive corrections for the
//! action of Venus (A1), Jupiter (A2) and the flattening of the Earth (A3).
//!
//! Terms whose argument contains the Sun's mean anomaly `M` are scaled by `E^|k|`, with
//! `E = 1 − 0.002516·T − 0.0000074·T²` the decreasing eccentricity of the Earth's orbit.
//!
//! The model is already geocentric. [`apparent_position`] adds the nutation in longitude
//! and converts the distance from kilometers into AU; it never goes through the heliocentric
//! geocentric transform.

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, JulianDate, Kilometer, ARCSEC_PER_DEGREE, AU, RADEG},
    conversion::{normalize_degrees, SphericalPosition},
    ref_system::nutation,
    time::{horner, julian_centuries},
};

/// Mean distance of the Moon from the Earth (km), constant part of the distance series.
pub const MEAN_LUNAR_DISTANCE: Kilometer = 385_000.56;

/// Fundamental lunar arguments at an instant, in degrees.
///
/// Shared by the Moon series and by the lunar node and apogee models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarArguments {
    /// Moon's mean longitude L'
    pub mean_longitude: Degree,
    /// Mean elongation of the Moon D
    pub elongation: Degree,
    /// Sun's mean anomaly M
    pub sun_anomaly: Degree,
    /// Moon's mean anomaly M'
    pub moon_anomaly: Degree,
    /// Moon's argument of latitude F
    pub latitude_argument: Degree,
    /// Eccentricity factor E applied to terms in M
    pub eccentricity_factor: f64,
    /// Venus perturbation argument A1
    pub a1: Degree,
    /// Jupiter perturbation argument A2
    pub a2: Degree,
    /// Earth flattening argument A3
    pub a3: Degree,
}

impl LunarArguments {
    /// Evaluate every argument at a Julian Date (TT), each reduced into [0, 360).
    pub fn at(jd: JulianDate) -> Self {
        let t = julian_centuries(jd);

        let mean_longitude = horner(
            t,
            &[218.3164477, 481267.88123421, -0.0015786, 1.0 / 538841.0, -1.0 / 65194000.0],
        );
        let elongation = horner(
            t,
            &[297.8501921, 445267.1114034, -0.0018819, 1.0 / 545868.0, -1.0 / 113065000.0],
        );
        let sun_anomaly = horner(t, &[357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0]);
        let moon_anomaly = horner(
            t,
            &[134.9633964, 477198.8675055, 0.0087414, 1.0 / 69699.0, -1.0 / 14712000.0],
        );
        let latitude_argument = horner(
            t,
            &[93.2720950, 483202.0175233, -0.0036539, -1.0 / 3526000.0, 1.0 / 863310000.0],
        );

        LunarArguments {
            mean_longitude: normalize_degrees(mean_longitude),
            elongation: normalize_degrees(elongation),
            sun_anomaly: normalize_degrees(sun_anomaly),
            moon_anomaly: normalize_degrees(moon_anomaly),
            latitude_argument: normalize_degrees(latitude_argument),
            eccentricity_factor: horner(t, &[1.0, -0.002516, -0.0000074]),
            a1: normalize_degrees(119.75 + 131.849 * t),
            a2: normalize_degrees(53.09 + 479264.290 * t),
            a3: normalize_degrees(313.45 + 481266.484 * t),
        }
    }

    /// Argument `d·D + m·M + m'·M' + f·F` in radians, with the `E^|m|` factor of the term.
    pub fn combine(&self, multipliers: [i8; 4]) -> (f64, f64) {
        let [d, m, mp, f] = multipliers.map(f64::from);
        let arg = d * self.elongation
            + m * self.sun_anomaly
            + mp * self.moon_anomaly
            + f * self.latitude_argument;
        (
            arg * RADEG,
            self.eccentricity_factor.powi(i32::from(multipliers[1].abs())),
        )
    }
}

/// Multipliers of (D, M, M', F), coefficient of Σl (sine, 1e-6 degree) and of Σr (cosine, 1e-3 km).
struct LongitudeDistanceTerm([i8; 4], f64, f64);

/// Multipliers of (D, M, M', F) and coefficient of Σb (sine, 1e-6 degree).
struct LatitudeTerm([i8; 4], f64);

const LONGITUDE_DISTANCE_TERMS: &[LongitudeDistanceTerm] = &[
    LongitudeDistanceTerm([0, 0, 1, 0], 6288774.0, -20905355.0),
    LongitudeDistanceTerm([2, 0, -1, 0], 1274027.0, -3699111.0),
    LongitudeDistanceTerm([2, 0, 0, 0], 658314.0, -2955968.0),
    LongitudeDistanceTerm([0, 0, 2, 0], 213618.0, -569925.0),
    LongitudeDistanceTerm([0, 1, 0, 0], -185116.0, 48888.0),
    LongitudeDistanceTerm([0, 0, 0, 2], -114332.0, -3149.0),
    LongitudeDistanceTerm([2, 0, -2, 0], 58793.0, 246158.0),
    LongitudeDistanceTerm([2, -1, -1, 0], 57066.0, -152138.0),
    LongitudeDistanceTerm([2, 0, 1, 0], 53322.0, -170733.0),
    LongitudeDistanceTerm([2, -1, 0, 0], 45758.0, -204586.0),
    LongitudeDistanceTerm([0, 1, -1, 0], -40923.0, -129620.0),
    LongitudeDistanceTerm([1, 0, 0, 0], -34720.0, 108743.0),
    LongitudeDistanceTerm([0, 1, 1, 0], -30383.0, 104755.0),
    LongitudeDistanceTerm([2, 0, 0, -2], 15327.0, 10321.0),
    LongitudeDistanceTerm([0, 0, 1, 2], -12528.0, 0.0),
    LongitudeDistanceTerm([0, 0, 1, -2], 10980.0, 79661.0),
    LongitudeDistanceTerm([4, 0, -1, 0], 10675.0, -34782.0),
    LongitudeDistanceTerm([0, 0, 3, 0], 10034.0, -23210.0),
    LongitudeDistanceTerm([4, 0, -2, 0], 8548.0, -21636.0),
    LongitudeDistanceTerm([2, 1, -1, 0], -7888.0, 24208.0),
    LongitudeDistanceTerm([2, 1, 0, 0], -6766.0, 30824.0),
    LongitudeDistanceTerm([1, 0, -1, 0], -5163.0, -8379.0),
    LongitudeDistanceTerm([1, 1, 0, 0], 4987.0, -16675.0),
    LongitudeDistanceTerm([2, -1, 1, 0], 4036.0, -12831.0),
    LongitudeDistanceTerm([2, 0, 2, 0], 3994.0, -10445.0),
    LongitudeDistanceTerm([4, 0, 0, 0], 3861.0, -11650.0),
    LongitudeDistanceTerm([2, 0, -3, 0], 3665.0, 14403.0),
    LongitudeDistanceTerm([0, 1, -2, 0], -2689.0, -7003.0),
    LongitudeDistanceTerm([2, 0, -1, 2], -2602.0, 0.0),
    LongitudeDistanceTerm([2, -1, -2, 0], 2390.0, 10056.0),
    LongitudeDistanceTerm([1, 0, 1, 0], -2348.0, 6322.0),
    LongitudeDistanceTerm([2, -2, 0, 0], 2236.0, -9884.0),
    LongitudeDistanceTerm([0, 1, 2, 0], -2120.0, 5751.0),
    LongitudeDistanceTerm([0, 2, 0, 0], -2069.0, 0.0),
    LongitudeDistanceTerm([2, -2, -1, 0], 2048.0, -4950.0),
    LongitudeDistanceTerm([2, 0, 1, -2], -1773.0, 4130.0),
    LongitudeDistanceTerm([2, 0, 0, 2], -1595.0, 0.0),
    LongitudeDistanceTerm([4, -1, -1, 0], 1215.0, -3958.0),
    LongitudeDistanceTerm([0, 0, 2, 2], -1110.0, 0.0),
    LongitudeDistanceTerm([3, 0, -1, 0], -892.0, 3258.0),
    LongitudeDistanceTerm([2, 1, 1, 0], -810.0, 2616.0),
    LongitudeDistanceTerm([4, -1, -2, 0], 759.0, -1897.0),
    LongitudeDistanceTerm([0, 2, -1, 0], -713.0, -2117.0),
    LongitudeDistanceTerm([2, 2, -1, 0], -700.0, 2354.0),
    LongitudeDistanceTerm([2, 1, -2, 0], 691.0, 0.0),
    LongitudeDistanceTerm([2, -1, 0, -2], 596.0, 0.0),
    LongitudeDistanceTerm([4, 0, 1, 0], 549.0, -1423.0),
    LongitudeDistanceTerm([0, 0, 4, 0], 537.0, -1117.0),
    LongitudeDistanceTerm([4, -1, 0, 0], 520.0, -1571.0),
    LongitudeDistanceTerm([1, 0, -2, 0], -487.0, -1739.0),
    LongitudeDistanceTerm([2, 1, 0, -2], -399.0, 0.0),
    LongitudeDistanceTerm([0, 0, 2, -2], -381.0, -4421.0),
    LongitudeDistanceTerm([1, 1, 1, 0], 351.0, 0.0),
    LongitudeDistanceTerm([3, 0, -2, 0], -340.0, 0.0),
    LongitudeDistanceTerm([4, 0, -3, 0], 330.0, 0.0),
    LongitudeDistanceTerm([2, -1, 2, 0], 327.0, 0.0),
    LongitudeDistanceTerm([0, 2, 1, 0], -323.0, 1165.0),
    LongitudeDistanceTerm([1, 1, -1, 0], 299.0, 0.0),
    LongitudeDistanceTerm([2, 0, 3, 0], 294.0, 0.0),
    LongitudeDistanceTerm([2, 0, -1, -2], 0.0, 8752.0),
];

const LATITUDE_TERMS: &[LatitudeTerm] = &[
    LatitudeTerm([0, 0, 0, 1], 5128122.0),
    LatitudeTerm([0, 0, 1, 1], 280602.0),
    LatitudeTerm([0, 0, 1, -1], 277693.0),
    LatitudeTerm([2, 0, 0, -1], 173237.0),
    LatitudeTerm([2, 0, -1, 1], 55413.0),
    LatitudeTerm([2, 0, -1, -1], 46271.0),
    LatitudeTerm([2, 0, 0, 1], 32573.0),
    LatitudeTerm([0, 0, 2, 1], 17198.0),
    LatitudeTerm([2, 0, 1, -1], 9266.0),
    LatitudeTerm([0, 0, 2, -1], 8822.0),
    LatitudeTerm([2, -1, 0, -1], 8216.0),
    LatitudeTerm([2, 0, -2, -1], 4324.0),
    LatitudeTerm([2, 0, 1, 1], 4200.0),
    LatitudeTerm([2, 1, 0, -1], -3359.0),
    LatitudeTerm([2, -1, -1, 1], 2463.0),
    LatitudeTerm([2, -1, 0, 1], 2211.0),
    LatitudeTerm([2, -1, -1, -1], 2065.0),
    LatitudeTerm([0, 1, -1, -1], -1870.0),
    LatitudeTerm([4, 0, -1, -1], 1828.0),
    LatitudeTerm([0, 1, 0, 1], -1794.0),
    LatitudeTerm([0, 0, 0, 3], -1749.0),
    LatitudeTerm([0, 1, -1, 1], -1565.0),
    LatitudeTerm([1, 0, 0, 1], -1491.0),
    LatitudeTerm([0, 1, 1, 1], -1475.0),
    LatitudeTerm([0, 1, 1, -1], -1410.0),
    LatitudeTerm([0, 1, 0, -1], -1344.0),
    LatitudeTerm([1, 0, 0, -1], -1335.0),
    LatitudeTerm([0, 0, 3, 1], 1107.0),
    LatitudeTerm([4, 0, 0, -1], 1021.0),
    LatitudeTerm([4, 0, -1, 1], 833.0),
    LatitudeTerm([0, 0, 1, -3], 777.0),
    LatitudeTerm([4, 0, -2, 1], 671.0),
    LatitudeTerm([2, 0, 0, -3], 607.0),
    LatitudeTerm([2, 0, 2, -1], 596.0),
    LatitudeTerm([2, -1, 1, -1], 491.0),
    LatitudeTerm([2, 0, -2, 1], -451.0),
    LatitudeTerm([0, 0, 3, -1], 439.0),
    LatitudeTerm([2, 0, 2, 1], 422.0),
    LatitudeTerm([2, 0, -3, -1], 421.0),
    LatitudeTerm([2, 1, -1, 1], -366.0),
    LatitudeTerm([2, 1, 0, 1], -351.0),
    LatitudeTerm([4, 0, 0, 1], 331.0),
    LatitudeTerm([2, -1, 1, 1], 315.0),
    LatitudeTerm([2, -2, 0, -1], 302.0),
    LatitudeTerm([0, 0, 1, 3], -283.0),
    LatitudeTerm([2, 1, 1, -1], -229.0),
    LatitudeTerm([1, 1, 0, -1], 223.0),
    LatitudeTerm([1, 1, 0, 1], 223.0),
    LatitudeTerm([0, 1, -2, -1], -220.0),
    LatitudeTerm([2, 1, -1, -1], -220.0),
    LatitudeTerm([1, 0, 1, 1], -185.0),
    LatitudeTerm([2, -1, -2, -1], 181.0),
    LatitudeTerm([0, 1, 2, 1], -177.0),
    LatitudeTerm([4, 0, -2, -1], 176.0),
    LatitudeTerm([4, -1, -1, -1], 166.0),
    LatitudeTerm([1, 0, 1, -1], -164.0),
    LatitudeTerm([4, 0, 1, -1], 132.0),
    LatitudeTerm([1, 0, -1, -1], -119.0),
    LatitudeTerm([4, -1, 0, -1], 115.0),
    LatitudeTerm([2, -2, 0, 1], 107.0),
];

/// Geometric geocentric position of the Moon, referred to the mean equinox of date.
///
/// Arguments
/// ---------
/// * `jd`: Julian Date (TT).
///
/// Return
/// ------
/// * `(longitude, latitude, distance)` in degrees, degrees and kilometers.
pub fn geometric_position(jd: JulianDate) -> (Degree, Degree, Kilometer) {
    let args = LunarArguments::at(jd);

    let (mut sum_l, sum_r) = LONGITUDE_DISTANCE_TERMS.iter().fold(
        (0.0, 0.0),
        |(sum_l, sum_r), LongitudeDistanceTerm(mult, l, r)| {
            let (arg, e) = args.combine(*mult);
            (sum_l + l * e * arg.sin(), sum_r + r * e * arg.cos())
        },
    );
    let mut sum_b: f64 = LATITUDE_TERMS
        .iter()
        .map(|LatitudeTerm(mult, b)| {
            let (arg, e) = args.combine(*mult);
            b * e * arg.sin()
        })
        .sum();

    let lp = args.mean_longitude * RADEG;
    let mp = args.moon_anomaly * RADEG;
    let f = args.latitude_argument * RADEG;
    let a1 = args.a1 * RADEG;

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * (args.a2 * RADEG).sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * (args.a3 * RADEG).sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    (
        normalize_degrees(args.mean_longitude + sum_l * 1e-6),
        sum_b * 1e-6,
        MEAN_LUNAR_DISTANCE + sum_r * 1e-3,
    )
}

/// Apparent geocentric position of the Moon.
///
/// Arguments
/// ---------
/// * `jd`: Julian Date (TT).
///
/// Return
/// ------
/// * [`SphericalPosition`] with the nutation in longitude applied and the distance in AU.
///
/// See also
/// --------
/// * [`geometric_position`] – Raw series output in kilometers.
pub fn apparent_position(jd: JulianDate) -> SphericalPosition {
    let (longitude, latitude, distance) = geometric_position(jd);
    SphericalPosition::new(
        longitude + nutation(jd).longitude / ARCSEC_PER_DEGREE,
        latitude,
        distance / AU,
    )
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use crate::{
        constants::J2000,
        conversion::{angular_distance, signed_angle_difference},
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_meeus_example_47a() {
        // 1992 April 12.0 TD
        let (lon, lat, dist) = geometric_position(2448724.5);
        assert_relative_eq!(lon, 133.162655, epsilon = 1e-5);
        assert_relative_eq!(lat, -3.229126, epsilon = 1e-5);
        assert_relative_eq!(dist, 368409.7, epsilon = 0.1);

        let apparent = apparent_position(2448724.5);
        assert_relative_eq!(apparent.longitude, 133.167265, epsilon = 1e-4);
        assert_relative_eq!(apparent.distance, 368409.7 / AU, epsilon = 1e-9);
    }

    #[test]
    fn test_arguments_meeus_example_47a() {
        let args = LunarArguments::at(2448724.5);
        assert_relative_eq!(args.mean_longitude, 134.290182, epsilon = 1e-5);
        assert_relative_eq!(args.elongation, 113.842304, epsilon = 1e-5);
        assert_relative_eq!(args.sun_anomaly, 97.643514, epsilon = 1e-5);
        assert_relative_eq!(args.moon_anomaly, 5.150833, epsilon = 1e-5);
        assert_relative_eq!(args.latitude_argument, 219.889721, epsilon = 1e-5);
        assert_relative_eq!(args.eccentricity_factor, 1.000194, epsilon = 1e-6);
    }

    #[test]
    fn test_position_at_j2000() {
        let moon = apparent_position(J2000);
        assert!(angular_distance(moon.longitude, 223.315) < 0.01, "{}", moon.longitude);
        assert!(moon.latitude.abs() < 5.3);
    }

    #[test]
    fn test_distance_bounds() {
        for k in 0..200 {
            let (_, lat, dist) = geometric_position(J2000 + 3.7 * k as f64);
            assert!((356_000.0..407_000.0).contains(&dist), "distance {dist}");
            assert!(lat.abs() < 5.35, "latitude {lat}");
        }
    }

    #[test]
    fn test_never_retrograde() {
        for k in 0..500 {
            let jd = J2000 + 1.37 * k as f64;
            let before = geometric_position(jd - 0.01).0;
            let after = geometric_position(jd + 0.01).0;
            let speed = signed_angle_difference(after, before) / 0.02;
            assert!(speed > 10.0 && speed < 16.0, "jd {jd}: {speed}");
        }
    }
}
