//! # Reference frame helpers
//!
//! Elementary rotations, obliquity of the ecliptic, nutation and ecliptic precession.
//!
//! * [`rotmt`] – active rotation about one coordinate axis.
//! * [`mean_obliquity`] / [`true_obliquity`] – obliquity of the ecliptic (IAU 1976 + nutation).
//! * [`nutation`] – nutation in longitude and obliquity, truncated IAU 1980 series.
//! * [`ecliptic_precession`] – rotation from the J2000 ecliptic to the mean ecliptic of date.
//!
//! The series-driven planets are produced directly in the mean ecliptic of date; Pluto and the
//! element-driven bodies are modeled in the J2000 ecliptic and go through
//! [`ecliptic_precession`] before the geocentric transform. The Sun and the Moon receive
//! the nutation in longitude.

use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{ArcSec, JulianDate, Radian, RADEG, RADSEC},
    time::{horner, julian_centuries},
};

/// Coordinate axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Elementary rotation used to assemble [`ecliptic_precession`].
///
/// Turns ecliptic vectors about the x axis (tilt between two ecliptics) or the z axis
/// (longitude shift along the ecliptic). A positive `alpha` about z increases the
/// longitude of the rotated vector by `alpha`.
///
/// Arguments
/// ---------
/// * `alpha`: angle in radians.
/// * `axis`: coordinate axis to turn about.
///
/// Return
/// ------
/// * Orthonormal matrix applied on the left of the vector.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 1976 model).
///
/// Arguments
/// ---------
/// * `jd`: Julian Date (TT).
///
/// Return
/// ------
/// * Mean obliquity ε in radians.
///
/// Formula
/// -------
/// ```text
/// ε(T) = 23°26'21.448" − 46.815"·T − 0.0006"·T² + 0.00181"·T³
/// ```
/// with `T` in Julian centuries since J2000.0, evaluated with Horner's method.
pub fn mean_obliquity(jd: JulianDate) -> Radian {
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.0006 * RADSEC;
    let ob3 = 0.00181 * RADSEC;

    horner(julian_centuries(jd), &[ob0, ob1, ob2, ob3])
}

/// True obliquity of the ecliptic: mean obliquity plus the nutation in obliquity (radians).
pub fn true_obliquity(jd: JulianDate) -> Radian {
    mean_obliquity(jd) + nutation(jd).obliquity * RADSEC
}

/// Nutation angles, in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutation {
    /// Nutation in longitude Δψ
    pub longitude: ArcSec,
    /// Nutation in obliquity Δε
    pub obliquity: ArcSec,
}

/// One periodic term: multipliers of (D, M, M', F, Ω), then Δψ sine coefficient and its
/// rate per century, Δε cosine coefficient and its rate per century (units of 0.0001").
struct NutationTerm([i8; 5], f64, f64, f64, f64);

const NUTATION_TERMS: &[NutationTerm] = &[
    NutationTerm([0, 0, 0, 0, 1], -171996.0, -174.2, 92025.0, 8.9),
    NutationTerm([-2, 0, 0, 2, 2], -13187.0, -1.6, 5736.0, -3.1),
    NutationTerm([0, 0, 0, 2, 2], -2274.0, -0.2, 977.0, -0.5),
    NutationTerm([0, 0, 0, 0, 2], 2062.0, 0.2, -895.0, 0.5),
    NutationTerm([0, 1, 0, 0, 0], 1426.0, -3.4, 54.0, -0.1),
    NutationTerm([0, 0, 1, 0, 0], 712.0, 0.1, -7.0, 0.0),
    NutationTerm([-2, 1, 0, 2, 2], -517.0, 1.2, 224.0, -0.6),
    NutationTerm([0, 0, 0, 2, 1], -386.0, -0.4, 200.0, 0.0),
    NutationTerm([0, 0, 1, 2, 2], -301.0, 0.0, 129.0, -0.1),
    NutationTerm([-2, -1, 0, 2, 2], 217.0, -0.5, -95.0, 0.3),
    NutationTerm([-2, 0, 1, 0, 0], -158.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, 0, 0, 2, 1], 129.0, 0.1, -70.0, 0.0),
    NutationTerm([0, 0, -1, 2, 2], 123.0, 0.0, -53.0, 0.0),
    NutationTerm([2, 0, 0, 0, 0], 63.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 0, 1, 0, 1], 63.0, 0.1, -33.0, 0.0),
    NutationTerm([2, 0, -1, 2, 2], -59.0, 0.0, 26.0, 0.0),
    NutationTerm([0, 0, -1, 0, 1], -58.0, -0.1, 32.0, 0.0),
    NutationTerm([0, 0, 1, 2, 1], -51.0, 0.0, 27.0, 0.0),
    NutationTerm([-2, 0, 2, 0, 0], 48.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 0, -2, 2, 1], 46.0, 0.0, -24.0, 0.0),
    NutationTerm([2, 0, 0, 2, 2], -38.0, 0.0, 16.0, 0.0),
    NutationTerm([0, 0, 2, 2, 2], -31.0, 0.0, 13.0, 0.0),
    NutationTerm([0, 0, 2, 0, 0], 29.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, 0, 1, 2, 2], 29.0, 0.0, -12.0, 0.0),
    NutationTerm([0, 0, 0, 2, 0], 26.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, 0, 0, 2, 0], -22.0, 0.0, 0.0, 0.0),
    NutationTerm([0, 0, -1, 2, 1], 21.0, 0.0, -10.0, 0.0),
    NutationTerm([0, 2, 0, 0, 0], 17.0, -0.1, 0.0, 0.0),
    NutationTerm([2, 0, -1, 0, 1], 16.0, 0.0, -8.0, 0.0),
    NutationTerm([-2, 2, 0, 2, 2], -16.0, 0.1, 7.0, 0.0),
    NutationTerm([0, 1, 0, 0, 1], -15.0, 0.0, 9.0, 0.0),
    NutationTerm([-2, 0, 1, 0, 1], -13.0, 0.0, 7.0, 0.0),
    NutationTerm([0, -1, 0, 0, 1], -12.0, 0.0, 6.0, 0.0),
    NutationTerm([0, 0, 2, -2, 0], 11.0, 0.0, 0.0, 0.0),
    NutationTerm([2, 0, -1, 2, 1], -10.0, 0.0, 5.0, 0.0),
    NutationTerm([2, 0, 1, 2, 2], -8.0, 0.0, 3.0, 0.0),
    NutationTerm([0, 1, 0, 2, 2], 7.0, 0.0, -3.0, 0.0),
    NutationTerm([-2, 1, 1, 0, 0], -7.0, 0.0, 0.0, 0.0),
    NutationTerm([0, -1, 0, 2, 2], -7.0, 0.0, 3.0, 0.0),
    NutationTerm([2, 0, 0, 2, 1], -7.0, 0.0, 3.0, 0.0),
    NutationTerm([2, 0, 1, 0, 0], 6.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, 0, 2, 2, 2], 6.0, 0.0, -3.0, 0.0),
    NutationTerm([-2, 0, 1, 2, 1], 6.0, 0.0, -3.0, 0.0),
    NutationTerm([2, 0, -2, 0, 1], -6.0, 0.0, 3.0, 0.0),
    NutationTerm([2, 0, 0, 0, 1], -6.0, 0.0, 3.0, 0.0),
    NutationTerm([0, -1, 1, 0, 0], 5.0, 0.0, 0.0, 0.0),
    NutationTerm([-2, -1, 0, 2, 1], -5.0, 0.0, 3.0, 0.0),
    NutationTerm([-2, 0, 0, 0, 1], -5.0, 0.0, 3.0, 0.0),
    NutationTerm([0, 0, 2, 2, 1], -5.0, 0.0, 3.0, 0.0),
];

/// Nutation in longitude and obliquity (IAU 1980 theory, terms above 0.0005").
///
/// Arguments
/// ---------
/// * `jd`: Julian Date (TT).
///
/// Return
/// ------
/// * [`Nutation`] with Δψ and Δε in arcseconds.
///
/// The fundamental arguments are the Moon's mean elongation D, the Sun's mean anomaly M,
/// the Moon's mean anomaly M', the Moon's argument of latitude F and the longitude of the
/// Moon's mean ascending node Ω, as cubic polynomials in Julian centuries.
pub fn nutation(jd: JulianDate) -> Nutation {
    let t = julian_centuries(jd);

    let args = [
        horner(t, &[297.85036, 445267.111480, -0.0019142, 1.0 / 189474.0]),
        horner(t, &[357.52772, 35999.050340, -0.0001603, -1.0 / 300000.0]),
        horner(t, &[134.96298, 477198.867398, 0.0086972, 1.0 / 56250.0]),
        horner(t, &[93.27191, 483202.017538, -0.0036825, 1.0 / 327270.0]),
        horner(t, &[125.04452, -1934.136261, 0.0020708, 1.0 / 450000.0]),
    ];

    let (dpsi, deps) = NUTATION_TERMS.iter().fold(
        (0.0, 0.0),
        |(dpsi, deps), NutationTerm(mult, psi, psi_t, eps, eps_t)| {
            let arg: f64 = mult
                .iter()
                .zip(args.iter())
                .map(|(&k, a)| f64::from(k) * a)
                .sum::<f64>()
                * RADEG;
            let (sin_arg, cos_arg) = arg.sin_cos();
            (
                dpsi + (psi + psi_t * t) * sin_arg,
                deps + (eps + eps_t * t) * cos_arg,
            )
        },
    );

    // 0.0001" → arcseconds
    Nutation {
        longitude: dpsi * 1e-4,
        obliquity: deps * 1e-4,
    }
}

/// Rotation from the mean ecliptic and equinox of J2000.0 to the mean ecliptic and equinox of date.
///
/// Arguments
/// ---------
/// * `jd`: target Julian Date (TT).
///
/// Return
/// ------
/// * A 3×3 orthonormal matrix `P` such that `x_date = P · x_J2000`.
///
/// Method
/// ------
/// With `t` in Julian centuries from J2000.0, the ecliptic precession angles are
///
/// ```text
/// η = (47.0029" − 0.03302"·t + 0.000060"·t²)·t
/// Π = 174.876384° − 869.8089"·t + 0.03536"·t²
/// p = (5029.0966" + 1.11113"·t − 0.000006"·t²)·t
/// ```
///
/// and the rotation is `Rz(Π + p) · Rx(−η) · Rz(−Π)`: move the node of the ecliptic of date
/// onto the x axis, tilt by η, then restore the node longitude advanced by the general
/// precession `p`.
pub fn ecliptic_precession(jd: JulianDate) -> Matrix3<f64> {
    let t = julian_centuries(jd);

    let eta = horner(t, &[0.0, 47.0029, -0.03302, 0.000060]) * RADSEC;
    let node = 174.876384 * RADEG + horner(t, &[0.0, -869.8089, 0.03536]) * RADSEC;
    let p = horner(t, &[0.0, 5029.0966, 1.11113, -0.000006]) * RADSEC;

    rotmt(node + p, Axis::Z) * rotmt(-eta, Axis::X) * rotmt(-node, Axis::Z)
}

#[cfg(test)]
mod ref_system_test {

    use super::*;
    use crate::{constants::J2000, conversion::SphericalPosition};
    use approx::assert_relative_eq;

    #[test]
    fn test_obliquity() {
        let obl = mean_obliquity(J2000);
        assert_eq!(obl, 0.40909280422232897)
    }

    #[test]
    fn test_obliquity_decreases() {
        assert!(mean_obliquity(J2000 + 36525.0) < mean_obliquity(J2000));
        assert_relative_eq!(
            (mean_obliquity(J2000) - mean_obliquity(J2000 + 36525.0)) / RADSEC,
            46.815,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_nutation_at_j2000() {
        let nut = nutation(J2000);
        assert_relative_eq!(nut.longitude, -13.9234, epsilon = 2e-3);
        assert_relative_eq!(nut.obliquity, -5.7739, epsilon = 2e-3);
    }

    #[test]
    fn test_nutation_meeus_example() {
        // Meeus example 22.a, 1987 April 10 0h TD
        let nut = nutation(2446895.5);
        assert_relative_eq!(nut.longitude, -3.788, epsilon = 2e-3);
        assert_relative_eq!(nut.obliquity, 9.443, epsilon = 2e-3);
        assert_relative_eq!(
            true_obliquity(2446895.5) / RADEG,
            23.0 + 26.0 / 60.0 + 36.850 / 3600.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_rotmt() {
        let r = rotmt(std::f64::consts::FRAC_PI_2, Axis::Z);
        let v = r * Vector3::x();
        assert_relative_eq!(v, Vector3::y(), epsilon = 1e-15);

        let r = rotmt(std::f64::consts::FRAC_PI_2, Axis::X);
        let v = r * Vector3::y();
        assert_relative_eq!(v, Vector3::z(), epsilon = 1e-15);
    }

    #[test]
    fn test_precession_identity_at_j2000() {
        let p = ecliptic_precession(J2000);
        assert_relative_eq!(p, Matrix3::identity(), epsilon = 1e-14);
    }

    #[test]
    fn test_precession_is_orthonormal() {
        let p = ecliptic_precession(2469807.5);
        assert_relative_eq!(p * p.transpose(), Matrix3::identity(), epsilon = 1e-14);
    }

    #[test]
    fn test_precession_matches_closed_form() {
        // Rigorous ecliptic precession (Meeus 21.5) of (100°, +5°) over 0.7 century
        let pos = SphericalPosition::new(100.0, 5.0, 1.0);
        let moved = SphericalPosition::from_rectangular(
            &(ecliptic_precession(J2000 + 0.7 * 36525.0) * pos.to_rectangular()),
        );
        assert_relative_eq!(moved.longitude, 100.97824211, epsilon = 1e-6);
        assert_relative_eq!(moved.latitude, 5.00881150, epsilon = 1e-6);
    }
}
