//! # Longitude speed
//!
//! Daily motion in longitude by central finite difference:
//!
//! ```text
//! speed = Δ(λ(jd + δ), λ(jd − δ)) / 2δ
//! ```
//!
//! where `Δ` is the signed angular difference reduced into (−180°, 180°], so a longitude
//! crossing the 0°/360° boundary between the two samples does not produce a spurious jump.
//! A body is retrograde when its speed is strictly negative.

use crate::{
    constants::{Degree, DegreePerDay, JulianDate},
    conversion::signed_angle_difference,
};

/// Central difference estimate of the longitude speed.
///
/// Arguments
/// ---------
/// * `longitude_at`: longitude model, degrees as a function of the Julian Date.
/// * `jd`: instant of evaluation (TT).
/// * `step`: half-width δ of the difference, in days (must be positive).
///
/// Return
/// ------
/// * Speed in degrees per day. The model is evaluated twice, at `jd − δ` and `jd + δ`.
pub fn central_difference_speed<F>(longitude_at: F, jd: JulianDate, step: f64) -> DegreePerDay
where
    F: Fn(JulianDate) -> Degree,
{
    let before = longitude_at(jd - step);
    let after = longitude_at(jd + step);
    signed_angle_difference(after, before) / (2.0 * step)
}

/// Retrograde state for a longitude speed: strictly negative motion. Zero counts as direct.
#[inline]
pub fn is_retrograde(speed: DegreePerDay) -> bool {
    speed < 0.0
}

#[cfg(test)]
mod speed_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_motion() {
        let speed = central_difference_speed(|jd| 1.5 * jd, 100.0, 0.01);
        assert_relative_eq!(speed, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_across_the_wrap() {
        // 359.99 → 0.01 over 0.02 day
        let speed = central_difference_speed(|jd| (359.99 + jd).rem_euclid(360.0), 0.01, 0.01);
        assert_relative_eq!(speed, 1.0, epsilon = 1e-9);

        let backwards =
            central_difference_speed(|jd| (0.01 - jd).rem_euclid(360.0), 0.01, 0.01);
        assert_relative_eq!(backwards, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_retrograde_sign_convention() {
        assert!(is_retrograde(-1e-9));
        assert!(!is_retrograde(0.0));
        assert!(!is_retrograde(0.3));
    }
}
