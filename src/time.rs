use crate::constants::{JulianDate, DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_MILLENNIUM, J2000};

/// Number of Julian centuries elapsed since J2000.0
///
/// Argument
/// --------
/// * `jd`: Julian Date in the TT scale
///
/// Return
/// ------
/// * `T = (jd - 2451545.0) / 36525`, negative before J2000.0
pub fn julian_centuries(jd: JulianDate) -> f64 {
    (jd - J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Number of Julian millennia elapsed since J2000.0
///
/// This is the time argument `τ` of the VSOP87 series.
///
/// Argument
/// --------
/// * `jd`: Julian Date in the TT scale
///
/// Return
/// ------
/// * `τ = (jd - 2451545.0) / 365250`
pub fn julian_millennia(jd: JulianDate) -> f64 {
    (jd - J2000) / DAYS_PER_JULIAN_MILLENNIUM
}

/// Evaluate a polynomial in `t` with Horner's scheme, coefficients in increasing degree.
pub(crate) fn horner(t: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_time_arguments_at_j2000() {
        assert_eq!(julian_centuries(J2000), 0.0);
        assert_eq!(julian_millennia(J2000), 0.0);
    }

    #[test]
    fn test_time_arguments_scale() {
        assert_eq!(julian_centuries(J2000 + 36525.0), 1.0);
        assert_eq!(julian_millennia(J2000 - 365250.0), -1.0);
        approx::assert_relative_eq!(
            julian_centuries(2448724.5),
            julian_millennia(2448724.5) * 10.0,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_horner() {
        // 1 + 2t + 3t²
        assert_eq!(horner(2.0, &[1.0, 2.0, 3.0]), 17.0);
        assert_eq!(horner(5.0, &[]), 0.0);
    }
}
