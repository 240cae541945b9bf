//! # Kepler equation
//!
//! Newton–Raphson solution of Kepler's equation `M = E − e·sin(E)` for bound orbits,
//! plus the two classical follow-ups used by the element-driven bodies:
//! the true anomaly `ν` and the heliocentric radius `r`.
//!
//! The solver never fails: it runs at most [`KEPLER_MAX_ITERATIONS`] Newton steps and returns
//! its best estimate. Callers that want to observe convergence use
//! [`solve_kepler_with_diagnostics`].

use super::constants::{Radian, DPI};

/// Iteration cap of the Newton–Raphson loop
pub const KEPLER_MAX_ITERATIONS: usize = 30;

/// Stopping threshold on the Newton correction |ΔE| (radians)
pub const KEPLER_TOLERANCE: f64 = 1e-12;

/// Return the principal value of an angle in radians, in [0, 2π).
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Outcome of a Kepler solve with its convergence diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E (radians, near [0, 2π))
    pub eccentric_anomaly: Radian,
    /// Number of Newton steps performed (0 for a circular orbit)
    pub iterations: usize,
    /// Magnitude of the last Newton correction |ΔE| (radians)
    pub residual: f64,
}

impl KeplerSolution {
    /// `true` when the last correction fell below [`KEPLER_TOLERANCE`].
    pub fn converged(&self) -> bool {
        self.residual < KEPLER_TOLERANCE
    }
}

/// Solve Kepler's equation and report how the iteration went.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M in radians, any real value (reduced to [0, 2π) first).
/// * `eccentricity`: orbital eccentricity e ∈ [0, 1).
///
/// Return
/// ------
/// * A [`KeplerSolution`] holding E, the iteration count and the final |ΔE|.
///
/// Algorithm
/// ---------
/// Seed `E₀ = M + e·sin(M)`, then iterate
///
/// ```text
/// ΔE = (E − e·sin(E) − M) / (1 − e·cos(E))
/// E  = E − ΔE
/// ```
///
/// until `|ΔE| < 1e-12` or [`KEPLER_MAX_ITERATIONS`] steps. When the cap is reached the
/// current estimate is returned as is. For `e = 0` the reduced mean anomaly is returned
/// unchanged.
///
/// See also
/// --------
/// * [`solve_kepler`] – Same computation without the diagnostics.
pub fn solve_kepler_with_diagnostics(mean_anomaly: Radian, eccentricity: f64) -> KeplerSolution {
    let m = principal_angle(mean_anomaly);

    if eccentricity == 0.0 {
        return KeplerSolution {
            eccentric_anomaly: m,
            iterations: 0,
            residual: 0.0,
        };
    }

    let mut ecc_anomaly = m + eccentricity * m.sin();
    let mut residual = f64::INFINITY;
    let mut iterations = 0;

    while iterations < KEPLER_MAX_ITERATIONS {
        let delta = (ecc_anomaly - eccentricity * ecc_anomaly.sin() - m)
            / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        iterations += 1;
        residual = delta.abs();

        if residual < KEPLER_TOLERANCE {
            break;
        }
    }

    if residual >= KEPLER_TOLERANCE {
        log::debug!(
            "Kepler solver reached {KEPLER_MAX_ITERATIONS} iterations (M = {m}, e = {eccentricity}, |ΔE| = {residual:e})"
        );
    }

    KeplerSolution {
        eccentric_anomaly: ecc_anomaly,
        iterations,
        residual,
    }
}

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly E (radians).
///
/// Best-effort contract: no convergence error is ever raised.
pub fn solve_kepler(mean_anomaly: Radian, eccentricity: f64) -> Radian {
    solve_kepler_with_diagnostics(mean_anomaly, eccentricity).eccentric_anomaly
}

/// True anomaly ν from the eccentric anomaly.
///
/// `ν = atan2(√(1−e²)·sin E, cos E − e)`
pub fn true_anomaly(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let (sin_e, cos_e) = eccentric_anomaly.sin_cos();
    ((1.0 - eccentricity * eccentricity).sqrt() * sin_e).atan2(cos_e - eccentricity)
}

/// Distance to the focus for a given true anomaly: `r = a(1−e²)/(1+e·cos ν)`.
pub fn orbital_radius(semi_major_axis: f64, eccentricity: f64, true_anomaly: Radian) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * true_anomaly.cos())
}

#[cfg(test)]
mod kepler_test {

    use super::*;
    use crate::constants::RADEG;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn test_principal_angle() {
        assert_eq!(principal_angle(0.0), 0.0);
        assert_relative_eq!(principal_angle(-PI / 2.0), 3.0 * PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(principal_angle(5.0 * PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_circular_orbit_is_identity() {
        for m in [0.0, 0.3, 1.0, PI, 4.2, DPI - 1e-9] {
            assert_eq!(solve_kepler(m, 0.0), m);
        }
        let sol = solve_kepler_with_diagnostics(2.0, 0.0);
        assert_eq!(sol.iterations, 0);
        assert!(sol.converged());
    }

    #[test]
    fn test_meeus_example() {
        // e = 0.1, M = 5° → E = 5.554589°
        let e = solve_kepler(5.0 * RADEG, 0.1);
        assert_relative_eq!(e / RADEG, 5.554589, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_anomaly_is_reduced() {
        let e1 = solve_kepler(0.75, 0.25);
        let e2 = solve_kepler(0.75 + 3.0 * DPI, 0.25);
        let e3 = solve_kepler(0.75 - DPI, 0.25);
        assert_relative_eq!(e1, e2, epsilon = 1e-12);
        assert_relative_eq!(e1, e3, epsilon = 1e-12);
    }

    #[test]
    fn test_diagnostics_converge_fast() {
        let sol = solve_kepler_with_diagnostics(1.3, 0.38);
        assert!(sol.converged());
        assert!(sol.iterations <= 8, "iterations = {}", sol.iterations);
        assert!(sol.residual < KEPLER_TOLERANCE);
    }

    #[test]
    fn test_true_anomaly_and_radius() {
        // Perihelion and aphelion
        assert_eq!(true_anomaly(0.0, 0.3), 0.0);
        assert_relative_eq!(true_anomaly(PI, 0.3).abs(), PI, epsilon = 1e-12);
        assert_relative_eq!(orbital_radius(2.0, 0.3, 0.0), 1.4, epsilon = 1e-12);
        assert_relative_eq!(orbital_radius(2.0, 0.3, PI), 2.6, epsilon = 1e-12);

        // Circular orbit: ν = E, r = a
        assert_relative_eq!(true_anomaly(1.1, 0.0), 1.1, epsilon = 1e-14);
        assert_relative_eq!(orbital_radius(3.0, 0.0, 1.1), 3.0, epsilon = 1e-14);
    }

    proptest! {
        #[test]
        fn prop_kepler_residual(m in -20.0..20.0f64, e in 0.0..0.9f64) {
            let ecc = solve_kepler(m, e);
            let reduced = principal_angle(m);
            prop_assert!((ecc - e * ecc.sin() - reduced).abs() < 1e-10);
        }
    }
}
