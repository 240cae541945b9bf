//! # Keplerian orbital elements
//!
//! This module defines the [`KeplerianElements`] struct used by the element-driven bodies
//! (the four major asteroids and Chiron) and the two-body propagation that turns it into a
//! heliocentric position at any Julian Date.
//!
//! ## Elements
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity, bound orbits only (`0 ≤ e < 1`)
//! 3. **i** – Inclination (degrees)
//! 4. **Ω** – Longitude of ascending node (degrees)
//! 5. **ω** – Argument of periapsis (degrees)
//! 6. **M₀** – Mean anomaly at the reference epoch (degrees)
//! 7. **n** – Mean daily motion (degrees per day)
//!
//! Angles are referred to the mean ecliptic and equinox of J2000.0.
//!
//! ## Propagation
//!
//! ```text
//! M(jd) = M₀ + n·(jd − epoch)
//! E     = solve_kepler(M, e)
//! ν, r  = true anomaly and radius from E
//! x     = P·r·cos ν + Q·r·sin ν
//! ```
//!
//! with `P`, `Q` the perifocal basis vectors built from ω, Ω and i.
//!
//! ## See also
//!
//! - [`crate::kepler`] – Kepler equation solver.
//! - [`crate::orbit_type::minor_bodies`] – Built-in element catalog.

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    almagest_errors::AlmagestError,
    constants::{AstronomicalUnit, Degree, DegreePerDay, JulianDate, Radian, RADEG},
    conversion::RectangularVector,
    kepler::{orbital_radius, principal_angle, solve_kepler, true_anomaly},
    ref_system::ecliptic_precession,
};

/// Keplerian orbital elements (osculating, two-body) anchored at a reference epoch.
///
/// Units
/// -----
/// * `reference_epoch`: Julian Date (TT).
/// * `semi_major_axis`: Astronomical Units (AU).
/// * `eccentricity`: unitless.
/// * `inclination`, `ascending_node_longitude`, `periapsis_argument`, `mean_anomaly`: degrees.
/// * `mean_motion`: degrees per day.
///
/// See also
/// --------
/// * [`KeplerianElements::new`] – Checked constructor.
/// * [`KeplerianElements::heliocentric_position`] – Position at any date.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub reference_epoch: JulianDate,
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub ascending_node_longitude: Degree,
    pub periapsis_argument: Degree,
    pub mean_anomaly: Degree,
    pub mean_motion: DegreePerDay,
}

impl KeplerianElements {
    /// Build a validated set of elements.
    ///
    /// Arguments
    /// ---------
    /// * `reference_epoch` – Epoch of the mean anomaly (JD, TT).
    /// * `semi_major_axis` – `a` (AU), must be positive.
    /// * `eccentricity` – `e`, must lie in [0, 1).
    /// * `inclination`, `ascending_node_longitude`, `periapsis_argument`, `mean_anomaly` – degrees.
    /// * `mean_motion` – `n` (degrees per day), must be positive.
    ///
    /// Return
    /// ------
    /// * The elements, or [`AlmagestError::InvalidOrbitalElements`] when a field is
    ///   non-finite or out of its domain.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reference_epoch: JulianDate,
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_argument: Degree,
        mean_anomaly: Degree,
        mean_motion: DegreePerDay,
    ) -> Result<Self, AlmagestError> {
        let elements = KeplerianElements {
            reference_epoch,
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_argument,
            mean_anomaly,
            mean_motion,
        };
        elements.validate()?;
        Ok(elements)
    }

    /// Check the domain of every field.
    pub fn validate(&self) -> Result<(), AlmagestError> {
        let fields = [
            self.reference_epoch,
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            self.ascending_node_longitude,
            self.periapsis_argument,
            self.mean_anomaly,
            self.mean_motion,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(AlmagestError::InvalidOrbitalElements(
                "all elements must be finite".into(),
            ));
        }
        if self.semi_major_axis <= 0.0 {
            return Err(AlmagestError::InvalidOrbitalElements(format!(
                "semi-major axis must be positive, got {}",
                self.semi_major_axis
            )));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(AlmagestError::InvalidOrbitalElements(format!(
                "eccentricity must lie in [0, 1), got {}",
                self.eccentricity
            )));
        }
        if self.mean_motion <= 0.0 {
            return Err(AlmagestError::InvalidOrbitalElements(format!(
                "mean motion must be positive, got {}",
                self.mean_motion
            )));
        }
        Ok(())
    }

    /// Mean anomaly at `jd`, in radians reduced to [0, 2π).
    pub fn mean_anomaly_at(&self, jd: JulianDate) -> Radian {
        principal_angle(
            (self.mean_anomaly + self.mean_motion * (jd - self.reference_epoch)) * RADEG,
        )
    }

    /// Perihelion distance `q = a(1 − e)` (AU).
    pub fn perihelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Aphelion distance `Q = a(1 + e)` (AU).
    pub fn aphelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Orbital period (days).
    pub fn period(&self) -> f64 {
        360.0 / self.mean_motion
    }

    /// Perifocal basis vectors `P` (towards periapsis) and `Q` (90° ahead in the orbit plane),
    /// expressed in the J2000 ecliptic frame.
    pub fn perifocal_basis(&self) -> (Vector3<f64>, Vector3<f64>) {
        let (sin_w, cos_w) = (self.periapsis_argument * RADEG).sin_cos();
        let (sin_node, cos_node) = (self.ascending_node_longitude * RADEG).sin_cos();
        let (sin_i, cos_i) = (self.inclination * RADEG).sin_cos();

        let p = Vector3::new(
            cos_w * cos_node - sin_w * sin_node * cos_i,
            cos_w * sin_node + sin_w * cos_node * cos_i,
            sin_w * sin_i,
        );
        let q = Vector3::new(
            -sin_w * cos_node - cos_w * sin_node * cos_i,
            -sin_w * sin_node + cos_w * cos_node * cos_i,
            cos_w * sin_i,
        );
        (p, q)
    }

    /// Heliocentric rectangular position (AU) in the J2000 ecliptic frame.
    ///
    /// Arguments
    /// ---------
    /// * `jd`: Julian Date (TT).
    ///
    /// Return
    /// ------
    /// * Position vector obtained by two-body propagation of the elements to `jd`.
    pub fn heliocentric_position_j2000(&self, jd: JulianDate) -> RectangularVector {
        let ecc_anomaly = solve_kepler(self.mean_anomaly_at(jd), self.eccentricity);
        let nu = true_anomaly(ecc_anomaly, self.eccentricity);
        let r = orbital_radius(self.semi_major_axis, self.eccentricity, nu);

        let (p, q) = self.perifocal_basis();
        let (sin_nu, cos_nu) = nu.sin_cos();
        p * (r * cos_nu) + q * (r * sin_nu)
    }

    /// Heliocentric rectangular position (AU) in the ecliptic and equinox of date.
    ///
    /// See also
    /// --------
    /// * [`crate::ref_system::ecliptic_precession`] – J2000 → date rotation.
    pub fn heliocentric_position(&self, jd: JulianDate) -> RectangularVector {
        ecliptic_precession(jd) * self.heliocentric_position_j2000(jd)
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Keplerian Elements @ epoch (JD): {:.6}",
            self.reference_epoch
        )?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6}°",
            self.inclination
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6}°",
            self.ascending_node_longitude
        )?;
        writeln!(
            f,
            "  ω   (argument of periapsis) = {:.6}°",
            self.periapsis_argument
        )?;
        writeln!(
            f,
            "  M   (mean anomaly)          = {:.6}°",
            self.mean_anomaly
        )?;
        write!(
            f,
            "  n   (mean motion)           = {:.8}°/day",
            self.mean_motion
        )
    }
}

#[cfg(test)]
pub(crate) mod test_keplerian_element {
    use super::*;
    use approx::assert_relative_eq;

    fn circular_in_ecliptic() -> KeplerianElements {
        KeplerianElements::new(2451545.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0).unwrap()
    }

    #[test]
    fn test_checked_constructor() {
        assert!(KeplerianElements::new(2451545.0, 2.0, 0.3, 5.0, 10.0, 20.0, 30.0, 0.2).is_ok());

        let hyperbolic = KeplerianElements::new(2451545.0, 2.0, 1.2, 5.0, 10.0, 20.0, 30.0, 0.2);
        assert!(matches!(
            hyperbolic,
            Err(AlmagestError::InvalidOrbitalElements(_))
        ));

        let negative_axis = KeplerianElements::new(2451545.0, -1.0, 0.1, 5.0, 10.0, 20.0, 30.0, 0.2);
        assert!(negative_axis.is_err());

        let frozen = KeplerianElements::new(2451545.0, 1.0, 0.1, 5.0, 10.0, 20.0, 30.0, 0.0);
        assert!(frozen.is_err());

        let nan = KeplerianElements::new(2451545.0, 1.0, 0.1, f64::NAN, 10.0, 20.0, 30.0, 0.1);
        assert_eq!(
            nan,
            Err(AlmagestError::InvalidOrbitalElements(
                "all elements must be finite".into()
            ))
        );
    }

    #[test]
    fn test_circular_orbit_positions() {
        let kep = circular_in_ecliptic();

        let start = kep.heliocentric_position_j2000(2451545.0);
        assert_relative_eq!(start, Vector3::new(2.0, 0.0, 0.0), epsilon = 1e-12);

        // n = 1°/day: a quarter turn after 90 days
        let quarter = kep.heliocentric_position_j2000(2451545.0 + 90.0);
        assert_relative_eq!(quarter, Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_perifocal_basis_is_orthonormal() {
        let kep = KeplerianElements::new(2451545.0, 2.7, 0.2, 34.8, 172.9, 310.9, 10.0, 0.21)
            .unwrap();
        let (p, q) = kep.perifocal_basis();
        assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-14);
        assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-14);
        assert!(p.dot(&q).abs() < 1e-14);

        // Orbit normal tilted by the inclination
        let normal = p.cross(&q);
        assert_relative_eq!(normal.z, (34.8 * RADEG).cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_radius_between_apsides() {
        let kep = KeplerianElements::new(2451545.0, 2.66, 0.256, 13.0, 170.0, 248.0, 183.0, 0.226)
            .unwrap();
        for k in 0..100 {
            let r = kep
                .heliocentric_position_j2000(2451545.0 + 17.0 * k as f64)
                .norm();
            assert!(r >= kep.perihelion_distance() - 1e-9);
            assert!(r <= kep.aphelion_distance() + 1e-9);
        }
    }

    #[test]
    fn test_periodicity() {
        let kep = KeplerianElements::new(2451545.0, 2.36, 0.089, 7.1, 103.9, 151.2, 339.1, 0.27154)
            .unwrap();
        let a = kep.heliocentric_position_j2000(2452000.5);
        let b = kep.heliocentric_position_j2000(2452000.5 + kep.period());
        assert_relative_eq!(a, b, epsilon = 1e-9);
    }

    #[test]
    fn test_precession_keeps_distance() {
        let kep = circular_in_ecliptic();
        let jd = 2451545.0 + 20000.0;
        assert_relative_eq!(
            kep.heliocentric_position(jd).norm(),
            kep.heliocentric_position_j2000(jd).norm(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_display() {
        let text = circular_in_ecliptic().to_string();
        assert!(text.contains("a   (semi-major axis)       = 2.000000 AU"));
        assert!(text.contains("n   (mean motion)           = 1.00000000°/day"));
    }
}
