//! # Heliocentric orbit models
//!
//! The two families of heliocentric calculators share one seam, the
//! [`HeliocentricModel`] trait:
//!
//! - [`crate::vsop87::Vsop87Body`] – series-driven planets (L, B, R tables).
//! - [`keplerian_element::KeplerianElements`] – element-driven minor bodies, propagated
//!   with the two-body Kepler solution.
//!
//! Both return a heliocentric rectangular vector (AU) referred to the ecliptic and equinox
//! of date, ready for the geocentric transform.
//!
//! ## See also
//!
//! - [`minor_bodies`] – Built-in element catalog (Ceres, Pallas, Juno, Vesta, Chiron).
//! - [`crate::geocentric`] – Heliocentric to geocentric conversion.

use crate::{constants::JulianDate, conversion::RectangularVector, vsop87::Vsop87Body};

use self::keplerian_element::KeplerianElements;

/// Classical Keplerian elements structure and two-body propagation.
pub mod keplerian_element;

/// Element catalog of the minor bodies.
pub mod minor_bodies;

/// A heliocentric position calculator.
pub trait HeliocentricModel {
    /// Heliocentric rectangular ecliptic vector (AU), equinox of date, at `jd` (TT).
    fn heliocentric_position(&self, jd: JulianDate) -> RectangularVector;
}

impl HeliocentricModel for Vsop87Body {
    fn heliocentric_position(&self, jd: JulianDate) -> RectangularVector {
        Vsop87Body::heliocentric_position(self, jd)
    }
}

impl HeliocentricModel for KeplerianElements {
    fn heliocentric_position(&self, jd: JulianDate) -> RectangularVector {
        KeplerianElements::heliocentric_position(self, jd)
    }
}

#[cfg(test)]
mod orbit_type_test {
    use super::*;
    use crate::{orbit_type::minor_bodies::VESTA, vsop87::MARS};
    use approx::assert_relative_eq;

    fn radius(model: &dyn HeliocentricModel, jd: JulianDate) -> f64 {
        model.heliocentric_position(jd).norm()
    }

    #[test]
    fn test_trait_dispatch() {
        let jd = 2455197.5;
        assert_relative_eq!(
            radius(&MARS, jd),
            MARS.heliocentric_spherical(jd).radius,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            radius(&VESTA, jd),
            VESTA.heliocentric_position_j2000(jd).norm(),
            epsilon = 1e-12
        );
    }
}
