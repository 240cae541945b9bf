//! Osculating elements of the element-driven bodies, epoch J2000.0, mean ecliptic and
//! equinox of J2000.0.
//!
//! Two-body propagation ignores planetary perturbations, so the positions drift slowly
//! away from the true ones as the date moves from the epoch (a few degrees per century for
//! the asteroids, more for Chiron, whose orbit crosses Saturn's).

use crate::{constants::J2000, orbit_type::keplerian_element::KeplerianElements};

/// (1) Ceres
pub const CERES: KeplerianElements = KeplerianElements {
    reference_epoch: J2000,
    semi_major_axis: 2.7675,
    eccentricity: 0.0785,
    inclination: 10.59,
    ascending_node_longitude: 80.40,
    periapsis_argument: 73.60,
    mean_anomaly: 6.72,
    mean_motion: 0.21408,
};

/// (2) Pallas
pub const PALLAS: KeplerianElements = KeplerianElements {
    reference_epoch: J2000,
    semi_major_axis: 2.7724,
    eccentricity: 0.2305,
    inclination: 34.84,
    ascending_node_longitude: 172.90,
    periapsis_argument: 310.90,
    mean_anomaly: 9.53,
    mean_motion: 0.21340,
};

/// (3) Juno
pub const JUNO: KeplerianElements = KeplerianElements {
    reference_epoch: J2000,
    semi_major_axis: 2.6694,
    eccentricity: 0.2562,
    inclination: 12.99,
    ascending_node_longitude: 169.85,
    periapsis_argument: 248.10,
    mean_anomaly: 241.0,
    mean_motion: 0.22588,
};

/// (4) Vesta
pub const VESTA: KeplerianElements = KeplerianElements {
    reference_epoch: J2000,
    semi_major_axis: 2.3615,
    eccentricity: 0.0887,
    inclination: 7.14,
    ascending_node_longitude: 103.85,
    periapsis_argument: 151.20,
    mean_anomaly: 339.06,
    mean_motion: 0.27154,
};

/// (2060) Chiron
pub const CHIRON: KeplerianElements = KeplerianElements {
    reference_epoch: J2000,
    semi_major_axis: 13.70,
    eccentricity: 0.3790,
    inclination: 6.93,
    ascending_node_longitude: 209.30,
    periapsis_argument: 339.30,
    mean_anomaly: 28.0,
    mean_motion: 0.019468,
};

#[cfg(test)]
mod minor_bodies_test {
    use super::*;
    use crate::{
        constants::RADEG,
        conversion::{angular_distance, normalize_degrees},
        earth::EarthReference,
        geocentric::geocentric_position,
    };

    const CATALOG: [KeplerianElements; 5] = [CERES, PALLAS, JUNO, VESTA, CHIRON];

    #[test]
    fn test_catalog_is_valid() {
        for elements in CATALOG {
            assert!(elements.validate().is_ok(), "{elements}");
        }
    }

    #[test]
    fn test_mean_motion_matches_third_law() {
        // n ≈ 0.9856076686 / a^1.5 °/day (Gaussian constant, negligible mass)
        for elements in CATALOG {
            let kepler_n = 0.985_607_668_6 / elements.semi_major_axis.powf(1.5);
            let rel = (elements.mean_motion - kepler_n).abs() / kepler_n;
            assert!(rel < 0.01, "{elements}");
        }
    }

    #[test]
    fn test_chiron_at_j2000() {
        let earth = EarthReference::at(J2000);
        let pos = geocentric_position(&CHIRON.heliocentric_position(J2000), &earth);
        assert!(angular_distance(pos.longitude, 251.6) < 0.5, "{}", pos.longitude);
        assert!(pos.distance > 8.5 && pos.distance < 11.0);
    }

    #[test]
    fn test_mean_longitude_at_epoch() {
        // VSOP2013 mean longitudes at J2000.0 (rad)
        for (elements, lambda0) in [
            (CERES, 2.805_136_360_408),
            (PALLAS, 2.326_989_734_620),
            (VESTA, 4.091_360_003_050),
        ] {
            let mean_longitude = normalize_degrees(
                elements.ascending_node_longitude
                    + elements.periapsis_argument
                    + elements.mean_anomaly,
            );
            assert!(
                angular_distance(mean_longitude, lambda0 * RADEG) < 1.0,
                "{elements}"
            );
        }
    }

    #[test]
    fn test_juno_perihelic_opposition_2018() {
        // near perihelion and opposite the Sun on 2018-11-17
        let jd = 2_458_439.5;
        let earth = EarthReference::at(jd);
        let helio = JUNO.heliocentric_position(jd);
        let pos = geocentric_position(&helio, &earth);
        let sun = crate::sun::apparent_position(jd).longitude;
        assert!(angular_distance(pos.longitude, sun) > 178.0, "{}", pos.longitude);
        assert!(helio.norm() < 1.05 * JUNO.perihelion_distance());
    }

    #[test]
    fn test_asteroids_stay_in_main_belt() {
        for elements in [CERES, PALLAS, JUNO, VESTA] {
            for k in 0..50 {
                let r = elements.heliocentric_position(J2000 + 73.0 * k as f64).norm();
                assert!(r > 1.9 && r < 3.5, "r = {r}");
            }
        }
    }
}
