mod common;

use almagest::{
    body::Body,
    conversion::{angular_distance, normalize_degrees},
    kepler::solve_kepler,
    position::{body_position, PositionOptions},
};
use common::{JD_MAX, JD_MIN};
use proptest::prelude::*;

fn any_body() -> impl Strategy<Value = Body> {
    prop::sample::select(Body::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_output_ranges(body in any_body(), jd in JD_MIN..JD_MAX) {
        let pos = body_position(body, jd, &PositionOptions::default());
        prop_assert!((0.0..360.0).contains(&pos.longitude()));
        prop_assert!((-90.0..=90.0).contains(&pos.latitude()));
        prop_assert!(pos.distance_au() > 0.0);
        prop_assert!(pos.longitude_speed().is_finite());
    }

    #[test]
    fn prop_retrograde_flag_matches_speed(body in any_body(), jd in JD_MIN..JD_MAX) {
        let pos = body_position(body, jd, &PositionOptions::default());
        prop_assert_eq!(pos.is_retrograde(), pos.longitude_speed() < 0.0);
    }

    #[test]
    fn prop_luminaries_never_retrograde(jd in JD_MIN..JD_MAX) {
        let options = PositionOptions::default();
        prop_assert!(!body_position(Body::Sun, jd, &options).is_retrograde());
        prop_assert!(!body_position(Body::Moon, jd, &options).is_retrograde());
    }

    #[test]
    fn prop_mean_nodes(jd in JD_MIN..JD_MAX) {
        let options = PositionOptions::default();
        let north = body_position(Body::MeanNode, jd, &options);
        let south = body_position(Body::MeanSouthNode, jd, &options);

        prop_assert!(north.is_retrograde());
        prop_assert!(south.is_retrograde());
        prop_assert!(
            angular_distance(south.longitude(), normalize_degrees(north.longitude() + 180.0)) < 1e-6
        );
    }

    #[test]
    fn prop_continuity(body in any_body(), jd in JD_MIN..JD_MAX) {
        let options = PositionOptions::without_speed();
        let a = body_position(body, jd, &options);
        let b = body_position(body, jd + 1e-4, &options);
        // Fastest mover (true Lilith) stays well under 0.01° per 1e-4 day
        prop_assert!(angular_distance(a.longitude(), b.longitude()) < 0.01);
    }

    #[test]
    fn prop_purity(body in any_body(), jd in JD_MIN..JD_MAX) {
        let options = PositionOptions::default();
        prop_assert_eq!(body_position(body, jd, &options), body_position(body, jd, &options));
    }

    #[test]
    fn prop_circular_kepler_is_identity(m in 0.0..std::f64::consts::TAU) {
        prop_assert_eq!(solve_kepler(m, 0.0), m);
    }

    #[test]
    fn prop_normalize_is_periodic(angle in -720.0..720.0f64, k in -5i32..5) {
        let shifted = normalize_degrees(angle + 360.0 * f64::from(k));
        prop_assert!(angular_distance(shifted, normalize_degrees(angle)) < 1e-9);
    }
}
