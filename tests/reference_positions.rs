mod common;

use almagest::{
    body::Body,
    constants::J2000,
    position::{body_position, PositionOptions},
    Ephemeris,
};
use approx::assert_relative_eq;
use common::assert_longitude_close;

#[test]
fn test_j2000_fixtures() {
    let ephemeris = Ephemeris::default();

    // Apparent geocentric longitudes at 2000-01-01 12:00 TT
    let fixtures = [
        (Body::Sun, 280.37, 0.01),
        (Body::Moon, 223.32, 0.05),
        (Body::Mercury, 271.89, 0.034),
        (Body::Venus, 241.57, 0.034),
        (Body::Mars, 327.96, 0.034),
        (Body::Jupiter, 25.25, 0.034),
        (Body::Saturn, 40.40, 0.034),
        (Body::Uranus, 314.81, 0.034),
        (Body::Neptune, 303.19, 0.034),
        (Body::Pluto, 251.45, 0.1),
        (Body::MeanNode, 125.04, 0.034),
    ];

    for (body, expected, tolerance) in fixtures {
        let pos = ephemeris.position(body, J2000);
        assert_longitude_close(pos.longitude(), expected, tolerance, body.name());
    }
}

#[test]
fn test_asteroids_at_j2000() {
    let ephemeris = Ephemeris::default();
    let fixtures = [
        (Body::Ceres, 184.68),
        (Body::Pallas, 171.54),
        (Body::Juno, 278.34),
        (Body::Vesta, 245.41),
    ];

    for (body, expected) in fixtures {
        let pos = ephemeris.position(body, J2000);
        assert_longitude_close(pos.longitude(), expected, 1.0, body.name());
    }
}

#[test]
fn test_positions_across_two_centuries() {
    let ephemeris = Ephemeris::default();

    // (JD, [Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto])
    let epochs = [
        // 1900-01-01 00:00 TT
        (
            2415020.5,
            [
                280.153, 272.417, 258.996, 306.374, 283.868, 241.132, 267.713, 250.135, 85.203,
                75.236,
            ],
        ),
        // 1970-01-01 00:00 TT
        (
            2440587.5,
            [
                280.156, 190.694, 299.017, 274.458, 342.236, 212.323, 32.054, 188.714, 239.885,
                177.385,
            ],
        ),
        // 2022-01-01 00:00 TT
        (
            2459580.5,
            [
                280.528, 255.466, 298.189, 293.293, 253.106, 330.550, 311.908, 40.949, 350.671,
                295.939,
            ],
        ),
        // 2100-01-01 00:00 TT
        (
            2488069.5,
            [
                280.604, 157.401, 288.011, 320.071, 29.520, 201.204, 205.627, 17.735, 167.284,
                32.396,
            ],
        ),
    ];
    let bodies = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    for (jd, longitudes) in epochs {
        for (body, expected) in bodies.iter().zip(longitudes) {
            let pos = ephemeris.position(*body, jd);
            let tolerance = match body {
                Body::Sun => 0.01,
                Body::Pluto => 0.1,
                _ => 0.05,
            };
            assert_longitude_close(
                pos.longitude(),
                expected,
                tolerance,
                &format!("{} at JD {jd}", body.name()),
            );
        }
    }
}

#[test]
fn test_j2000_distances() {
    let ephemeris = Ephemeris::default();
    let expected = [
        (Body::Sun, 0.9833),
        (Body::Jupiter, 4.62),
        (Body::Saturn, 8.65),
        (Body::Neptune, 31.02),
    ];
    for (body, distance) in expected {
        let pos = ephemeris.position(body, J2000);
        assert_relative_eq!(pos.distance_au(), distance, max_relative = 0.01);
    }
}

#[test]
fn test_sun_crosses_the_vernal_point() {
    // March equinox 2000: March 20, 07:35 UT
    let options = PositionOptions::default();
    let before = body_position(Body::Sun, 2451623.5, &options);
    let after = body_position(Body::Sun, 2451624.5, &options);

    assert!(before.longitude() > 359.0);
    assert!(after.longitude() < 1.0);
    for pos in [before, after] {
        assert_relative_eq!(pos.longitude_speed(), 0.99, epsilon = 0.01);
        assert!(!pos.is_retrograde());
    }
}

#[test]
fn test_outer_planet_stations() {
    // Saturn opposition season in autumn 2000: retrograde from 2000 September 12
    let ephemeris = Ephemeris::default();
    assert!(!ephemeris.position(Body::Saturn, 2451780.5).is_retrograde());
    assert!(ephemeris.position(Body::Saturn, 2451860.5).is_retrograde());
}

#[test]
fn test_nodes_and_lilith_at_j2000() {
    let ephemeris = Ephemeris::default();

    let true_node = ephemeris.position(Body::TrueNode, J2000);
    assert_longitude_close(true_node.longitude(), 123.93, 0.05, "true node");

    let south = ephemeris.position(Body::MeanSouthNode, J2000);
    assert_longitude_close(south.longitude(), 305.04, 0.034, "mean south node");
    assert!(south.is_retrograde());

    let lilith = ephemeris.position(Body::MeanLilith, J2000);
    assert_longitude_close(lilith.longitude(), 263.35, 0.01, "mean lilith");
    assert_relative_eq!(lilith.longitude_speed(), 0.1114, epsilon = 1e-3);
    assert_eq!(lilith.latitude(), 0.0);
}

#[test]
fn test_true_node_alternates_over_one_node_cycle() {
    let ephemeris = Ephemeris::default();

    // 18.6 years from J2000, sampled every half day
    let (mut retrograde, mut direct) = (0, 0);
    for k in 0..13_596 {
        let jd = J2000 + 0.5 * k as f64;
        if ephemeris.position(Body::TrueNode, jd).is_retrograde() {
            retrograde += 1;
        } else {
            direct += 1;
        }
        assert!(ephemeris.position(Body::MeanNode, jd).is_retrograde());
    }

    assert!(direct > 0, "true node never moved direct");
    assert!(retrograde > direct, "retrograde {retrograde}, direct {direct}");
}
