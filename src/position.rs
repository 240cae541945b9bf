//! # Uniform position façade
//!
//! One entry point, [`body_position`], turns a [`Body`] and a Julian Date into a
//! [`PlanetPosition`]:
//!
//! 1. dispatch on the body's [`BodyModel`] with [`compute_position`],
//! 2. heliocentric models go through the geocentric transform against the Earth reference,
//! 3. the longitude is reduced into [0, 360),
//! 4. when requested, a speed pass evaluates the same model at `jd ± δ` with speed
//!    disabled,
//! 5. the result record is assembled.
//!
//! Every call is a pure function of its arguments: no cache, no shared state.

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::{
    body::{Body, BodyModel},
    constants::{AstronomicalUnit, Degree, DegreePerDay, JulianDate, DEFAULT_SPEED_STEP},
    conversion::SphericalPosition,
    earth::EarthReference,
    geocentric::geocentric_position,
    lunar_points::{lilith, north_node, south_node},
    moon,
    orbit_type::HeliocentricModel,
    pluto,
    speed::{central_difference_speed, is_retrograde},
    sun,
};

/// Geocentric position of a body at one instant.
///
/// `is_retrograde` is derived from the speed and cannot be set independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    longitude: Degree,
    latitude: Degree,
    distance_au: AstronomicalUnit,
    longitude_speed: DegreePerDay,
}

impl PlanetPosition {
    /// Assemble a result from a spherical position and its longitude speed.
    pub fn new(position: SphericalPosition, longitude_speed: DegreePerDay) -> Self {
        PlanetPosition {
            longitude: position.longitude,
            latitude: position.latitude,
            distance_au: position.distance,
            longitude_speed,
        }
    }

    /// Ecliptic longitude in [0, 360).
    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    /// Ecliptic latitude in [−90, 90].
    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    /// Geocentric distance (AU).
    pub fn distance_au(&self) -> AstronomicalUnit {
        self.distance_au
    }

    /// Daily motion in longitude (degrees per day); 0 when the speed pass was skipped.
    pub fn longitude_speed(&self) -> DegreePerDay {
        self.longitude_speed
    }

    /// Apparent backward motion: the longitude speed is strictly negative.
    pub fn is_retrograde(&self) -> bool {
        is_retrograde(self.longitude_speed)
    }

    /// Spherical part of the record.
    pub fn spherical(&self) -> SphericalPosition {
        SphericalPosition {
            longitude: self.longitude,
            latitude: self.latitude,
            distance: self.distance_au,
        }
    }
}

impl Serialize for PlanetPosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PlanetPosition", 5)?;
        state.serialize_field("longitude", &self.longitude)?;
        state.serialize_field("latitude", &self.latitude)?;
        state.serialize_field("distance_au", &self.distance_au)?;
        state.serialize_field("longitude_speed", &self.longitude_speed)?;
        state.serialize_field("is_retrograde", &self.is_retrograde())?;
        state.end()
    }
}

/// Options of a position query.
///
/// The step is always finite and strictly positive, so the speed pass never divides by
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    include_speed: bool,
    speed_step: f64,
}

impl PositionOptions {
    /// Build query options.
    ///
    /// Arguments
    /// ---------
    /// * `include_speed`: run the central difference speed pass.
    /// * `speed_step`: half-width of the difference in days. A step that is not finite and
    ///   strictly positive is replaced by [`DEFAULT_SPEED_STEP`].
    pub fn new(include_speed: bool, speed_step: f64) -> Self {
        let speed_step = if speed_step.is_finite() && speed_step > 0.0 {
            speed_step
        } else {
            log::debug!("unusable speed step {speed_step}, falling back to {DEFAULT_SPEED_STEP}");
            DEFAULT_SPEED_STEP
        };
        PositionOptions {
            include_speed,
            speed_step,
        }
    }

    /// Options with the speed pass disabled.
    pub fn without_speed() -> Self {
        Self::new(false, DEFAULT_SPEED_STEP)
    }

    /// Same options with the speed pass switched on or off.
    pub fn with_speed(self, include_speed: bool) -> Self {
        PositionOptions {
            include_speed,
            ..self
        }
    }

    pub fn include_speed(&self) -> bool {
        self.include_speed
    }

    /// Half-width of the difference (days)
    pub fn speed_step(&self) -> f64 {
        self.speed_step
    }
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self::new(true, DEFAULT_SPEED_STEP)
    }
}

/// Geocentric position of a body model at `jd`, without speed.
///
/// Arguments
/// ---------
/// * `model`: the body's computation strategy.
/// * `jd`: Julian Date (TT).
///
/// Return
/// ------
/// * [`SphericalPosition`] with longitude in [0, 360).
///
/// See also
/// --------
/// * [`body_position`] – Full query with the speed pass.
pub fn compute_position(model: &BodyModel, jd: JulianDate) -> SphericalPosition {
    match model {
        BodyModel::Sun => sun::apparent_position(jd),
        BodyModel::Moon => moon::apparent_position(jd),
        BodyModel::Vsop87(body) => heliocentric_to_geocentric(*body, jd),
        BodyModel::Keplerian(elements) => heliocentric_to_geocentric(*elements, jd),
        BodyModel::Pluto => {
            geocentric_position(&pluto::heliocentric_position(jd), &EarthReference::at(jd))
        }
        BodyModel::NorthNode(point) => north_node(jd, *point),
        BodyModel::SouthNode(point) => south_node(jd, *point),
        BodyModel::Lilith(point) => lilith(jd, *point),
    }
}

fn heliocentric_to_geocentric<M: HeliocentricModel>(model: &M, jd: JulianDate) -> SphericalPosition {
    geocentric_position(&model.heliocentric_position(jd), &EarthReference::at(jd))
}

fn model_position(
    model: &BodyModel,
    jd: JulianDate,
    include_speed: bool,
    step: f64,
) -> PlanetPosition {
    let position = compute_position(model, jd);
    let speed = if include_speed {
        central_difference_speed(|t| compute_position(model, t).longitude, jd, step)
    } else {
        0.0
    };
    PlanetPosition::new(position, speed)
}

/// Geocentric position, and optionally speed, of a body.
///
/// Arguments
/// ---------
/// * `body`: the body to place.
/// * `jd`: Julian Date (TT), any real value.
/// * `options`: speed pass switch and step.
///
/// Return
/// ------
/// * [`PlanetPosition`]. Never fails; accuracy degrades slowly away from the models'
///   fitting epochs.
pub fn body_position(body: Body, jd: JulianDate, options: &PositionOptions) -> PlanetPosition {
    let model = body.model();
    log::trace!(
        "position of {body} at JD {jd} ({} model, speed: {})",
        model.kind(),
        options.include_speed
    );
    model_position(&model, jd, options.include_speed, options.speed_step)
}

#[cfg(test)]
mod position_test {
    use super::*;
    use crate::{
        constants::J2000,
        conversion::{angular_distance, signed_angle_difference},
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_longitudes_at_j2000() {
        let options = PositionOptions::default();
        let expected = [
            (Body::Sun, 280.37, 0.01),
            (Body::Saturn, 40.40, 0.034),
            (Body::Pluto, 251.45, 0.1),
            (Body::MeanNode, 125.04, 0.034),
        ];
        for (body, lon, tol) in expected {
            let pos = body_position(body, J2000, &options);
            assert!(
                angular_distance(pos.longitude(), lon) < tol,
                "{body}: {}",
                pos.longitude()
            );
        }
    }

    #[test]
    fn test_speed_is_optional() {
        let fast = body_position(Body::Mars, J2000, &PositionOptions::without_speed());
        let full = body_position(Body::Mars, J2000, &PositionOptions::default());
        assert_eq!(fast.longitude_speed(), 0.0);
        assert!(!fast.is_retrograde());
        assert_eq!(fast.longitude(), full.longitude());
        assert!(full.longitude_speed() > 0.5 && full.longitude_speed() < 0.9);
    }

    #[test]
    fn test_unusable_step_falls_back_to_default() {
        let reference = body_position(Body::Mars, J2000, &PositionOptions::default());
        for step in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let options = PositionOptions::new(true, step);
            assert_eq!(options.speed_step(), DEFAULT_SPEED_STEP);

            let pos = body_position(Body::Mars, J2000, &options);
            assert!(pos.longitude_speed().is_finite());
            assert_eq!(pos.longitude_speed(), reference.longitude_speed());
        }
        assert_eq!(PositionOptions::new(true, 0.05).speed_step(), 0.05);
    }

    #[test]
    fn test_sun_self_consistency() {
        // Sun through the geocentric transform of the heliocentric origin
        let jd = 2456789.5;
        let earth = EarthReference::at(jd);
        let transformed = geocentric_position(&nalgebra::Vector3::zeros(), &earth);
        let sun = compute_position(&BodyModel::Sun, jd);
        let nut = crate::ref_system::nutation(jd).longitude / 3600.0;
        let solar_aberration = -20.4898 / earth.distance / 3600.0;
        let expected = signed_angle_difference(
            sun.longitude,
            transformed.longitude + nut + solar_aberration - crate::constants::ABERRATION_CORRECTION,
        );
        assert!(expected.abs() < 1e-9, "{expected}");
    }

    #[test]
    fn test_mercury_retrograde_loop() {
        // Mercury was retrograde from 2000 February 21 to 2000 March 14
        let options = PositionOptions::default();
        assert!(!body_position(Body::Mercury, 2451590.5, &options).is_retrograde());
        assert!(body_position(Body::Mercury, 2451605.5, &options).is_retrograde());
        assert!(!body_position(Body::Mercury, 2451625.5, &options).is_retrograde());
    }

    #[test]
    fn test_purity() {
        let options = PositionOptions::default();
        for body in Body::ALL {
            let a = body_position(body, 2460000.25, &options);
            let b = body_position(body, 2460000.25, &options);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_serialized_record_carries_retrograde_flag() {
        let pos = PlanetPosition::new(SphericalPosition::new(10.0, 1.0, 2.0), -0.25);
        let json = serde_json::to_value(pos).unwrap();
        assert_eq!(json["is_retrograde"], serde_json::Value::Bool(true));
        assert_relative_eq!(json["longitude_speed"].as_f64().unwrap(), -0.25);
    }
}
