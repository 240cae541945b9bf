//! # Ephemeris
//!
//! [`Ephemeris`] is the configured entry point of the crate. It owns validated
//! [`EngineParams`] and answers single, batch and whole-catalog position queries, plus the
//! node, Lilith and Arabic part lookups that depend on the configured point models.
//!
//! ```rust
//! use almagest::{body::Body, ephemeris::Ephemeris};
//!
//! let ephemeris = Ephemeris::default();
//! let sun = ephemeris.position(Body::Sun, 2451545.0);
//! assert!((sun.longitude() - 280.37).abs() < 0.01);
//! assert!(!sun.is_retrograde());
//! ```
//!
//! The struct holds no mutable state: it is `Copy`, `Send` and `Sync`, and scanners may
//! share one instance across threads.

use crate::{
    almagest_errors::AlmagestError,
    arabic_parts::{part_longitude, ArabicPart},
    body::Body,
    constants::{Degree, JulianDate},
    engine_params::EngineParams,
    position::{body_position, PlanetPosition, PositionOptions},
};

/// Configured position engine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ephemeris {
    params: EngineParams,
}

impl Ephemeris {
    /// Build an engine from already validated parameters.
    pub fn new(params: EngineParams) -> Self {
        Ephemeris { params }
    }

    /// Build an engine from a JSON configuration.
    ///
    /// See also
    /// --------
    /// * [`EngineParams::from_json_str`] – Accepted document and errors.
    pub fn from_json_str(json: &str) -> Result<Self, AlmagestError> {
        Ok(Ephemeris::new(EngineParams::from_json_str(json)?))
    }

    /// Parameters in use.
    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Position of one body.
    ///
    /// Arguments
    /// ---------
    /// * `body`: the body to place.
    /// * `jd`: Julian Date (TT).
    ///
    /// Return
    /// ------
    /// * The [`PlanetPosition`], with speed when `include_speed` is set.
    pub fn position(&self, body: Body, jd: JulianDate) -> PlanetPosition {
        body_position(body, jd, &self.params.position_options())
    }

    /// Position of a body given by name (see [`Body`]'s `FromStr` aliases).
    pub fn position_by_name(&self, name: &str, jd: JulianDate) -> Result<PlanetPosition, AlmagestError> {
        Ok(self.position(name.parse::<Body>()?, jd))
    }

    /// Positions of several bodies at the same instant, in input order.
    pub fn positions(&self, bodies: &[Body], jd: JulianDate) -> Vec<(Body, PlanetPosition)> {
        log::debug!("batch of {} positions at JD {jd}", bodies.len());
        bodies
            .iter()
            .map(|&body| (body, self.position(body, jd)))
            .collect()
    }

    /// Positions of every catalog body, in [`Body::ALL`] order.
    pub fn all_positions(&self, jd: JulianDate) -> Vec<(Body, PlanetPosition)> {
        self.positions(&Body::ALL, jd)
    }

    /// North lunar node in the configured model.
    pub fn north_node(&self, jd: JulianDate) -> PlanetPosition {
        self.position(Body::north_node(self.params.node_model), jd)
    }

    /// South lunar node in the configured model.
    pub fn south_node(&self, jd: JulianDate) -> PlanetPosition {
        self.position(Body::south_node(self.params.node_model), jd)
    }

    /// Lilith in the configured model.
    pub fn lilith(&self, jd: JulianDate) -> PlanetPosition {
        self.position(Body::lilith(self.params.lilith_model), jd)
    }

    /// Longitude of an Arabic part at `jd` for an externally computed Ascendant.
    ///
    /// Arguments
    /// ---------
    /// * `part`: lot to compute.
    /// * `jd`: Julian Date (TT) of the chart.
    /// * `ascendant`: Ascendant longitude (degrees) from the houses collaborator.
    ///
    /// Return
    /// ------
    /// * Longitude of the part in [0, 360). Only longitudes are needed, so the speed pass
    ///   is skipped.
    pub fn arabic_part(&self, part: ArabicPart, jd: JulianDate, ascendant: Degree) -> Degree {
        let options = self.params.position_options().with_speed(false);
        let sun = body_position(Body::Sun, jd, &options).longitude();
        let moon = body_position(Body::Moon, jd, &options).longitude();
        part_longitude(part, ascendant, sun, moon)
    }
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;
    use crate::{constants::J2000, lunar_points::PointModel};
    use approx::assert_relative_eq;

    #[test]
    fn test_batch_preserves_order() {
        let ephemeris = Ephemeris::default();
        let bodies = [Body::Neptune, Body::Sun, Body::Ceres];
        let result = ephemeris.positions(&bodies, J2000);
        let names: Vec<Body> = result.iter().map(|(b, _)| *b).collect();
        assert_eq!(names, bodies);
        assert_eq!(result[1].1, ephemeris.position(Body::Sun, J2000));
    }

    #[test]
    fn test_all_positions_in_range() {
        let all = Ephemeris::default().all_positions(2458849.5);
        assert_eq!(all.len(), Body::ALL.len());
        for (body, pos) in all {
            assert!((0.0..360.0).contains(&pos.longitude()), "{body}");
            assert!(pos.latitude().abs() <= 90.0, "{body}");
            assert!(pos.distance_au() > 0.0, "{body}");
        }
    }

    #[test]
    fn test_configured_point_models() {
        let mean = Ephemeris::default();
        let true_points = Ephemeris::from_json_str(
            r#"{"node_model": "true", "lilith_model": "true"}"#,
        )
        .unwrap();
        assert_eq!(true_points.params().node_model, PointModel::True);

        assert_eq!(mean.north_node(J2000), mean.position(Body::MeanNode, J2000));
        assert_eq!(
            true_points.south_node(J2000),
            true_points.position(Body::TrueSouthNode, J2000)
        );
        assert_eq!(
            true_points.lilith(J2000),
            true_points.position(Body::TrueLilith, J2000)
        );
        assert!(mean.north_node(J2000).is_retrograde());
    }

    #[test]
    fn test_position_by_name() {
        let ephemeris = Ephemeris::default();
        let by_name = ephemeris.position_by_name("black moon lilith", J2000).unwrap();
        assert_eq!(by_name, ephemeris.position(Body::MeanLilith, J2000));
        assert!(ephemeris.position_by_name("Nibiru", J2000).is_err());
    }

    #[test]
    fn test_arabic_part() {
        let ephemeris = Ephemeris::default();
        let sun = ephemeris.position(Body::Sun, J2000).longitude();
        let moon = ephemeris.position(Body::Moon, J2000).longitude();
        // Ascendant a quarter turn ahead of the Sun: day chart
        let asc = sun + 90.0;
        assert_relative_eq!(
            ephemeris.arabic_part(ArabicPart::Fortune, J2000, asc),
            crate::conversion::normalize_degrees(asc + moon - sun),
            epsilon = 1e-9
        );
    }
}
