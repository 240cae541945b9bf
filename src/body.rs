//! # Body catalog
//!
//! [`Body`] names every object the engine can place: the two luminaries, the eight
//! planets, Pluto, four major asteroids, Chiron and the computed lunar points (nodes and
//! Lilith in their mean and true flavours).
//!
//! Names parse case-insensitively with the usual aliases (`"north node"`, `"black moon
//! lilith"`, `"true_node"`, …). Each body maps onto the [`BodyModel`] that computes it.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    almagest_errors::AlmagestError,
    lunar_points::PointModel,
    orbit_type::{
        keplerian_element::KeplerianElements,
        minor_bodies::{CERES, CHIRON, JUNO, PALLAS, VESTA},
    },
    vsop87::{Vsop87Body, JUPITER, MARS, MERCURY, NEPTUNE, SATURN, URANUS, VENUS},
};

/// A body or point whose geocentric position the engine computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ceres,
    Pallas,
    Juno,
    Vesta,
    Chiron,
    MeanNode,
    TrueNode,
    MeanSouthNode,
    TrueSouthNode,
    MeanLilith,
    TrueLilith,
}

/// How a body's position is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyModel {
    /// Mirror of the Earth reference, with nutation and solar aberration
    Sun,
    /// Geocentric periodic lunar series
    Moon,
    /// Series-driven heliocentric planet
    Vsop87(&'static Vsop87Body),
    /// Pluto periodic series in the J2000 ecliptic
    Pluto,
    /// Element-driven heliocentric body
    Keplerian(&'static KeplerianElements),
    /// Ascending lunar node
    NorthNode(PointModel),
    /// Descending lunar node
    SouthNode(PointModel),
    /// Lunar apogee
    Lilith(PointModel),
}

impl BodyModel {
    /// `true` for the models that go through the heliocentric → geocentric transform.
    pub fn is_heliocentric(&self) -> bool {
        matches!(
            self,
            BodyModel::Vsop87(_) | BodyModel::Pluto | BodyModel::Keplerian(_)
        )
    }

    /// Short label used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            BodyModel::Sun => "sun",
            BodyModel::Moon => "moon",
            BodyModel::Vsop87(_) => "vsop87",
            BodyModel::Pluto => "pluto series",
            BodyModel::Keplerian(_) => "keplerian",
            BodyModel::NorthNode(_) | BodyModel::SouthNode(_) => "lunar node",
            BodyModel::Lilith(_) => "lunar apogee",
        }
    }
}

impl Body {
    /// Every body, in catalog order.
    pub const ALL: [Body; 21] = [
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
        Body::Ceres,
        Body::Pallas,
        Body::Juno,
        Body::Vesta,
        Body::Chiron,
        Body::MeanNode,
        Body::TrueNode,
        Body::MeanSouthNode,
        Body::TrueSouthNode,
        Body::MeanLilith,
        Body::TrueLilith,
    ];

    /// Display name of the body.
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Ceres => "Ceres",
            Body::Pallas => "Pallas",
            Body::Juno => "Juno",
            Body::Vesta => "Vesta",
            Body::Chiron => "Chiron",
            Body::MeanNode => "Mean Node",
            Body::TrueNode => "True Node",
            Body::MeanSouthNode => "Mean South Node",
            Body::TrueSouthNode => "True South Node",
            Body::MeanLilith => "Mean Lilith",
            Body::TrueLilith => "True Lilith",
        }
    }

    /// Model used to compute the body.
    pub fn model(&self) -> BodyModel {
        match self {
            Body::Sun => BodyModel::Sun,
            Body::Moon => BodyModel::Moon,
            Body::Mercury => BodyModel::Vsop87(&MERCURY),
            Body::Venus => BodyModel::Vsop87(&VENUS),
            Body::Mars => BodyModel::Vsop87(&MARS),
            Body::Jupiter => BodyModel::Vsop87(&JUPITER),
            Body::Saturn => BodyModel::Vsop87(&SATURN),
            Body::Uranus => BodyModel::Vsop87(&URANUS),
            Body::Neptune => BodyModel::Vsop87(&NEPTUNE),
            Body::Pluto => BodyModel::Pluto,
            Body::Ceres => BodyModel::Keplerian(&CERES),
            Body::Pallas => BodyModel::Keplerian(&PALLAS),
            Body::Juno => BodyModel::Keplerian(&JUNO),
            Body::Vesta => BodyModel::Keplerian(&VESTA),
            Body::Chiron => BodyModel::Keplerian(&CHIRON),
            Body::MeanNode => BodyModel::NorthNode(PointModel::Mean),
            Body::TrueNode => BodyModel::NorthNode(PointModel::True),
            Body::MeanSouthNode => BodyModel::SouthNode(PointModel::Mean),
            Body::TrueSouthNode => BodyModel::SouthNode(PointModel::True),
            Body::MeanLilith => BodyModel::Lilith(PointModel::Mean),
            Body::TrueLilith => BodyModel::Lilith(PointModel::True),
        }
    }

    /// Sun or Moon.
    pub fn is_luminary(&self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }

    /// Computed point of the lunar orbit rather than a physical body.
    pub fn is_point(&self) -> bool {
        matches!(
            self,
            Body::MeanNode
                | Body::TrueNode
                | Body::MeanSouthNode
                | Body::TrueSouthNode
                | Body::MeanLilith
                | Body::TrueLilith
        )
    }

    /// North node body for a node model.
    pub fn north_node(model: PointModel) -> Body {
        match model {
            PointModel::Mean => Body::MeanNode,
            PointModel::True => Body::TrueNode,
        }
    }

    /// South node body for a node model.
    pub fn south_node(model: PointModel) -> Body {
        match model {
            PointModel::Mean => Body::MeanSouthNode,
            PointModel::True => Body::TrueSouthNode,
        }
    }

    /// Lilith body for an apogee model.
    pub fn lilith(model: PointModel) -> Body {
        match model {
            PointModel::Mean => Body::MeanLilith,
            PointModel::True => Body::TrueLilith,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = AlmagestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .join(" ");

        let body = match key.as_str() {
            "sun" => Body::Sun,
            "moon" => Body::Moon,
            "mercury" => Body::Mercury,
            "venus" => Body::Venus,
            "mars" => Body::Mars,
            "jupiter" => Body::Jupiter,
            "saturn" => Body::Saturn,
            "uranus" => Body::Uranus,
            "neptune" => Body::Neptune,
            "pluto" => Body::Pluto,
            "ceres" => Body::Ceres,
            "pallas" => Body::Pallas,
            "juno" => Body::Juno,
            "vesta" => Body::Vesta,
            "chiron" => Body::Chiron,
            "node" | "north node" | "mean node" | "mean north node" => Body::MeanNode,
            "true node" | "true north node" => Body::TrueNode,
            "south node" | "mean south node" => Body::MeanSouthNode,
            "true south node" => Body::TrueSouthNode,
            "lilith" | "mean lilith" | "black moon" | "black moon lilith" | "mean apogee" => {
                Body::MeanLilith
            }
            "true lilith" | "osculating lilith" | "true apogee" => Body::TrueLilith,
            _ => {
                return Err(AlmagestError::UnknownBody(format!(
                    "{s:?} (expected one of: {})",
                    Body::ALL.iter().map(Body::name).join(", ")
                )))
            }
        };
        Ok(body)
    }
}

#[cfg(test)]
mod body_test {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for body in Body::ALL {
            assert_eq!(body.to_string().parse::<Body>().unwrap(), body);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("  NORTH_NODE ".parse::<Body>().unwrap(), Body::MeanNode);
        assert_eq!("Black Moon Lilith".parse::<Body>().unwrap(), Body::MeanLilith);
        assert_eq!("true-lilith".parse::<Body>().unwrap(), Body::TrueLilith);
        assert_eq!("true  south   node".parse::<Body>().unwrap(), Body::TrueSouthNode);
    }

    #[test]
    fn test_unknown_body() {
        let err = "Vulcan".parse::<Body>().unwrap_err();
        match err {
            AlmagestError::UnknownBody(msg) => {
                assert!(msg.starts_with("\"Vulcan\""));
                assert!(msg.contains("Sun, Moon, Mercury"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(Body::ALL.iter().filter(|b| b.is_luminary()).count(), 2);
        assert_eq!(Body::ALL.iter().filter(|b| b.is_point()).count(), 6);
        assert!(Body::Chiron.model().is_heliocentric());
        assert!(!Body::Moon.model().is_heliocentric());
        assert_eq!(Body::south_node(PointModel::True), Body::TrueSouthNode);
        assert_eq!(Body::lilith(PointModel::Mean), Body::MeanLilith);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&Body::TrueSouthNode).unwrap(),
            "\"true_south_node\""
        );
        let body: Body = serde_json::from_str("\"mean_lilith\"").unwrap();
        assert_eq!(body, Body::MeanLilith);
    }
}
