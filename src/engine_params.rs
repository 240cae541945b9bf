//! # Engine configuration
//!
//! [`EngineParams`] gathers the few knobs of the position engine:
//!
//! * whether the speed pass runs (`include_speed`) and its half-width (`speed_step_days`),
//! * which node and Lilith flavour answer the generic "north node" and "Lilith" lookups of
//!   [`crate::ephemeris::Ephemeris`].
//!
//! Parameters are built through the validating [`EngineParamsBuilder`] or parsed from a JSON
//! document with [`EngineParams::from_json_str`]; both routes return
//! [`AlmagestError`] on invalid values.

use std::cmp::Ordering::Greater;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    almagest_errors::AlmagestError, constants::DEFAULT_SPEED_STEP, lunar_points::PointModel,
    position::PositionOptions,
};

/// Configuration of the position engine.
///
/// Defaults
/// --------
/// * `include_speed`: `true`
/// * `speed_step_days`: 0.01 day
/// * `node_model`: [`PointModel::Mean`]
/// * `lilith_model`: [`PointModel::Mean`]
///
/// Validation
/// ----------
/// * `speed_step_days` must be finite and strictly positive.
///
/// See also
/// --------
/// * [`EngineParams::builder`] – Fluent construction.
/// * [`EngineParams::from_json_str`] – JSON configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    pub include_speed: bool,
    pub speed_step_days: f64,
    pub node_model: PointModel,
    pub lilith_model: PointModel,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            include_speed: true,
            speed_step_days: DEFAULT_SPEED_STEP,
            node_model: PointModel::Mean,
            lilith_model: PointModel::Mean,
        }
    }
}

impl EngineParams {
    /// Construct a new [`EngineParams`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`EngineParamsBuilder`] initialized with the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use almagest::engine_params::EngineParams;
    /// use almagest::lunar_points::PointModel;
    ///
    /// let params = EngineParams::builder()
    ///     .speed_step_days(0.05)
    ///     .node_model(PointModel::True)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.node_model, PointModel::True);
    /// ```
    pub fn builder() -> EngineParamsBuilder {
        EngineParamsBuilder::new()
    }

    /// Parse and validate a JSON configuration. Missing fields take their default value.
    ///
    /// Arguments
    /// ---------
    /// * `json`: document such as `{"include_speed": false, "node_model": "true"}`.
    ///
    /// Return
    /// ------
    /// * The validated parameters, [`AlmagestError::ConfigParsing`] when the document does
    ///   not deserialize, or [`AlmagestError::InvalidEngineParameter`] when a value is out of
    ///   range.
    pub fn from_json_str(json: &str) -> Result<Self, AlmagestError> {
        let params: EngineParams = serde_json::from_str(json)?;
        log::debug!("engine configuration parsed: {params}");
        EngineParamsBuilder { params }.build()
    }

    /// Position query options derived from these parameters.
    pub fn position_options(&self) -> PositionOptions {
        PositionOptions::new(self.include_speed, self.speed_step_days)
    }
}

/// Fluent builder for [`EngineParams`].
#[derive(Debug, Clone)]
pub struct EngineParamsBuilder {
    params: EngineParams,
}

impl Default for EngineParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: EngineParams::default(),
        }
    }

    pub fn include_speed(mut self, v: bool) -> Self {
        self.params.include_speed = v;
        self
    }

    pub fn speed_step_days(mut self, v: f64) -> Self {
        self.params.speed_step_days = v;
        self
    }

    pub fn node_model(mut self, v: PointModel) -> Self {
        self.params.node_model = v;
        self
    }

    pub fn lilith_model(mut self, v: PointModel) -> Self {
        self.params.lilith_model = v;
        self
    }

    /// Return true iff x > 0.0 and finite.
    #[inline]
    fn gt0_finite(x: f64) -> bool {
        x.is_finite() && x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Finalize the builder and produce an [`EngineParams`] instance.
    ///
    /// Return
    /// ------
    /// * The parameters, or [`AlmagestError::InvalidEngineParameter`] when the speed step
    ///   is not a finite positive number of days.
    pub fn build(self) -> Result<EngineParams, AlmagestError> {
        let p = &self.params;

        if !Self::gt0_finite(p.speed_step_days) {
            return Err(AlmagestError::InvalidEngineParameter(format!(
                "speed_step_days must be finite and > 0, got {}",
                p.speed_step_days
            )));
        }

        log::debug!("engine configuration built: {}", self.params);
        Ok(self.params)
    }
}

impl fmt::Display for EngineParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Ephemeris Engine Parameters")?;
            writeln!(f, "---------------------------")?;
            writeln!(f, "  include_speed   = {}", self.include_speed)?;
            writeln!(f, "  speed_step_days = {:.4} d", self.speed_step_days)?;
            writeln!(f, "  node_model      = {:?}", self.node_model)?;
            write!(f, "  lilith_model    = {:?}", self.lilith_model)
        } else {
            write!(
                f,
                "EngineParams(include_speed={}, speed_step={:.4}d, node={:?}, lilith={:?})",
                self.include_speed, self.speed_step_days, self.node_model, self.lilith_model
            )
        }
    }
}

#[cfg(test)]
mod engine_params_test {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = EngineParams::new();
        assert!(params.include_speed);
        assert_eq!(params.speed_step_days, 0.01);
        assert_eq!(params.node_model, PointModel::Mean);
        assert_eq!(EngineParams::builder().build().unwrap(), params);
    }

    #[test]
    fn test_builder_rejects_bad_step() {
        for step in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let err = EngineParams::builder().speed_step_days(step).build();
            assert!(
                matches!(err, Err(AlmagestError::InvalidEngineParameter(_))),
                "step {step}"
            );
        }
    }

    #[test]
    fn test_from_json() {
        let params =
            EngineParams::from_json_str(r#"{"include_speed": false, "lilith_model": "true"}"#)
                .unwrap();
        assert!(!params.include_speed);
        assert_eq!(params.lilith_model, PointModel::True);
        assert_eq!(params.speed_step_days, DEFAULT_SPEED_STEP);

        let options = params.position_options();
        assert!(!options.include_speed());
    }

    #[test]
    fn test_from_json_errors() {
        assert_eq!(
            EngineParams::from_json_str("{not json"),
            Err(AlmagestError::ConfigParsing(String::new()))
        );
        assert_eq!(
            EngineParams::from_json_str(r#"{"node_model": "osculating"}"#),
            Err(AlmagestError::ConfigParsing(String::new()))
        );
        assert!(matches!(
            EngineParams::from_json_str(r#"{"speed_step_days": -1.0}"#),
            Err(AlmagestError::InvalidEngineParameter(_))
        ));
    }

    #[test]
    fn test_display() {
        let params = EngineParams::default();
        assert_eq!(
            params.to_string(),
            "EngineParams(include_speed=true, speed_step=0.0100d, node=Mean, lilith=Mean)"
        );
        assert!(format!("{params:#}").contains("speed_step_days = 0.0100 d"));
    }
}
