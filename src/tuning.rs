//! Data-driven game balance
//!
//! Defaults reproduce the constants in [`crate::consts`]. Any subset of
//! fields can be overridden from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub flap_velocity: f32,
    pub obstacle_speed: f32,
    pub spawn_interval: u64,
    pub spawn_margin: f32,
    pub gap_fraction: f32,
    pub min_obstacle_width: f32,
    pub obstacle_width_fraction: f32,
    pub body_radius: f32,
    pub body_edge_margin: f32,
    pub body_x_fraction: f32,
    pub score_emphasis_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            spawn_margin: SPAWN_MARGIN,
            gap_fraction: GAP_FRACTION,
            min_obstacle_width: MIN_OBSTACLE_WIDTH,
            obstacle_width_fraction: OBSTACLE_WIDTH_FRACTION,
            body_radius: BODY_RADIUS,
            body_edge_margin: BODY_EDGE_MARGIN,
            body_x_fraction: BODY_X_FRACTION,
            score_emphasis_ticks: SCORE_EMPHASIS_TICKS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON object
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid =
            |msg: &str| -> Result<(), GameError> { Err(GameError::InvalidTuning(msg.to_string())) };

        if !self.gravity.is_finite() || !self.flap_velocity.is_finite() {
            return invalid("gravity and flap_velocity must be finite");
        }
        if !self.body_radius.is_finite() || self.body_radius <= 0.0 {
            return invalid("body_radius must be positive");
        }
        if self.spawn_interval == 0 {
            return invalid("spawn_interval must be at least 1 tick");
        }
        if !(self.gap_fraction > 0.0 && self.gap_fraction < 1.0) {
            return invalid("gap_fraction must be in (0, 1)");
        }
        if !(self.body_x_fraction >= 0.0 && self.body_x_fraction <= 1.0) {
            return invalid("body_x_fraction must be in [0, 1]");
        }
        for (name, value) in [
            ("obstacle_speed", self.obstacle_speed),
            ("spawn_margin", self.spawn_margin),
            ("min_obstacle_width", self.min_obstacle_width),
            ("obstacle_width_fraction", self.obstacle_width_fraction),
            ("body_edge_margin", self.body_edge_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::InvalidTuning(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.4);
        assert_eq!(t.flap_velocity, -8.0);
        assert_eq!(t.spawn_interval, 170);
        assert_eq!(t.score_emphasis_ticks, 12);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.25, "spawn_interval": 90 }"#).unwrap();
        assert_eq!(t.gravity, 0.25);
        assert_eq!(t.spawn_interval, 90);
        assert_eq!(t.body_radius, BODY_RADIUS);
        assert_eq!(t.obstacle_speed, OBSTACLE_SPEED);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "body_radius": 0 }"#),
            Err(GameError::InvalidTuning(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "spawn_interval": 0 }"#),
            Err(GameError::InvalidTuning(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "gap_fraction": 1.5 }"#),
            Err(GameError::InvalidTuning(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "obstacle_speed": -1 }"#),
            Err(GameError::InvalidTuning(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ gravity: "),
            Err(GameError::Json(_))
        ));
    }
}
