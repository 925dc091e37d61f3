//! Throw Configuration
//!
//! Centralized tuning for the whole throw: idle stance, wind-up choreography,
//! release, hammer geometry, flight physics, camera and the effort-to-power
//! range. `Default` carries the tuned values; a JSON file may override any
//! subset of them.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI};
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::CameraFollowConfig;
use crate::game::rig::HammerGeometry;
use crate::input::PowerRange;
use crate::physics::FlightConfig;

/// Errors from loading or validating a [`ThrowConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Stance and hammer rest pose before a throw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleConfig {
    /// Root bob amplitude (meters)
    pub sway_amplitude: f32,
    /// Root bob angular frequency (rad/s)
    pub sway_frequency: f32,
    /// Character yaw while standing (radians)
    pub facing: f32,
    pub arm_pitch: f32,
    pub arm_roll: f32,
    /// Hammer grip position at rest
    pub hammer_position: Vec3,
    /// Hammer tilt about X at rest (radians)
    pub hammer_tilt: f32,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            sway_amplitude: 0.05,
            sway_frequency: 2.0,
            facing: FRAC_PI_2,
            arm_pitch: -FRAC_PI_6,
            arm_roll: FRAC_PI_4,
            hammer_position: Vec3::new(0.0, 1.5, 0.5),
            hammer_tilt: 0.1,
        }
    }
}

/// Scripted wind-up spin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindUpConfig {
    /// Length of the wind-up (s)
    pub duration: f32,
    /// Full body turns over the wind-up
    pub rotations: f32,
    /// Distance of the hands from the spin axis (meters)
    pub hand_radius: f32,
    /// Height of the hands (meters)
    pub hand_height: f32,
    /// How far the head hangs below the hands while spinning (meters)
    pub head_droop: f32,
    pub arm_pitch: f32,
    /// Inward arm roll (radians, mirrored for the left arm)
    pub arm_roll: f32,
}

impl Default for WindUpConfig {
    fn default() -> Self {
        Self {
            duration: 2.5,
            rotations: 3.0,
            hand_radius: 1.02,
            hand_height: 2.0,
            head_droop: 0.2,
            arm_pitch: -PI / 2.5,
            arm_roll: 0.55,
        }
    }
}

/// Release parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Launch angle above horizontal (degrees)
    pub angle_degrees: f32,
    /// Upper bound of the random tumble per axis (rad/s)
    pub spin_max: f32,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            angle_degrees: 40.0,
            spin_max: 5.0,
        }
    }
}

impl ReleaseConfig {
    pub fn angle_radians(&self) -> f32 {
        self.angle_degrees.to_radians()
    }
}

/// Root configuration for a throw scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrowConfig {
    pub idle: IdleConfig,
    pub windup: WindUpConfig,
    pub release: ReleaseConfig,
    pub hammer: HammerGeometry,
    pub flight: FlightConfig,
    pub camera: CameraFollowConfig,
    pub power: PowerRange,
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn fraction(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be within 0..=1, got {value}"),
        })
    }
}

impl ThrowConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("windup.duration", self.windup.duration)?;
        positive("hammer.link_length", self.hammer.link_length)?;
        positive("hammer.head_radius", self.hammer.head_radius)?;
        positive("flight.gravity", self.flight.gravity)?;
        positive("flight.rest_epsilon", self.flight.rest_epsilon)?;
        positive("flight.max_dt", self.flight.max_dt)?;
        positive("flight.max_substep", self.flight.max_substep)?;
        fraction("flight.restitution", self.flight.restitution)?;
        fraction("flight.friction", self.flight.friction)?;
        fraction("flight.spin_damping", self.flight.spin_damping)?;
        fraction("camera.smoothing", self.camera.smoothing)?;

        if !(self.release.spin_max.is_finite() && self.release.spin_max >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "release.spin_max",
                reason: format!("must be non-negative, got {}", self.release.spin_max),
            });
        }
        if !(self.power.min.is_finite() && self.power.max.is_finite() && self.power.min <= self.power.max) {
            return Err(ConfigError::Invalid {
                field: "power",
                reason: format!("min ({}) must not exceed max ({})", self.power.min, self.power.max),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ThrowConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.windup.duration, 2.5);
        assert_eq!(config.windup.rotations, 3.0);
        assert_eq!(config.release.angle_degrees, 40.0);
        assert_eq!(config.hammer.link_length, 1.2);
        assert_eq!(config.hammer.head_radius, 0.25);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ThrowConfig::from_json_str(r#"{ "flight": { "gravity": 3.7 } }"#).unwrap();
        assert_eq!(config.flight.gravity, 3.7);
        assert_eq!(config.flight.restitution, 0.3);
        assert_eq!(config.windup, WindUpConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = ThrowConfig::default();
        config.power.max = 28.0;
        config.camera.smoothing = 0.2;
        let json = config.to_json_pretty().unwrap();
        assert_eq!(ThrowConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_restitution() {
        let err = ThrowConfig::from_json_str(r#"{ "flight": { "restitution": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "flight.restitution", .. }), "{err}");
    }

    #[test]
    fn test_rejects_zero_duration() {
        let mut config = ThrowConfig::default();
        config.windup.duration = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "windup.duration", .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_power_range() {
        let mut config = ThrowConfig::default();
        config.power = PowerRange { min: 30.0, max: 10.0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = ThrowConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ThrowConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
