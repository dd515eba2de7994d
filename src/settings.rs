//! Solver settings
//!
//! Everything the solver needs at construction time. Only the arena radius
//! and cell size may change afterwards (through `Solver` setters).

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Rejected configuration values
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("arena radius must be positive and finite, got {0}")]
    InvalidArenaRadius(f32),
    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f32),
    #[error("gravity must be finite")]
    NonFiniteGravity,
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    // === Arena ===
    /// Radius of the spherical arena centered at the origin
    pub arena_radius: f32,

    // === Broad-phase ===
    /// Edge length of one uniform grid cell
    pub cell_size: f32,

    // === Forces ===
    /// Constant acceleration applied to every body each substep
    pub gravity: Vec3,

    // === Spawning ===
    /// Seed for the body-spawning RNG
    pub seed: u64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            arena_radius: consts::ARENA_RADIUS,
            cell_size: consts::CELL_SIZE,
            gravity: consts::GRAVITY,
            seed: consts::SEED,
        }
    }
}

impl SolverSettings {
    /// Default settings with a different spawn seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check every field, reporting the first bad one
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_arena_radius(self.arena_radius)?;
        validate_cell_size(self.cell_size)?;
        if !self.gravity.is_finite() {
            return Err(SettingsError::NonFiniteGravity);
        }
        Ok(())
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: arena={}, cell={}, seed={}",
            settings.arena_radius,
            settings.cell_size,
            settings.seed
        );
        Ok(settings)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub(crate) fn validate_arena_radius(radius: f32) -> Result<(), SettingsError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidArenaRadius(radius))
    }
}

pub(crate) fn validate_cell_size(size: f32) -> Result<(), SettingsError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidCellSize(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = SolverSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.arena_radius, 100.0);
        assert_eq!(settings.cell_size, 50.0);
        assert_eq!(settings.gravity, Vec3::new(0.0, -982.0, 0.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut settings = SolverSettings::default();
        settings.cell_size = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidCellSize(_))
        ));

        let mut settings = SolverSettings::default();
        settings.arena_radius = -5.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidArenaRadius(_))
        ));

        let mut settings = SolverSettings::default();
        settings.gravity = Vec3::new(0.0, f32::NAN, 0.0);
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NonFiniteGravity)
        ));
    }

    #[test]
    fn test_json_partial_fields_fall_back_to_defaults() {
        let settings = SolverSettings::from_json(r#"{ "cell_size": 12.5, "seed": 7 }"#).unwrap();
        assert_eq!(settings.cell_size, 12.5);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.arena_radius, consts::ARENA_RADIUS);
    }

    #[test]
    fn test_json_validates_after_parse() {
        let result = SolverSettings::from_json(r#"{ "arena_radius": 0.0 }"#);
        assert!(matches!(result, Err(SettingsError::InvalidArenaRadius(_))));

        let result = SolverSettings::from_json("not json");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_json_roundtrip_keeps_gravity() {
        let mut settings = SolverSettings::with_seed(99);
        settings.gravity = Vec3::ZERO;
        let json = settings.to_json().unwrap();
        let back = SolverSettings::from_json(&json).unwrap();
        assert_eq!(back, settings);
    }
}
