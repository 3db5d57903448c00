//! Engine configuration.
//!
//! The presentation layer builds an `EngineConfig` once at startup, either
//! from `Default` plus `with_*` overrides or from a TOML document.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::pit::PITS_PER_SIDE;

/// Largest accepted `seeds_per_pit`. Keeps every board total, and every
/// sowing path, comfortably inside `u32` and in memory.
pub const MAX_SEEDS_PER_PIT: u32 = 1_000;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seeds placed in each playing pit by `initialize` (default: 4).
    pub seeds_per_pit: u32,

    /// Elapsed fraction gained per second of `dt` (default: 5.0).
    /// One seed lands every `1 / move_speed` seconds.
    pub move_speed: f32,

    /// Seed for the cosmetic tint stream. Has no effect on rules.
    pub tint_seed: u64,

    /// Size of the tint palette the presentation offers (default: 4).
    pub tint_count: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seeds_per_pit: 4,
            move_speed: 5.0,
            tint_seed: 42,
            tint_count: 4,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    ///
    /// ```
    /// use mancala_engine::core::EngineConfig;
    ///
    /// let config = EngineConfig::from_toml_str("seeds_per_pit = 3").unwrap();
    /// assert_eq!(config.seeds_per_pit, 3);
    /// assert_eq!(config.move_speed, 5.0);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seeds_per_pit == 0 {
            return Err(ConfigError::Validation("seeds_per_pit must be > 0".into()));
        }
        if self.seeds_per_pit > MAX_SEEDS_PER_PIT {
            return Err(ConfigError::Validation(format!(
                "seeds_per_pit must be <= {MAX_SEEDS_PER_PIT}"
            )));
        }
        if !self.move_speed.is_finite() || self.move_speed <= 0.0 {
            return Err(ConfigError::Validation(
                "move_speed must be finite and > 0".into(),
            ));
        }
        if self.tint_count == 0 {
            return Err(ConfigError::Validation("tint_count must be > 0".into()));
        }
        Ok(())
    }

    /// Seeds on the board for the whole game.
    ///
    /// Saturates for configs that were never validated.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.seeds_per_pit.saturating_mul((2 * PITS_PER_SIDE) as u32)
    }

    /// Set seeds per pit.
    #[must_use]
    pub fn with_seeds_per_pit(mut self, seeds: u32) -> Self {
        self.seeds_per_pit = seeds;
        self
    }

    /// Set animation speed.
    #[must_use]
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Set the cosmetic tint seed.
    #[must_use]
    pub fn with_tint_seed(mut self, seed: u64) -> Self {
        self.tint_seed = seed;
        self
    }
}
