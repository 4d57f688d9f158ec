//! Simulation configuration.
//!
//! Explicit knobs only; anything outside the sane range fails fast at
//! the orchestrator's entry point, before any simulation work begins.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MATCH_LENGTH_MINUTES: u32 = 90;
pub const DEFAULT_HOME_ADVANTAGE: f64 = 0.10;
pub const DEFAULT_WEATHER_IMPACT: f64 = 0.05;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of simulated minutes. Must be at least 1.
    pub match_length_minutes: u32,
    /// Additive bonus applied to the home team's strength before any
    /// per-minute computation. Added to the integer strength, not a
    /// percentage.
    pub home_advantage: f64,
    /// Reserved knob: accepted and stored, not wired into any formula
    /// yet. Rejecting it would break existing callers.
    pub weather_impact: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            match_length_minutes: DEFAULT_MATCH_LENGTH_MINUTES,
            home_advantage: DEFAULT_HOME_ADVANTAGE,
            weather_impact: DEFAULT_WEATHER_IMPACT,
        }
    }
}

impl MatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.match_length_minutes < 1 {
            return Err(EngineError::InvalidConfig(
                "match_length_minutes must be at least 1".to_string(),
            ));
        }
        if !self.home_advantage.is_finite() || !(0.0..=50.0).contains(&self.home_advantage) {
            return Err(EngineError::InvalidConfig(format!(
                "home_advantage must be in [0, 50], got {}",
                self.home_advantage
            )));
        }
        if !self.weather_impact.is_finite() || !(0.0..=1.0).contains(&self.weather_impact) {
            return Err(EngineError::InvalidConfig(format!(
                "weather_impact must be in [0, 1], got {}",
                self.weather_impact
            )));
        }
        Ok(())
    }
}
