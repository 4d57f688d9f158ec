//! # clubsim_core - Deterministic club match simulation engine
//!
//! Turns two rosters and a config into a minute-by-minute event
//! timeline, a final score and a highlight reel.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Graceful degradation for any roster shape, including empty ones
//! - JSON API for easy integration with the backend
//!
//! The engine is pure and synchronous: no I/O, no ambient randomness,
//! no state shared between calls. Entropy flows through one injected
//! [`RandomSource`] stream per call.

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{simulate_match_json, MatchRequest, MatchResponse};
pub use engine::config::MatchConfig;
pub use engine::probability::{goal_chance, shot_chance};
pub use engine::rng::{seeded_rng, RandomSource, RngSource};
pub use engine::strength::team_strength;
pub use engine::{simulate_batch, simulate_match, MatchEngine};
pub use error::{EngineError, Result};
pub use models::{
    EventKind, MatchEvent, MatchHighlight, MatchResult, Player, Position, Possession, Score,
    ShotTotals, SkillSet, Team, TeamSide,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::uniform_team;

    #[test]
    fn public_surface_simulates_end_to_end() {
        let home = uniform_team("Harbor City", 61);
        let away = uniform_team("Northfield", 57);
        let result = simulate_match(&home, &away, MatchConfig::default(), 42).unwrap();
        assert_eq!(result.score.home + result.score.away, result
            .events
            .iter()
            .filter(|e| e.kind == EventKind::Goal)
            .count() as u32);
        assert!(result.events.iter().all(|e| (1..=90).contains(&e.minute)));
    }

    #[test]
    fn result_round_trips_through_serde() {
        let home = uniform_team("Harbor City", 61);
        let away = uniform_team("Northfield", 57);
        let result = simulate_match(&home, &away, MatchConfig::default(), 8).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: MatchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(serde_json::to_string(&back).unwrap(), json);
    }
}
