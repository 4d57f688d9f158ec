//! JSON boundary for the browser backend.
//!
//! Roster management hands over two team aggregates plus an optional
//! config; the response carries the full match result for the
//! persistence and presentation collaborators.

use serde::{Deserialize, Serialize};

use crate::engine::config::MatchConfig;
use crate::engine::{rng, MatchEngine};
use crate::error::{EngineError, Result};
use crate::models::{MatchEvent, MatchHighlight, Possession, ShotTotals, Team};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: Team,
    pub away_team: Team,
    /// Recognized options only; unknown knobs are a contract error,
    /// missing ones fall back to defaults.
    #[serde(default)]
    pub config: MatchConfig,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub score_home: u32,
    pub score_away: u32,
    pub possession: Possession,
    pub shots_home: ShotTotals,
    pub shots_away: ShotTotals,
    pub events: Vec<MatchEvent>,
    pub highlights: Vec<MatchHighlight>,
}

/// Simulate one match from a serialized [`MatchRequest`].
///
/// Fails before any simulation work on a bad schema version or an
/// out-of-range config value.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(EngineError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let engine = MatchEngine::new(request.config)?;
    let mut rng = rng::seeded_rng(request.seed);
    let result = engine.simulate(&request.home_team, &request.away_team, &mut rng);

    let response = MatchResponse {
        schema_version: SCHEMA_VERSION,
        score_home: result.score.home,
        score_away: result.score.away,
        possession: result.possession,
        shots_home: result.shots_home,
        shots_away: result.shots_away,
        events: result.events,
        highlights: result.highlights,
    };
    Ok(serde_json::to_string(&response)?)
}
