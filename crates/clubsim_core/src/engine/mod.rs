//! Match simulation engine.
//!
//! One call to [`MatchEngine::simulate`] runs the full minute loop to
//! completion and returns a [`MatchResult`]. The engine holds no
//! mutable cross-call state; concurrent simulations are safe as long
//! as each call gets its own randomness stream.

pub mod config;
pub mod constants;
pub mod highlights;
pub mod minute_sim;
pub mod player_selection;
pub mod probability;
pub mod rng;
pub mod strength;
pub mod weights;

#[cfg(test)]
pub mod test_fixtures;

use rayon::prelude::*;

use crate::error::Result;
use crate::models::{
    EventKind, MatchEvent, MatchHighlight, MatchResult, Possession, Score, ShotTotals, Team,
    TeamSide,
};
use config::MatchConfig;
use constants::statistics;
use minute_sim::MinuteSimulator;
use rng::RandomSource;
use strength::team_strength;

/// Match orchestrator: validated configuration plus the minute loop.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    /// Fails fast on contract violations in the configuration; no
    /// simulation work starts on a bad config.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Simulate one match. The single public operation of the engine.
    ///
    /// Pure in everything but the injected randomness stream: the same
    /// rosters, config and seed reproduce the result byte for byte.
    pub fn simulate(
        &self,
        home: &Team,
        away: &Team,
        rng: &mut impl RandomSource,
    ) -> MatchResult {
        let home_strength = f64::from(team_strength(home)) + self.config.home_advantage;
        let away_strength = f64::from(team_strength(away));
        log::debug!(
            "simulating {} vs {}: strengths {:.1}/{:.1}, {} minutes (weather_impact {} unused)",
            home.name,
            away.name,
            home_strength,
            away_strength,
            self.config.match_length_minutes,
            self.config.weather_impact,
        );

        let simulator = MinuteSimulator::new(home, away, home_strength, away_strength);
        let mut events: Vec<MatchEvent> = Vec::new();
        let mut highlights: Vec<MatchHighlight> = Vec::new();
        for minute in 1..=self.config.match_length_minutes {
            let minute_events = simulator.simulate_minute(minute, rng);
            highlights.extend(highlights::highlights_for_minute(&minute_events));
            events.extend(minute_events);
        }

        // Minutes are generated in order; the stable sort is a stated
        // output guarantee, not a correction.
        events.sort_by_key(|e| e.minute);
        highlights.sort_by_key(|h| h.minute);

        let score = tally_score(&events);
        log::debug!("full time {} {} - {} {}", home.name, score.home, score.away, away.name);

        MatchResult {
            score,
            possession: possession_split(home_strength, away_strength),
            shots_home: derived_shots(score.home),
            shots_away: derived_shots(score.away),
            events,
            highlights,
        }
    }
}

fn tally_score(events: &[MatchEvent]) -> Score {
    let mut score = Score::default();
    for event in events.iter().filter(|e| e.kind == EventKind::Goal) {
        match event.side {
            TeamSide::Home => score.home += 1,
            TeamSide::Away => score.away += 1,
        }
    }
    score
}

/// Possession is derived once from the relative strength ratio, not
/// tallied from per-minute possession draws. Away is the complement,
/// so the split sums to 100 by construction.
fn possession_split(home_strength: f64, away_strength: f64) -> Possession {
    let total = home_strength + away_strength;
    let home = if total > 0.0 {
        (home_strength / total * 100.0).round() as u32
    } else {
        50
    };
    Possession { home, away: 100 - home }
}

/// Rough estimate from the goal count. A known product simplification,
/// kept deliberately instead of tallying shot events.
fn derived_shots(goals: u32) -> ShotTotals {
    let shots = goals * statistics::SHOTS_PER_GOAL;
    let on_target = (f64::from(shots) * statistics::ON_TARGET_RATIO).round() as u32;
    ShotTotals { shots, on_target }
}

/// Convenience wrapper: one seeded ChaCha stream per call.
pub fn simulate_match(
    home: &Team,
    away: &Team,
    config: MatchConfig,
    seed: u64,
) -> Result<MatchResult> {
    let engine = MatchEngine::new(config)?;
    let mut rng = rng::seeded_rng(seed);
    Ok(engine.simulate(home, away, &mut rng))
}

/// Simulate the same fixture across many seeds in parallel. Each seed
/// gets a fresh randomness stream, so results are independent of
/// thread scheduling and identical to sequential runs.
pub fn simulate_batch(
    home: &Team,
    away: &Team,
    config: MatchConfig,
    seeds: &[u64],
) -> Result<Vec<MatchResult>> {
    let engine = MatchEngine::new(config)?;
    Ok(seeds
        .par_iter()
        .map(|&seed| {
            let mut rng = rng::seeded_rng(seed);
            engine.simulate(home, away, &mut rng)
        })
        .collect())
}
