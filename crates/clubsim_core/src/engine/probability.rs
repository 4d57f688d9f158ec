//! Chance models for match simulation
//!
//! All functions are pure - they take lineups and strengths as input
//! and return clamped probabilities. This allows unit testing against
//! synthetic rosters without running a full match.

use super::constants::goal_chance as goal_consts;
use super::constants::shot_chance as shot_consts;
use crate::models::{Player, Position, Team};

/// Probability that one event draw for the attacking side is a goal
/// attempt.
///
/// Intercept, plus the attacker-vs-keeper skill edge, plus the team
/// strength edge, clamped to `[0.02, 0.40]`. A lineup without a single
/// starting attacker keeps a small non-zero chance.
pub fn goal_chance(
    attacking: &Team,
    defending: &Team,
    attacking_strength: f64,
    defending_strength: f64,
) -> f64 {
    let attackers: Vec<&Player> = attacking.starters_at(Position::Attacker).collect();
    if attackers.is_empty() {
        return goal_consts::MIN;
    }

    let attacker_skill = attackers
        .iter()
        .map(|p| {
            (f64::from(p.skills.shooting) + f64::from(p.skills.speed) + p.overall_rating()) / 3.0
        })
        .sum::<f64>()
        / attackers.len() as f64;

    let base = goal_consts::INTERCEPT
        + (attacker_skill - keeper_skill(defending)) * goal_consts::SKILL_SENSITIVITY
        + (attacking_strength - defending_strength) * goal_consts::STRENGTH_SENSITIVITY;

    base.clamp(goal_consts::MIN, goal_consts::MAX)
}

/// Probability that one event draw for the attacking side is a shot.
///
/// Same shape as [`goal_chance`] but fed by every starting attacker and
/// midfielder, with its own intercept/sensitivity pair and a
/// `[0.05, 0.50]` clamp.
pub fn shot_chance(
    attacking: &Team,
    defending: &Team,
    attacking_strength: f64,
    defending_strength: f64,
) -> f64 {
    let shooters: Vec<&Player> = attacking
        .starters()
        .filter(|p| p.position.is_attacker() || p.position.is_midfielder())
        .collect();
    if shooters.is_empty() {
        return shot_consts::MIN;
    }

    let shooter_skill = shooters
        .iter()
        .map(|p| {
            (f64::from(p.skills.shooting)
                + f64::from(p.skills.speed)
                + f64::from(p.skills.passing)
                + p.overall_rating())
                / 4.0
        })
        .sum::<f64>()
        / shooters.len() as f64;

    let base = shot_consts::INTERCEPT
        + (shooter_skill - keeper_skill(defending)) * shot_consts::SKILL_SENSITIVITY
        + (attacking_strength - defending_strength) * shot_consts::STRENGTH_SENSITIVITY;

    base.clamp(shot_consts::MIN, shot_consts::MAX)
}

/// Best starting goalkeeper by mean of reflexes and overall, or a mid
/// value when no goalkeeper starts.
fn keeper_skill(defending: &Team) -> f64 {
    defending
        .starters_at(Position::Goalkeeper)
        .map(|p| (f64::from(p.skills.reflexes) + p.overall_rating()) / 2.0)
        .fold(None, |best: Option<f64>, skill| Some(best.map_or(skill, |b| b.max(skill))))
        .unwrap_or(goal_consts::DEFAULT_KEEPER_SKILL)
}
