//! Team Strength Calculator
//!
//! Reduces an active lineup to one non-negative integer score. Pure
//! function; any roster shape is valid input, including an empty or
//! all-bench one.

use super::constants::strength;
use super::weights::PositionWeights;
use crate::models::Team;

/// Strength of a team's active lineup.
///
/// Position-weighted skill contributions, +10% for the captain,
/// averaged, then penalized 8 points per missing starter below 11.
/// Fewer than 5 starters is not a competitive lineup and scores 0.
pub fn team_strength(team: &Team) -> u32 {
    let starters: Vec<_> = team.starters().collect();
    if starters.is_empty() {
        return strength::NO_STARTERS;
    }
    if starters.len() < strength::MIN_COMPETITIVE_STARTERS {
        return 0;
    }

    let total: f64 = starters
        .iter()
        .map(|player| {
            let contribution = PositionWeights::for_position(player.position).score(&player.skills);
            if player.is_captain {
                contribution * strength::CAPTAIN_BONUS
            } else {
                contribution
            }
        })
        .sum();
    let mut average = total / starters.len() as f64;

    let missing = strength::FULL_LINEUP.saturating_sub(starters.len());
    average -= missing as f64 * strength::MISSING_STARTER_PENALTY;

    average.max(0.0).round() as u32
}
