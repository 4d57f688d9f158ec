//! Actor-selection rules for event generation.
//!
//! Selection is deterministic for chance outcomes (best finisher, best
//! shooter, fallback keeper) and randomized only for card recipients
//! and substitution targets. Every rule returns `None` instead of
//! failing when the roster cannot supply an actor.

use super::rng::RandomSource;
use crate::models::{Player, Position, Team};

/// The starting attacker with the highest shooting + overall sum.
pub fn best_finisher(team: &Team) -> Option<&Player> {
    team.starters_at(Position::Attacker)
        .max_by(|a, b| finisher_score(a).total_cmp(&finisher_score(b)))
}

fn finisher_score(player: &Player) -> f64 {
    f64::from(player.skills.shooting) + player.overall_rating()
}

/// The best-skilled starting attacker or midfielder by
/// shooting + speed + passing.
pub fn best_shooter(team: &Team) -> Option<&Player> {
    team.starters()
        .filter(|p| p.position.is_attacker() || p.position.is_midfielder())
        .max_by(|a, b| shooter_score(a).total_cmp(&shooter_score(b)))
}

fn shooter_score(player: &Player) -> f64 {
    f64::from(player.skills.shooting)
        + f64::from(player.skills.speed)
        + f64::from(player.skills.passing)
}

/// The starting goalkeeper credited with a save, or the best-reflex
/// starter when no goalkeeper is on the pitch.
pub fn save_maker(team: &Team) -> Option<&Player> {
    team.starters_at(Position::Goalkeeper)
        .max_by_key(|p| p.skills.reflexes)
        .or_else(|| team.starters().max_by_key(|p| p.skills.reflexes))
}

/// A uniformly drawn starter (card recipients).
pub fn random_starter<'a>(team: &'a Team, rng: &mut impl RandomSource) -> Option<&'a Player> {
    let starters: Vec<&Player> = team.starters().collect();
    pick(&starters, rng)
}

/// A uniformly drawn bench player (substitution targets).
pub fn random_bench_player<'a>(team: &'a Team, rng: &mut impl RandomSource) -> Option<&'a Player> {
    let bench: Vec<&Player> = team.bench().collect();
    pick(&bench, rng)
}

fn pick<'a>(pool: &[&'a Player], rng: &mut impl RandomSource) -> Option<&'a Player> {
    if pool.is_empty() {
        return None;
    }
    let idx = (rng.next_unit() * pool.len() as f64) as usize;
    // next_unit is half-open, but guard the rounding edge anyway.
    Some(pool[idx.min(pool.len() - 1)])
}
