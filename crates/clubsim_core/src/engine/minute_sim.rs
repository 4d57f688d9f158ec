//! Minute Event Simulator
//!
//! Produces zero or more events for one simulated minute: draws the
//! possessing side from a strength-biased coin, then runs one to three
//! independent chance draws through an ordered probability-band table.

use super::constants::{event_draws, possession, scorer_gate};
use super::player_selection;
use super::probability::{goal_chance, shot_chance};
use super::rng::RandomSource;
use crate::models::{EventKind, MatchEvent, Player, Team, TeamSide};

/// Per-minute simulator for one fixture.
///
/// Holds only borrowed rosters and precomputed chances; the chance
/// models are pure in lineups and strengths, so their values are
/// constant for the whole match and are evaluated once here.
pub struct MinuteSimulator<'a> {
    home: &'a Team,
    away: &'a Team,
    home_strength: f64,
    away_strength: f64,
    home_goal_chance: f64,
    home_shot_chance: f64,
    away_goal_chance: f64,
    away_shot_chance: f64,
}

/// Outcome bucket for one chance draw. The order of the band table is
/// the product rule: goal band first, then shot, then the flat minor
/// bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DrawKind {
    Goal,
    Shot,
    Card,
    Substitution,
}

impl<'a> MinuteSimulator<'a> {
    pub fn new(home: &'a Team, away: &'a Team, home_strength: f64, away_strength: f64) -> Self {
        Self {
            home,
            away,
            home_strength,
            away_strength,
            home_goal_chance: goal_chance(home, away, home_strength, away_strength),
            home_shot_chance: shot_chance(home, away, home_strength, away_strength),
            away_goal_chance: goal_chance(away, home, away_strength, home_strength),
            away_shot_chance: shot_chance(away, home, away_strength, home_strength),
        }
    }

    /// Probability that the home side has possession for a minute.
    pub fn possession_bias(&self) -> f64 {
        let bias = 0.5
            + (self.home_strength - self.away_strength) * possession::BIAS_PER_STRENGTH_POINT;
        bias.clamp(possession::MIN_BIAS, possession::MAX_BIAS)
    }

    /// Stronger teams create more chances per minute, not more minutes.
    pub fn draws_per_minute(&self) -> usize {
        let gap = (self.home_strength - self.away_strength).abs();
        if gap > event_draws::TRIPLE_DRAW_GAP {
            event_draws::MAX_DRAWS_PER_MINUTE
        } else if gap > event_draws::DOUBLE_DRAW_GAP {
            2
        } else {
            1
        }
    }

    /// Events for one minute, in generation order.
    pub fn simulate_minute(&self, minute: u32, rng: &mut impl RandomSource) -> Vec<MatchEvent> {
        let possessing = if rng.next_unit() < self.possession_bias() {
            TeamSide::Home
        } else {
            TeamSide::Away
        };

        let mut events = Vec::new();
        for _ in 0..self.draws_per_minute() {
            if let Some(event) = self.run_draw(minute, possessing, rng) {
                log::trace!(
                    "minute {}: {} for {} ({})",
                    minute,
                    event.kind.label(),
                    event.side.label(),
                    event.player_name
                );
                events.push(event);
            }
        }
        events
    }

    fn run_draw(
        &self,
        minute: u32,
        possessing: TeamSide,
        rng: &mut impl RandomSource,
    ) -> Option<MatchEvent> {
        let (goal_p, shot_p) = self.chances(possessing);
        let bands = [
            (goal_p, DrawKind::Goal),
            (shot_p, DrawKind::Shot),
            (event_draws::CARD_BAND, DrawKind::Card),
            (event_draws::SUBSTITUTION_BAND, DrawKind::Substitution),
        ];

        let roll = rng.next_unit();
        let mut cumulative = 0.0;
        for (width, kind) in bands {
            cumulative += width;
            if roll < cumulative {
                return match kind {
                    DrawKind::Goal => self.resolve_goal_attempt(minute, possessing, rng),
                    DrawKind::Shot => self.resolve_shot(minute, possessing),
                    DrawKind::Card => self.resolve_card(minute, possessing, rng),
                    DrawKind::Substitution => self.resolve_substitution(minute, possessing, rng),
                };
            }
        }
        None
    }

    /// A goal attempt faces a second, harsher gate specific to the
    /// chosen scorer. A failed gate or a missing attacker becomes a
    /// save for the defending side.
    fn resolve_goal_attempt(
        &self,
        minute: u32,
        attacking: TeamSide,
        rng: &mut impl RandomSource,
    ) -> Option<MatchEvent> {
        let Some(scorer) = player_selection::best_finisher(self.team(attacking)) else {
            return self.fallback_save(minute, attacking.opponent());
        };
        if rng.next_unit() < self.scorer_gate(scorer, attacking) {
            Some(MatchEvent {
                minute,
                kind: EventKind::Goal,
                side: attacking,
                player_name: scorer.name.clone(),
                description: format!("{} finishes off a sweeping move", scorer.name),
            })
        } else {
            self.fallback_save(minute, attacking.opponent())
        }
    }

    fn resolve_shot(&self, minute: u32, attacking: TeamSide) -> Option<MatchEvent> {
        let Some(shooter) = player_selection::best_shooter(self.team(attacking)) else {
            return self.fallback_save(minute, attacking.opponent());
        };
        Some(MatchEvent {
            minute,
            kind: EventKind::Shot,
            side: attacking,
            player_name: shooter.name.clone(),
            description: format!("{} lets fly from distance", shooter.name),
        })
    }

    fn resolve_card(
        &self,
        minute: u32,
        possessing: TeamSide,
        rng: &mut impl RandomSource,
    ) -> Option<MatchEvent> {
        let offender = player_selection::random_starter(self.team(possessing), rng)?;
        if rng.next_unit() < event_draws::YELLOW_CARD_SHARE {
            Some(MatchEvent {
                minute,
                kind: EventKind::YellowCard,
                side: possessing,
                player_name: offender.name.clone(),
                description: format!("{} goes into the book", offender.name),
            })
        } else {
            Some(MatchEvent {
                minute,
                kind: EventKind::RedCard,
                side: possessing,
                player_name: offender.name.clone(),
                description: format!("{} is shown a straight red", offender.name),
            })
        }
    }

    fn resolve_substitution(
        &self,
        minute: u32,
        possessing: TeamSide,
        rng: &mut impl RandomSource,
    ) -> Option<MatchEvent> {
        let incoming = player_selection::random_bench_player(self.team(possessing), rng)?;
        Some(MatchEvent {
            minute,
            kind: EventKind::Substitution,
            side: possessing,
            player_name: incoming.name.clone(),
            description: format!("{} comes off the bench", incoming.name),
        })
    }

    fn fallback_save(&self, minute: u32, saving: TeamSide) -> Option<MatchEvent> {
        let keeper = player_selection::save_maker(self.team(saving))?;
        Some(MatchEvent {
            minute,
            kind: EventKind::Save,
            side: saving,
            player_name: keeper.name.clone(),
            description: format!("{} turns the effort away", keeper.name),
        })
    }

    /// Individual finishing gate: scorer skill, a strength-differential
    /// bonus several times the minute-level one, a flat position bonus,
    /// and a captain bonus. Intentionally dramatic under mismatches.
    fn scorer_gate(&self, scorer: &Player, attacking: TeamSide) -> f64 {
        let skill = (f64::from(scorer.skills.shooting) + scorer.overall_rating()) / 2.0;
        let strength_edge = self.strength(attacking) - self.strength(attacking.opponent());
        let mut gate = scorer_gate::INTERCEPT
            + skill * scorer_gate::SKILL_SENSITIVITY
            + strength_edge * scorer_gate::STRENGTH_SENSITIVITY;
        if scorer.position.is_attacker() {
            gate += scorer_gate::ATTACKER_POSITION_BONUS;
        }
        if scorer.is_captain {
            gate += scorer_gate::CAPTAIN_BONUS;
        }
        gate.clamp(scorer_gate::MIN, scorer_gate::MAX)
    }

    fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    fn strength(&self, side: TeamSide) -> f64 {
        match side {
            TeamSide::Home => self.home_strength,
            TeamSide::Away => self.away_strength,
        }
    }

    fn chances(&self, side: TeamSide) -> (f64, f64) {
        match side {
            TeamSide::Home => (self.home_goal_chance, self.home_shot_chance),
            TeamSide::Away => (self.away_goal_chance, self.away_shot_chance),
        }
    }
}
