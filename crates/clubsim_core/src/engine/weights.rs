//! Position Weight Table
//!
//! Single home for "switch on position, pick weighted stats". The
//! strength calculation goes through [`PositionWeights::score`]
//! instead of branching on position inline, and balance passes edit
//! the vectors here.

use crate::models::{Position, SkillSet};

/// Relative importance of each skill attribute for a position.
///
/// Field order matches [`SkillSet::as_array`]; each vector sums to 1.0
/// so `score` needs no normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionWeights {
    pub speed: f64,
    pub shooting: f64,
    pub passing: f64,
    pub defending: f64,
    pub stamina: f64,
    pub reflexes: f64,
}

impl PositionWeights {
    /// Equal weighting, used where no position preference applies.
    pub const UNIFORM: PositionWeights = PositionWeights {
        speed: 1.0 / 6.0,
        shooting: 1.0 / 6.0,
        passing: 1.0 / 6.0,
        defending: 1.0 / 6.0,
        stamina: 1.0 / 6.0,
        reflexes: 1.0 / 6.0,
    };

    pub const fn for_position(position: Position) -> PositionWeights {
        match position {
            Position::Goalkeeper => PositionWeights {
                speed: 0.05,
                shooting: 0.0,
                passing: 0.10,
                defending: 0.25,
                stamina: 0.15,
                reflexes: 0.45,
            },
            Position::Defender => PositionWeights {
                speed: 0.15,
                shooting: 0.05,
                passing: 0.10,
                defending: 0.40,
                stamina: 0.20,
                reflexes: 0.10,
            },
            Position::Midfielder => PositionWeights {
                speed: 0.15,
                shooting: 0.15,
                passing: 0.40,
                defending: 0.10,
                stamina: 0.20,
                reflexes: 0.0,
            },
            Position::Attacker => PositionWeights {
                speed: 0.25,
                shooting: 0.40,
                passing: 0.15,
                defending: 0.05,
                stamina: 0.10,
                reflexes: 0.05,
            },
        }
    }

    fn as_array(&self) -> [f64; 6] {
        [self.speed, self.shooting, self.passing, self.defending, self.stamina, self.reflexes]
    }

    /// Weighted dot product of the weight vector and a skill set.
    pub fn score(&self, skills: &SkillSet) -> f64 {
        self.as_array()
            .iter()
            .zip(skills.as_array().iter())
            .map(|(w, s)| w * s)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [Position; 4] =
        [Position::Goalkeeper, Position::Defender, Position::Midfielder, Position::Attacker];

    #[test]
    fn weight_vectors_sum_to_one() {
        for position in POSITIONS {
            let sum: f64 = PositionWeights::for_position(position).as_array().iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{position:?} weights sum to {sum}");
        }
        let uniform_sum: f64 = PositionWeights::UNIFORM.as_array().iter().sum();
        assert!((uniform_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn uniform_skills_score_the_same_everywhere() {
        let skills = SkillSet::uniform(63);
        for position in POSITIONS {
            let score = PositionWeights::for_position(position).score(&skills);
            assert!((score - 63.0).abs() < 1e-9);
        }
    }

    #[test]
    fn attackers_reward_shooting_over_defending() {
        let shooter = SkillSet { shooting: 90, ..SkillSet::uniform(50) };
        let stopper = SkillSet { defending: 90, ..SkillSet::uniform(50) };
        let weights = PositionWeights::for_position(Position::Attacker);
        assert!(weights.score(&shooter) > weights.score(&stopper));
    }

    #[test]
    fn goalkeepers_reward_reflexes() {
        let cat = SkillSet { reflexes: 95, ..SkillSet::uniform(40) };
        let plain = SkillSet::uniform(40);
        let weights = PositionWeights::for_position(Position::Goalkeeper);
        assert!(weights.score(&cat) > weights.score(&plain));
    }
}
