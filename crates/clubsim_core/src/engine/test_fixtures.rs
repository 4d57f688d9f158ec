//! Shared test helpers for engine tests.
//!
//! Centralized roster builders so individual test modules do not
//! re-declare players by hand.

use super::rng::RandomSource;
use crate::models::{Player, Position, SkillSet, Team};

/// Positions of a standard 4-4-2 starting lineup, roster order.
pub fn standard_442_positions() -> [Position; 11] {
    [
        Position::Goalkeeper,
        Position::Defender,
        Position::Defender,
        Position::Defender,
        Position::Defender,
        Position::Midfielder,
        Position::Midfielder,
        Position::Midfielder,
        Position::Midfielder,
        Position::Attacker,
        Position::Attacker,
    ]
}

pub fn player(id: &str, position: Position, skill: u8, starter: bool) -> Player {
    Player {
        id: id.to_string(),
        name: format!("Player {id}"),
        position,
        age: Some(25),
        skills: SkillSet::uniform(skill),
        overall: None,
        is_starter: starter,
        is_captain: false,
    }
}

/// 11 uniform-skill starters in a 4-4-2 plus a 3-player bench.
pub fn uniform_team(name: &str, skill: u8) -> Team {
    let mut players = Vec::with_capacity(14);
    for (i, position) in standard_442_positions().into_iter().enumerate() {
        players.push(player(&format!("{name}-{i}"), position, skill, true));
    }
    for (i, position) in [Position::Defender, Position::Midfielder, Position::Attacker]
        .into_iter()
        .enumerate()
    {
        players.push(player(&format!("{name}-b{i}"), position, skill, false));
    }
    Team {
        id: name.to_lowercase().replace(' ', "_"),
        name: name.to_string(),
        formation: "4-4-2".to_string(),
        players,
    }
}

/// Uniform team with only the first `starters` players flagged active.
pub fn uniform_team_with_starters(name: &str, skill: u8, starters: usize) -> Team {
    let mut team = uniform_team(name, skill);
    for (i, p) in team.players.iter_mut().enumerate() {
        p.is_starter = i < starters;
    }
    team
}

/// Uniform team with every player of `excluded` moved to another
/// position, leaving the lineup without that role.
pub fn uniform_team_without(name: &str, skill: u8, excluded: Position) -> Team {
    let replacement = if excluded == Position::Midfielder {
        Position::Defender
    } else {
        Position::Midfielder
    };
    let mut team = uniform_team(name, skill);
    for p in &mut team.players {
        if p.position == excluded {
            p.position = replacement;
        }
    }
    team
}

/// Uniform team with no substitutes available.
pub fn benchless_team(name: &str, skill: u8) -> Team {
    let mut team = uniform_team(name, skill);
    team.players.retain(|p| p.is_starter);
    team
}

/// Replays a fixed script of uniform values, cycling when exhausted.
/// Lets tests steer the band table draw by draw.
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "script needs at least one value");
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
