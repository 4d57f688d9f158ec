use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A roster as handed over by roster management.
///
/// The formation label is free-form and not validated here; lineups of
/// any size (including zero starters) are accepted and handled by the
/// engine's documented fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub formation: String,
    pub players: Vec<Player>,
}

impl Team {
    /// Active lineup: players flagged as starters, in roster order.
    pub fn starters(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_starter)
    }

    /// Players not in the active lineup (substitution targets).
    pub fn bench(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_starter)
    }

    /// Starters at the given position, in roster order.
    pub fn starters_at(&self, position: Position) -> impl Iterator<Item = &Player> {
        self.starters().filter(move |p| p.position == position)
    }

    pub fn starter_count(&self) -> usize {
        self.starters().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillSet;

    fn squad() -> Team {
        let mut players = Vec::new();
        for (i, (position, starter)) in [
            (Position::Goalkeeper, true),
            (Position::Defender, true),
            (Position::Midfielder, true),
            (Position::Attacker, false),
        ]
        .iter()
        .enumerate()
        {
            players.push(Player {
                id: format!("p{i}"),
                name: format!("Player {i}"),
                position: *position,
                age: None,
                skills: SkillSet::uniform(50),
                overall: None,
                is_starter: *starter,
                is_captain: false,
            });
        }
        Team { id: "t1".to_string(), name: "Test FC".to_string(), formation: "4-4-2".to_string(), players }
    }

    #[test]
    fn starters_filters_by_flag() {
        let team = squad();
        assert_eq!(team.starter_count(), 3);
        assert_eq!(team.bench().count(), 1);
    }

    #[test]
    fn starters_at_filters_by_position() {
        let team = squad();
        assert_eq!(team.starters_at(Position::Goalkeeper).count(), 1);
        // The only attacker is on the bench.
        assert_eq!(team.starters_at(Position::Attacker).count(), 0);
    }
}
