use serde::{Deserialize, Serialize};

/// Player data consumed by the match engine.
///
/// Supplied by the roster-management layer and treated as read-only:
/// the engine never writes back to a `Player`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    pub skills: SkillSet,
    /// Overall rating (0-100). Derived from the skill average when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<u8>,
    #[serde(default)]
    pub is_starter: bool,
    #[serde(default)]
    pub is_captain: bool,
}

impl Player {
    /// Overall rating, falling back to the equal-weight skill average.
    pub fn overall_rating(&self) -> f64 {
        match self.overall {
            Some(overall) => f64::from(overall),
            None => self.skills.average(),
        }
    }
}

/// Six skill attributes on a 0-100 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SkillSet {
    pub speed: u8,
    pub shooting: u8,
    pub passing: u8,
    pub defending: u8,
    pub stamina: u8,
    pub reflexes: u8,
}

impl SkillSet {
    pub fn uniform(value: u8) -> Self {
        Self {
            speed: value,
            shooting: value,
            passing: value,
            defending: value,
            stamina: value,
            reflexes: value,
        }
    }

    /// Attributes in canonical order: speed, shooting, passing,
    /// defending, stamina, reflexes. Weight vectors use the same order.
    pub fn as_array(&self) -> [f64; 6] {
        [
            f64::from(self.speed),
            f64::from(self.shooting),
            f64::from(self.passing),
            f64::from(self.defending),
            f64::from(self.stamina),
            f64::from(self.reflexes),
        ]
    }

    pub fn average(&self) -> f64 {
        self.as_array().iter().sum::<f64>() / 6.0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl Position {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    pub fn is_defender(&self) -> bool {
        matches!(self, Position::Defender)
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(self, Position::Midfielder)
    }

    pub fn is_attacker(&self) -> bool {
        matches!(self, Position::Attacker)
    }
}
