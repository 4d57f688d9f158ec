use serde::{Deserialize, Serialize};

/// One timeline entry produced during simulation.
///
/// Events are created transiently for a single simulation call; the
/// engine never persists them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    /// 1..=match length.
    pub minute: u32,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub side: TeamSide,
    pub player_name: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Goal,
    Shot,
    Save,
    YellowCard,
    RedCard,
    Substitution,
    /// Reserved: representable on the wire but never emitted by the
    /// minute simulator.
    Penalty,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Goal => "goal",
            EventKind::Shot => "shot",
            EventKind::Save => "save",
            EventKind::YellowCard => "yellow_card",
            EventKind::RedCard => "red_card",
            EventKind::Substitution => "substitution",
            EventKind::Penalty => "penalty",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }
}
