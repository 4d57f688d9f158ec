pub mod events;
pub mod highlight;
pub mod match_result;
pub mod player;
pub mod team;

pub use events::{EventKind, MatchEvent, TeamSide};
pub use highlight::MatchHighlight;
pub use match_result::{MatchResult, Possession, Score, ShotTotals};
pub use player::{Player, Position, SkillSet};
pub use team::Team;
