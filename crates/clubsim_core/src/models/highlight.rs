use super::{EventKind, TeamSide};
use serde::{Deserialize, Serialize};

/// A highlight-worthy event enriched with presentation metadata.
///
/// The `restricted` flag only marks the record as entitlement-gated;
/// enforcement belongs to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchHighlight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub minute: u32,
    pub side: TeamSide,
    pub player_name: String,
    pub description: String,
    pub duration_secs: u32,
    /// Placeholder media references resolved by the presentation layer.
    pub thumbnail_ref: String,
    pub video_ref: String,
    pub restricted: bool,
}
