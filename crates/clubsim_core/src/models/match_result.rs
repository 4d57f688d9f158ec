use super::{MatchEvent, MatchHighlight};
use serde::{Deserialize, Serialize};

/// The sole output of one simulation call.
///
/// Events and highlights are sorted ascending by minute. The caller
/// owns the result; the engine keeps no state between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: Score,
    pub events: Vec<MatchEvent>,
    pub highlights: Vec<MatchHighlight>,
    pub possession: Possession,
    pub shots_home: ShotTotals,
    pub shots_away: ShotTotals,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Integer percentages summing to 100 by construction (away is the
/// complement of home).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Possession {
    pub home: u32,
    pub away: u32,
}

/// Derived shot estimate (goals x 3, 40% on target), not an event
/// tally. Known simplification carried over from the product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShotTotals {
    pub shots: u32,
    pub on_target: u32,
}
