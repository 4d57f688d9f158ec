//! Highlight Generator
//!
//! Filters a minute's events down to highlight-worthy kinds and
//! attaches presentation metadata. Ids and media references are derived
//! deterministically so highlight lists reproduce with the match.

use super::constants::highlight;
use crate::models::{EventKind, MatchEvent, MatchHighlight};

/// Goal, save, red card and penalty make the reel; shots, yellow cards
/// and substitutions never do.
pub fn is_highlight_worthy(kind: EventKind) -> bool {
    matches!(
        kind,
        EventKind::Goal | EventKind::Save | EventKind::RedCard | EventKind::Penalty
    )
}

/// Fixed clip length per event kind.
pub fn duration_secs(kind: EventKind) -> u32 {
    match kind {
        EventKind::Goal => highlight::GOAL_DURATION_SECS,
        EventKind::RedCard => highlight::RED_CARD_DURATION_SECS,
        EventKind::Penalty => highlight::PENALTY_DURATION_SECS,
        EventKind::Save => highlight::SAVE_DURATION_SECS,
        _ => highlight::DEFAULT_DURATION_SECS,
    }
}

/// Highlights for one minute's events, in event order.
///
/// Every highlight is flagged `restricted`; entitlement checks happen
/// downstream.
pub fn highlights_for_minute(minute_events: &[MatchEvent]) -> Vec<MatchHighlight> {
    minute_events
        .iter()
        .filter(|event| is_highlight_worthy(event.kind))
        .enumerate()
        .map(|(ordinal, event)| MatchHighlight {
            id: format!("hl-{:03}-{}", event.minute, ordinal),
            kind: event.kind,
            minute: event.minute,
            side: event.side,
            player_name: event.player_name.clone(),
            description: event.description.clone(),
            duration_secs: duration_secs(event.kind),
            thumbnail_ref: format!("thumb-{}-{}", event.kind.label(), event.side.label()),
            video_ref: format!("clip-{}-{}", event.kind.label(), event.side.label()),
            restricted: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamSide;
    use strum::IntoEnumIterator;

    fn event(kind: EventKind, minute: u32) -> MatchEvent {
        MatchEvent {
            minute,
            kind,
            side: TeamSide::Home,
            player_name: "Alex Mercer".to_string(),
            description: "test event".to_string(),
        }
    }

    #[test]
    fn durations_match_the_fixed_table() {
        assert_eq!(duration_secs(EventKind::Goal), 15);
        assert_eq!(duration_secs(EventKind::Save), 8);
        assert_eq!(duration_secs(EventKind::RedCard), 12);
        assert_eq!(duration_secs(EventKind::Penalty), 20);
        assert_eq!(duration_secs(EventKind::Shot), 10);
        assert_eq!(duration_secs(EventKind::YellowCard), 10);
        assert_eq!(duration_secs(EventKind::Substitution), 10);
    }

    #[test]
    fn only_the_four_reel_kinds_produce_highlights() {
        for kind in EventKind::iter() {
            let highlights = highlights_for_minute(&[event(kind, 12)]);
            let expected = matches!(
                kind,
                EventKind::Goal | EventKind::Save | EventKind::RedCard | EventKind::Penalty
            );
            assert_eq!(highlights.len(), usize::from(expected), "{kind:?}");
        }
    }

    #[test]
    fn highlights_are_always_restricted() {
        let highlights = highlights_for_minute(&[event(EventKind::Goal, 3)]);
        assert!(highlights[0].restricted);
    }

    #[test]
    fn ids_and_media_refs_are_deterministic() {
        let events = [event(EventKind::Goal, 7), event(EventKind::Shot, 7), event(EventKind::Save, 7)];
        let highlights = highlights_for_minute(&events);
        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0].id, "hl-007-0");
        assert_eq!(highlights[1].id, "hl-007-1");
        assert_eq!(highlights[0].thumbnail_ref, "thumb-goal-home");
        assert_eq!(highlights[1].video_ref, "clip-save-home");
    }

    #[test]
    fn penalty_stays_representable_even_if_never_emitted() {
        let highlights = highlights_for_minute(&[event(EventKind::Penalty, 88)]);
        assert_eq!(highlights[0].duration_secs, 20);
    }
}
