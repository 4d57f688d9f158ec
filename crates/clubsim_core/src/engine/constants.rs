//! Tuning constants for match simulation
//!
//! All probability math pulls its magic numbers from here so balance
//! passes touch one file.

pub mod strength {
    /// Strength returned for a lineup with zero starters. Kept at 0 so
    /// the "<5 starters means strength 0" invariant holds without a
    /// special case.
    pub const NO_STARTERS: u32 = 0;

    /// Full lineup size used for the incomplete-lineup penalty.
    pub const FULL_LINEUP: usize = 11;

    /// Points subtracted per missing starter below a full lineup.
    pub const MISSING_STARTER_PENALTY: f64 = 8.0;

    /// Below this many starters the strength is forced to 0.
    pub const MIN_COMPETITIVE_STARTERS: usize = 5;

    /// Multiplicative bonus on the captain's contribution.
    pub const CAPTAIN_BONUS: f64 = 1.10;
}

pub mod goal_chance {
    pub const INTERCEPT: f64 = 0.08;
    /// Per point of (attacker skill - keeper skill).
    pub const SKILL_SENSITIVITY: f64 = 0.004;
    /// Per point of (attacking strength - defending strength).
    pub const STRENGTH_SENSITIVITY: f64 = 0.003;
    pub const MIN: f64 = 0.02;
    pub const MAX: f64 = 0.40;
    /// Keeper skill assumed when no goalkeeper starts.
    pub const DEFAULT_KEEPER_SKILL: f64 = 50.0;
}

pub mod shot_chance {
    pub const INTERCEPT: f64 = 0.15;
    pub const SKILL_SENSITIVITY: f64 = 0.003;
    pub const STRENGTH_SENSITIVITY: f64 = 0.002;
    pub const MIN: f64 = 0.05;
    pub const MAX: f64 = 0.50;
}

pub mod possession {
    /// Possession-bias shift per point of strength differential. The
    /// [MIN, MAX] clamp is reached at a 15-point gap, where the event
    /// draw count also steps up.
    pub const BIAS_PER_STRENGTH_POINT: f64 = 0.02;
    pub const MIN_BIAS: f64 = 0.2;
    pub const MAX_BIAS: f64 = 0.8;
}

pub mod event_draws {
    /// Strength gap above which three chances are drawn per minute.
    pub const TRIPLE_DRAW_GAP: f64 = 30.0;
    /// Strength gap above which two chances are drawn per minute.
    pub const DOUBLE_DRAW_GAP: f64 = 15.0;
    pub const MAX_DRAWS_PER_MINUTE: usize = 3;

    /// Residual band widths after the goal and shot bands.
    pub const CARD_BAND: f64 = 0.02;
    pub const SUBSTITUTION_BAND: f64 = 0.01;

    /// Share of card events that are yellow (remainder are red).
    pub const YELLOW_CARD_SHARE: f64 = 0.8;
}

pub mod scorer_gate {
    //! Second gate applied to the chosen scorer. Deliberately harsher
    //! than the minute-level chance so mismatched teams diverge hard.

    pub const INTERCEPT: f64 = 0.18;
    /// Per point of the scorer's (shooting + overall) / 2.
    pub const SKILL_SENSITIVITY: f64 = 0.0025;
    /// Per point of strength differential; several times the
    /// minute-level sensitivity on purpose.
    pub const STRENGTH_SENSITIVITY: f64 = 0.02;
    /// Flat bonus for a recognized finishing position.
    pub const ATTACKER_POSITION_BONUS: f64 = 0.05;
    pub const CAPTAIN_BONUS: f64 = 0.05;
    pub const MIN: f64 = 0.02;
    pub const MAX: f64 = 0.90;
}

pub mod highlight {
    pub const GOAL_DURATION_SECS: u32 = 15;
    pub const RED_CARD_DURATION_SECS: u32 = 12;
    pub const PENALTY_DURATION_SECS: u32 = 20;
    pub const SAVE_DURATION_SECS: u32 = 8;
    pub const DEFAULT_DURATION_SECS: u32 = 10;
}

pub mod statistics {
    /// Shots are estimated from goals rather than tallied from shot
    /// events. Known product simplification.
    pub const SHOTS_PER_GOAL: u32 = 3;
    /// Fraction of estimated shots counted as on target.
    pub const ON_TARGET_RATIO: f64 = 0.4;
}
