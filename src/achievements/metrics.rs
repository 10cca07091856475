//! Metric names and the rules that decide how a reported value is compared
//! against a requirement target.
//!
//! Both the increment allow-list and the lower-is-better list are closed sets.
//! A metric that is not listed is an absolute, higher-is-better measurement.

use serde::{Deserialize, Serialize};

// Cumulative counters
pub const GAMES_PLAYED: &str = "games_played";
pub const GAMES_WON: &str = "games_won";
pub const LEGS_WON: &str = "legs_won";
pub const SCORES_180: &str = "scores_180";
pub const SCORES_140_PLUS: &str = "scores_140_plus";
pub const SCORES_100_PLUS: &str = "scores_100_plus";
pub const CHECKOUTS_HIT: &str = "checkouts_hit";
pub const TON_PLUS_CHECKOUTS: &str = "ton_plus_checkouts";
pub const BULLSEYES: &str = "bullseyes";
pub const TRIPLES_HIT: &str = "triples_hit";
pub const DOUBLES_HIT: &str = "doubles_hit";
pub const THREE_TRIPLES_VISITS: &str = "three_triples_visits";
pub const BUSTS: &str = "busts";
pub const DARTS_THROWN: &str = "darts_thrown";
pub const TRAINING_SESSIONS: &str = "training_sessions";
pub const WHITEWASHES: &str = "whitewashes";
pub const DOUBLE_BULLS: &str = "double_bulls";
pub const SHANGHAIS: &str = "shanghais";
pub const SCORES_26: &str = "scores_26";
pub const MADHOUSE_CHECKOUTS: &str = "madhouse_checkouts";
pub const BULL_CHECKOUTS: &str = "bull_checkouts";
pub const DECIDING_LEGS_WON: &str = "deciding_legs_won";
pub const COMEBACK_WINS: &str = "comeback_wins";
pub const AROUND_THE_CLOCK: &str = "around_the_clock";

// Absolute measurements
pub const MATCH_AVERAGE: &str = "match_average";
pub const FIRST_NINE_AVERAGE: &str = "first_nine_average";
pub const HIGHEST_CHECKOUT: &str = "highest_checkout";
pub const CHECKOUT_PERCENTAGE: &str = "checkout_percentage";
pub const TRAINING_SCORE: &str = "training_score";
pub const GAME_TIME_MAX: &str = "game_time_max";
pub const DARTS_TO_FINISH: &str = "darts_to_finish";
pub const BOBS_27_SCORE: &str = "bobs_27_score";
pub const CHECKOUT_121_LEVEL: &str = "checkout_121_level";

// One-off events
pub const PLAYED_NEW_YEAR: &str = "played_new_year";
pub const PLAYED_CHRISTMAS: &str = "played_christmas";
pub const LATE_NIGHT_SESSION: &str = "late_night_session";
pub const EARLY_BIRD_SESSION: &str = "early_bird_session";
pub const PLAYED_NEW_YEARS_EVE: &str = "played_new_years_eve";
pub const PLAYED_VALENTINES: &str = "played_valentines";
pub const PLAYED_HALLOWEEN: &str = "played_halloween";
pub const PLAYED_LEAP_DAY: &str = "played_leap_day";
pub const PLAYED_EASTER: &str = "played_easter";
pub const PLAYED_ST_PATRICKS: &str = "played_st_patricks";
pub const ACCOUNT_ANNIVERSARY: &str = "account_anniversary";

// Streaks (reported as an absolute length by the caller)
pub const WINS: &str = "wins";
pub const CHECKOUT_STREAK: &str = "checkout_streak";
pub const TON_VISITS: &str = "ton_visits";
pub const DAILY_PLAY: &str = "daily_play";

// Properties of the achievement state itself
pub const TOTAL_POINTS: &str = "total_points";
pub const ACHIEVEMENTS_UNLOCKED: &str = "achievements_unlocked";
pub const GOLD_EVERY_CATEGORY: &str = "gold_every_category";

/// Metrics that accumulate by default.
pub const INCREMENT_METRICS: &[&str] = &[
    GAMES_PLAYED,
    GAMES_WON,
    LEGS_WON,
    SCORES_180,
    SCORES_140_PLUS,
    SCORES_100_PLUS,
    CHECKOUTS_HIT,
    TON_PLUS_CHECKOUTS,
    BULLSEYES,
    TRIPLES_HIT,
    DOUBLES_HIT,
    THREE_TRIPLES_VISITS,
    BUSTS,
    DARTS_THROWN,
    TRAINING_SESSIONS,
    WHITEWASHES,
    DOUBLE_BULLS,
    SHANGHAIS,
    SCORES_26,
    MADHOUSE_CHECKOUTS,
    BULL_CHECKOUTS,
    DECIDING_LEGS_WON,
    COMEBACK_WINS,
    AROUND_THE_CLOCK,
];

/// Metrics where a smaller positive value is the better result.
pub const LOWER_IS_BETTER_METRICS: &[&str] = &[GAME_TIME_MAX, DARTS_TO_FINISH];

/// Metrics evaluated by the meta-achievement resolver, never by gameplay.
pub const META_METRICS: &[&str] = &[TOTAL_POINTS, ACHIEVEMENTS_UNLOCKED, GOLD_EVERY_CATEGORY];

/// How a reported value relates to previously recorded progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalMode {
    /// Add the value to the running total.
    Increment,
    /// The value is the current measurement.
    Absolute,
}

/// Mode used when the caller does not pass one.
pub fn default_mode(metric: &str) -> EvalMode {
    if INCREMENT_METRICS.contains(&metric) {
        EvalMode::Increment
    } else {
        EvalMode::Absolute
    }
}

pub fn is_lower_better(metric: &str) -> bool {
    LOWER_IS_BETTER_METRICS.contains(&metric)
}

pub fn is_meta_metric(metric: &str) -> bool {
    META_METRICS.contains(&metric)
}

/// Unlock predicate. Lower-is-better metrics require `0 < value <= target`;
/// a zero reading means "not measured" and never unlocks.
pub fn meets_target(metric: &str, value: f64, target: f64) -> bool {
    if is_lower_better(metric) {
        value > 0.0 && value <= target
    } else {
        value >= target
    }
}

/// Progress percentage in 0..=100.
///
/// For lower-is-better metrics this is how close the value has come down to
/// the ceiling: 400 against a target of 300 is 75%.
pub fn percentage(metric: &str, value: f64, target: f64) -> f64 {
    if target <= 0.0 || value <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let raw = if is_lower_better(metric) {
        target / value * 100.0
    } else {
        value / target * 100.0
    };
    raw.clamp(0.0, 100.0)
}

/// Inverse of [`percentage`]: the value that would show `percent` progress.
pub fn value_for_percentage(metric: &str, percent: f64, target: f64) -> f64 {
    let percent = percent.clamp(0.0, 100.0);
    if is_lower_better(metric) {
        if percent <= 0.0 {
            0.0
        } else {
            target * 100.0 / percent
        }
    } else {
        target * percent / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modes() {
        assert_eq!(default_mode(SCORES_180), EvalMode::Increment);
        assert_eq!(default_mode(BUSTS), EvalMode::Increment);
        assert_eq!(default_mode(MATCH_AVERAGE), EvalMode::Absolute);
        assert_eq!(default_mode(GAME_TIME_MAX), EvalMode::Absolute);
        assert_eq!(default_mode("something_new"), EvalMode::Absolute);
    }

    #[test]
    fn test_lower_is_better_predicate() {
        assert!(meets_target(GAME_TIME_MAX, 250.0, 300.0));
        assert!(meets_target(GAME_TIME_MAX, 300.0, 300.0));
        assert!(!meets_target(GAME_TIME_MAX, 0.0, 300.0));
        assert!(!meets_target(GAME_TIME_MAX, 400.0, 300.0));
    }

    #[test]
    fn test_higher_is_better_predicate() {
        assert!(meets_target(MATCH_AVERAGE, 60.0, 60.0));
        assert!(meets_target(MATCH_AVERAGE, 61.5, 60.0));
        assert!(!meets_target(MATCH_AVERAGE, 59.9, 60.0));
    }

    #[test]
    fn test_percentage_is_clamped() {
        assert_eq!(percentage(SCORES_180, 5.0, 10.0), 50.0);
        assert_eq!(percentage(SCORES_180, 50.0, 10.0), 100.0);
        assert_eq!(percentage(SCORES_180, -3.0, 10.0), 0.0);
        assert_eq!(percentage(GAME_TIME_MAX, 400.0, 300.0), 75.0);
        assert_eq!(percentage(GAME_TIME_MAX, 0.0, 300.0), 0.0);
    }

    #[test]
    fn test_value_for_percentage_inverts_percentage() {
        assert_eq!(value_for_percentage(SCORES_180, 30.0, 10.0), 3.0);
        assert_eq!(value_for_percentage(GAME_TIME_MAX, 75.0, 300.0), 400.0);
        assert_eq!(value_for_percentage(GAME_TIME_MAX, 0.0, 300.0), 0.0);
    }
}
