/// Key under which the participant list is stored.
pub const PARTICIPANTS_KEY: &str = "@members";

/// Random split draws from `[floor(avg * MIN), floor(avg * MAX)]`.
pub const SPLIT_MIN_RATIO: f64 = 0.3;
pub const SPLIT_MAX_RATIO: f64 = 1.7;

/// Largest round amount. Every per-member figure derived from it fits in `i64`.
pub const MAX_AMOUNT: u64 = i64::MAX as u64;

pub const DEFAULT_INITIAL_ROUNDS: usize = 2;

pub const SHARE_TITLE: &str = "Share settlement";
pub const SHARE_MESSAGE: &str = "Here is our settlement.";

// Log actions
pub const PARTICIPANT_ADDED: &str = "participant_added";
pub const PARTICIPANT_REMOVED: &str = "participant_removed";
pub const PARTICIPANTS_REPLACED: &str = "participants_replaced";
pub const PARTICIPANTS_LOADED: &str = "participants_loaded";
