//! Cone Rush - an ice-cream counter arcade game
//!
//! Core modules:
//! - `sim`: Deterministic game logic (orders, customer queue, session state machine)
//! - `highscores`: Capped local leaderboard
//! - `settings`: Player preferences
//! - `platform`: Browser/native storage abstraction

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Session length in seconds
    pub const SESSION_SECS: u32 = 60;

    /// Coins awarded for serving an exactly matching order
    pub const MATCH_REWARD: u32 = 15;
    /// Coins lost on a mismatched serve (coin total never goes below zero)
    pub const MISMATCH_PENALTY: u32 = 5;

    /// Customers visible at the counter at any time
    pub const VISIBLE_CUSTOMERS: usize = 3;
    /// Size of the cyclic customer id space (ids run 1..=CUSTOMER_POOL)
    pub const CUSTOMER_POOL: u8 = 10;
    /// Customer id cursor after the initial three walk in
    pub const FIRST_QUEUED_CUSTOMER: u8 = 4;

    /// Largest scoop count an order can ask for
    pub const MAX_ORDER_SCOOPS: usize = 3;
}
