//! Core library for a cricket management game.
//!
//! Pure bookkeeping, no I/O: player records with career statistics, teams
//! with bounded rosters and captains, and scheduled matches with toss and
//! result tracking. Front ends own all presentation and persistence.
//!
//! ## Features
//!
//! - Player registry with batting, bowling, and fielding career stats
//! - Validate-then-apply stat deltas, so a bad update never lands partially
//! - Teams with a 15-player roster cap and captain tracking
//! - Suggested batting orders and bowling options derived from averages
//! - Match scheduling across T20, ODI, and Test formats with toss and
//!   result records

pub mod error;
pub mod models;
pub mod registry;

pub use error::{CricketError, Result};
pub use models::{
    BattingStats, BowlingStats, FieldingStats, Match, MatchFormat, MatchOutcome, MatchStatus,
    Player, PlayerRole, StatDelta, Team, Toss, TossDecision, ROSTER_LIMIT,
};
pub use registry::Registry;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
