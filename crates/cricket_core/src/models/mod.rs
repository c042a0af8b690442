pub mod match_context;
pub mod player;
pub mod team;

pub use match_context::{Match, MatchFormat, MatchOutcome, MatchStatus, Toss, TossDecision};
pub use player::{BattingStats, BowlingStats, FieldingStats, Player, PlayerRole, StatDelta};
pub use team::{Team, ROSTER_LIMIT};
