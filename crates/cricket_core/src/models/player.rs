//! Player entity and career statistics.
//!
//! The stored statistics are raw counters only. Rates that depend on a
//! denominator (batting average, strike rates, economy) are derived on
//! read and return `None` when the denominator is zero.

use crate::error::{CricketError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 4] = [
        PlayerRole::Batsman,
        PlayerRole::Bowler,
        PlayerRole::AllRounder,
        PlayerRole::WicketKeeper,
    ];

    pub fn is_batsman(&self) -> bool {
        matches!(self, PlayerRole::Batsman)
    }

    pub fn is_bowler(&self) -> bool {
        matches!(self, PlayerRole::Bowler)
    }

    pub fn is_all_rounder(&self) -> bool {
        matches!(self, PlayerRole::AllRounder)
    }

    pub fn is_wicket_keeper(&self) -> bool {
        matches!(self, PlayerRole::WicketKeeper)
    }

    /// Whether this role is expected to bowl regular overs.
    pub fn can_bowl(&self) -> bool {
        matches!(self, PlayerRole::Bowler | PlayerRole::AllRounder)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerRole::Batsman => "Batsman",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All-Rounder",
            PlayerRole::WicketKeeper => "Wicket-Keeper",
        }
    }

    /// Get role abbreviation for compact display
    pub fn abbreviation(&self) -> &'static str {
        match self {
            PlayerRole::Batsman => "BAT",
            PlayerRole::Bowler => "BWL",
            PlayerRole::AllRounder => "AR",
            PlayerRole::WicketKeeper => "WK",
        }
    }
}

impl FromStr for PlayerRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "batsman" | "batter" | "bat" => Ok(PlayerRole::Batsman),
            "bowler" | "bwl" => Ok(PlayerRole::Bowler),
            "all-rounder" | "allrounder" | "all rounder" | "ar" => Ok(PlayerRole::AllRounder),
            "wicket-keeper" | "wicketkeeper" | "wicket keeper" | "keeper" | "wk" => {
                Ok(PlayerRole::WicketKeeper)
            }
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Career batting counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BattingStats {
    pub matches: u32,
    pub innings: u32,
    pub not_outs: u32,
    pub runs: u32,
    pub balls_faced: u32,
    pub highest_score: u32,
    pub fours: u32,
    pub sixes: u32,
    pub half_centuries: u32,
    pub centuries: u32,
}

impl BattingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed innings (innings in which the player was out).
    pub fn dismissals(&self) -> u32 {
        self.innings.saturating_sub(self.not_outs)
    }

    /// Runs per dismissal. `None` until the player has been out at least once.
    pub fn average(&self) -> Option<f64> {
        let dismissals = self.dismissals();
        if dismissals == 0 {
            return None;
        }
        Some(f64::from(self.runs) / f64::from(dismissals))
    }

    /// Runs per 100 balls faced. `None` until the player has faced a ball.
    pub fn strike_rate(&self) -> Option<f64> {
        if self.balls_faced == 0 {
            return None;
        }
        Some(f64::from(self.runs) * 100.0 / f64::from(self.balls_faced))
    }
}

/// Career bowling counters. Overs are stored as balls so partial overs
/// never lose precision; display formatting converts back to overs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BowlingStats {
    pub balls_bowled: u32,
    pub maidens: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub five_wicket_hauls: u32,
}

impl BowlingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overs bowled as a fraction (six balls per over).
    pub fn overs(&self) -> f64 {
        f64::from(self.balls_bowled) / 6.0
    }

    /// Overs in cricket notation, e.g. 125 balls is "20.5".
    pub fn overs_display(&self) -> String {
        format!("{}.{}", self.balls_bowled / 6, self.balls_bowled % 6)
    }

    /// Runs conceded per wicket. `None` until the first wicket.
    pub fn average(&self) -> Option<f64> {
        if self.wickets == 0 {
            return None;
        }
        Some(f64::from(self.runs_conceded) / f64::from(self.wickets))
    }

    /// Runs conceded per over. `None` until the first ball is bowled.
    pub fn economy(&self) -> Option<f64> {
        if self.balls_bowled == 0 {
            return None;
        }
        Some(f64::from(self.runs_conceded) * 6.0 / f64::from(self.balls_bowled))
    }

    /// Balls per wicket. `None` until the first wicket.
    pub fn strike_rate(&self) -> Option<f64> {
        if self.wickets == 0 {
            return None;
        }
        Some(f64::from(self.balls_bowled) / f64::from(self.wickets))
    }
}

/// Career fielding counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldingStats {
    pub catches: u32,
    pub stumpings: u32,
    pub run_outs: u32,
}

impl FieldingStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A signed adjustment to a player's counters, applied in one shot.
///
/// Every field defaults to zero, so callers fill in only what changed.
/// `highest_score` is a candidate value, not an increment: the stored
/// highest score only moves if the candidate beats it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatDelta {
    // Batting
    pub matches: i32,
    pub innings: i32,
    pub not_outs: i32,
    pub runs: i32,
    pub balls_faced: i32,
    pub fours: i32,
    pub sixes: i32,
    pub half_centuries: i32,
    pub centuries: i32,
    pub highest_score: Option<u32>,

    // Bowling
    pub balls_bowled: i32,
    pub maidens: i32,
    pub runs_conceded: i32,
    pub wickets: i32,
    pub five_wicket_hauls: i32,

    // Fielding
    pub catches: i32,
    pub stumpings: i32,
    pub run_outs: i32,
}

impl StatDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == StatDelta::default()
    }
}

/// Apply a signed delta to a counter, rejecting anything that would leave
/// the valid range.
fn shifted(current: u32, delta: i32, field: &str) -> Result<u32> {
    let next = i64::from(current) + i64::from(delta);
    if next < 0 {
        return Err(CricketError::Validation(format!(
            "{} cannot go below zero (current {}, delta {})",
            field, current, delta
        )));
    }
    if next > i64::from(u32::MAX) {
        return Err(CricketError::Validation(format!("{} out of range", field)));
    }
    Ok(next as u32)
}

/// A registered cricket player and their career record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub role: PlayerRole,
    pub batting: BattingStats,
    pub bowling: BowlingStats,
    pub fielding: FieldingStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    pub fn new(name: String, role: PlayerRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            role,
            batting: BattingStats::new(),
            bowling: BowlingStats::new(),
            fielding: FieldingStats::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Apply a stat adjustment atomically.
    ///
    /// Every resulting counter is computed and validated before any field
    /// is written, so a rejected delta leaves the player untouched.
    pub fn apply_delta(&mut self, delta: &StatDelta) -> Result<()> {
        let batting = BattingStats {
            matches: shifted(self.batting.matches, delta.matches, "matches")?,
            innings: shifted(self.batting.innings, delta.innings, "innings")?,
            not_outs: shifted(self.batting.not_outs, delta.not_outs, "not outs")?,
            runs: shifted(self.batting.runs, delta.runs, "runs")?,
            balls_faced: shifted(self.batting.balls_faced, delta.balls_faced, "balls faced")?,
            highest_score: match delta.highest_score {
                Some(candidate) => self.batting.highest_score.max(candidate),
                None => self.batting.highest_score,
            },
            fours: shifted(self.batting.fours, delta.fours, "fours")?,
            sixes: shifted(self.batting.sixes, delta.sixes, "sixes")?,
            half_centuries: shifted(
                self.batting.half_centuries,
                delta.half_centuries,
                "half centuries",
            )?,
            centuries: shifted(self.batting.centuries, delta.centuries, "centuries")?,
        };

        let bowling = BowlingStats {
            balls_bowled: shifted(self.bowling.balls_bowled, delta.balls_bowled, "balls bowled")?,
            maidens: shifted(self.bowling.maidens, delta.maidens, "maidens")?,
            runs_conceded: shifted(
                self.bowling.runs_conceded,
                delta.runs_conceded,
                "runs conceded",
            )?,
            wickets: shifted(self.bowling.wickets, delta.wickets, "wickets")?,
            five_wicket_hauls: shifted(
                self.bowling.five_wicket_hauls,
                delta.five_wicket_hauls,
                "five wicket hauls",
            )?,
        };

        let fielding = FieldingStats {
            catches: shifted(self.fielding.catches, delta.catches, "catches")?,
            stumpings: shifted(self.fielding.stumpings, delta.stumpings, "stumpings")?,
            run_outs: shifted(self.fielding.run_outs, delta.run_outs, "run outs")?,
        };

        self.batting = batting;
        self.bowling = bowling;
        self.fielding = fielding;
        self.touch();
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_with_zeroed_counters() {
        let player = Player::new("Rohit Sharma".to_string(), PlayerRole::Batsman);

        assert!(!player.id.is_empty());
        assert_eq!(player.batting, BattingStats::new());
        assert_eq!(player.bowling, BowlingStats::new());
        assert_eq!(player.fielding, FieldingStats::new());
        assert_eq!(player.created_at, player.updated_at);
    }

    #[test]
    fn test_players_with_same_name_get_distinct_ids() {
        let a = Player::new("Smith".to_string(), PlayerRole::Batsman);
        let b = Player::new("Smith".to_string(), PlayerRole::Bowler);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_parsing_accepts_common_aliases() {
        assert_eq!("batsman".parse::<PlayerRole>(), Ok(PlayerRole::Batsman));
        assert_eq!("Batter".parse::<PlayerRole>(), Ok(PlayerRole::Batsman));
        assert_eq!("BOWLER".parse::<PlayerRole>(), Ok(PlayerRole::Bowler));
        assert_eq!("all-rounder".parse::<PlayerRole>(), Ok(PlayerRole::AllRounder));
        assert_eq!("all rounder".parse::<PlayerRole>(), Ok(PlayerRole::AllRounder));
        assert_eq!("wk".parse::<PlayerRole>(), Ok(PlayerRole::WicketKeeper));
        assert_eq!("keeper".parse::<PlayerRole>(), Ok(PlayerRole::WicketKeeper));
        assert!("slip fielder".parse::<PlayerRole>().is_err());
    }

    #[test]
    fn test_only_bowling_roles_can_bowl() {
        assert!(PlayerRole::Bowler.can_bowl());
        assert!(PlayerRole::AllRounder.can_bowl());
        assert!(!PlayerRole::Batsman.can_bowl());
        assert!(!PlayerRole::WicketKeeper.can_bowl());
    }

    #[test]
    fn test_batting_average_needs_a_dismissal() {
        let mut stats = BattingStats::new();
        stats.runs = 180;
        stats.innings = 3;
        stats.not_outs = 3;
        assert_eq!(stats.average(), None, "never dismissed, average undefined");

        stats.innings = 4;
        assert_eq!(stats.average(), Some(180.0));

        stats.not_outs = 1;
        assert_eq!(stats.average(), Some(60.0));
    }

    #[test]
    fn test_strike_rate_is_runs_per_hundred_balls() {
        let mut stats = BattingStats::new();
        assert_eq!(stats.strike_rate(), None);

        stats.runs = 90;
        stats.balls_faced = 60;
        assert_eq!(stats.strike_rate(), Some(150.0));
    }

    #[test]
    fn test_bowling_rates_use_none_on_zero_denominators() {
        let mut stats = BowlingStats::new();
        assert_eq!(stats.average(), None);
        assert_eq!(stats.economy(), None);
        assert_eq!(stats.strike_rate(), None);

        stats.balls_bowled = 120; // 20 overs
        stats.runs_conceded = 100;
        stats.wickets = 5;
        assert_eq!(stats.average(), Some(20.0));
        assert_eq!(stats.economy(), Some(5.0));
        assert_eq!(stats.strike_rate(), Some(24.0));
    }

    #[test]
    fn test_overs_display_uses_cricket_notation() {
        let mut stats = BowlingStats::new();
        assert_eq!(stats.overs_display(), "0.0");

        stats.balls_bowled = 125;
        assert_eq!(stats.overs_display(), "20.5");

        stats.balls_bowled = 126;
        assert_eq!(stats.overs_display(), "21.0");
    }

    #[test]
    fn test_apply_delta_adds_counters() {
        let mut player = Player::new("Bumrah".to_string(), PlayerRole::Bowler);
        let delta = StatDelta {
            matches: 1,
            balls_bowled: 24,
            runs_conceded: 17,
            wickets: 3,
            catches: 1,
            ..StatDelta::default()
        };

        player.apply_delta(&delta).unwrap();
        assert_eq!(player.batting.matches, 1);
        assert_eq!(player.bowling.balls_bowled, 24);
        assert_eq!(player.bowling.wickets, 3);
        assert_eq!(player.fielding.catches, 1);
        assert!(player.updated_at >= player.created_at);
    }

    #[test]
    fn test_highest_score_only_moves_upward() {
        let mut player = Player::new("Kohli".to_string(), PlayerRole::Batsman);

        let delta = StatDelta { highest_score: Some(112), ..StatDelta::default() };
        player.apply_delta(&delta).unwrap();
        assert_eq!(player.batting.highest_score, 112);

        let delta = StatDelta { highest_score: Some(45), ..StatDelta::default() };
        player.apply_delta(&delta).unwrap();
        assert_eq!(player.batting.highest_score, 112, "lower score must not overwrite");
    }

    #[test]
    fn test_rejected_delta_leaves_player_untouched() {
        let mut player = Player::new("Jadeja".to_string(), PlayerRole::AllRounder);
        let setup = StatDelta { runs: 10, ..StatDelta::default() };
        player.apply_delta(&setup).unwrap();

        // Valid wickets increment paired with an invalid runs decrement.
        let bad = StatDelta { runs: -20, wickets: 4, ..StatDelta::default() };
        let err = player.apply_delta(&bad).unwrap_err();
        assert!(matches!(err, CricketError::Validation(_)));

        assert_eq!(player.batting.runs, 10, "failed delta must not change runs");
        assert_eq!(player.bowling.wickets, 0, "failed delta must not apply partial fields");
    }

    #[test]
    fn test_empty_delta_detection() {
        assert!(StatDelta::new().is_empty());

        let delta = StatDelta { sixes: 2, ..StatDelta::default() };
        assert!(!delta.is_empty());

        let delta = StatDelta { highest_score: Some(0), ..StatDelta::default() };
        assert!(!delta.is_empty());
    }
}
