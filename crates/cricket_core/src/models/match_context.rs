//! Match context: two competing teams, format, toss, status, and result.
//!
//! A match stores team ids; resolving them to [`Team`](super::team::Team)
//! records is the registry's job.

use crate::error::{CricketError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MatchFormat {
    T20,
    ODI,
    Test,
}

impl MatchFormat {
    pub const ALL: [MatchFormat; 3] = [MatchFormat::T20, MatchFormat::ODI, MatchFormat::Test];

    /// Maximum overs per innings for this format.
    pub fn max_overs(&self) -> u32 {
        match self {
            MatchFormat::T20 => 20,
            MatchFormat::ODI => 50,
            MatchFormat::Test => 90, // a day's play
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MatchFormat::T20 => "Twenty20",
            MatchFormat::ODI => "One Day International",
            MatchFormat::Test => "Test Match",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            MatchFormat::T20 => "T20",
            MatchFormat::ODI => "ODI",
            MatchFormat::Test => "Test",
        }
    }
}

impl FromStr for MatchFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "t20" | "twenty20" => Ok(MatchFormat::T20),
            "odi" | "one day" | "one-day" => Ok(MatchFormat::ODI),
            "test" | "test match" => Ok(MatchFormat::Test),
            _ => Err(format!("Invalid format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 3] =
        [MatchStatus::Scheduled, MatchStatus::InProgress, MatchStatus::Completed];

    pub fn display_name(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::InProgress => "In Progress",
            MatchStatus::Completed => "Completed",
        }
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "in-progress" | "in progress" | "live" => Ok(MatchStatus::InProgress),
            "completed" | "finished" => Ok(MatchStatus::Completed),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

/// What the toss winner elected to do first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Field,
}

impl TossDecision {
    pub const ALL: [TossDecision; 2] = [TossDecision::Bat, TossDecision::Field];

    /// Lowercase form, for sentences like "won the toss and elected to bat".
    pub fn display_name(&self) -> &'static str {
        match self {
            TossDecision::Bat => "bat",
            TossDecision::Field => "field",
        }
    }
}

impl FromStr for TossDecision {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bat" => Ok(TossDecision::Bat),
            "field" => Ok(TossDecision::Field),
            _ => Err(format!("Invalid toss decision: {}", s)),
        }
    }
}

/// The recorded toss: which team won it and what they elected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toss {
    /// Id of the team that won the toss.
    pub winner: String,
    pub decision: TossDecision,
}

/// Final result of a completed match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Winning team id. `None` for a draw or tie.
    pub winner: Option<String>,
    /// Human readable result line, e.g. "Chennai Kings won by 5 wickets".
    pub summary: String,
}

/// A scheduled or played cricket match between two registered teams.
///
/// Toss, status, and outcome are private: the toss can be recorded only
/// once, and the outcome must name one of the competing teams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub id: String,
    team_a: String,
    team_b: String,
    pub format: MatchFormat,
    pub venue: String,
    pub scheduled_for: DateTime<Utc>,
    toss: Option<Toss>,
    status: MatchStatus,
    outcome: Option<MatchOutcome>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// Create a match between two distinct teams. The venue defaults to
    /// "TBD" and the scheduled time to now; both fields stay adjustable.
    pub fn new(
        team_a: String,
        team_b: String,
        format: MatchFormat,
        venue: Option<String>,
    ) -> Result<Self> {
        if team_a == team_b {
            return Err(CricketError::Validation(
                "a match needs two distinct teams".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            team_a,
            team_b,
            format,
            venue: venue.unwrap_or_else(|| "TBD".to_string()),
            scheduled_for: now,
            toss: None,
            status: MatchStatus::Scheduled,
            outcome: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn team_a(&self) -> &str {
        &self.team_a
    }

    pub fn team_b(&self) -> &str {
        &self.team_b
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.team_a == team_id || self.team_b == team_id
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Move the match to the given status. No transition rules are
    /// enforced; any status can be set at any time, in any order.
    pub fn set_status(&mut self, status: MatchStatus) {
        self.status = status;
        self.touch();
    }

    pub fn toss(&self) -> Option<&Toss> {
        self.toss.as_ref()
    }

    /// Record the toss. The winner must be one of the competing teams,
    /// and the toss can be recorded exactly once.
    pub fn record_toss(&mut self, winner: &str, decision: TossDecision) -> Result<()> {
        if self.toss.is_some() {
            return Err(CricketError::TossAlreadySet);
        }
        if !self.involves(winner) {
            return Err(CricketError::Validation(format!(
                "toss winner {} is not one of the competing teams",
                winner
            )));
        }

        self.toss = Some(Toss { winner: winner.to_string(), decision });
        self.touch();
        Ok(())
    }

    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Record the final result and mark the match completed. Calling it
    /// again replaces the outcome, so a wrongly entered result can be
    /// corrected.
    pub fn record_result(&mut self, winner: Option<&str>, summary: String) -> Result<()> {
        if let Some(team_id) = winner {
            if !self.involves(team_id) {
                return Err(CricketError::Validation(format!(
                    "winner {} is not one of the competing teams",
                    team_id
                )));
            }
        }

        self.outcome = Some(MatchOutcome { winner: winner.map(String::from), summary });
        self.status = MatchStatus::Completed;
        self.touch();
        Ok(())
    }

    /// Maximum overs per innings, from the match format.
    pub fn max_overs(&self) -> u32 {
        self.format.max_overs()
    }
}

// ============================================================================
// Tests
// ============================================================================
