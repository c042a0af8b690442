//! Team entity with a bounded, duplicate-free roster and captaincy tracking.

use crate::error::{CricketError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of players a squad may carry.
pub const ROSTER_LIMIT: usize = 15;

/// A cricket team. The roster stores player ids; the player records
/// themselves live in the registry.
///
/// Roster and captain are private so every mutation goes through the
/// methods that uphold the invariants: at most [`ROSTER_LIMIT`] entries,
/// no duplicates, and a captain who is always a roster member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    players: Vec<String>,
    captain: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            players: Vec::new(),
            captain: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Player ids in roster order.
    pub fn roster(&self) -> &[String] {
        &self.players
    }

    /// The current captain's player id, if one is appointed.
    pub fn captain(&self) -> Option<&str> {
        self.captain.as_deref()
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|id| id == player_id)
    }

    /// Add a player id to the roster.
    pub fn add_player(&mut self, player_id: &str) -> Result<()> {
        if self.players.len() >= ROSTER_LIMIT {
            return Err(CricketError::RosterFull {
                team: self.name.clone(),
                limit: ROSTER_LIMIT,
            });
        }
        if self.contains(player_id) {
            return Err(CricketError::DuplicatePlayer {
                player_id: player_id.to_string(),
                team: self.name.clone(),
            });
        }

        self.players.push(player_id.to_string());
        self.touch();
        Ok(())
    }

    /// Remove a player id from the roster. Removing the captain leaves
    /// the captaincy vacant.
    pub fn remove_player(&mut self, player_id: &str) -> Result<()> {
        let idx = self.players.iter().position(|id| id == player_id).ok_or_else(|| {
            CricketError::NotOnRoster {
                player_id: player_id.to_string(),
                team: self.name.clone(),
            }
        })?;

        self.players.remove(idx);
        if self.captain.as_deref() == Some(player_id) {
            self.captain = None;
        }
        self.touch();
        Ok(())
    }

    /// Appoint a roster member as captain.
    pub fn set_captain(&mut self, player_id: &str) -> Result<()> {
        if !self.contains(player_id) {
            return Err(CricketError::NotOnRoster {
                player_id: player_id.to_string(),
                team: self.name.clone(),
            });
        }

        self.captain = Some(player_id.to_string());
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
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_team_starts_empty() {
        let team = Team::new("Chennai Kings".to_string());
        assert!(team.roster().is_empty());
        assert_eq!(team.captain(), None);
    }

    #[test]
    fn test_add_and_remove_players() {
        let mut team = Team::new("Chennai Kings".to_string());
        team.add_player("p1").unwrap();
        team.add_player("p2").unwrap();
        assert_eq!(team.roster(), vec!["p1".to_string(), "p2".to_string()]);

        team.remove_player("p1").unwrap();
        assert_eq!(team.roster(), vec!["p2".to_string()]);
        assert!(!team.contains("p1"));
    }

    #[test]
    fn test_roster_capacity_is_enforced() {
        let mut team = Team::new("Chennai Kings".to_string());
        for i in 0..ROSTER_LIMIT {
            team.add_player(&format!("p{}", i)).unwrap();
        }

        let err = team.add_player("one-too-many").unwrap_err();
        assert!(matches!(err, CricketError::RosterFull { limit: ROSTER_LIMIT, .. }));
        assert_eq!(team.roster().len(), ROSTER_LIMIT);
    }

    #[test]
    fn test_duplicate_player_is_rejected() {
        let mut team = Team::new("Chennai Kings".to_string());
        team.add_player("p1").unwrap();

        let err = team.add_player("p1").unwrap_err();
        assert!(matches!(err, CricketError::DuplicatePlayer { .. }));
        assert_eq!(team.roster().len(), 1);
    }

    #[test]
    fn test_captain_must_be_on_roster() {
        let mut team = Team::new("Chennai Kings".to_string());
        team.add_player("p1").unwrap();

        let err = team.set_captain("p2").unwrap_err();
        assert!(matches!(err, CricketError::NotOnRoster { .. }));
        assert_eq!(team.captain(), None, "failed appointment must not change captain");

        team.set_captain("p1").unwrap();
        assert_eq!(team.captain(), Some("p1"));
    }

    #[test]
    fn test_removing_captain_vacates_the_post() {
        let mut team = Team::new("Chennai Kings".to_string());
        team.add_player("p1").unwrap();
        team.add_player("p2").unwrap();
        team.set_captain("p1").unwrap();

        team.remove_player("p1").unwrap();
        assert_eq!(team.captain(), None);
        assert_eq!(team.roster(), vec!["p2".to_string()]);
    }

    #[test]
    fn test_removing_other_player_keeps_captain() {
        let mut team = Team::new("Chennai Kings".to_string());
        team.add_player("p1").unwrap();
        team.add_player("p2").unwrap();
        team.set_captain("p1").unwrap();

        team.remove_player("p2").unwrap();
        assert_eq!(team.captain(), Some("p1"));
    }

    #[test]
    fn test_remove_missing_player_fails() {
        let mut team = Team::new("Chennai Kings".to_string());
        let err = team.remove_player("ghost").unwrap_err();
        assert!(matches!(err, CricketError::NotOnRoster { .. }));
    }

    #[derive(Debug, Clone)]
    enum RosterOp {
        Add(u8),
        Remove(u8),
        Captain(u8),
    }

    fn roster_op_strategy() -> impl Strategy<Value = RosterOp> {
        prop_oneof![
            (0u8..24).prop_map(RosterOp::Add),
            (0u8..24).prop_map(RosterOp::Remove),
            (0u8..24).prop_map(RosterOp::Captain),
        ]
    }

    proptest! {
        /// Property: no sequence of roster operations can break the
        /// capacity bound, introduce a duplicate, or leave a captain
        /// who is not a roster member.
        #[test]
        fn prop_roster_invariants_survive_any_op_sequence(
            ops in prop::collection::vec(roster_op_strategy(), 0..120)
        ) {
            let mut team = Team::new("Invariant XI".to_string());
            for op in ops {
                // Individual operations may fail; the state must stay valid.
                match op {
                    RosterOp::Add(n) => {
                        let _ = team.add_player(&format!("p{}", n));
                    }
                    RosterOp::Remove(n) => {
                        let _ = team.remove_player(&format!("p{}", n));
                    }
                    RosterOp::Captain(n) => {
                        let _ = team.set_captain(&format!("p{}", n));
                    }
                }
            }

            prop_assert!(team.roster().len() <= ROSTER_LIMIT);

            let unique: HashSet<&String> = team.roster().iter().collect();
            prop_assert_eq!(unique.len(), team.roster().len());

            if let Some(captain) = team.captain() {
                prop_assert!(team.contains(captain));
            }
        }
    }
}
