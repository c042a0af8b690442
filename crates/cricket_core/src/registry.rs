//! In-memory registry of players, teams, and matches.
//!
//! One [`Registry`] value owns every record in the game. All mutations go
//! through `&mut self`, so exclusive access serializes them; embedders
//! that share a registry across threads must add their own locking.
//!
//! Every operation validates its inputs before touching any state, so a
//! failed call leaves the registry exactly as it was.

use crate::error::{CricketError, Result};
use crate::models::match_context::{Match, MatchFormat, MatchStatus, TossDecision};
use crate::models::player::{Player, PlayerRole, StatDelta};
use crate::models::team::Team;

/// Trim surrounding whitespace and reject blank names.
fn validate_name(raw: &str, what: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CricketError::Validation(format!("{} cannot be empty", what)));
    }
    Ok(name.to_string())
}

fn batting_average_or_zero(player: &Player) -> f64 {
    player.batting.average().unwrap_or(0.0)
}

fn bowling_average_or_max(player: &Player) -> f64 {
    player.bowling.average().unwrap_or(f64::MAX)
}

/// All registered players, teams, and matches.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    players: Vec<Player>,
    teams: Vec<Team>,
    matches: Vec<Match>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Player Management
    // ========================

    /// Register a new player. Returns a snapshot of the created record.
    pub fn create_player(&mut self, name: &str, role: PlayerRole) -> Result<Player> {
        let name = validate_name(name, "player name")?;
        let player = Player::new(name, role);
        log::info!("Created player '{}' ({})", player.name, player.id);
        self.players.push(player.clone());
        Ok(player)
    }

    /// Get a player by ID
    pub fn get_player(&self, player_id: &str) -> Result<&Player> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .ok_or_else(|| CricketError::PlayerNotFound { id: player_id.to_string() })
    }

    /// All players, in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Apply a stat delta to a player. The whole delta is validated
    /// first; on failure no counter changes. Returns the updated record.
    pub fn update_stats(&mut self, player_id: &str, delta: &StatDelta) -> Result<Player> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| CricketError::PlayerNotFound { id: player_id.to_string() })?;

        player.apply_delta(delta)?;
        log::info!("Updated stats for '{}' ({})", player.name, player.id);
        Ok(player.clone())
    }

    // ========================
    // Team Management
    // ========================

    /// Create an empty team. The name must not collide with an existing
    /// team's name, compared case-insensitively.
    pub fn create_team(&mut self, name: &str) -> Result<Team> {
        let name = validate_name(name, "team name")?;
        self.ensure_team_name_free(&name, None)?;

        let team = Team::new(name);
        log::info!("Created team '{}' ({})", team.name, team.id);
        self.teams.push(team.clone());
        Ok(team)
    }

    /// Create a team with an initial roster. The whole request is checked
    /// first: if any id is unknown, duplicated, or over capacity, no team
    /// is created.
    pub fn create_team_with_roster(&mut self, name: &str, player_ids: &[String]) -> Result<Team> {
        let name = validate_name(name, "team name")?;
        self.ensure_team_name_free(&name, None)?;
        for id in player_ids {
            self.get_player(id)?;
        }

        // The team is local until fully built, so a failing add aborts
        // creation without touching the registry.
        let mut team = Team::new(name);
        for id in player_ids {
            team.add_player(id)?;
        }

        log::info!("Created team '{}' with {} players", team.name, team.roster().len());
        self.teams.push(team.clone());
        Ok(team)
    }

    /// Get a team by ID
    pub fn get_team(&self, team_id: &str) -> Result<&Team> {
        self.teams
            .iter()
            .find(|t| t.id == team_id)
            .ok_or_else(|| CricketError::TeamNotFound { id: team_id.to_string() })
    }

    fn get_team_mut(&mut self, team_id: &str) -> Result<&mut Team> {
        self.teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| CricketError::TeamNotFound { id: team_id.to_string() })
    }

    /// All teams, in creation order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Look up a team by name, ignoring case.
    pub fn find_team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Add a registered player to a team's roster.
    pub fn add_player_to_team(&mut self, team_id: &str, player_id: &str) -> Result<()> {
        // The player must exist before the roster is touched.
        self.get_player(player_id)?;

        let team = self.get_team_mut(team_id)?;
        team.add_player(player_id)?;
        log::info!("Added player {} to team '{}'", player_id, team.name);
        Ok(())
    }

    /// Remove a player from a team's roster. The player record itself
    /// stays registered; only the membership is dropped. Removing the
    /// captain vacates the captaincy.
    pub fn remove_player_from_team(&mut self, team_id: &str, player_id: &str) -> Result<()> {
        let team = self.get_team_mut(team_id)?;
        team.remove_player(player_id)?;
        log::info!("Removed player {} from team '{}'", player_id, team.name);
        Ok(())
    }

    /// Appoint a roster member as team captain.
    pub fn set_team_captain(&mut self, team_id: &str, player_id: &str) -> Result<()> {
        let team = self.get_team_mut(team_id)?;
        team.set_captain(player_id)?;
        log::info!("Appointed {} captain of '{}'", player_id, team.name);
        Ok(())
    }

    /// Rename a team, keeping names unique case-insensitively. Renaming a
    /// team to its own name (e.g. to fix capitalization) is allowed.
    pub fn rename_team(&mut self, team_id: &str, new_name: &str) -> Result<()> {
        let new_name = validate_name(new_name, "team name")?;
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or_else(|| CricketError::TeamNotFound { id: team_id.to_string() })?;
        self.ensure_team_name_free(&new_name, Some(team_id))?;

        let team = &mut self.teams[idx];
        let old_name = std::mem::replace(&mut team.name, new_name);
        team.touch();
        log::info!("Renamed team '{}' to '{}'", old_name, team.name);
        Ok(())
    }

    fn ensure_team_name_free(&self, name: &str, exclude_team_id: Option<&str>) -> Result<()> {
        let taken = self
            .teams
            .iter()
            .filter(|t| Some(t.id.as_str()) != exclude_team_id)
            .any(|t| t.name.eq_ignore_ascii_case(name));
        if taken {
            return Err(CricketError::Validation(format!(
                "team name '{}' is already taken",
                name
            )));
        }
        Ok(())
    }

    // ========================
    // Squad Queries
    // ========================

    /// Resolve a team's roster ids to player records, in roster order.
    pub fn team_players(&self, team_id: &str) -> Result<Vec<&Player>> {
        let team = self.get_team(team_id)?;
        Ok(team
            .roster()
            .iter()
            .filter_map(|id| self.players.iter().find(|p| &p.id == id))
            .collect())
    }

    /// Roster members with the given role, in roster order.
    pub fn players_by_role(&self, team_id: &str, role: PlayerRole) -> Result<Vec<&Player>> {
        Ok(self.team_players(team_id)?.into_iter().filter(|p| p.role == role).collect())
    }

    /// Suggested batting order for a team.
    ///
    /// Top three batsmen by batting average open, the wicket-keeper and
    /// all-rounders take the middle order, remaining batsmen follow, and
    /// bowlers bring up the rear. Each group is sorted by batting average,
    /// best first; players without an average sort as zero.
    pub fn batting_order(&self, team_id: &str) -> Result<Vec<&Player>> {
        let squad = self.team_players(team_id)?;

        let mut batsmen: Vec<&Player> =
            squad.iter().copied().filter(|p| p.role.is_batsman()).collect();
        let mut keepers: Vec<&Player> =
            squad.iter().copied().filter(|p| p.role.is_wicket_keeper()).collect();
        let mut all_rounders: Vec<&Player> =
            squad.iter().copied().filter(|p| p.role.is_all_rounder()).collect();
        let mut bowlers: Vec<&Player> =
            squad.iter().copied().filter(|p| p.role.is_bowler()).collect();

        let by_batting_average = |a: &&Player, b: &&Player| {
            batting_average_or_zero(b).total_cmp(&batting_average_or_zero(a))
        };
        batsmen.sort_by(by_batting_average);
        keepers.sort_by(by_batting_average);
        all_rounders.sort_by(by_batting_average);
        bowlers.sort_by(by_batting_average);

        let split = batsmen.len().min(3);
        let mut order: Vec<&Player> = Vec::with_capacity(squad.len());
        order.extend(&batsmen[..split]);
        order.extend(&keepers);
        order.extend(&all_rounders);
        order.extend(&batsmen[split..]);
        order.extend(&bowlers);
        Ok(order)
    }

    /// Roster members who can bowl: specialist bowlers first, then
    /// all-rounders, each group ordered by bowling average (lower is
    /// better). Wicketless players sort last within their group.
    pub fn bowling_options(&self, team_id: &str) -> Result<Vec<&Player>> {
        let squad = self.team_players(team_id)?;

        let mut bowlers: Vec<&Player> =
            squad.iter().copied().filter(|p| p.role.is_bowler()).collect();
        let mut all_rounders: Vec<&Player> =
            squad.iter().copied().filter(|p| p.role.is_all_rounder()).collect();

        let by_bowling_average = |a: &&Player, b: &&Player| {
            bowling_average_or_max(a).total_cmp(&bowling_average_or_max(b))
        };
        bowlers.sort_by(by_bowling_average);
        all_rounders.sort_by(by_bowling_average);

        bowlers.extend(all_rounders);
        Ok(bowlers)
    }

    // ========================
    // Match Management
    // ========================

    /// Schedule a match between two existing, distinct teams.
    pub fn create_match(
        &mut self,
        team_a_id: &str,
        team_b_id: &str,
        format: MatchFormat,
        venue: Option<String>,
    ) -> Result<Match> {
        self.get_team(team_a_id)?;
        self.get_team(team_b_id)?;

        let m = Match::new(team_a_id.to_string(), team_b_id.to_string(), format, venue)?;
        log::info!(
            "Created {} match {} ({} vs {})",
            format.abbreviation(),
            m.id,
            team_a_id,
            team_b_id
        );
        self.matches.push(m.clone());
        Ok(m)
    }

    /// Get a match by ID
    pub fn get_match(&self, match_id: &str) -> Result<&Match> {
        self.matches
            .iter()
            .find(|m| m.id == match_id)
            .ok_or_else(|| CricketError::MatchNotFound { id: match_id.to_string() })
    }

    fn get_match_mut(&mut self, match_id: &str) -> Result<&mut Match> {
        self.matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| CricketError::MatchNotFound { id: match_id.to_string() })
    }

    /// All matches, in creation order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Record the toss for a match. Fails if the toss was already
    /// recorded or the winner is not one of the competing teams.
    pub fn record_toss(
        &mut self,
        match_id: &str,
        winner_team_id: &str,
        decision: TossDecision,
    ) -> Result<()> {
        let m = self.get_match_mut(match_id)?;
        m.record_toss(winner_team_id, decision)?;
        log::info!(
            "Toss for match {}: {} elected to {}",
            match_id,
            winner_team_id,
            decision.display_name()
        );
        Ok(())
    }

    /// Set a match's status. Any status can be set at any time.
    pub fn set_match_status(&mut self, match_id: &str, status: MatchStatus) -> Result<()> {
        let m = self.get_match_mut(match_id)?;
        m.set_status(status);
        log::info!("Match {} is now {}", match_id, status.display_name());
        Ok(())
    }

    /// Record a match result and mark the match completed. `winner` is
    /// `None` for a draw or tie. Recording again replaces the result.
    pub fn record_match_result(
        &mut self,
        match_id: &str,
        winner_team_id: Option<&str>,
        summary: &str,
    ) -> Result<()> {
        let m = self.get_match_mut(match_id)?;
        m.record_result(winner_team_id, summary.to_string())?;
        log::info!("Match {} result: {}", match_id, summary);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
