use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CricketError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("Team not found: {id}")]
    TeamNotFound { id: String },

    #[error("Match not found: {id}")]
    MatchNotFound { id: String },

    #[error("Player {player_id} is not on the roster of '{team}'")]
    NotOnRoster { player_id: String, team: String },

    #[error("Roster of '{team}' is full ({limit} players)")]
    RosterFull { team: String, limit: usize },

    #[error("Player {player_id} is already on the roster of '{team}'")]
    DuplicatePlayer { player_id: String, team: String },

    #[error("Toss has already been recorded for this match")]
    TossAlreadySet,
}

impl CricketError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CricketError::PlayerNotFound { .. }
                | CricketError::TeamNotFound { .. }
                | CricketError::MatchNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CricketError>;
