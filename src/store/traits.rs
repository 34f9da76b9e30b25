//! Storage collaborator traits.
//!
//! The scoring engine and session only talk to storage through these
//! traits. Errors are passed through to callers as-is; nothing here
//! retries.
//!
//! - `ChoiceStore`: choice records and score records
//! - `StatusStore`: per-game round/progress, scored rounds, the
//!   last-game index and the session RNG state
//! - `GameStore`: both, plus reset and flush

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::core::{GameRngState, Role, Round, RoundMap, StoreError};
use crate::scoring::ScoreRecord;

/// Tagged outcome of a find-or-create write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    /// No record with that key existed.
    Inserted,
    /// An existing record was replaced.
    Updated,
}

/// Whether a game still accepts choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Progress {
    /// Rounds are still being played.
    InProgress,
    /// The last round has been played.
    Completed,
}

/// Current round and progress of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    /// Game id.
    pub game_id: String,
    /// Round currently accepting choices (or the last round, once completed).
    pub round: Round,
    /// Progress marker.
    pub status: Progress,
    /// Rounds that have been scored.
    #[serde(default)]
    pub scored: RoundMap<bool>,
}

impl GameStatus {
    /// Whether `round` has been scored.
    #[must_use]
    pub fn is_scored(&self, round: Round) -> bool {
        self.scored[round]
    }
}

/// Choice and score record storage.
pub trait ChoiceStore {
    /// Insert a choice, or replace the one with the same key.
    ///
    /// On replace the id set and player name are updated.
    fn save_choice(&mut self, choice: Choice) -> Result<Upsert, StoreError>;

    /// Choices of a game, optionally narrowed to a round and/or role,
    /// in submission order.
    fn choices(&self, game_id: &str, round: Option<Round>, role: Option<Role>) -> Result<Vec<Choice>, StoreError>;

    /// Score record of one player.
    fn score_record(&self, game_id: &str, player_username: &str) -> Result<Option<ScoreRecord>, StoreError>;

    /// All score records of a game.
    fn score_records(&self, game_id: &str) -> Result<Vec<ScoreRecord>, StoreError>;

    /// Insert or replace a score record.
    fn save_score_record(&mut self, record: ScoreRecord) -> Result<Upsert, StoreError>;
}

/// Game progress storage.
pub trait StatusStore {
    /// Status of a game, if known.
    fn status(&self, game_id: &str) -> Result<Option<GameStatus>, StoreError>;

    /// Set round and progress of a game. Scored rounds are kept.
    fn set_status(&mut self, game_id: &str, round: Round, status: Progress) -> Result<(), StoreError>;

    /// Record that `round` of a game has been scored.
    fn mark_scored(&mut self, game_id: &str, round: Round) -> Result<(), StoreError>;

    /// Id of the most recently started game.
    fn last_game_id(&self) -> Result<Option<String>, StoreError>;

    /// Remember the most recently started game.
    fn set_last_game_id(&mut self, game_id: &str) -> Result<(), StoreError>;

    /// Saved state of the session RNG, if any.
    fn rng_state(&self) -> Result<Option<GameRngState>, StoreError>;

    /// Save the session RNG state so a restarted session keeps its stream.
    fn set_rng_state(&mut self, state: GameRngState) -> Result<(), StoreError>;
}

/// Everything a game session needs from storage.
pub trait GameStore: ChoiceStore + StatusStore {
    /// Delete all choices, score records and statuses.
    ///
    /// The last-game index and the RNG state survive.
    fn reset(&mut self) -> Result<(), StoreError>;

    /// Make pending writes durable. In-memory stores do nothing.
    fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
