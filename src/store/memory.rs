//! In-memory game store with optional snapshot file.
//!
//! Tables are `im` persistent maps, so cloning the whole store is O(1)
//! and a snapshot never blocks writers for long. Choice order is the
//! order of first submission; a resubmission keeps its original slot.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use super::traits::{ChoiceStore, GameStatus, GameStore, Progress, StatusStore, Upsert};
use crate::choice::{Choice, ChoiceKey};
use crate::core::{GameRngState, Role, Round, RoundMap, StoreError};
use crate::scoring::{RecordKey, ScoreRecord};

/// A choice with its submission sequence number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Sequenced {
    seq: u64,
    choice: Choice,
}

/// Serializable contents of a [`MemoryStore`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct Tables {
    choices: OrdMap<ChoiceKey, Sequenced>,
    scores: OrdMap<RecordKey, ScoreRecord>,
    statuses: OrdMap<String, GameStatus>,
    last_game_id: Option<String>,
    rng: Option<GameRngState>,
    next_seq: u64,
}

/// In-memory [`GameStore`].
///
/// ## Example
///
/// ```
/// use redteam_tabletop::store::{MemoryStore, StatusStore, Progress};
/// use redteam_tabletop::core::Round;
///
/// let mut store = MemoryStore::new();
/// store.set_status("g1", Round::FIRST, Progress::InProgress).unwrap();
/// assert_eq!(store.status("g1").unwrap().unwrap().round, Round::FIRST);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Tables,
    snapshot_path: Option<PathBuf>,
}

impl MemoryStore {
    /// Create an empty store that is never written to disk.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store backed by a snapshot file.
    ///
    /// Loads the file if it exists, otherwise starts empty.
    /// [`GameStore::flush`] writes back to the same path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let tables = if path.exists() {
            Self::read_tables(&path)?
        } else {
            log::info!("no snapshot at {}, starting empty", path.display());
            Tables::default()
        };
        Ok(Self {
            tables,
            snapshot_path: Some(path),
        })
    }

    /// Write all tables to `path`.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), StoreError> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, &self.tables)?;
        log::debug!("snapshot written to {}", path.display());
        Ok(())
    }

    /// Replace all tables with the contents of `path`.
    pub fn load_snapshot(&mut self, path: &Path) -> Result<(), StoreError> {
        self.tables = Self::read_tables(path)?;
        Ok(())
    }

    fn read_tables(path: &Path) -> Result<Tables, StoreError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Number of stored choices across all games.
    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.tables.choices.len()
    }
}

impl ChoiceStore for MemoryStore {
    fn save_choice(&mut self, choice: Choice) -> Result<Upsert, StoreError> {
        let key = choice.key();
        match self.tables.choices.get_mut(&key) {
            Some(existing) => {
                existing.choice.choice = choice.choice;
                existing.choice.player_name = choice.player_name;
                existing.choice.role = choice.role;
                Ok(Upsert::Updated)
            }
            None => {
                let seq = self.tables.next_seq;
                self.tables.next_seq += 1;
                self.tables.choices.insert(key, Sequenced { seq, choice });
                Ok(Upsert::Inserted)
            }
        }
    }

    fn choices(&self, game_id: &str, round: Option<Round>, role: Option<Role>) -> Result<Vec<Choice>, StoreError> {
        let mut found: Vec<&Sequenced> = self
            .tables
            .choices
            .values()
            .filter(|s| s.choice.game_id == game_id)
            .filter(|s| round.map_or(true, |r| s.choice.round == r))
            .filter(|s| role.map_or(true, |r| s.choice.role == r))
            .collect();
        found.sort_by_key(|s| s.seq);
        Ok(found.into_iter().map(|s| s.choice.clone()).collect())
    }

    fn score_record(&self, game_id: &str, player_username: &str) -> Result<Option<ScoreRecord>, StoreError> {
        let key = RecordKey {
            game_id: game_id.to_owned(),
            player_username: player_username.to_owned(),
        };
        Ok(self.tables.scores.get(&key).cloned())
    }

    fn score_records(&self, game_id: &str) -> Result<Vec<ScoreRecord>, StoreError> {
        Ok(self
            .tables
            .scores
            .values()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect())
    }

    fn save_score_record(&mut self, record: ScoreRecord) -> Result<Upsert, StoreError> {
        match self.tables.scores.insert(record.key(), record) {
            Some(_) => Ok(Upsert::Updated),
            None => Ok(Upsert::Inserted),
        }
    }
}

impl StatusStore for MemoryStore {
    fn status(&self, game_id: &str) -> Result<Option<GameStatus>, StoreError> {
        Ok(self.tables.statuses.get(game_id).cloned())
    }

    fn set_status(&mut self, game_id: &str, round: Round, status: Progress) -> Result<(), StoreError> {
        let scored = self
            .tables
            .statuses
            .get(game_id)
            .map(|existing| existing.scored.clone())
            .unwrap_or_default();
        self.tables.statuses.insert(
            game_id.to_owned(),
            GameStatus {
                game_id: game_id.to_owned(),
                round,
                status,
                scored,
            },
        );
        Ok(())
    }

    fn mark_scored(&mut self, game_id: &str, round: Round) -> Result<(), StoreError> {
        let mut status = self.tables.statuses.get(game_id).cloned().unwrap_or_else(|| GameStatus {
            game_id: game_id.to_owned(),
            round,
            status: Progress::InProgress,
            scored: RoundMap::default(),
        });
        status.scored[round] = true;
        self.tables.statuses.insert(game_id.to_owned(), status);
        Ok(())
    }

    fn last_game_id(&self) -> Result<Option<String>, StoreError> {
        Ok(self.tables.last_game_id.clone())
    }

    fn set_last_game_id(&mut self, game_id: &str) -> Result<(), StoreError> {
        self.tables.last_game_id = Some(game_id.to_owned());
        Ok(())
    }

    fn rng_state(&self) -> Result<Option<GameRngState>, StoreError> {
        Ok(self.tables.rng.clone())
    }

    fn set_rng_state(&mut self, state: GameRngState) -> Result<(), StoreError> {
        self.tables.rng = Some(state);
        Ok(())
    }
}

impl GameStore for MemoryStore {
    fn reset(&mut self) -> Result<(), StoreError> {
        self.tables.choices.clear();
        self.tables.scores.clear();
        self.tables.statuses.clear();
        Ok(())
    }

    fn flush(&self) -> Result<(), StoreError> {
        match &self.snapshot_path {
            Some(path) => self.save_snapshot(path),
            None => Ok(()),
        }
    }
}
