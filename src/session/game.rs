//! Game session: the explicit context every game command runs in.
//!
//! A `GameSession` owns the store, the catalog and the id of the game
//! being played. It is created at startup (restoring the last game if
//! the store remembers one) and re-pointed by `new_game` and `reset`.
//!
//! Commands that change scores take `&mut self`, so at most one scoring
//! pass runs at a time for a session. Wrap the session in a `Mutex` to
//! share it between threads.
//!
//! Scored rounds and the RNG position live in the store, so a session
//! reopened from a snapshot neither scores a round twice nor repeats
//! game ids.

use super::intro::round_intro;
use crate::catalog::Catalog;
use crate::choice::{
    parse_choice, random_attack_choice, random_security_choice, Choice, ChoiceIds, ChoiceValidator,
};
use crate::core::{EngineConfig, GameRng, Role, Round, RoundMap, SessionError};
use crate::scoring::{player_report, round_details, round_summary, score_round, RoundDetail, RoundSummary};
use crate::store::{GameStatus, GameStore, MemoryStore, Progress, Upsert};

/// Budget usage of an accepted choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spend {
    /// Architect: protection cost against the round budget.
    Security {
        /// Total cost of the protected components.
        cost: u32,
        /// Round security budget.
        budget: u32,
    },
    /// Hacker: attacks chosen against the round limit.
    Attacks {
        /// Number of attacks chosen.
        count: usize,
        /// Round attack limit.
        limit: usize,
    },
}

/// Confirmation of an accepted choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Round the choice was stored for.
    pub round: Round,
    /// Parsed component ids.
    pub choice: ChoiceIds,
    /// Budget usage.
    pub spend: Spend,
    /// Whether an earlier choice for this round was replaced.
    pub upsert: Upsert,
}

/// One running game.
#[derive(Debug)]
pub struct GameSession<S: GameStore> {
    store: S,
    catalog: Catalog,
    config: EngineConfig,
    rng: GameRng,
    game_id: String,
}

impl GameSession<MemoryStore> {
    /// Start a session on a [`MemoryStore`], backed by
    /// `config.snapshot_path` when set.
    pub fn open(catalog: Catalog, config: EngineConfig) -> Result<Self, SessionError> {
        let store = match &config.snapshot_path {
            Some(path) => MemoryStore::open(path)?,
            None => MemoryStore::new(),
        };
        Self::start(store, catalog, config)
    }
}

impl<S: GameStore> GameSession<S> {
    /// Start a session, restoring the last game or creating a new one.
    ///
    /// A saved RNG state takes precedence over `config.seed`.
    pub fn start(mut store: S, catalog: Catalog, config: EngineConfig) -> Result<Self, SessionError> {
        let mut rng = match store.rng_state()? {
            Some(state) => GameRng::from_state(&state),
            None => GameRng::new(config.seed),
        };
        let game_id = match store.last_game_id()? {
            Some(id) => {
                log::info!("restored game {id}");
                id
            }
            None => {
                let id = rng.game_id();
                store.set_last_game_id(&id)?;
                store.set_rng_state(rng.state())?;
                log::info!("created game {id}");
                id
            }
        };
        if store.status(&game_id)?.is_none() {
            store.set_status(&game_id, Round::FIRST, Progress::InProgress)?;
        }
        store.flush()?;

        Ok(Self {
            store,
            catalog,
            config,
            rng,
            game_id,
        })
    }

    /// Id of the game being played.
    #[must_use]
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// The catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current round and progress. Defaults to round 1 in progress.
    pub fn status(&self) -> Result<GameStatus, SessionError> {
        Ok(self.store.status(&self.game_id)?.unwrap_or_else(|| GameStatus {
            game_id: self.game_id.clone(),
            round: Round::FIRST,
            status: Progress::InProgress,
            scored: RoundMap::default(),
        }))
    }

    fn authorize(&self, user: &str, command: &str) -> Result<(), SessionError> {
        if self.config.admins.is_authorized(user) {
            Ok(())
        } else {
            log::warn!("unauthorized {command} request from {user}");
            Err(SessionError::Unauthorized(user.to_owned()))
        }
    }

    /// Start a new game (admin only). Reuses `game_id` when given.
    pub fn new_game(&mut self, admin: &str, game_id: Option<&str>) -> Result<&str, SessionError> {
        self.authorize(admin, "new game")?;
        let game_id = match game_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => id.to_owned(),
            None => {
                let id = self.rng.game_id();
                self.store.set_rng_state(self.rng.state())?;
                id
            }
        };
        self.store.set_last_game_id(&game_id)?;
        self.store.set_status(&game_id, Round::FIRST, Progress::InProgress)?;
        self.store.flush()?;
        self.game_id = game_id;
        log::info!("new game {} started", self.game_id);
        Ok(&self.game_id)
    }

    /// Wipe all game data and restart the current game at round 1 (admin only).
    pub fn reset(&mut self, admin: &str) -> Result<(), SessionError> {
        self.authorize(admin, "reset")?;
        self.store.reset()?;
        self.store.set_status(&self.game_id, Round::FIRST, Progress::InProgress)?;
        self.store.flush()?;
        log::info!("game data reset");
        Ok(())
    }

    /// Validate and store a player's choice for the current round.
    ///
    /// Rejected choices leave the store untouched. Once the current
    /// round is scored, choices are refused until the next round opens.
    pub fn submit_choice(
        &mut self,
        username: &str,
        player_name: &str,
        role: Role,
        text: &str,
    ) -> Result<Receipt, SessionError> {
        let status = self.status()?;
        if status.status == Progress::Completed {
            return Err(SessionError::GameCompleted);
        }
        let round = status.round;
        if status.is_scored(round) {
            return Err(SessionError::RoundAlreadyScored(round));
        }

        let ids = parse_choice(text)?;
        let validator = ChoiceValidator::new(&self.catalog);
        let spend = match role {
            Role::Architect => Spend::Security {
                cost: validator.validate_security_choice(&ids, round)?,
                budget: self.catalog.security_budget(round),
            },
            Role::Hacker => {
                validator.validate_attack_choice(&ids, round)?;
                Spend::Attacks {
                    count: ids.len(),
                    limit: self.catalog.attack_budget(round),
                }
            }
        };

        let choice = Choice::new(self.game_id.as_str(), username, player_name, role, round, ids.clone());
        let upsert = self.store.save_choice(choice)?;
        self.store.flush()?;
        log::debug!("{username} ({role}) chose {ids:?} for {round}");

        Ok(Receipt {
            round,
            choice: ids,
            spend,
            upsert,
        })
    }

    /// Score a round and return its summary (admin only).
    ///
    /// Defaults to the current round. Rounds after the current one are
    /// rejected, and a round is scored at most once per game.
    pub fn end_round(&mut self, admin: &str, round: Option<u8>) -> Result<RoundSummary, SessionError> {
        self.authorize(admin, "end round")?;
        let status = self.status()?;
        let round = match round {
            Some(number) => Round::try_from(number)?,
            None => status.round,
        };
        if round > status.round {
            return Err(SessionError::RoundNotStarted(round));
        }
        if status.is_scored(round) {
            return Err(SessionError::RoundAlreadyScored(round));
        }

        score_round(&self.catalog, &mut self.store, &self.game_id, round)?;
        self.store.mark_scored(&self.game_id, round)?;
        self.store.flush()?;

        let summary = round_summary(&self.store, &self.game_id, round)?;
        log::info!("{round} is over: {summary}");
        Ok(summary)
    }

    /// Open the next round, or complete the game after the last (admin only).
    pub fn advance_round(&mut self, admin: &str) -> Result<GameStatus, SessionError> {
        self.authorize(admin, "next round")?;
        let current = self.status()?.round;
        let (round, progress) = match current.next() {
            Some(next) => (next, Progress::InProgress),
            None => (current, Progress::Completed),
        };
        self.store.set_status(&self.game_id, round, progress)?;
        self.store.flush()?;
        log::info!("game {} now at {round} ({progress:?})", self.game_id);
        self.status()
    }

    /// Team totals for `round`.
    pub fn round_summary(&self, round: Round) -> Result<RoundSummary, SessionError> {
        Ok(round_summary(&self.store, &self.game_id, round)?)
    }

    /// Every choice of `round` with its result.
    pub fn round_details(&self, round: Round) -> Result<Vec<RoundDetail>, SessionError> {
        Ok(round_details(&self.store, &self.game_id, round)?)
    }

    /// A player's result text for `round`, `None` if not scored.
    pub fn player_report(&self, username: &str, round: Round) -> Result<Option<String>, SessionError> {
        let record = self.store.score_record(&self.game_id, username)?;
        Ok(record.and_then(|r| player_report(&self.catalog, &r, round)))
    }

    /// Briefing for `role` at the start of `round`.
    #[must_use]
    pub fn round_intro(&self, role: Role, round: Round) -> String {
        round_intro(&self.catalog, role, round)
    }

    /// A valid random choice for bot player `name` in the current round.
    ///
    /// Each bot name has its own deterministic stream per round.
    pub fn bot_choice(&self, name: &str, role: Role) -> Result<ChoiceIds, SessionError> {
        let round = self.status()?.round;
        let mut rng = self.rng.for_context(&format!("{}/{name}/{}", self.game_id, round.number()));
        Ok(match role {
            Role::Architect => random_security_choice(&self.catalog, round, &mut rng),
            Role::Hacker => random_attack_choice(&self.catalog, round, &mut rng),
        })
    }
}
