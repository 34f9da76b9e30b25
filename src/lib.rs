//! # redteam-tabletop
//!
//! Scoring engine for an "architects vs hackers" security tabletop
//! exercise.
//!
//! Players pick a role. Each of the three rounds, architects choose
//! components to protect within a cost budget and hackers choose
//! components to attack within a count limit. At the end of a round the
//! engine scores every architect against every hacker.
//!
//! ## Design Principles
//!
//! 1. **Pure Scoring**: `RoundScorer` is a function of catalog and
//!    choices. Storage is a collaborator behind traits.
//!
//! 2. **Trusted Computing Base**: Only attacks on TCB components count
//!    as successes or failures. Others are tracked as irrelevant.
//!
//! 3. **Never Scored Is Not Zero**: Round counters are `Option<u32>`.
//!
//! ## Modules
//!
//! - `core`: Rounds, roles, RNG, configuration, errors
//! - `catalog`: Components, budgets, the firefighting drone scenario
//! - `choice`: Choice records, parsing, validation, bot choices
//! - `scoring`: Score records, round scoring, summaries, reports
//! - `store`: Storage traits and the in-memory store
//! - `session`: `GameSession`, admin-guarded game commands

pub mod core;
pub mod catalog;
pub mod choice;
pub mod scoring;
pub mod store;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    AdminList, EngineConfig, GameRng,
    Role, Round, RoundMap, MAX_ROUNDS,
    ChoiceError, ScoringError, SessionError, StoreError,
};

pub use crate::catalog::{Catalog, Component, ComponentId, firefighting_drone};

pub use crate::choice::{Choice, ChoiceIds, ChoiceValidator, parse_choice};

pub use crate::scoring::{
    ScoreRecord, RoundScore, ArchitectScore, HackerScore,
    RoundScorer, RoundSummary, RoundDetail, score_round,
};

pub use crate::store::{ChoiceStore, StatusStore, GameStore, MemoryStore, GameStatus, Progress, Upsert};

pub use crate::session::{GameSession, Receipt, Spend};
