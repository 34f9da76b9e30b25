//! Core engine types: rounds, roles, RNG, configuration, errors.
//!
//! These are shared by every other module and know nothing about
//! a particular scenario's components.

pub mod round;
pub mod role;
pub mod rng;
pub mod config;
pub mod error;

pub use round::{Round, RoundMap, MAX_ROUNDS};
pub use role::Role;
pub use rng::{GameRng, GameRngState};
pub use config::{AdminList, EngineConfig, ADMINS_ENV_VAR};
pub use error::{ChoiceError, ScoringError, SessionError, StoreError};
