//! Error types.
//!
//! Each layer has its own error enum. Higher layers wrap lower ones
//! with `#[from]` so `?` composes across the crate.

use thiserror::Error;

use super::round::Round;
use crate::catalog::ComponentId;

/// A player's submission was rejected. The whole choice is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// No component ids were given.
    #[error("choice is empty")]
    Empty,

    /// A token could not be read as a component id.
    #[error("'{0}' is not a component id")]
    Malformed(String),

    /// The id is not in the catalog.
    #[error("no component with id {0}")]
    UnknownComponent(ComponentId),

    /// The component only appears in a later round.
    #[error("component {id} is not available in {round}")]
    NotYetAvailable {
        /// Offending component.
        id: ComponentId,
        /// Round the choice was made for.
        round: Round,
    },

    /// Protection costs more than the round allows.
    #[error("protection costs {cost}, budget is {budget}")]
    OverBudget {
        /// Total cost of the choice.
        cost: u32,
        /// Security budget of the round.
        budget: u32,
    },

    /// More attacks than the round allows.
    #[error("{count} attacks chosen, limit is {limit}")]
    TooManyAttacks {
        /// Number of attacks chosen.
        count: usize,
        /// Attack budget of the round.
        limit: usize,
    },
}

/// Storage collaborator failure. Propagated uninterpreted.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Snapshot file could not be read or written.
    #[error("snapshot io: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot bytes could not be encoded or decoded.
    #[error("snapshot codec: {0}")]
    Codec(#[from] bincode::Error),
}

/// Round scoring aborted. No score record was written.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// A stored choice references a component missing from the catalog.
    #[error("scoring referenced unknown component {id} (player {player})")]
    CatalogLookup {
        /// Missing component.
        id: ComponentId,
        /// Player whose choice referenced it.
        player: String,
    },

    /// Reading choices or writing records failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Game session command failure.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The user is not on the admin allow-list.
    #[error("{0} is not allowed to run admin commands")]
    Unauthorized(String),

    /// The last round has been played.
    #[error("game is completed")]
    GameCompleted,

    /// Round number outside `1..=MAX_ROUNDS`.
    #[error("round {0} does not exist")]
    InvalidRound(i64),

    /// This round was already scored; it takes no more choices and
    /// cannot be scored again.
    #[error("{0} has already been scored")]
    RoundAlreadyScored(Round),

    /// The game has not reached this round yet.
    #[error("{0} has not started yet")]
    RoundNotStarted(Round),

    /// Submission rejected.
    #[error(transparent)]
    Choice(#[from] ChoiceError),

    /// Scoring aborted.
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// Storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
