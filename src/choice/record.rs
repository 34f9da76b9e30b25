//! Choice records - one per player per round.
//!
//! A resubmission for the same `(game_id, player_username, round)`
//! replaces the earlier one. See [`ChoiceKey`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::ComponentId;
use crate::core::{Role, Round};

/// Component ids picked by one player in one round.
///
/// Order is preserved as submitted. Repeats are kept.
pub type ChoiceIds = SmallVec<[ComponentId; 8]>;

/// A player's submission for a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Game the choice belongs to.
    pub game_id: String,

    /// Stable chat username, the player's identity.
    pub player_username: String,

    /// Display name (team name), may change between submissions.
    pub player_name: String,

    /// Side the player is on.
    pub role: Role,

    /// Round the choice is for.
    pub round: Round,

    /// Protected or attacked component ids.
    pub choice: ChoiceIds,
}

impl Choice {
    /// Create a choice record.
    #[must_use]
    pub fn new(
        game_id: impl Into<String>,
        player_username: impl Into<String>,
        player_name: impl Into<String>,
        role: Role,
        round: Round,
        choice: ChoiceIds,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            player_username: player_username.into(),
            player_name: player_name.into(),
            role,
            round,
            choice,
        }
    }

    /// Upsert key: last write wins per key.
    #[must_use]
    pub fn key(&self) -> ChoiceKey {
        ChoiceKey {
            game_id: self.game_id.clone(),
            player_username: self.player_username.clone(),
            round: self.round,
        }
    }

    /// Whether `id` is in this choice.
    #[must_use]
    pub fn contains(&self, id: ComponentId) -> bool {
        self.choice.contains(&id)
    }
}

/// Identity of a choice record.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChoiceKey {
    /// Game id.
    pub game_id: String,
    /// Player username.
    pub player_username: String,
    /// Round.
    pub round: Round,
}
