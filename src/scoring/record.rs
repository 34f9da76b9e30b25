//! Score records - one per player per game.
//!
//! A record accretes one [`RoundScore`] per round the player was scored
//! in. Counters are `Option<u32>`: `None` means never touched in that
//! round, `Some(0)` means scored zero.
//!
//! ## Stored format
//!
//! Counters are written as `-1` when absent so that existing stored
//! data (where `-1` was the "never scored" marker) reads back unchanged.

use serde::{Deserialize, Serialize};

use crate::catalog::ComponentId;
use crate::core::{Role, Round, RoundMap};

/// Increment a round counter. The first hit yields 1.
pub(crate) fn bump(counter: &mut Option<u32>) {
    *counter = Some(counter.map_or(1, |n| n + 1));
}

/// `Option<u32>` <-> `-1` sentinel integer.
mod sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.map_or(-1, i64::from))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        if raw < 0 {
            return Ok(None);
        }
        u32::try_from(raw).map(Some).map_err(serde::de::Error::custom)
    }
}

/// An architect's result for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectScore {
    /// Attacks that hit a protected TCB component.
    #[serde(with = "sentinel")]
    pub protected: Option<u32>,

    /// Attacks that hit an unprotected TCB component.
    #[serde(with = "sentinel")]
    pub compromised: Option<u32>,

    /// Compromised components, one entry per successful attack, in scoring order.
    pub compromised_tcb_components: Vec<ComponentId>,
}

impl ArchitectScore {
    /// Mark as scored: absent counters become zero.
    pub(crate) fn touch(&mut self) {
        self.protected.get_or_insert(0);
        self.compromised.get_or_insert(0);
    }
}

/// A hacker's result for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackerScore {
    /// Attacks on unprotected TCB components.
    #[serde(with = "sentinel")]
    pub successful: Option<u32>,

    /// Attacks on protected TCB components.
    #[serde(with = "sentinel")]
    pub unsuccessful: Option<u32>,

    /// Attacks on components outside the TCB.
    #[serde(with = "sentinel")]
    pub irrelevant: Option<u32>,
}

/// Role-specific result for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundScore {
    /// Defender result.
    Architect(ArchitectScore),
    /// Attacker result.
    Hacker(HackerScore),
}

impl RoundScore {
    /// Fresh, never-scored result for `role`.
    #[must_use]
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Architect => RoundScore::Architect(ArchitectScore::default()),
            Role::Hacker => RoundScore::Hacker(HackerScore::default()),
        }
    }

    /// Role this result belongs to.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            RoundScore::Architect(_) => Role::Architect,
            RoundScore::Hacker(_) => Role::Hacker,
        }
    }

    /// The architect result, if this is one.
    #[must_use]
    pub fn as_architect(&self) -> Option<&ArchitectScore> {
        match self {
            RoundScore::Architect(score) => Some(score),
            RoundScore::Hacker(_) => None,
        }
    }

    /// The hacker result, if this is one.
    #[must_use]
    pub fn as_hacker(&self) -> Option<&HackerScore> {
        match self {
            RoundScore::Hacker(score) => Some(score),
            RoundScore::Architect(_) => None,
        }
    }
}

/// Storage key of a score record.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    /// Game id.
    pub game_id: String,
    /// Player username.
    pub player_username: String,
}

/// All round results of one player in one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Game id.
    pub game_id: String,

    /// Player username.
    pub player_username: String,

    /// Latest display name.
    pub player_name: String,

    /// Per-round results. `None` until the round is scored for this player.
    pub rounds: RoundMap<Option<RoundScore>>,
}

impl ScoreRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new(
        game_id: impl Into<String>,
        player_username: impl Into<String>,
        player_name: impl Into<String>,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            player_username: player_username.into(),
            player_name: player_name.into(),
            rounds: RoundMap::default(),
        }
    }

    /// Storage key.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey {
            game_id: self.game_id.clone(),
            player_username: self.player_username.clone(),
        }
    }

    /// Result for `round`, if scored.
    #[must_use]
    pub fn round(&self, round: Round) -> Option<&RoundScore> {
        self.rounds[round].as_ref()
    }

    /// Architect result for `round`, if the player defended that round.
    #[must_use]
    pub fn architect(&self, round: Round) -> Option<&ArchitectScore> {
        self.round(round).and_then(RoundScore::as_architect)
    }

    /// Hacker result for `round`, if the player attacked that round.
    #[must_use]
    pub fn hacker(&self, round: Round) -> Option<&HackerScore> {
        self.round(round).and_then(RoundScore::as_hacker)
    }

    /// Find-or-create the result for `round` with `role`.
    ///
    /// A stored result of the other role is replaced.
    pub fn round_mut(&mut self, round: Round, role: Role) -> &mut RoundScore {
        let slot = &mut self.rounds[round];
        if slot.as_ref().is_some_and(|score| score.role() != role) {
            log::warn!(
                "{} changed role in {round}, discarding the earlier result",
                self.player_username
            );
            *slot = None;
        }
        slot.get_or_insert_with(|| RoundScore::empty(role))
    }

    /// Find-or-create the architect result for `round`.
    pub fn architect_mut(&mut self, round: Round) -> &mut ArchitectScore {
        match self.round_mut(round, Role::Architect) {
            RoundScore::Architect(score) => score,
            RoundScore::Hacker(_) => unreachable!("round_mut returns the requested role"),
        }
    }

    /// Find-or-create the hacker result for `round`.
    pub fn hacker_mut(&mut self, round: Round) -> &mut HackerScore {
        match self.round_mut(round, Role::Hacker) {
            RoundScore::Hacker(score) => score,
            RoundScore::Architect(_) => unreachable!("round_mut returns the requested role"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_first_hit_is_one() {
        let mut counter = None;
        bump(&mut counter);
        assert_eq!(counter, Some(1));
        bump(&mut counter);
        assert_eq!(counter, Some(2));

        let mut zero = Some(0);
        bump(&mut zero);
        assert_eq!(zero, Some(1));
    }

    #[test]
    fn test_touch_keeps_existing_counts() {
        let mut score = ArchitectScore { protected: Some(3), ..ArchitectScore::default() };
        score.touch();
        assert_eq!(score.protected, Some(3));
        assert_eq!(score.compromised, Some(0));
    }

    #[test]
    fn test_sentinel_serialization() {
        let score = HackerScore { successful: Some(2), unsuccessful: None, irrelevant: Some(0) };
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["successful"], 2);
        assert_eq!(json["unsuccessful"], -1);
        assert_eq!(json["irrelevant"], 0);

        let back: HackerScore = serde_json::from_value(json).unwrap();
        assert_eq!(back, score);
    }

    #[test]
    fn test_round_score_keyed_by_role() {
        let score = RoundScore::empty(Role::Architect);
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["architect"]["protected"], -1);
        assert!(json["architect"]["compromised_tcb_components"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_find_or_create_round() {
        let mut record = ScoreRecord::new("g", "alice", "Alice");
        assert!(record.round(Round::FIRST).is_none());

        bump(&mut record.hacker_mut(Round::FIRST).successful);
        bump(&mut record.hacker_mut(Round::FIRST).successful);

        assert_eq!(record.hacker(Round::FIRST).and_then(|h| h.successful), Some(2));
        assert!(record.architect(Round::FIRST).is_none());
        assert!(record.round(Round::LAST).is_none());
    }

    #[test]
    fn test_role_switch_replaces_round() {
        let mut record = ScoreRecord::new("g", "alice", "Alice");
        bump(&mut record.hacker_mut(Round::FIRST).irrelevant);

        record.architect_mut(Round::FIRST).touch();

        assert!(record.hacker(Round::FIRST).is_none());
        assert_eq!(record.architect(Round::FIRST).and_then(|a| a.protected), Some(0));
    }
}
