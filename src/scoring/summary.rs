//! Round summary and round detail views over stored records.

use serde::{Deserialize, Serialize};

use super::record::{RoundScore, ScoreRecord};
use crate::choice::Choice;
use crate::core::{Round, StoreError};
use crate::store::ChoiceStore;

/// Team totals for one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Sum of architects' positive `protected` counts.
    pub architects: u32,
    /// Sum of hackers' positive `successful` counts.
    pub hackers: u32,
}

impl RoundSummary {
    /// Total the given records for `round`. Unscored players add nothing.
    #[must_use]
    pub fn from_records<'r>(records: impl IntoIterator<Item = &'r ScoreRecord>, round: Round) -> Self {
        records
            .into_iter()
            .filter_map(|record| record.round(round))
            .fold(Self::default(), |mut summary, score| {
                match score {
                    RoundScore::Architect(a) => summary.architects += a.protected.unwrap_or(0),
                    RoundScore::Hacker(h) => summary.hackers += h.successful.unwrap_or(0),
                }
                summary
            })
    }
}

impl std::fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "architects {} : hackers {}", self.architects, self.hackers)
    }
}

/// One player's choice and result for a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundDetail {
    /// The submitted choice.
    pub choice: Choice,
    /// The player's result, `None` until the round is scored.
    pub score: Option<RoundScore>,
}

/// Team totals of `round`.
pub fn round_summary<S: ChoiceStore + ?Sized>(store: &S, game_id: &str, round: Round) -> Result<RoundSummary, StoreError> {
    let records = store.score_records(game_id)?;
    Ok(RoundSummary::from_records(&records, round))
}

/// Every choice of `round`, joined with its player's result.
pub fn round_details<S: ChoiceStore + ?Sized>(store: &S, game_id: &str, round: Round) -> Result<Vec<RoundDetail>, StoreError> {
    store
        .choices(game_id, Some(round), None)?
        .into_iter()
        .map(|choice| {
            let score = store
                .score_record(game_id, &choice.player_username)?
                .and_then(|record| record.rounds[round].clone());
            Ok::<_, StoreError>(RoundDetail { choice, score })
        })
        .collect()
}
