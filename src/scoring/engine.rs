//! Round scoring.
//!
//! Every architect is scored against every hacker's full attack set:
//!
//! - attack on a component outside the TCB: hacker `irrelevant` += 1,
//!   nothing else changes
//! - attack on a protected TCB component: architect `protected` += 1,
//!   hacker `unsuccessful` += 1
//! - attack on an unprotected TCB component: architect `compromised` += 1
//!   and the id is appended to `compromised_tcb_components`,
//!   hacker `successful` += 1
//!
//! Hacker counters therefore grow once per architect. With no architects
//! in a round, hackers are not scored at all.
//!
//! Scoring accumulates into existing records and is not idempotent.
//! Callers must run it at most once per `(game, round)`.

use rustc_hash::FxHashMap;

use super::record::{bump, ScoreRecord};
use crate::catalog::{Catalog, Component};
use crate::choice::Choice;
use crate::core::{Role, Round, ScoringError};
use crate::store::ChoiceStore;

/// Score records being updated in one pass, keyed by username.
pub type ScoreBook = FxHashMap<String, ScoreRecord>;

/// Applies the round scoring rules to choices.
#[derive(Clone, Copy, Debug)]
pub struct RoundScorer<'a> {
    catalog: &'a Catalog,
}

impl<'a> RoundScorer<'a> {
    /// Create a scorer over `catalog`.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Score one round in memory.
    ///
    /// Records missing from `book` are created from the choices. Every
    /// attacked id is resolved before anything is changed, so on
    /// [`ScoringError::CatalogLookup`] `book` is left untouched.
    pub fn score(
        &self,
        game_id: &str,
        round: Round,
        architects: &[Choice],
        hackers: &[Choice],
        book: &mut ScoreBook,
    ) -> Result<(), ScoringError> {
        let attacks = self.resolve_attacks(hackers)?;

        for choice in architects.iter().chain(hackers) {
            let record = book
                .entry(choice.player_username.clone())
                .or_insert_with(|| ScoreRecord::new(game_id, &choice.player_username, &choice.player_name));
            record.player_name.clone_from(&choice.player_name);
        }

        for architect in architects {
            let mut defender = book
                .remove(&architect.player_username)
                .unwrap_or_else(|| ScoreRecord::new(game_id, &architect.player_username, &architect.player_name));
            defender.architect_mut(round).touch();

            for (hacker, targets) in hackers.iter().zip(&attacks) {
                let attacker = book
                    .entry(hacker.player_username.clone())
                    .or_insert_with(|| ScoreRecord::new(game_id, &hacker.player_username, &hacker.player_name));
                Self::resolve_duel(round, architect, &mut defender, attacker, targets);
            }

            book.insert(architect.player_username.clone(), defender);
        }

        Ok(())
    }

    fn resolve_duel(
        round: Round,
        architect: &Choice,
        defender: &mut ScoreRecord,
        attacker: &mut ScoreRecord,
        targets: &[&Component],
    ) {
        for component in targets {
            let hacker = attacker.hacker_mut(round);
            if !component.in_tcb {
                bump(&mut hacker.irrelevant);
                continue;
            }
            let defense = defender.architect_mut(round);
            if architect.contains(component.id) {
                bump(&mut defense.protected);
                bump(&mut hacker.unsuccessful);
            } else {
                bump(&mut defense.compromised);
                defense.compromised_tcb_components.push(component.id);
                bump(&mut hacker.successful);
            }
        }
    }

    fn resolve_attacks(&self, hackers: &[Choice]) -> Result<Vec<Vec<&'a Component>>, ScoringError> {
        hackers
            .iter()
            .map(|hacker| {
                hacker
                    .choice
                    .iter()
                    .map(|&id| {
                        self.catalog.component_by_id(id).ok_or_else(|| {
                            log::error!(
                                "aborting round scoring: {} attacked unknown component {id}",
                                hacker.player_username
                            );
                            ScoringError::CatalogLookup {
                                id,
                                player: hacker.player_username.clone(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }
}

/// Score `round` of `game_id` from stored choices and write back every
/// touched record.
///
/// Nothing is written if any stored attack references an unknown
/// component. Returns the updated records.
pub fn score_round<S: ChoiceStore + ?Sized>(
    catalog: &Catalog,
    store: &mut S,
    game_id: &str,
    round: Round,
) -> Result<Vec<ScoreRecord>, ScoringError> {
    let architects = store.choices(game_id, Some(round), Some(Role::Architect))?;
    let hackers = store.choices(game_id, Some(round), Some(Role::Hacker))?;
    log::info!(
        "scoring {round} of game {game_id}: {} architects, {} hackers",
        architects.len(),
        hackers.len()
    );

    let mut book = ScoreBook::default();
    for choice in architects.iter().chain(&hackers) {
        if let Some(record) = store.score_record(game_id, &choice.player_username)? {
            book.insert(choice.player_username.clone(), record);
        }
    }

    RoundScorer::new(catalog).score(game_id, round, &architects, &hackers, &mut book)?;

    let mut updated: Vec<ScoreRecord> = book.into_values().collect();
    updated.sort_by(|a, b| a.player_username.cmp(&b.player_username));
    for record in &updated {
        store.save_score_record(record.clone())?;
    }
    Ok(updated)
}
