//! Per-player round result text.

use super::record::{RoundScore, ScoreRecord};
use crate::catalog::Catalog;
use crate::core::Round;

/// Render a player's result for `round`.
///
/// Architects see blocked and missed attacks plus the narrative of every
/// compromised component. Hackers see successful and blocked attacks.
/// Returns `None` if the player was not scored in `round`.
#[must_use]
pub fn player_report(catalog: &Catalog, record: &ScoreRecord, round: Round) -> Option<String> {
    let mut text = format!("Results for round {}\n", round.number());
    match record.round(round)? {
        RoundScore::Architect(score) => {
            let missed = score.compromised.unwrap_or(0);
            text.push_str(&format!(
                "Successful defence: {}\nMissed critical attacks: {missed}",
                score.protected.unwrap_or(0)
            ));
            if missed > 0 {
                text.push_str("\n\nSuccessful attacks:\n");
                for id in &score.compromised_tcb_components {
                    match catalog.component_by_id(*id) {
                        Some(component) => {
                            text.push_str(&component.attack_line());
                            text.push('\n');
                        }
                        None => log::warn!("report skips unknown component {id}"),
                    }
                }
            }
        }
        RoundScore::Hacker(score) => text.push_str(&format!(
            "Successful breaches: {}\nBlocked breaches: {}",
            score.successful.unwrap_or(0),
            score.unsuccessful.unwrap_or(0)
        )),
    }
    Some(text)
}
