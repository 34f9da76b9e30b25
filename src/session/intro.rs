//! Round briefing text shown to players when a round starts.

use crate::catalog::Catalog;
use crate::core::{Role, Round};

/// Briefing for `role` at the start of `round`.
///
/// Hackers get the full attack list in round 1 and whenever availability
/// changed since the previous round; otherwise they are told the attacks
/// are unchanged.
#[must_use]
pub fn round_intro(catalog: &Catalog, role: Role, round: Round) -> String {
    let mut parts: Vec<String> = Vec::new();

    if round == Round::FIRST {
        let lead = match role {
            Role::Architect => "As the architect you agreed these security objectives and assumptions with the business:",
            Role::Hacker => "You score if your attack violates at least one security objective:",
        };
        parts.push(format!("{lead}\n\n{}", catalog.objectives()));
    }

    if let Some(notice) = catalog.round_notice(role, round) {
        parts.push(notice.to_owned());
    }

    match role {
        Role::Architect => parts.push(format!(
            "Security budget: {}.\nWhich components will you protect?\n\
             Reply with component numbers separated by commas (e.g. 1,2)",
            catalog.security_budget(round)
        )),
        Role::Hacker => {
            let limit = catalog.attack_budget(round);
            let ask = format!(
                "Which attacks do you choose? (at most {limit}, each attack works independently)\n\
                 Reply with attack numbers separated by commas (e.g. 1,2)"
            );
            if attacks_changed(catalog, round) {
                parts.push(format!(
                    "You can attack in the following ways:\n{}\n\n{ask}",
                    catalog.attacks_text(round).join("\n")
                ));
            } else {
                parts.push(format!("Attacks and consequences are unchanged, but you have more options.\n\n{ask}"));
            }
        }
    }

    parts.join("\n\n")
}

fn attacks_changed(catalog: &Catalog, round: Round) -> bool {
    match Round::new(round.number() - 1) {
        Some(previous) => catalog.attackable_component_ids(previous) != catalog.attackable_component_ids(round),
        None => true,
    }
}
