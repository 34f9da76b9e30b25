//! Random valid choices for bot players.
//!
//! Both generators only return choices that pass validation for the
//! round they were generated for. Ids come back sorted.

use super::record::ChoiceIds;
use crate::catalog::{Catalog, ComponentId};
use crate::core::{GameRng, Round};

/// Pick components to protect, greedily in random order, within budget.
///
/// Empty only when no available component fits the budget.
pub fn random_security_choice(catalog: &Catalog, round: Round, rng: &mut GameRng) -> ChoiceIds {
    let mut candidates: Vec<_> = catalog.available(round).collect();
    rng.shuffle(&mut candidates);

    let budget = catalog.security_budget(round);
    let mut spent = 0;
    let mut chosen = ChoiceIds::new();
    for component in candidates {
        if spent + component.cost <= budget {
            spent += component.cost;
            chosen.push(component.id);
        }
    }
    chosen.sort_unstable();
    chosen
}

/// Pick between one attack and the round's attack limit, without repeats.
pub fn random_attack_choice(catalog: &Catalog, round: Round, rng: &mut GameRng) -> ChoiceIds {
    let mut candidates: Vec<ComponentId> = catalog.attackable_component_ids(round);
    rng.shuffle(&mut candidates);

    let limit = catalog.attack_budget(round).min(candidates.len());
    if limit == 0 {
        return ChoiceIds::new();
    }
    let count = rng.gen_range_usize(1..limit + 1);
    let mut chosen: ChoiceIds = candidates.into_iter().take(count).collect();
    chosen.sort_unstable();
    chosen
}
