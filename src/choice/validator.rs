//! Choice validation.
//!
//! Validation is pure: nothing is stored or changed. A rejected choice
//! must be resubmitted in full; nothing is ever partially applied.
//!
//! - Security (architect): every id known and available, total cost
//!   within the round's security budget.
//! - Attack (hacker): at most the round's attack limit, every id
//!   attackable in the round.

use super::parse::parse_choice;
use crate::catalog::{Catalog, ComponentId};
use crate::core::{ChoiceError, Role, Round};

/// Validates choices against a catalog.
#[derive(Clone, Copy, Debug)]
pub struct ChoiceValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> ChoiceValidator<'a> {
    /// Create a validator over `catalog`.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Check a protection choice. Returns its total cost.
    pub fn validate_security_choice(&self, ids: &[ComponentId], round: Round) -> Result<u32, ChoiceError> {
        if ids.is_empty() {
            return Err(ChoiceError::Empty);
        }
        let cost = self.catalog.security_cost(ids, round)?;
        let budget = self.catalog.security_budget(round);
        if cost > budget {
            log::info!("security choice rejected: cost {cost} over budget {budget} in {round}");
            return Err(ChoiceError::OverBudget { cost, budget });
        }
        log::debug!("security choice accepted: {ids:?}, cost {cost}");
        Ok(cost)
    }

    /// Check an attack choice.
    pub fn validate_attack_choice(&self, ids: &[ComponentId], round: Round) -> Result<(), ChoiceError> {
        if ids.is_empty() {
            return Err(ChoiceError::Empty);
        }
        let limit = self.catalog.attack_budget(round);
        if ids.len() > limit {
            return Err(ChoiceError::TooManyAttacks { count: ids.len(), limit });
        }
        for &id in ids {
            match self.catalog.component_by_id(id) {
                None => return Err(ChoiceError::UnknownComponent(id)),
                Some(c) if !c.is_available(round) => {
                    return Err(ChoiceError::NotYetAvailable { id, round })
                }
                Some(_) => {}
            }
        }
        log::debug!("attack choice accepted: {ids:?}");
        Ok(())
    }

    /// Check a choice for either role.
    ///
    /// Returns the protection cost for architects and `None` for hackers.
    pub fn validate(&self, role: Role, ids: &[ComponentId], round: Round) -> Result<Option<u32>, ChoiceError> {
        match role {
            Role::Architect => self.validate_security_choice(ids, round).map(Some),
            Role::Hacker => self.validate_attack_choice(ids, round).map(|()| None),
        }
    }

    /// Whether free-text `choice` is an acceptable protection choice.
    #[must_use]
    pub fn is_security_choice_valid(&self, choice: &str, round: Round) -> bool {
        parse_choice(choice)
            .and_then(|ids| self.validate_security_choice(&ids, round))
            .is_ok()
    }

    /// Whether free-text `choice` is an acceptable attack choice.
    #[must_use]
    pub fn is_attack_choice_valid(&self, choice: &str, round: Round) -> bool {
        parse_choice(choice)
            .and_then(|ids| self.validate_attack_choice(&ids, round))
            .is_ok()
    }
}
