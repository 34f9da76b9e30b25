//! Component definitions - static catalog data.
//!
//! A `Component` is one box on the architecture diagram. Architects pay
//! its `cost` to protect it; hackers may attack it once it is available.

use serde::{Deserialize, Serialize};

use crate::core::Round;

/// Catalog-unique component identifier (positive integer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Create a new component ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static component definition.
///
/// ## Example
///
/// ```
/// use redteam_tabletop::catalog::{Component, ComponentId};
/// use redteam_tabletop::core::Round;
///
/// let nav = Component::new(ComponentId::new(9), "Inertial navigation", 1)
///     .available_from(Round::LAST)
///     .with_attack_text("Reports false coordinates.");
///
/// assert!(nav.in_tcb);
/// assert!(!nav.is_available(Round::FIRST));
/// assert!(nav.is_available(Round::LAST));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Unique identifier.
    pub id: ComponentId,

    /// Display name.
    pub name: String,

    /// Budget units an architect spends to protect it.
    pub cost: u32,

    /// Earliest round in which either role may choose it.
    pub available_from_round: Round,

    /// Whether a breach of this component counts as a security failure.
    pub in_tcb: bool,

    /// What happens when the attack succeeds.
    pub attack_text: String,
}

impl Component {
    /// Create a component available from round 1 and inside the TCB.
    #[must_use]
    pub fn new(id: ComponentId, name: impl Into<String>, cost: u32) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            available_from_round: Round::FIRST,
            in_tcb: true,
            attack_text: String::new(),
        }
    }

    /// Set the first round it can be chosen.
    #[must_use]
    pub fn available_from(mut self, round: Round) -> Self {
        self.available_from_round = round;
        self
    }

    /// Mark as outside the trusted computing base.
    #[must_use]
    pub fn outside_tcb(mut self) -> Self {
        self.in_tcb = false;
        self
    }

    /// Set the attack narrative.
    #[must_use]
    pub fn with_attack_text(mut self, text: impl Into<String>) -> Self {
        self.attack_text = text.into();
        self
    }

    /// Whether it can be chosen in `round`.
    #[must_use]
    pub fn is_available(&self, round: Round) -> bool {
        self.available_from_round <= round
    }

    /// `"name: narrative"` line shown to hackers and in reports.
    #[must_use]
    pub fn attack_line(&self) -> String {
        format!("{}: {}", self.name, self.attack_text)
    }
}
