//! Game catalog: component lookup, availability and per-round budgets.
//!
//! The catalog is built once at startup and never mutated afterwards.
//! Every operation here is a read-only lookup.

use rustc_hash::FxHashMap;

use super::component::{Component, ComponentId};
use crate::core::{ChoiceError, Role, Round, RoundMap};

/// Immutable table of components plus round limits.
///
/// ## Example
///
/// ```
/// use redteam_tabletop::catalog::{Catalog, Component, ComponentId};
/// use redteam_tabletop::core::{Round, RoundMap};
///
/// let mut catalog = Catalog::new(RoundMap::from_array([4, 4, 4]), RoundMap::from_array([2, 2, 2]));
/// catalog.register(Component::new(ComponentId::new(1), "Radio", 2));
/// catalog.register(Component::new(ComponentId::new(2), "Camera", 1));
///
/// let ids = [ComponentId::new(1), ComponentId::new(2)];
/// assert_eq!(catalog.security_cost(&ids, Round::FIRST), Ok(3));
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Components sorted by id.
    components: Vec<Component>,
    index: FxHashMap<ComponentId, usize>,
    security_budget: RoundMap<u32>,
    attack_budget: RoundMap<usize>,
    objectives: String,
    notices: FxHashMap<(Role, Round), String>,
}

impl Catalog {
    /// Create an empty catalog with the given round limits.
    #[must_use]
    pub fn new(security_budget: RoundMap<u32>, attack_budget: RoundMap<usize>) -> Self {
        Self {
            components: Vec::new(),
            index: FxHashMap::default(),
            security_budget,
            attack_budget,
            objectives: String::new(),
            notices: FxHashMap::default(),
        }
    }

    /// Register a component.
    ///
    /// Panics if a component with the same ID already exists.
    pub fn register(&mut self, component: Component) {
        if self.index.contains_key(&component.id) {
            panic!("Component with ID {} already registered", component.id);
        }
        let at = self.components.partition_point(|c| c.id < component.id);
        self.index.insert(component.id, at);
        for shifted in &self.components[at..] {
            if let Some(slot) = self.index.get_mut(&shifted.id) {
                *slot += 1;
            }
        }
        self.components.insert(at, component);
    }

    /// Set the security objectives and assumptions briefing.
    #[must_use]
    pub fn with_objectives(mut self, text: impl Into<String>) -> Self {
        self.objectives = text.into();
        self
    }

    /// Set the notice shown to `role` when `round` starts.
    #[must_use]
    pub fn with_notice(mut self, role: Role, round: Round, text: impl Into<String>) -> Self {
        self.notices.insert((role, round), text.into());
        self
    }

    /// Look up a component.
    #[must_use]
    pub fn component_by_id(&self, id: ComponentId) -> Option<&Component> {
        self.index.get(&id).map(|&i| &self.components[i])
    }

    /// Ids that can be chosen in `round`, ascending.
    #[must_use]
    pub fn attackable_component_ids(&self, round: Round) -> Vec<ComponentId> {
        self.available(round).map(|c| c.id).collect()
    }

    /// Whether `id` exists and is available in `round`.
    #[must_use]
    pub fn is_attackable(&self, id: ComponentId, round: Round) -> bool {
        self.component_by_id(id).is_some_and(|c| c.is_available(round))
    }

    /// Components available in `round`, ascending by id.
    pub fn available(&self, round: Round) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.is_available(round))
    }

    /// Sum of protection costs.
    ///
    /// Order-independent. Repeated ids are charged once per occurrence.
    /// Fails on the first id that is unknown or not yet available.
    pub fn security_cost(&self, ids: &[ComponentId], round: Round) -> Result<u32, ChoiceError> {
        ids.iter().try_fold(0u32, |total, &id| {
            let component = self
                .component_by_id(id)
                .ok_or(ChoiceError::UnknownComponent(id))?;
            if !component.is_available(round) {
                return Err(ChoiceError::NotYetAvailable { id, round });
            }
            Ok(total + component.cost)
        })
    }

    /// Maximum protection cost in `round`.
    #[must_use]
    pub fn security_budget(&self, round: Round) -> u32 {
        self.security_budget[round]
    }

    /// Maximum number of attacks in `round`.
    #[must_use]
    pub fn attack_budget(&self, round: Round) -> usize {
        self.attack_budget[round]
    }

    /// `"name: narrative"` lines for every attack available in `round`.
    #[must_use]
    pub fn attacks_text(&self, round: Round) -> Vec<String> {
        self.available(round).map(Component::attack_line).collect()
    }

    /// Security objectives and assumptions briefing.
    #[must_use]
    pub fn objectives(&self) -> &str {
        &self.objectives
    }

    /// Notice shown to `role` at the start of `round`, if any.
    #[must_use]
    pub fn round_notice(&self, role: Role, round: Round) -> Option<&str> {
        self.notices.get(&(role, round)).map(String::as_str)
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the catalog has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over all components, ascending by id.
    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }
}
