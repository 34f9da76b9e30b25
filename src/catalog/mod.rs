//! Game catalog: components, costs, availability and budgets.
//!
//! ## Key Types
//!
//! - `ComponentId`: Identifier for a component
//! - `Component`: Static component data (cost, availability, TCB flag)
//! - `Catalog`: Read-only lookup plus per-round budgets
//!
//! The built-in scenario is [`firefighting_drone`].

pub mod component;
pub mod registry;
pub mod drone;

pub use component::{Component, ComponentId};
pub use registry::Catalog;
pub use drone::firefighting_drone;
