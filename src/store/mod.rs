//! Storage collaborators: traits and an in-memory implementation.

pub mod traits;
pub mod memory;

pub use traits::{ChoiceStore, GameStatus, GameStore, Progress, StatusStore, Upsert};
pub use memory::MemoryStore;
