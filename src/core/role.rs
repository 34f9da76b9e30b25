//! Player roles.

use serde::{Deserialize, Serialize};

/// The side a player takes for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Chooses which components to protect within a cost budget.
    Architect,
    /// Chooses which components to attack within a count limit.
    Hacker,
}

impl Role {
    /// Both roles, architects first.
    pub const ALL: [Role; 2] = [Role::Architect, Role::Hacker];

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Architect => "architect",
            Role::Hacker => "hacker",
        }
    }

    /// Parse a role name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "architect" => Some(Role::Architect),
            "hacker" => Some(Role::Hacker),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
