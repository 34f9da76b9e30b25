//! Engine configuration.
//!
//! - `AdminList`: usernames allowed to run admin commands
//! - `EngineConfig`: admin list, RNG seed, optional snapshot path
//!
//! Budgets and component availability are part of the catalog, not
//! of the configuration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the comma-separated admin usernames.
pub const ADMINS_ENV_VAR: &str = "GAME_ADMINS_TG_USERNAMES";

/// Fixed allow-list of admin usernames.
///
/// ```
/// use redteam_tabletop::core::AdminList;
///
/// let admins = AdminList::parse("admin1, admin2");
/// assert!(admins.is_authorized("admin2"));
/// assert!(!admins.is_authorized("admin3"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminList {
    usernames: FxHashSet<String>,
}

impl AdminList {
    /// Parse a comma-separated list. All whitespace is dropped and
    /// empty entries are ignored.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        let compact: String = list.chars().filter(|c| !c.is_whitespace()).collect();
        let usernames = compact
            .split(',')
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect();
        Self { usernames }
    }

    /// Read the list from [`ADMINS_ENV_VAR`]. Missing variable means no admins.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(ADMINS_ENV_VAR) {
            Ok(list) => Self::parse(&list),
            Err(_) => {
                log::warn!("{ADMINS_ENV_VAR} is not set, admin commands are disabled");
                Self::default()
            }
        }
    }

    /// Whether `user` may run admin commands.
    #[must_use]
    pub fn is_authorized(&self, user: &str) -> bool {
        self.usernames.contains(user)
    }

    /// Number of admins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    /// Whether nobody is an admin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }
}

/// Session-wide configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Users allowed to start, reset, end and advance rounds.
    pub admins: AdminList,

    /// Seed for game ids and bot players.
    pub seed: u64,

    /// Where the store snapshot is written after each state change.
    /// `None` keeps everything in memory.
    pub snapshot_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Create a configuration with the given admins.
    #[must_use]
    pub fn new(admins: AdminList) -> Self {
        Self {
            admins,
            ..Self::default()
        }
    }

    /// Load admins from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AdminList::from_env())
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Persist snapshots to `path`.
    #[must_use]
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_admin() {
        let admins = AdminList::parse("admin");
        assert!(admins.is_authorized("admin"));
        assert_eq!(admins.len(), 1);
    }

    #[test]
    fn test_admin_list_strips_spaces() {
        let admins = AdminList::parse("admin1, admin2");
        assert!(admins.is_authorized("admin1"));
        assert!(admins.is_authorized("admin2"));
        assert!(!admins.is_authorized("admin3"));
        assert!(!admins.is_authorized(" admin2"));
    }

    #[test]
    fn test_empty_list_denies_everyone() {
        let admins = AdminList::parse(" , ");
        assert!(admins.is_empty());
        assert!(!admins.is_authorized(""));
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::new(AdminList::parse("root"))
            .with_seed(9)
            .with_snapshot_path("/tmp/game.bin");
        assert_eq!(config.seed, 9);
        assert!(config.admins.is_authorized("root"));
        assert_eq!(config.snapshot_path, Some(PathBuf::from("/tmp/game.bin")));
    }
}
