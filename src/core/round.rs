//! Round identification and per-round data storage.
//!
//! ## Round
//!
//! Type-safe round number. The exercise always runs exactly
//! [`MAX_ROUNDS`] rounds, numbered from 1.
//!
//! ## RoundMap
//!
//! Fixed-size per-round storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Round`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::SessionError;

/// Number of rounds in a game.
pub const MAX_ROUNDS: usize = 3;

/// Round number, 1-based, always in `1..=MAX_ROUNDS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Round(u8);

impl Round {
    /// First round of every game.
    pub const FIRST: Round = Round(1);

    /// Last round of every game.
    pub const LAST: Round = Round(MAX_ROUNDS as u8);

    /// Create a round from its 1-based number.
    ///
    /// Returns `None` outside `1..=MAX_ROUNDS`.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= MAX_ROUNDS {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Get the 1-based round number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the 0-based index into per-round tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// The round after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Whether this is the final round.
    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 as usize == MAX_ROUNDS
    }

    /// Iterate over all rounds in order.
    ///
    /// ```
    /// use redteam_tabletop::core::Round;
    ///
    /// let rounds: Vec<_> = Round::all().map(Round::number).collect();
    /// assert_eq!(rounds, vec![1, 2, 3]);
    /// ```
    pub fn all() -> impl Iterator<Item = Round> {
        (1..=MAX_ROUNDS as u8).map(Round)
    }
}

impl TryFrom<u8> for Round {
    type Error = SessionError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or(SessionError::InvalidRound(i64::from(number)))
    }
}

impl From<Round> for u8 {
    fn from(round: Round) -> Self {
        round.0
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {}", self.0)
    }
}

/// Per-round data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use redteam_tabletop::core::{Round, RoundMap};
///
/// let budgets = RoundMap::from_array([6, 8, 5]);
/// assert_eq!(budgets[Round::FIRST], 6);
/// assert_eq!(budgets[Round::LAST], 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundMap<T> {
    data: [T; MAX_ROUNDS],
}

impl<T> RoundMap<T> {
    /// Create from one value per round, in round order.
    pub const fn from_array(data: [T; MAX_ROUNDS]) -> Self {
        Self { data }
    }

    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Round) -> T) -> Self {
        Self {
            data: [factory(Round(1)), factory(Round(2)), factory(Round(3))],
        }
    }

    /// Get a reference to a round's data.
    #[must_use]
    pub fn get(&self, round: Round) -> &T {
        &self.data[round.index()]
    }

    /// Get a mutable reference to a round's data.
    pub fn get_mut(&mut self, round: Round) -> &mut T {
        &mut self.data[round.index()]
    }

    /// Iterate over (Round, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Round, &T)> {
        Round::all().zip(self.data.iter())
    }
}

impl<T> Index<Round> for RoundMap<T> {
    type Output = T;

    fn index(&self, round: Round) -> &Self::Output {
        self.get(round)
    }
}

impl<T> IndexMut<Round> for RoundMap<T> {
    fn index_mut(&mut self, round: Round) -> &mut Self::Output {
        self.get_mut(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_bounds() {
        assert!(Round::new(0).is_none());
        assert_eq!(Round::new(1), Some(Round::FIRST));
        assert_eq!(Round::new(3), Some(Round::LAST));
        assert!(Round::new(4).is_none());
    }

    #[test]
    fn test_round_next() {
        assert_eq!(Round::FIRST.next().map(Round::number), Some(2));
        assert!(Round::LAST.next().is_none());
        assert!(Round::LAST.is_last());
        assert!(!Round::FIRST.is_last());
    }

    #[test]
    fn test_round_display() {
        assert_eq!(format!("{}", Round::FIRST), "Round 1");
    }

    #[test]
    fn test_round_serde_rejects_out_of_range() {
        let round: Round = serde_json::from_str("2").unwrap();
        assert_eq!(round.number(), 2);
        assert!(serde_json::from_str::<Round>("7").is_err());
        assert!(serde_json::from_str::<Round>("0").is_err());
    }

    #[test]
    fn test_round_map_new() {
        let map: RoundMap<u32> = RoundMap::new(|r| u32::from(r.number()) * 10);

        assert_eq!(map[Round::FIRST], 10);
        assert_eq!(map[Round::new(2).unwrap()], 20);
        assert_eq!(map[Round::LAST], 30);
    }

    #[test]
    fn test_round_map_mutation() {
        let mut map: RoundMap<Vec<u32>> = RoundMap::default();
        map[Round::LAST].push(7);

        assert!(map[Round::FIRST].is_empty());
        assert_eq!(map[Round::LAST], vec![7]);
    }

    #[test]
    fn test_round_map_iter() {
        let map = RoundMap::from_array(['a', 'b', 'c']);
        let pairs: Vec<_> = map.iter().map(|(r, v)| (r.number(), *v)).collect();
        assert_eq!(pairs, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    }
}
