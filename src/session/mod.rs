//! Game session and round briefings.
//!
//! `GameSession` replaces process-wide "current game" state: every
//! command goes through a session value that the caller owns.

mod game;
mod intro;

pub use game::{GameSession, Receipt, Spend};
pub use intro::round_intro;
