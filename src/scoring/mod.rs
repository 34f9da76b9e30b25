//! Round scoring: score records, the scoring pass, summaries and reports.
//!
//! ## Key Types
//!
//! - `ScoreRecord`: one player's accumulated results in a game
//! - `RoundScorer`: applies the scoring rules to a round's choices
//! - `RoundSummary` / `RoundDetail`: read views over a scored round

pub mod record;
pub mod engine;
pub mod summary;
pub mod report;

pub use record::{ArchitectScore, HackerScore, RecordKey, RoundScore, ScoreRecord};
pub use engine::{score_round, RoundScorer, ScoreBook};
pub use summary::{round_details, round_summary, RoundDetail, RoundSummary};
pub use report::player_report;
