//! Game session tests.
//!
//! These tests drive a whole game through `GameSession`: admin checks,
//! submissions, round scoring, round progression and persistence.

use redteam_tabletop::catalog::firefighting_drone;
use redteam_tabletop::core::{AdminList, ChoiceError, EngineConfig, Role, Round, SessionError};
use redteam_tabletop::scoring::RoundSummary;
use redteam_tabletop::session::{GameSession, Spend};
use redteam_tabletop::store::{ChoiceStore, MemoryStore, Progress, StatusStore, Upsert};

const ADMIN: &str = "admin";

fn config() -> EngineConfig {
    EngineConfig::new(AdminList::parse("admin, referee")).with_seed(7)
}

fn session() -> GameSession<MemoryStore> {
    GameSession::start(MemoryStore::new(), firefighting_drone(), config()).unwrap()
}

/// A fresh session creates a game at round 1.
#[test]
fn test_start_creates_game() {
    let session = session();
    let status = session.status().unwrap();
    assert_eq!(status.round, Round::FIRST);
    assert_eq!(status.status, Progress::InProgress);
    assert_eq!(session.store().last_game_id().unwrap().as_deref(), Some(session.game_id()));
}

/// Starting on a store that remembers a game continues that game.
#[test]
fn test_start_restores_last_game() {
    let mut store = MemoryStore::new();
    store.set_last_game_id("existing").unwrap();
    store.set_status("existing", Round::LAST, Progress::InProgress).unwrap();

    let session = GameSession::start(store, firefighting_drone(), config()).unwrap();
    assert_eq!(session.game_id(), "existing");
    assert_eq!(session.status().unwrap().round, Round::LAST);
}

/// Admin-only commands reject everybody else.
#[test]
fn test_unauthorized_commands_denied() {
    let mut session = session();

    assert!(matches!(session.new_game("mallory", None), Err(SessionError::Unauthorized(_))));
    assert!(matches!(session.reset("mallory"), Err(SessionError::Unauthorized(_))));
    assert!(matches!(session.end_round("mallory", None), Err(SessionError::Unauthorized(_))));
    assert!(matches!(session.advance_round("mallory"), Err(SessionError::Unauthorized(_))));

    assert!(session.end_round("referee", None).is_ok());
}

/// Accepted choices report their budget usage.
#[test]
fn test_submit_receipts() {
    let mut session = session();

    let receipt = session.submit_choice("alice", "Blue", Role::Architect, "1,2,3").unwrap();
    assert_eq!(receipt.round, Round::FIRST);
    assert_eq!(receipt.spend, Spend::Security { cost: 5, budget: 6 });
    assert_eq!(receipt.upsert, Upsert::Inserted);

    let receipt = session.submit_choice("bob", "Red", Role::Hacker, "1,3").unwrap();
    assert_eq!(receipt.spend, Spend::Attacks { count: 2, limit: 3 });
}

/// Rejected choices are not stored.
#[test]
fn test_rejected_choice_not_stored() {
    let mut session = session();

    let err = session.submit_choice("alice", "Blue", Role::Architect, "1,2,6,7").unwrap_err();
    assert!(matches!(err, SessionError::Choice(ChoiceError::OverBudget { cost: 7, budget: 6 })));

    let err = session.submit_choice("bob", "Red", Role::Hacker, "1,2,3,4").unwrap_err();
    assert!(matches!(err, SessionError::Choice(ChoiceError::TooManyAttacks { .. })));

    assert!(session.store().choices(session.game_id(), None, None).unwrap().is_empty());
}

/// Resubmitting in the same round replaces the earlier choice.
#[test]
fn test_resubmission_last_write_wins() {
    let mut session = session();
    session.submit_choice("alice", "Blue", Role::Architect, "1").unwrap();
    let receipt = session.submit_choice("alice", "Blue team", Role::Architect, "2,3").unwrap();
    assert_eq!(receipt.upsert, Upsert::Updated);

    let choices = session.store().choices(session.game_id(), Some(Round::FIRST), None).unwrap();
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].player_name, "Blue team");
    assert_eq!(choices[0].choice.len(), 2);
}

/// Ending a round scores it once and returns the summary.
#[test]
fn test_end_round_scores_once() {
    let mut session = session();
    session.submit_choice("alice", "Blue", Role::Architect, "1,2").unwrap();
    session.submit_choice("bob", "Red", Role::Hacker, "1,3").unwrap();

    let summary = session.end_round(ADMIN, None).unwrap();
    assert_eq!(summary, RoundSummary { architects: 1, hackers: 1 });

    let again = session.end_round(ADMIN, Some(1));
    assert!(matches!(again, Err(SessionError::RoundAlreadyScored(r)) if r == Round::FIRST));
    assert_eq!(session.round_summary(Round::FIRST).unwrap(), summary);
}

/// A scored round takes no further choices until the next round opens.
#[test]
fn test_submission_after_round_scored_refused() {
    let mut session = session();
    session.submit_choice("alice", "Blue", Role::Architect, "1,2").unwrap();
    session.end_round(ADMIN, None).unwrap();

    let err = session.submit_choice("bob", "Red", Role::Hacker, "3").unwrap_err();
    assert!(matches!(err, SessionError::RoundAlreadyScored(r) if r == Round::FIRST));
    assert_eq!(session.store().choices(session.game_id(), Some(Round::FIRST), None).unwrap().len(), 1);

    session.advance_round(ADMIN).unwrap();
    let receipt = session.submit_choice("bob", "Red", Role::Hacker, "3").unwrap();
    assert_eq!(receipt.round, Round::new(2).unwrap());
}

/// Rounds the game has not reached cannot be ended early.
#[test]
fn test_end_future_round_rejected() {
    let mut session = session();
    let err = session.end_round(ADMIN, Some(3)).unwrap_err();
    assert!(matches!(err, SessionError::RoundNotStarted(r) if r == Round::LAST));
    assert!(!session.status().unwrap().is_scored(Round::LAST));

    session.advance_round(ADMIN).unwrap();
    session.advance_round(ADMIN).unwrap();
    session.submit_choice("alice", "Blue", Role::Architect, "9").unwrap();
    session.submit_choice("bob", "Red", Role::Hacker, "9").unwrap();
    let summary = session.end_round(ADMIN, Some(3)).unwrap();
    assert_eq!(summary, RoundSummary { architects: 1, hackers: 0 });
}

/// Earlier rounds can still be scored late, once.
#[test]
fn test_end_earlier_round_late() {
    let mut session = session();
    session.submit_choice("alice", "Blue", Role::Architect, "1").unwrap();
    session.submit_choice("bob", "Red", Role::Hacker, "1").unwrap();
    session.advance_round(ADMIN).unwrap();

    let summary = session.end_round(ADMIN, Some(1)).unwrap();
    assert_eq!(summary, RoundSummary { architects: 1, hackers: 0 });
    assert!(matches!(session.end_round(ADMIN, Some(1)), Err(SessionError::RoundAlreadyScored(_))));
}

/// Round numbers outside 1..=3 are rejected.
#[test]
fn test_end_round_invalid_number() {
    let mut session = session();
    assert!(matches!(session.end_round(ADMIN, Some(4)), Err(SessionError::InvalidRound(4))));
    assert!(matches!(session.end_round(ADMIN, Some(0)), Err(SessionError::InvalidRound(0))));
}

/// Reports are available after scoring.
#[test]
fn test_player_reports() {
    let mut session = session();
    session.submit_choice("alice", "Blue", Role::Architect, "1,2").unwrap();
    session.submit_choice("bob", "Red", Role::Hacker, "1,3").unwrap();
    assert!(session.player_report("alice", Round::FIRST).unwrap().is_none());

    session.end_round(ADMIN, None).unwrap();

    let alice = session.player_report("alice", Round::FIRST).unwrap().unwrap();
    assert!(alice.contains("Missed critical attacks: 1"));
    assert!(alice.contains("3. Water extinguishing"));

    let bob = session.player_report("bob", Round::FIRST).unwrap().unwrap();
    assert!(bob.contains("Successful breaches: 1"));
    assert!(bob.contains("Blocked breaches: 1"));
}

/// Three rounds, then the game is closed to submissions.
#[test]
fn test_full_game_progression() {
    let mut session = session();

    for n in 1..=3u8 {
        let round = Round::new(n).unwrap();
        assert_eq!(session.status().unwrap().round, round);
        session.submit_choice("alice", "Blue", Role::Architect, "1").unwrap();
        session.submit_choice("bob", "Red", Role::Hacker, "1,2").unwrap();
        let summary = session.end_round(ADMIN, None).unwrap();
        assert_eq!(summary, RoundSummary { architects: 1, hackers: 1 });
        session.advance_round(ADMIN).unwrap();
    }

    let status = session.status().unwrap();
    assert_eq!(status.round, Round::LAST);
    assert_eq!(status.status, Progress::Completed);

    let err = session.submit_choice("alice", "Blue", Role::Architect, "1").unwrap_err();
    assert!(matches!(err, SessionError::GameCompleted));
}

/// Reset wipes choices and scores but keeps the game id.
#[test]
fn test_reset() {
    let mut session = session();
    let game_id = session.game_id().to_owned();
    session.submit_choice("alice", "Blue", Role::Architect, "1").unwrap();
    session.submit_choice("bob", "Red", Role::Hacker, "2").unwrap();
    session.end_round(ADMIN, None).unwrap();
    session.advance_round(ADMIN).unwrap();

    session.reset(ADMIN).unwrap();

    assert_eq!(session.game_id(), game_id);
    assert_eq!(session.status().unwrap().round, Round::FIRST);
    assert!(session.store().choices(&game_id, None, None).unwrap().is_empty());
    assert!(session.store().score_records(&game_id).unwrap().is_empty());
    assert!(session.end_round(ADMIN, None).is_ok());
}

/// New games get a fresh or a given id, and start at round 1.
#[test]
fn test_new_game() {
    let mut session = session();
    let first = session.game_id().to_owned();

    let second = session.new_game(ADMIN, None).unwrap().to_owned();
    assert_ne!(first, second);

    session.new_game(ADMIN, Some(" sheet-123 ")).unwrap();
    assert_eq!(session.game_id(), "sheet-123");
    assert_eq!(session.store().last_game_id().unwrap().as_deref(), Some("sheet-123"));
    assert_eq!(session.status().unwrap().round, Round::FIRST);
}

/// Bot players always produce valid choices.
#[test]
fn test_bot_players() {
    let mut session = session();
    for n in 0..4 {
        let name = format!("bot-{n}");
        let role = if n % 2 == 0 { Role::Architect } else { Role::Hacker };
        let ids = session.bot_choice(&name, role).unwrap();
        let text: Vec<String> = ids.iter().map(ToString::to_string).collect();
        session.submit_choice(&name, &name, role, &text.join(",")).unwrap();
    }
    assert!(session.end_round(ADMIN, None).is_ok());
    assert_eq!(session.round_details(Round::FIRST).unwrap().len(), 4);
}

/// A snapshot-backed session survives a restart.
#[test]
fn test_snapshot_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config().with_snapshot_path(dir.path().join("game.bin"));

    let game_id = {
        let mut session = GameSession::open(firefighting_drone(), config.clone()).unwrap();
        session.submit_choice("alice", "Blue", Role::Architect, "1,2").unwrap();
        session.submit_choice("bob", "Red", Role::Hacker, "1,3").unwrap();
        session.end_round(ADMIN, None).unwrap();
        session.game_id().to_owned()
    };

    let session = GameSession::open(firefighting_drone(), config).unwrap();
    assert_eq!(session.game_id(), game_id);
    assert_eq!(
        session.round_summary(Round::FIRST).unwrap(),
        RoundSummary { architects: 1, hackers: 1 }
    );
}

/// Round briefings come from the session's catalog.
#[test]
fn test_round_intro() {
    let session = session();
    let text = session.round_intro(Role::Hacker, Round::FIRST);
    assert!(text.contains("at most 3"));
}

/// A reopened session remembers which rounds were scored.
#[test]
fn test_snapshot_restart_keeps_scored_rounds() {
    let dir = tempfile::tempdir().unwrap();
    let config = config().with_snapshot_path(dir.path().join("game.bin"));

    {
        let mut session = GameSession::open(firefighting_drone(), config.clone()).unwrap();
        session.submit_choice("alice", "Blue", Role::Architect, "1,2").unwrap();
        session.submit_choice("bob", "Red", Role::Hacker, "1,3").unwrap();
        session.end_round(ADMIN, None).unwrap();
    }

    let mut session = GameSession::open(firefighting_drone(), config).unwrap();
    let err = session.end_round(ADMIN, None).unwrap_err();
    assert!(matches!(err, SessionError::RoundAlreadyScored(r) if r == Round::FIRST));

    let bob = session.store().score_record(session.game_id(), "bob").unwrap().unwrap();
    let score = bob.hacker(Round::FIRST).unwrap();
    assert_eq!(score.successful, Some(1));
    assert_eq!(score.unsuccessful, Some(1));
    assert_eq!(
        session.round_summary(Round::FIRST).unwrap(),
        RoundSummary { architects: 1, hackers: 1 }
    );
}

/// Game ids keep coming from where the previous process left off.
#[test]
fn test_snapshot_restart_does_not_repeat_game_ids() {
    let dir = tempfile::tempdir().unwrap();
    let config = config().with_snapshot_path(dir.path().join("game.bin"));

    let mut seen = Vec::new();
    {
        let mut session = GameSession::open(firefighting_drone(), config.clone()).unwrap();
        seen.push(session.game_id().to_owned());
        seen.push(session.new_game(ADMIN, None).unwrap().to_owned());
    }

    let mut session = GameSession::open(firefighting_drone(), config).unwrap();
    assert_eq!(session.game_id(), seen[1]);
    let next = session.new_game(ADMIN, None).unwrap().to_owned();
    assert!(!seen.contains(&next));
}
