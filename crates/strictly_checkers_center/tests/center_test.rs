//! Tests for the game center and per-game handles.

use strictly_checkers::{BoardPreset, Color, EndReason, Move, MoveError, Notice};
use strictly_checkers_center::{CenterError, GameCenter, GameId};

#[test]
fn test_create_game_validates_players() {
    let center = GameCenter::new();
    assert_eq!(
        center.create_game("alice", "alice", BoardPreset::Standard).err(),
        Some(CenterError::SamePlayer("alice".to_string()))
    );
    assert_eq!(
        center.create_game("", "bob", BoardPreset::Standard).err(),
        Some(CenterError::InvalidName(String::new()))
    );

    center
        .create_game("alice", "bob", BoardPreset::Standard)
        .expect("first game");
    assert_eq!(
        center.create_game("carol", "bob", BoardPreset::Standard).err(),
        Some(CenterError::PlayerInGame("bob".to_string()))
    );
    assert_eq!(center.game_count(), 1);
}

#[test]
fn test_lookup_by_player_and_id() {
    let center = GameCenter::new();
    let handle = center
        .create_game("alice", "bob", BoardPreset::Standard)
        .expect("created");

    assert_eq!(center.game_for("bob").map(|h| h.id()), Some(handle.id()));
    assert_eq!(center.game(handle.id()).map(|h| h.id()), Some(handle.id()));
    assert!(center.game(GameId(99)).is_none());
    assert!(center.in_game("alice"));
    assert!(!center.in_game("carol"));
    assert_eq!(center.opponent_of("alice").map(|p| p.name().clone()), Some("bob".to_string()));
    assert_eq!(center.opponent_of("bob").map(|p| p.name().clone()), Some("alice".to_string()));
    assert!(center.opponent_of("carol").is_none());
}

#[test]
fn test_turns_are_enforced() {
    let center = GameCenter::new();
    let handle = center
        .create_game("alice", "bob", BoardPreset::Standard)
        .expect("created");
    let opening = Move::from_coords(5, 0, 4, 1);

    assert_eq!(
        handle.test_move("bob", opening),
        Err(CenterError::NotYourTurn(Color::Red))
    );
    assert_eq!(
        handle.test_move("carol", opening),
        Err(CenterError::NotInGame("carol".to_string()))
    );
    assert_eq!(handle.test_move("alice", opening), Ok(Notice::ValidMove));
    assert_eq!(handle.submit_turn("alice"), Ok(Notice::TurnSubmitted));
    assert_eq!(
        handle.submit_turn("alice"),
        Err(CenterError::NotYourTurn(Color::White))
    );
    assert_eq!(
        handle.backup_move("bob"),
        Err(CenterError::Move(MoveError::NoMovesToBackup))
    );
}

#[test]
fn test_each_player_sees_their_own_side() {
    let center = GameCenter::new();
    let handle = center
        .create_game("alice", "bob", BoardPreset::Standard)
        .expect("created");
    let red_view = handle.snapshot_for("alice").expect("seated");
    let white_view = handle.snapshot_for("bob").expect("seated");
    assert_eq!(red_view, handle.spectator_snapshot());
    assert_eq!(
        red_view.cell(7, 0).and_then(|cell| cell.piece).map(|p| p.color()),
        Some(Color::Red)
    );
    assert_eq!(
        white_view.cell(7, 0).and_then(|cell| cell.piece).map(|p| p.color()),
        Some(Color::White)
    );
}

#[test]
fn test_resign_and_exit() {
    let center = GameCenter::new();
    let handle = center
        .create_game("alice", "bob", BoardPreset::Standard)
        .expect("created");
    assert_eq!(center.active_games().len(), 1);

    assert_eq!(center.resign("bob"), Ok(Notice::Resigned));
    assert_eq!(
        handle.game_over_message().as_deref(),
        Some("bob has resigned.")
    );
    assert!(center.active_games().is_empty());
    assert_eq!(
        center.resign("alice"),
        Err(CenterError::Move(MoveError::GameOver))
    );

    center.exit_game("alice").expect("seated");
    assert!(!center.in_game("alice"));
    assert!(center.game(handle.id()).is_some());
    center.exit_game("bob").expect("seated");
    assert!(center.game(handle.id()).is_none());
    assert_eq!(
        center.exit_game("bob"),
        Err(CenterError::NotInGame("bob".to_string()))
    );

    center
        .create_game("alice", "bob", BoardPreset::Standard)
        .expect("players are free again");
}

#[test]
fn test_leaving_a_running_game_resigns_it() {
    let center = GameCenter::new();
    let handle = center
        .create_game("alice", "bob", BoardPreset::Standard)
        .expect("created");
    center.exit_game("alice").expect("seated");
    assert_eq!(
        handle.read(|game| game.end().map(|end| (end.reason, end.ending_color))),
        Some((EndReason::Resigned, Color::Red))
    );
}

#[test]
fn test_concurrent_submissions_commit_one_turn() {
    let center = GameCenter::new();
    let handle = center
        .create_game("alice", "bob", BoardPreset::Standard)
        .expect("created");
    let opening = Move::from_coords(5, 0, 4, 1);

    let committed: usize = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|_| {
                let handle = handle.clone();
                scope.spawn(move || {
                    // Rejections here are expected: only one racer can win.
                    let _ = handle.test_move("alice", opening);
                    handle.submit_turn("alice").is_ok()
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().map_or(0, usize::from))
            .sum()
    });

    assert_eq!(committed, 1);
    assert_eq!(handle.read(|game| game.turns_played()), 1);
    assert_eq!(handle.read(|game| game.current_color()), Color::White);
}

#[tokio::test]
async fn test_submitted_turns_are_announced() {
    let center = GameCenter::new();
    let handle = center
        .create_game("alice", "bob", BoardPreset::Standard)
        .expect("created");
    let mut events = handle.subscribe();
    assert_eq!(events.borrow().turns_played, 0);

    let worker = handle.clone();
    tokio::task::spawn_blocking(move || {
        worker.test_move("alice", Move::from_coords(5, 0, 4, 1))?;
        worker.submit_turn("alice")
    })
    .await
    .expect("worker finished")
    .expect("turn submitted");

    events.changed().await.expect("sender alive");
    let event = *events.borrow_and_update();
    assert_eq!(event.turns_played, 1);
    assert_eq!(event.next, Color::White);
    assert!(event.end.is_none());

    // The polling flag is kept alongside the channel.
    assert!(handle.consume_new_turn());
    assert!(!handle.consume_new_turn());
}

#[tokio::test]
async fn test_game_end_is_announced() {
    let center = GameCenter::new();
    let handle = center
        .create_game("alice", "bob", BoardPreset::Win)
        .expect("created");
    let mut events = handle.subscribe();

    handle
        .test_move("alice", Move::from_coords(5, 0, 3, 2))
        .expect("legal jump");
    handle.submit_turn("alice").expect("submitted");

    events.changed().await.expect("sender alive");
    let end = events.borrow_and_update().end.expect("game ended");
    assert_eq!(end.reason, EndReason::Captured);
    assert_eq!(end.winner(), Color::Red);
}
