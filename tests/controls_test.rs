use std::sync::Arc;

use quadbeat::management::{ControlBoard, ControlId, ControlState};

fn idle(label: &str) -> ControlState {
    ControlState {
        enabled: true,
        label: label.to_string(),
    }
}

fn busy(label: &str) -> ControlState {
    ControlState {
        enabled: false,
        label: label.to_string(),
    }
}

#[test]
fn test_unknown_control_reads_idle() {
    let board = ControlBoard::new();
    assert_eq!(board.state(&ControlId::ClearPlaylist), idle("Clear Playlist"));
    assert_eq!(
        board.state(&ControlId::AddToPlaylist("S1".to_string())),
        idle("Add to Playlist")
    );
}

#[test]
fn test_guard_restores_control_on_drop() {
    let board = Arc::new(ControlBoard::new());
    let add = ControlId::AddToPlaylist("S1".to_string());

    let guard = board.try_lock(add.clone()).expect("first lock");
    assert_eq!(board.state(&add), busy("Adding..."));

    // same control cannot be re-triggered while busy
    assert!(board.try_lock(add.clone()).is_none());

    // a different control is independent
    let other = board.try_lock(ControlId::AddToPlaylist("S2".to_string()));
    assert!(other.is_some());

    drop(guard);
    assert_eq!(board.state(&add), idle("Add to Playlist"));
    assert!(board.try_lock(add).is_some());
}

#[test]
fn test_guard_released_on_early_return() {
    fn fails(board: &Arc<ControlBoard>) -> Result<(), String> {
        let _guard = board.try_lock(ControlId::ClearPlaylist).ok_or("busy")?;
        Err("boom".to_string())
    }

    let board = Arc::new(ControlBoard::new());
    assert!(fails(&board).is_err());
    assert!(board.is_enabled(&ControlId::ClearPlaylist));
}

#[test]
fn test_mood_lock_only_disables_the_chosen_mood() {
    let board = Arc::new(ControlBoard::with_moods(["happy", "sad", "calm"]));

    let guard = board.lock_mood("sad").expect("mood lock");
    let moods = board.moods();
    assert_eq!(
        moods,
        vec![
            ("happy".to_string(), idle("happy")),
            ("sad".to_string(), busy("Loading...")),
            ("calm".to_string(), idle("calm")),
        ]
    );

    assert!(board.lock_mood("sad").is_none());

    drop(guard);
    for (mood, state) in board.moods() {
        assert_eq!(state, idle(&mood));
    }
}

#[test]
fn test_second_mood_resets_first_and_any_release_resets_all() {
    let board = Arc::new(ControlBoard::with_moods(["happy", "sad"]));

    let first = board.lock_mood("happy").unwrap();
    let second = board.lock_mood("sad").unwrap();
    assert_eq!(board.state(&ControlId::Mood("happy".to_string())), idle("happy"));
    assert_eq!(
        board.state(&ControlId::Mood("sad".to_string())),
        busy("Loading...")
    );

    drop(first);
    assert_eq!(board.state(&ControlId::Mood("sad".to_string())), idle("sad"));
    drop(second);
    assert_eq!(board.state(&ControlId::Mood("sad".to_string())), idle("sad"));
}

#[test]
fn test_unregistered_mood_is_added_on_lock() {
    let board = Arc::new(ControlBoard::with_moods(["happy"]));
    let guard = board.lock_mood("Neutral").unwrap();
    assert_eq!(board.moods().len(), 2);
    drop(guard);
    assert_eq!(board.state(&ControlId::Mood("Neutral".to_string())), idle("Neutral"));
}

#[test]
fn test_per_song_controls_leave_the_board_when_released() {
    let board = Arc::new(ControlBoard::with_moods(["happy"]));

    for i in 0..50 {
        let add = board.try_lock(ControlId::AddToPlaylist(format!("S{}", i)));
        let remove = board.try_lock(ControlId::RemoveFromPlaylist(format!("S{}", i)));
        assert_eq!(board.len(), 3);
        drop(add);
        drop(remove);
    }
    assert_eq!(board.len(), 1);

    let clear = board.try_lock(ControlId::ClearPlaylist).unwrap();
    drop(clear);
    assert_eq!(board.len(), 2);
    assert_eq!(board.state(&ControlId::ClearPlaylist), idle("Clear Playlist"));
    assert_eq!(
        board.state(&ControlId::AddToPlaylist("S0".to_string())),
        idle("Add to Playlist")
    );
}
