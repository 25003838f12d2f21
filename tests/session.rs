use maze_runner::solve::shortest_path;
use maze_runner::{CellState, MoveError, Session, Settings};

fn seeded(seed: u64) -> Session {
    Session::new(Settings {
        seed: Some(seed),
        ..Settings::default()
    })
}

#[test]
fn same_seed_same_game() {
    let a = seeded(31);
    let b = seeded(31);
    assert_eq!(a.maze(), b.maze());
    assert_eq!(a.player(), b.player());
}

#[test]
fn walking_the_solution_wins() {
    let mut session = seeded(6);
    let maze = session.maze().clone();
    let path = shortest_path(&maze.grid, maze.start, maze.exit).unwrap();
    assert!(!path.is_empty());

    let mut last = None;
    for dir in path {
        last = Some(session.step_named(dir.as_str(), Some("walker")).unwrap());
    }
    let outcome = last.unwrap();
    assert!(outcome.win);
    assert_eq!(outcome.position, maze.exit);
    assert_eq!(session.death_count(), 0);

    let state = session.state();
    assert!(state.win);
    assert!(state.move_history.iter().all(|m| !m.died));
    assert_eq!(
        session.step_named("up", None).unwrap_err(),
        MoveError::GameOver
    );
}

#[test]
fn reset_after_win_starts_fresh_game() {
    let mut session = seeded(10);
    let maze = session.maze().clone();
    for dir in shortest_path(&maze.grid, maze.start, maze.exit).unwrap() {
        session.step(dir, None).unwrap();
    }
    assert!(session.is_over());

    let state = session.reset();
    assert!(!session.is_over());
    assert!(!state.win);
    assert_eq!(state.maze.count(CellState::Exit), 1);
    assert!(state.move_history.is_empty());
}

#[test]
fn move_outcome_json_carries_maze_view() {
    let mut session = seeded(2);
    let maze = session.maze().clone();
    let dir = shortest_path(&maze.grid, maze.start, maze.exit).unwrap()[0];
    let outcome = session.step(dir, None).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["win"], false);
    assert!(json["mazeView"].is_array());
    assert_eq!(json["position"]["x"], outcome.position.x);
}
