//! Tests for console sessions and replay scripts.

use std::io::Write;
use tictactoe_console::{ExpectedOutcome, Format, ReplayScript, run_interactive, run_replay};
use tictactoe_engine::{GameEngine, GameState, Mark, Outcome};

fn demo_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

#[test]
fn test_interactive_game_to_win_then_reset() {
    let mut engine = GameEngine::new();
    let mut output = Vec::new();
    // 1-based cells: X 1, O 2, X 5, O 3, X 9 (diagonal), then a rejected 4.
    let input = "1\n2\n5\n3\n9\n4\n";
    run_interactive(&mut engine, input.as_bytes(), &mut output, Format::Text).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Winner: X"));
    assert!(text.contains("Notice: The game is over"));
    assert_eq!(*engine.status().outcome(), Outcome::Won(Mark::X));

    let mut output = Vec::new();
    run_interactive(&mut engine, "reset\n".as_bytes(), &mut output, Format::Text).unwrap();
    assert_eq!(engine.status(), GameState::new());
    assert!(String::from_utf8(output).unwrap().ends_with("Next Player: X\n1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n"));
}

#[test]
fn test_interactive_ignores_garbage_and_stops_on_quit() {
    let mut engine = GameEngine::new();
    let mut output = Vec::new();
    run_interactive(
        &mut engine,
        "\nhello\nhelp\n5\nquit\n1\n".as_bytes(),
        &mut output,
        Format::Text,
    )
    .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Unrecognized input \"hello\""));
    assert!(text.contains("Type a cell number"));
    // Only the center was marked; input after `quit` is never read.
    assert_eq!(engine.status().board().count(Mark::X), 1);
    assert_eq!(engine.status().board().count(Mark::O), 0);
}

#[test]
fn test_interactive_json_snapshots() {
    let mut engine = GameEngine::new();
    let mut output = Vec::new();
    run_interactive(&mut engine, "5\n".as_bytes(), &mut output, Format::Json).unwrap();

    let text = String::from_utf8(output).unwrap();
    let snapshots: Vec<GameState> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0], GameState::new());
    assert_eq!(snapshots[1], engine.status());
}

#[test]
fn test_replay_script_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("column.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "name = \"right column\"").unwrap();
    writeln!(file, "moves = [2, 0, 5, 1, 8]").unwrap();
    writeln!(file, "expect = \"x\"").unwrap();
    drop(file);

    let script = ReplayScript::from_file(&path).unwrap();
    assert_eq!(*script.expect(), Some(ExpectedOutcome::X));

    let status = run_replay(&script, &mut Vec::new(), Format::Text).unwrap();
    assert_eq!(*status.outcome(), Outcome::Won(Mark::X));
}

#[test]
fn test_missing_script_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReplayScript::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read replay script"));
}

#[test]
fn test_demo_scripts_meet_expectations() {
    for (name, outcome) in [
        ("diagonal_win.toml", Outcome::Won(Mark::X)),
        ("draw.toml", Outcome::Draw),
    ] {
        let script = ReplayScript::from_file(demo_path(name)).unwrap();
        let status = run_replay(&script, &mut Vec::new(), Format::Json).unwrap();
        assert_eq!(*status.outcome(), outcome, "{}", name);
    }
}
