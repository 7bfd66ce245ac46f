//! Integration tests for the lanedrag-config crate.

use std::fs;
use std::path::PathBuf;

use lanedrag_config::{Config, ConfigError, FeedbackConfig, board_store};
use lanedrag_protocol::{KanbanBoard, Task, TaskStatus};
use tempfile::TempDir;

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("lanedrag.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Where the board lives
            board_file: "boards/team.json",
            feedback: {
                opacity: 0.6,
                shadow: false,
            },
            mouse_capture: false,
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.board_file, Some(PathBuf::from("boards/team.json")));
    assert_eq!(config.feedback.opacity, 0.6);
    assert_eq!(config.feedback.scale, FeedbackConfig::default().scale);
    assert!(!config.feedback.shadow);
    assert!(!config.mouse_capture);
}

#[tokio::test]
async fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");

    let original = Config {
        board_file: Some(dir.path().join("board.json")),
        feedback: FeedbackConfig::none(),
        mouse_capture: true,
    };

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(original, loaded);
}

#[tokio::test]
async fn config_empty_object_is_default() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("lanedrag.json");
    fs::write(&config_path, "{}").unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config, Config::default());
    assert!(config.board_file.is_none());
}

#[tokio::test]
async fn config_load_nonexistent_fails() {
    let result = Config::load_from("/nonexistent/path/lanedrag.json5");
    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[tokio::test]
async fn config_out_of_range_feedback_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("lanedrag.json5");
    fs::write(&config_path, "{ feedback: { scale: 4 } }").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidFeedback { .. }));
    assert!(err.to_string().contains("scale"));
}

#[tokio::test]
async fn config_invalid_json5_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("lanedrag.json5");
    fs::write(&config_path, "{ board_file: ").unwrap();

    let result = Config::load_from(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseJson5(_))));
}

#[test]
fn board_file_roundtrip_keeps_lanes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("board.json");

    let mut board = KanbanBoard::new();
    let task = Task::new("Write docs").with_description("User guide");
    let id = task.id;
    board.add_task(task);
    board.add_task(Task::new("Ship it").with_status(TaskStatus::Done));
    assert!(board.move_task(id, TaskStatus::InProgress));

    board_store::save_board(&path, &board).unwrap();
    let loaded = board_store::load_board(&path)
        .unwrap()
        .expect("board file should exist");

    assert_eq!(loaded, board);
    assert_eq!(loaded.lane(TaskStatus::InProgress).len(), 1);
    assert_eq!(
        loaded.get_task(id).and_then(|t| t.description_text()),
        Some("User guide")
    );
}

#[test]
fn missing_board_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let loaded = board_store::load_board(dir.path().join("board.json")).unwrap();
    assert!(loaded.is_none());
}
