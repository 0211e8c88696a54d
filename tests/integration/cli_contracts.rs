use clap::Parser;
use mindmaze::config::MazeConfig;
use mindmaze::tooling::cli::{Cli, CliContext, Commands};
use std::fs;
use tempfile::TempDir;

fn context() -> CliContext {
    CliContext::with_config(MazeConfig::default())
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["mindmaze", "tree"],
        vec!["mindmaze", "tree", "--reveal"],
        vec!["mindmaze", "clue", "7"],
        vec!["mindmaze", "verify", "--format", "json"],
        vec!["mindmaze", "run", "script.txt"],
        vec!["mindmaze", "--config", "maze.toml", "run", "script.txt", "--format", "json"],
        vec!["mindmaze", "play"],
        vec!["mindmaze", "--log-level", "debug", "config"],
    ];
    for args in cases {
        assert!(Cli::try_parse_from(args.clone()).is_ok(), "expected valid parse for {args:?}");
    }
}

#[test]
fn parse_rejects_bad_arguments() {
    assert!(Cli::try_parse_from(["mindmaze"]).is_err());
    assert!(Cli::try_parse_from(["mindmaze", "clue"]).is_err());
    assert!(Cli::try_parse_from(["mindmaze", "clue", "seven"]).is_err());
    assert!(Cli::try_parse_from(["mindmaze", "run"]).is_err());
}

#[test]
fn verify_json_contract_has_required_fields() {
    let output = context()
        .execute(&Commands::Verify {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["valid"], true);
    assert!(parsed["leaf_count"].as_u64().unwrap() > 15);
    assert!(parsed["missing"].as_array().unwrap().is_empty());
    assert!(parsed["duplicated"].as_array().unwrap().is_empty());
    assert_eq!(parsed["locations"].as_object().unwrap().len(), 15);
}

#[test]
fn run_script_json_contract() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("solve.maze");
    fs::write(
        &script,
        "# find a clue and try the archive\n\
         open explorer\n\
         cd Network\n\
         cd Shared\n\
         view Solution_Acidity.log\n\
         open notes\n\
         answer 13 pH\n\
         open archive\n\
         submit yen\n",
    )
    .unwrap();

    let output = context()
        .execute(&Commands::Run {
            script,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["active"], "final");
    assert_eq!(parsed["gate"], "success");
    assert_eq!(parsed["answers"][12], "pH");
    assert_eq!(parsed["taskbar"].as_array().unwrap().len(), 4);

    let explorer = parsed["windows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|w| w["id"] == "explorer")
        .expect("explorer window should be visible");
    assert_eq!(explorer["body"]["type"], "file-browser");
    assert_eq!(
        explorer["body"]["breadcrumb"],
        serde_json::json!(["???", "Network", "Shared"])
    );
}

#[test]
fn run_script_text_output_shows_taskbar() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("notes.maze");
    fs::write(&script, "open notes\nanswer 1 compilation\n").unwrap();

    let output = context()
        .execute(&Commands::Run {
            script,
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("Taskbar"));
    assert!(output.contains("My Notes"));
    assert!(output.contains("Initials: C______________"));
}

#[test]
fn run_script_reports_bad_line() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.maze");
    fs::write(&script, "open notes\njump\n").unwrap();
    let err = context()
        .execute(&Commands::Run {
            script,
            format: "text".to_string(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn run_missing_script_is_io_error() {
    let temp = TempDir::new().unwrap();
    let result = context().execute(&Commands::Run {
        script: temp.path().join("absent.maze"),
        format: "text".to_string(),
    });
    assert!(matches!(result, Err(mindmaze::error::ApiError::Io(_))));
}

#[test]
fn config_file_changes_unlock_phrase() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("maze.toml");
    fs::write(&config_path, "[gate]\nunlock_phrase = \"why\"\n").unwrap();
    let script = temp.path().join("s.maze");
    fs::write(&script, "open archive\nsubmit WHY\n").unwrap();

    let ctx = CliContext::new(Some(config_path)).unwrap();
    let output = ctx
        .execute(&Commands::Run {
            script,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["gate"], "success");
}
