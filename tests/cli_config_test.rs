//! Init and config commands against a scratch directory.

use std::process::Command;
use tempfile::TempDir;

fn duck_tails(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_duck-tails"));
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn init_creates_settings_file() {
    let temp_dir = TempDir::new().unwrap();

    let output = duck_tails(&temp_dir)
        .arg("init")
        .output()
        .expect("Failed to run init command");

    assert!(output.status.success());

    let config_path = temp_dir.path().join(".ducktails/settings.toml");
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("version = 1"));
    assert!(content.contains("[logging]"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();

    let first = duck_tails(&temp_dir).arg("init").output().unwrap();
    assert!(first.status.success());

    let second = duck_tails(&temp_dir).arg("init").output().unwrap();
    assert_eq!(second.status.code(), Some(1));

    let forced = duck_tails(&temp_dir).args(["init", "--force"]).output().unwrap();
    assert!(forced.status.success());
}

#[test]
fn config_command_shows_file_values() {
    let temp_dir = TempDir::new().unwrap();

    let config_dir = temp_dir.path().join(".ducktails");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("settings.toml"),
        "version = 2\n\n[logging]\ndefault = \"info\"\n",
    )
    .unwrap();

    let output = duck_tails(&temp_dir)
        .arg("config")
        .output()
        .expect("Failed to run config command");

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version = 2"));
    assert!(stdout.contains("default = \"info\""));
}
