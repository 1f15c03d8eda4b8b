use assert_cmd::Command;

#[test]
fn help_lists_drill_options() {
    let output = Command::cargo_bin("mathdrill")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--operation"));
    assert!(stdout.contains("--difficulty"));
    assert!(stdout.contains("earnings-growth"));
}

#[test]
fn out_of_range_difficulty_is_rejected() {
    Command::cargo_bin("mathdrill")
        .unwrap()
        .args(["--no-log", "-d", "11"])
        .assert()
        .failure();
}

#[test]
fn save_config_writes_merged_settings_without_tty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    // no tty on stdin: settings are saved before the tty check exits
    Command::cargo_bin("mathdrill")
        .unwrap()
        .args(["--no-log", "--save-config", "-o", "percent", "-d", "3", "--config"])
        .arg(&path)
        .assert()
        .failure();

    let saved: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(saved["operation"], "percent");
    assert_eq!(saved["difficulty"], 3);
}
