#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with `HOME` inside the temp dir so a developer's own
/// `~/.craftlog/craftlog.conf` is never read or written.
pub fn cl() -> Command {
    let home = env::temp_dir().join("craftlog_test_home");
    fs::create_dir_all(&home).expect("create test home");

    let mut cmd = cargo_bin_cmd!("craftlog");
    cmd.env("HOME", &home).env_remove("XDG_CONFIG_HOME");
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("craftlog_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh history file path for a test.
pub fn setup_history(name: &str) -> String {
    temp_path(&format!("{name}_history"), "csv")
}

/// Write `content` to a temp file and return its path.
pub fn write_temp(name: &str, content: &str) -> String {
    let p = temp_path(name, "csv");
    fs::write(&p, content).expect("write temp file");
    p
}

/// Initialize a history and add two sessions through the CLI.
pub fn init_with_data(history: &str) {
    cl().args(["--file", history, "--test", "init"])
        .assert()
        .success();

    cl().args([
        "--file",
        history,
        "add",
        "2025-09-01",
        "09:00:00",
        "25",
        "0",
        "--note",
        "first",
    ])
    .assert()
    .success();

    cl().args([
        "--file",
        history,
        "add",
        "2025-09-15",
        "18:30",
        "12",
        "45",
        "--note",
        "second",
    ])
    .assert()
    .success();
}
