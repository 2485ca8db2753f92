//! End-to-end runs of the `hostkit` binary.

use std::io::Write;
use std::process::Command;

fn hostkit() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hostkit"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_online_json_keeps_stdout_machine_readable() {
    // `.invalid` never resolves, so the notice path is always taken.
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[probe]\ndomain = \"invalid\"").unwrap();

    let output = hostkit()
        .arg("--config")
        .arg(config.path())
        .args(["online", "--json"])
        .env("DDEV_DEBUG", "1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["active"], false);
    assert!(outcome["host"].as_str().unwrap().ends_with(".invalid"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Internet connection not detected"));
    assert!(stderr.contains("connectivity DEBUG:"));
}

#[test]
fn test_contains_and_random() {
    let output = hostkit().args(["contains", "b", "a", "b", "c"]).output().unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "true");

    let output = hostkit().args(["random", "--length", "7"]).output().unwrap();
    let line = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert_eq!(line.len(), 7);
    assert!(line.bytes().all(|b| b.is_ascii_lowercase()));
}
