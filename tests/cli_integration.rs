use std::process::Command;

use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_chunkdelta").to_string()
}

#[test]
fn cli_diff_writes_output_file() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("new.js");
    let destination = dir.path().join("old.js");
    let output = dir.path().join("out.delta");

    std::fs::write(&source, b"aaaabbbbXcccc").unwrap();
    std::fs::write(&destination, b"aaaabbbbcccc").unwrap();

    let st = Command::new(bin())
        .args(["diff", "--chunk-size", "4", "--output"])
        .arg(&output)
        .arg(&source)
        .arg(&destination)
        .status()
        .unwrap();
    assert!(st.success());

    assert_eq!(
        std::fs::read(&output).unwrap(),
        br#"{"m":true,"l":4,"c":[[0,2],"X",[2,1]]}"#
    );
}

#[test]
fn cli_diff_defaults_to_stdout() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("new.js");
    let destination = dir.path().join("old.js");

    std::fs::write(&source, b"same bytes").unwrap();
    std::fs::write(&destination, b"same bytes").unwrap();

    let out = Command::new(bin())
        .arg("diff")
        .arg(&source)
        .arg(&destination)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(out.stdout, br#"{"m":false,"l":20,"c":[]}"#);
}

#[test]
fn cli_refuses_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("new.js");
    let destination = dir.path().join("old.js");
    let output = dir.path().join("out.delta");

    std::fs::write(&source, b"new").unwrap();
    std::fs::write(&destination, b"old").unwrap();
    std::fs::write(&output, b"precious").unwrap();

    let st = Command::new(bin())
        .args(["diff", "--output"])
        .arg(&output)
        .arg(&source)
        .arg(&destination)
        .status()
        .unwrap();
    assert!(!st.success());
    assert_eq!(std::fs::read(&output).unwrap(), b"precious");

    let st = Command::new(bin())
        .args(["--force", "diff", "--output"])
        .arg(&output)
        .arg(&source)
        .arg(&destination)
        .status()
        .unwrap();
    assert!(st.success());
    assert_ne!(std::fs::read(&output).unwrap(), b"precious");
}

#[test]
fn cli_stats_prints_json_to_stderr() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("new.js");
    let destination = dir.path().join("old.js");

    std::fs::write(&source, b"aaaabbbbXcccc").unwrap();
    std::fs::write(&destination, b"aaaabbbbcccc").unwrap();

    let out = Command::new(bin())
        .args(["diff", "--chunk-size", "4", "--stats"])
        .arg(&source)
        .arg(&destination)
        .output()
        .unwrap();
    assert!(out.status.success());

    let stderr = String::from_utf8(out.stderr).unwrap();
    let stats: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(stats["source_bytes"], 13);
    assert_eq!(stats["chunk_size"], 4);
    assert_eq!(stats["modified"], true);
}

#[test]
fn cli_rejects_oversized_input() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("new.js");
    let destination = dir.path().join("old.js");

    std::fs::write(&source, b"0123456789").unwrap();
    std::fs::write(&destination, b"old").unwrap();

    let st = Command::new(bin())
        .args(["diff", "--max-content-size", "4"])
        .arg(&source)
        .arg(&destination)
        .status()
        .unwrap();
    assert!(!st.success());
}

#[test]
fn cli_config_works() {
    let out = Command::new(bin()).arg("config").output().unwrap();
    assert!(out.status.success());
}
