use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_jsonapi-rels"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_deep_path_ids() {
    let output = Command::new(env!("CARGO_BIN_EXE_jsonapi-rels"))
        .arg(fixture("animals.json"))
        .args(["--path", "cat.bird.worm", "--format", "ids"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "worms:3\n-\nworms:8\nworms:9\n");
}

#[test]
fn test_cli_resource_selector() {
    let output = Command::new(env!("CARGO_BIN_EXE_jsonapi-rels"))
        .arg(fixture("animals.json"))
        .args(["--resource", "cats:5", "--relationship", "bird", "--format", "ids"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "birds:6\nbirds:7\n");
}

#[test]
fn test_cli_unknown_resource_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_jsonapi-rels"))
        .arg(fixture("animals.json"))
        .args(["--resource", "dogs:1", "--all"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Resource not found: dogs:1"));
}

#[test]
fn test_cli_strict_rejects_dangling_linkage() {
    let relaxed = Command::new(env!("CARGO_BIN_EXE_jsonapi-rels"))
        .arg(fixture("dangling.json"))
        .args(["--relationship", "items"])
        .output()
        .expect("Failed to execute command");
    assert!(relaxed.status.success());
    let stdout = String::from_utf8_lossy(&relaxed.stdout);
    assert_eq!(stdout.trim_end(), r#"[{"id":"a","type":"items"},null]"#);

    let strict = Command::new(env!("CARGO_BIN_EXE_jsonapi-rels"))
        .arg(fixture("dangling.json"))
        .args(["--relationship", "items", "--strict"])
        .output()
        .expect("Failed to execute command");
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("orders:1.items -> items:b"));
}
