//! End-to-end tests for the tieba binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run the binary from an empty directory with no user configuration
fn tieba(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tieba").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("TIEBA_CONFIG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_visit_then_back() {
    let home = TempDir::new().unwrap();
    tieba(&home)
        .args(["visit", "hot", "rankings", "--back", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== 热门 == #hot"))
        .stdout(predicate::str::contains("page: hot  history: 3 entries"))
        .stdout(predicate::str::contains("[热门]"))
        .stdout(predicate::str::contains("#rankings").not());
}

#[test]
fn test_initial_fragment() {
    let home = TempDir::new().unwrap();
    tieba(&home)
        .args(["--page", "#login", "visit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== 登录 == #login"))
        .stdout(predicate::str::contains("form: username, password"))
        .stdout(predicate::str::contains("history: 1 entries"));
}

#[test]
fn test_unknown_page_shows_nothing() {
    let home = TempDir::new().unwrap();
    tieba(&home)
        .args(["visit", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no section for 'settings')"));
}

#[test]
fn test_layout_prints_json() {
    let home = TempDir::new().unwrap();
    let output = tieba(&home).arg("layout").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("layout loaded"));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<_> = json["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        vec!["home", "home-content", "hot", "rankings", "login", "register"]
    );
}

#[test]
fn test_browse_reads_commands_from_stdin() {
    let home = TempDir::new().unwrap();
    tieba(&home)
        .arg("browse")
        .write_stdin("go rankings\ntab weekly-ranking\ngo login\nsubmit\nback\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("欢迎来到百度贴吧！"))
        .stdout(predicate::str::contains("showing pane: weekly-ranking"))
        .stdout(predicate::str::contains("登录功能开发中..."))
        .stdout(predicate::str::contains("== 排行榜 == #rankings"));
}

#[test]
fn test_browse_reports_bad_commands() {
    let home = TempDir::new().unwrap();
    tieba(&home)
        .write_stdin("fly away\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command 'fly'"));
}

#[test]
fn test_custom_layout_from_project_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("tieba.json"),
        r##"{
            "sections": [
                { "id": "home", "kind": "hero", "title": "Front" },
                { "id": "about", "title": "About us" }
            ],
            "nav_links": [
                { "href": "#home", "label": "Home" },
                { "href": "#about", "label": "About" }
            ]
        }"##,
    )
    .unwrap();

    tieba(&home)
        .args(["visit", "about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Home  [About]"))
        .stdout(predicate::str::contains("== About us == #about"));
}

#[test]
fn test_missing_config_override_fails() {
    let home = TempDir::new().unwrap();
    tieba(&home)
        .args(["--config", "missing.json", "visit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config path does not exist"));
}
