use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn todoz(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todoz").unwrap();
    cmd.current_dir(home)
        .env("TODOZ_DATA", home.join("data"))
        .env("NO_COLOR", "1")
        .env_remove("TODOZ_LOG");
    cmd
}

fn exported_csv(dir: &Path) -> PathBuf {
    let entries: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    assert_eq!(entries.len(), 1, "expected exactly one csv in {:?}", dir);
    entries.into_iter().next().unwrap()
}

#[test]
fn empty_list() {
    let home = TempDir::new().unwrap();
    todoz(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos found."));
}

#[test]
fn add_and_list() {
    let home = TempDir::new().unwrap();
    todoz(home.path())
        .args(["add", "買い物に行く"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added: 買い物に行く"));

    todoz(home.path())
        .args(["add", "walk", "the", "dog"])
        .assert()
        .success();

    todoz(home.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 買い物に行く"))
        .stdout(predicate::str::contains("2. walk the dog"));

    let stored = fs::read_to_string(home.path().join("data/todos.json")).unwrap();
    assert!(stored.contains("\"todos\""));
    assert!(stored.contains("\"createdAt\""));
    assert!(stored.contains("\"lastUpdated\""));
}

#[test]
fn invalid_titles_are_rejected() {
    let home = TempDir::new().unwrap();
    todoz(home.path())
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("タイトルは必須です"));

    todoz(home.path())
        .args(["add", &"x".repeat(101)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("タイトルは100文字以内で入力してください"));

    assert!(!home.path().join("data/todos.json").exists());
}

#[test]
fn done_edit_rm_flow() {
    let home = TempDir::new().unwrap();
    for title in ["one", "two", "three"] {
        todoz(home.path()).args(["add", title]).assert().success();
    }

    todoz(home.path())
        .args(["done", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed (2): two"));

    todoz(home.path())
        .args(["list", "--completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. two"))
        .stdout(predicate::str::contains("one").not());

    todoz(home.path())
        .args(["toggle", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened (2): two"));

    todoz(home.path())
        .args(["edit", "1", "uno"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo updated (1): uno"));

    todoz(home.path())
        .args(["rm", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("three"));

    todoz(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. uno"))
        .stdout(predicate::str::contains("2. two"))
        .stdout(predicate::str::contains("three").not());
}

#[test]
fn unknown_selector_fails() {
    let home = TempDir::new().unwrap();
    todoz(home.path()).args(["add", "one"]).assert().success();

    todoz(home.path())
        .args(["done", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Todo not found"));
}

#[test]
fn export_writes_csv_with_bom() {
    let home = TempDir::new().unwrap();
    todoz(home.path())
        .args(["add", "特殊文字\"テスト"])
        .assert()
        .success();

    let out = home.path().join("out");
    todoz(home.path())
        .args(["export", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 todos to"));

    let path = exported_csv(&out);
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("todos_") && name.len() == "todos_2025-01-28.csv".len());

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], [0xEF, 0xBB, 0xBF]);
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("ID,タイトル,完了状態,作成日時,更新日時"));
    let row = lines.next().unwrap();
    assert!(row.contains("\"特殊文字\"\"テスト\",\"未完了\""));
    assert!(!text.ends_with('\n'));
}

#[test]
fn export_respects_config() {
    let home = TempDir::new().unwrap();
    todoz(home.path()).args(["add", "one"]).assert().success();

    todoz(home.path())
        .args(["config", "export-dir", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export-dir set to csv"));
    todoz(home.path())
        .args(["config", "bom", "false"])
        .assert()
        .success();

    todoz(home.path()).arg("export").assert().success();

    let bytes = fs::read(exported_csv(&home.path().join("csv"))).unwrap();
    assert!(bytes.starts_with("ID,".as_bytes()));
}

#[test]
fn export_of_empty_list_writes_nothing() {
    let home = TempDir::new().unwrap();
    todoz(home.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos to export."));

    let csvs = fs::read_dir(home.path())
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|ext| ext == "csv")
        })
        .count();
    assert_eq!(csvs, 0);
}

#[test]
fn stats_counts() {
    let home = TempDir::new().unwrap();
    for title in ["a", "b", "c"] {
        todoz(home.path()).args(["add", title]).assert().success();
    }
    todoz(home.path()).args(["done", "1", "3"]).assert().success();

    todoz(home.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"total\s+3").unwrap())
        .stdout(predicate::str::is_match(r"active\s+1").unwrap())
        .stdout(predicate::str::is_match(r"completed\s+2").unwrap());
}

#[test]
fn config_show_and_unknown_key() {
    let home = TempDir::new().unwrap();
    todoz(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("export-dir = ."))
        .stdout(predicate::str::contains("bom = true"));

    todoz(home.path())
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn corrupt_data_is_not_overwritten() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("todos.json"), "{ not json").unwrap();

    todoz(home.path())
        .arg("list")
        .assert()
        .failure()
        .stdout(predicate::str::contains("No todos found."))
        .stderr(predicate::str::contains("Failed to load todos"));

    todoz(home.path())
        .args(["add", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not writing"));

    assert_eq!(
        fs::read_to_string(data.join("todos.json")).unwrap(),
        "{ not json"
    );
}
