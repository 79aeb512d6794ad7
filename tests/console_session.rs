#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn libris(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("libris").unwrap();
    cmd.env_remove("LIBRIS_LOG")
        .arg("--no-color")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn test_seeded_catalog_is_listed() {
    let temp = TempDir::new().unwrap();

    libris(&temp)
        .write_stdin("4\n8\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("圖書列表:"))
        .stdout(predicate::str::contains("紅樓夢"))
        .stdout(predicate::str::contains("F0123"))
        .stdout(predicate::str::contains("借閱者列表:"))
        .stdout(predicate::str::contains("小麗"))
        .stdout(predicate::str::contains("退出中..."));
}

#[test]
fn test_no_seed_starts_empty() {
    let temp = TempDir::new().unwrap();

    libris(&temp)
        .arg("--no-seed")
        .write_stdin("4\n3\nA1234\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("紅樓夢").not())
        .stdout(predicate::str::contains("找不到該圖書。"));
}

#[test]
fn test_add_search_delete_book() {
    let temp = TempDir::new().unwrap();

    libris(&temp)
        .write_stdin("1\n圍城\n錢鍾書\nQ194\nQ1947\n3\nQ1947\n2\nQ1947\n3\nQ1947\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("圖書編號無效，請重新輸入"))
        .stdout(predicate::str::contains("圖書添加成功。"))
        .stdout(predicate::str::contains("找到圖書 - 書名: 圍城"))
        .stdout(predicate::str::contains("圖書刪除成功。"))
        .stdout(predicate::str::contains("找不到該圖書。"));
}

#[test]
fn test_borrower_loop_rejects_repeat() {
    let temp = TempDir::new().unwrap();

    libris(&temp)
        .write_stdin("5\n小明\nA1234\ny\nA1234\nn\n7\n小明\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("該圖書已經借閱過，無法重複借閱。"))
        .stdout(predicate::str::contains(
            "找到借閱者 - 姓名: 小明, 借閱的圖書編號: A1234\n",
        ));
}

#[test]
fn test_garbage_menu_input_keeps_running() {
    let temp = TempDir::new().unwrap();

    libris(&temp)
        .write_stdin("hello\n42\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("無效的選擇，請重新輸入。").count(2));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    libris(&temp)
        .write_stdin("1\n未完\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("退出中..."));
}

#[test]
fn test_unique_ids_from_config() {
    let temp = TempDir::new().unwrap();

    libris(&temp)
        .args(["config", "unique-ids", "on"])
        .assert()
        .success();

    libris(&temp)
        .write_stdin("1\n重複\n某人\nA1234\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("圖書編號已存在: A1234"));
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.json"), "{ not json").unwrap();

    libris(&temp)
        .write_stdin("4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("紅樓夢"));
}
