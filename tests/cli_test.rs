use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn expenses(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSES_CONFIG_DIR", config_dir)
        .env_remove("EXPENSES_DATA")
        .env_remove("RUST_LOG");
    cmd
}

fn write_seed(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("seed.json");
    std::fs::write(
        &path,
        r#"[
            {"title": "Юбка", "amount": 1500, "date": "2025-12-01", "category": "Покупки"},
            {"title": "Обед", "amount": 500.5, "date": "2025-12-02", "category": "Еда"},
            {"title": "Такси", "amount": 300, "date": "2025-12-02", "comment": "поздно"}
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn list_without_data_shows_empty_message() {
    let dir = TempDir::new().unwrap();
    expenses(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Нет расходов"));
}

#[test]
fn list_shows_seeded_expenses_in_order() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    let output = expenses(dir.path())
        .args(["list", "--data"])
        .arg(&seed)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let skirt = stdout.find("Юбка").unwrap();
    let lunch = stdout.find("Обед").unwrap();
    let taxi = stdout.find("Такси").unwrap();
    assert!(skirt < lunch && lunch < taxi);
    assert!(stdout.contains("1500.00 ₽"));
    assert!(!stdout.contains("Нет расходов"));
}

#[test]
fn list_filters_by_category() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    expenses(dir.path())
        .arg("--data")
        .arg(&seed)
        .args(["list", "--category", "еда"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Обед"))
        .stdout(predicate::str::contains("Юбка").not());
}

#[test]
fn list_rejects_inverted_range() {
    let dir = TempDir::new().unwrap();
    expenses(dir.path())
        .args(["list", "--from", "2025-12-31", "--to", "2025-12-01"])
        .assert()
        .failure();
}

#[test]
fn categories_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    expenses(dir.path())
        .arg("--data")
        .arg(&seed)
        .arg("categories")
        .assert()
        .success()
        .stdout("Покупки\nЕда\n");
}

#[test]
fn summary_groups_uncategorized() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    expenses(dir.path())
        .arg("--data")
        .arg(&seed)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Без категории"))
        .stdout(predicate::str::contains("2300.50 ₽"))
        .stdout(predicate::str::contains("1150.25 ₽"));
}

#[test]
fn export_csv_round_trips_through_data() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    let output = expenses(dir.path())
        .arg("--data")
        .arg(&seed)
        .args(["export", "--format", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let exported = dir.path().join("export.csv");
    std::fs::write(&exported, &output.stdout).unwrap();

    expenses(dir.path())
        .arg("--data")
        .arg(&exported)
        .arg("categories")
        .assert()
        .success()
        .stdout("Покупки\nЕда\n");
}

#[test]
fn invalid_seed_file_fails_with_record_number() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"[{"title": "ok", "amount": 1}, {"title": "", "amount": 2}]"#).unwrap();

    expenses(dir.path())
        .arg("--data")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("record 2"));
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();
    expenses(dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₽"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn recent_accepts_window_past_calendar_start() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    expenses(dir.path())
        .arg("--data")
        .arg(&seed)
        .args(["recent", "--days", "4294967295"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Юбка"));
}

#[test]
fn bad_date_format_in_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    expenses(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("date_format"));
}
