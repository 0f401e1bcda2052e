//! Integration tests for booking-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TODAY: &str = "14.10.2026";

/// A `booking` command isolated from the developer's own config and env.
fn booking(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("booking").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("BOOKING_RULES__MIN_LEAD_DAYS")
        .env_remove("BOOKING_RULES__CITIES_FILE")
        .env_remove("BOOKING_OUTPUT__FORMAT")
        .env_remove("BOOKING_OUTPUT__NO_COLOR")
        .arg("--no-color");
    cmd
}

fn validate(home: &TempDir, extra: &[&str]) -> Command {
    let mut cmd = booking(home);
    cmd.args(["validate", "--today", TODAY]).args(extra);
    cmd
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    booking(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("cities"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    booking(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_confirmed_booking() {
    let home = TempDir::new().unwrap();
    validate(
        &home,
        &[
            "--city",
            "Санкт-Петербург",
            "--in-days",
            "6",
            "--name",
            "Иван Иванов-Петров",
            "--phone",
            "+79998887766",
            "--agree",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Встреча успешно забронирована на 20.10.2026",
    ));
}

#[test]
fn test_explicit_date_at_lead_time_boundary() {
    let home = TempDir::new().unwrap();
    validate(
        &home,
        &[
            "--city",
            "Москва",
            "--date",
            "16.10.2026",
            "--name",
            "Анна",
            "--phone",
            "+79012345678",
            "--agree",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("16.10.2026"));
}

#[test]
fn test_rejection_lists_failed_field() {
    let home = TempDir::new().unwrap();
    validate(
        &home,
        &[
            "--city",
            "Минск",
            "--in-days",
            "5",
            "--name",
            "Иван Иванов",
            "--phone",
            "+79998887766",
            "--agree",
        ],
    )
    .assert()
    .code(2)
    .stdout(predicate::str::contains(
        "city: Доставка в выбранный город недоступна",
    ))
    .stdout(predicate::str::contains("забронирована").not());
}

#[test]
fn test_every_failing_field_is_reported() {
    let home = TempDir::new().unwrap();
    validate(&home, &[])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("city: Поле обязательно для заполнения"))
        .stdout(predicate::str::contains("date: Поле обязательно для заполнения"))
        .stdout(predicate::str::contains("name: Поле обязательно для заполнения"))
        .stdout(predicate::str::contains("phone: Поле обязательно для заполнения"))
        .stdout(predicate::str::contains(
            "agreement: Поле обязательно для заполнения",
        ));
}

#[test]
fn test_impossible_date() {
    let home = TempDir::new().unwrap();
    validate(
        &home,
        &[
            "--city",
            "Казань",
            "--date",
            "30.02.2023",
            "--name",
            "Иван",
            "--phone",
            "+79998887766",
            "--agree",
        ],
    )
    .assert()
    .code(2)
    .stdout(predicate::str::contains("date: Неверно введена дата"));
}

#[test]
fn test_json_outcome() {
    let home = TempDir::new().unwrap();
    let output = booking(&home)
        .args(["--output-format", "json", "validate", "--today", TODAY])
        .args([
            "--city",
            "Москва",
            "--in-days",
            "1",
            "--name",
            "Иван",
            "--phone",
            "+79998887766",
            "--agree",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["errors"][0]["field"], "date");
    assert_eq!(json["errors"][0]["kind"], "date_too_soon");
}

#[test]
fn test_min_lead_days_override() {
    let home = TempDir::new().unwrap();
    validate(
        &home,
        &[
            "--min-lead-days",
            "0",
            "--city",
            "Москва",
            "--in-days",
            "0",
            "--name",
            "Иван",
            "--phone",
            "+79998887766",
            "--agree",
        ],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("14.10.2026"));
}

#[test]
fn test_cities_file_replaces_builtin_list() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("cities.txt");
    std::fs::write(&file, "# test list\nТверь\n\nВыборг\n").unwrap();
    let file = file.to_str().unwrap();

    validate(
        &home,
        &[
            "--cities-file",
            file,
            "--city",
            "Выборг",
            "--in-days",
            "3",
            "--name",
            "Иван",
            "--phone",
            "+79998887766",
            "--agree",
        ],
    )
    .assert()
    .success();

    validate(
        &home,
        &[
            "--cities-file",
            file,
            "--city",
            "Москва",
            "--in-days",
            "3",
            "--name",
            "Иван",
            "--phone",
            "+79998887766",
            "--agree",
        ],
    )
    .assert()
    .code(2);
}

#[test]
fn test_cities_lists_builtin() {
    let home = TempDir::new().unwrap();
    booking(&home)
        .arg("cities")
        .assert()
        .success()
        .stdout(predicate::str::contains("Москва"))
        .stdout(predicate::str::contains("Санкт-Петербург"))
        .stdout(predicate::str::contains("Минск").not());
}

#[test]
fn test_cities_json() {
    let home = TempDir::new().unwrap();
    let output = booking(&home)
        .args(["cities", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let cities: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(cities.iter().any(|c| c == "Казань"));
}

#[test]
fn test_config_file_sets_lead_time() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("booking.toml"),
        "[rules]\nmin_lead_days = 10\n",
    )
    .unwrap();

    booking(&home)
        .args(["config", "get", "rules.min_lead_days"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rules.min_lead_days = 10"));

    validate(
        &home,
        &[
            "--city",
            "Москва",
            "--in-days",
            "5",
            "--name",
            "Иван",
            "--phone",
            "+79998887766",
            "--agree",
        ],
    )
    .assert()
    .code(2)
    .stdout(predicate::str::contains("date: Заказ на выбранную дату невозможен"));
}

#[test]
fn test_env_overrides_config_file() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("booking.toml"),
        "[rules]\nmin_lead_days = 10\n",
    )
    .unwrap();

    booking(&home)
        .env("BOOKING_RULES__MIN_LEAD_DAYS", "3")
        .args(["config", "get", "rules.min_lead_days"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rules.min_lead_days = 3"));
}

#[test]
fn test_init_local_writes_config() {
    let home = TempDir::new().unwrap();
    booking(&home)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = std::fs::read_to_string(home.path().join("booking.toml")).unwrap();
    assert!(written.contains("min_lead_days = 2"));

    booking(&home)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    booking(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("booking"));
}
