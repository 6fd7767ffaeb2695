use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::{TempDir, tempdir};

/// A `rango` command isolated from the caller's home, config and env.
fn rango(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rango"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RANGO_CONFIG")
        .env_remove("RANGO_STYLE")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("never");
    cmd
}

#[test]
fn week_in_iso_style() {
    let home = tempdir().unwrap();
    rango(&home)
        .args(["week", "--on", "2024-03-15", "--style", "iso"])
        .assert()
        .success()
        .stdout("2024-03-10 2024-03-16\n");
}

#[test]
fn leap_february_in_long_style() {
    let home = tempdir().unwrap();
    rango(&home)
        .args(["month", "--on", "20/02/2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "month: Thursday, 01 Feb 2024 – Thursday, 29 Feb 2024 (29 days)",
        ));
}

#[test]
fn default_period_is_the_month() {
    let home = tempdir().unwrap();
    rango(&home)
        .args(["--on", "2024-11-05", "-s", "iso"])
        .assert()
        .success()
        .stdout("2024-11-01 2024-11-30\n");
}

#[test]
fn spanish_alias_for_quarter() {
    let home = tempdir().unwrap();
    rango(&home)
        .args(["trimestre", "--on", "2024-11-05", "-s", "iso"])
        .assert()
        .success()
        .stdout("2024-10-01 2024-12-31\n");
}

#[test]
fn submit_prints_the_filter_request() {
    let home = tempdir().unwrap();
    rango(&home)
        .args(["year", "--on", "2024-06-30", "--submit", "-s", "iso"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "http://localhost:8000/prospectos?fecha_inicio=2024-01-01&fecha_fin=2024-12-31",
        ));
}

#[test]
fn submit_custom_range_with_extra_fields_and_config() {
    let home = tempdir().unwrap();
    let cfg = home.path().join("rango.toml");
    fs::write(
        &cfg,
        r#"
action = "https://crm.example.com/dashboard"
start_field = "desde"
end_field = "hasta"
"#,
    )
    .unwrap();

    rango(&home)
        .args(["--from", "01/03/2024", "--to", "2024-03-31", "--submit"])
        .args(["--field", "estado=nuevo", "-s", "iso"])
        .arg("--config")
        .arg(&cfg)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://crm.example.com/dashboard?desde=2024-03-01&hasta=2024-03-31&estado=nuevo",
        ));
}

#[test]
fn synonyms_from_the_default_config_location() {
    let home = tempdir().unwrap();
    let dir = home.path().join(".config").join("rango");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[synonyms]\nsemanita = \"week\"\n").unwrap();

    rango(&home)
        .args(["semanita", "--on", "2025-01-01", "-s", "iso"])
        .assert()
        .success()
        .stdout("2024-12-29 2025-01-04\n");
}

#[test]
fn inverted_range_fails() {
    let home = tempdir().unwrap();
    rango(&home)
        .args(["--from", "2024-03-20", "--to", "2024-03-01"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("rango: range starts on 2024-03-20"));
}

#[test]
fn week_past_the_last_calendar_date_fails_cleanly() {
    let home = tempdir().unwrap();
    rango(&home)
        .args(["week", "--on", "+262142-12-31"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("falls outside the supported calendar"));
}

#[test]
fn submit_shows_the_record_window() {
    let home = tempdir().unwrap();
    rango(&home)
        .args(["--from", "2024-03-01", "--to", "month", "--on", "2024-03-15", "--submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Records from 2024-03-01 00:00:00 to 2024-03-31 23:59:59",
        ))
        .stdout(predicate::str::contains("fecha_fin=2024-03-31"));
}

#[test]
fn unknown_period_fails() {
    let home = tempdir().unwrap();
    rango(&home)
        .arg("fortnight")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'fortnight' is not a known period"));
}

#[test]
fn config_paths_lists_candidates() {
    let home = tempdir().unwrap();
    rango(&home)
        .arg("--config-paths")
        .assert()
        .success()
        .stdout(predicate::str::contains("rango/config.toml"));
}
