mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use support::{spawn_fake_users_api, TEST_API_KEY};
use tempfile::TempDir;

fn todoz(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todoz").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("PORT")
        .env_remove("TODOZ_LOG_JSON")
        .env_remove("TODOZ_USERS_API_URL")
        .env_remove("TODOZ_USERS_API_KEY")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    todoz(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("users"));
}

#[test]
fn page_zero_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    todoz(&dir)
        .args(["users", "--page", "0"])
        .assert()
        .failure();
}

#[test]
fn unknown_sort_field_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    todoz(&dir)
        .args(["users", "--sort", "age"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("first_name or email"));
}

#[test]
fn invalid_port_env_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    todoz(&dir)
        .env("PORT", "http")
        .args(["serve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config error"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn users_prints_sorted_table() {
    let base = spawn_fake_users_api().await;
    let dir = tempfile::tempdir().unwrap();
    let url = format!("{}/api/users", base);

    let output = todoz(&dir)
        .env("TODOZ_USERS_API_KEY", TEST_API_KEY)
        .args(["users", "--api-url", url.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("First Name ▲"))
        .stdout(predicate::str::contains("HTTP status: 200"))
        .stdout(predicate::str::contains("[1]"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let amy = stdout.find("a@y.com").unwrap();
    let bob = stdout.find("b@x.com").unwrap();
    assert!(amy < bob);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn users_filters_from_flags() {
    let base = spawn_fake_users_api().await;
    let dir = tempfile::tempdir().unwrap();
    let url = format!("{}/api/users", base);

    todoz(&dir)
        .env("TODOZ_USERS_API_KEY", TEST_API_KEY)
        .args([
            "users",
            "--api-url",
            url.as_str(),
            "--domain",
            "x.com",
            "--sort",
            "email",
            "--order",
            "desc",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("b@x.com"))
        .stdout(predicate::str::contains("a@y.com").not())
        .stdout(predicate::str::contains("Email ▼"));

    todoz(&dir)
        .env("TODOZ_USERS_API_KEY", TEST_API_KEY)
        .args([
            "users",
            "--api-url",
            url.as_str(),
            "--search",
            "nobody",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found."));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn users_reads_endpoint_from_config_file() {
    let base = spawn_fake_users_api().await;
    let dir = tempfile::tempdir().unwrap();
    let config = serde_json::json!({
        "users_api_url": format!("{}/api/users", base),
        "users_api_key": TEST_API_KEY,
    });
    std::fs::write(dir.path().join("config.json"), config.to_string()).unwrap();

    todoz(&dir)
        .args(["users", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("c@x.com"))
        .stdout(predicate::str::contains("[2]"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn rejected_fetch_exits_non_zero() {
    let base = spawn_fake_users_api().await;
    let dir = tempfile::tempdir().unwrap();
    let url = format!("{}/api/users", base);

    todoz(&dir)
        .env("TODOZ_USERS_API_KEY", "wrong")
        .args(["users", "--api-url", url.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: HTTP error 401"))
        .stdout(predicate::str::contains("No users found."))
        .stderr(predicate::str::contains(
            "Error: Failed to fetch users: HTTP error 401",
        ));
}
