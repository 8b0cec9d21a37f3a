use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("astromaestro").unwrap();
    // Isolate the config directory and make sure no ambient key leaks in
    cmd.env("HOME", home.path());
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn help_lists_all_readings() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("astrology"))
        .stdout(contains("numerology"))
        .stdout(contains("horoscope"))
        .stdout(contains("tarot"))
        .stdout(contains("chat"));
}

#[test]
fn no_command_shows_usage() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .assert()
        .success()
        .stdout(contains("No command provided"));
}

#[test]
fn horoscope_rejects_invalid_date_before_any_network_call() {
    // No API key exists in this environment, so reaching the client would
    // fail loudly; the sentinel must short-circuit first.
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["horoscope", "--dob", "not-a-date"])
        .assert()
        .success()
        .stdout(contains("valid date of birth"));
}

#[test]
fn astrology_requires_its_fields() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("astrology")
        .assert()
        .failure()
        .stderr(contains("--name"));
}

#[test]
fn tarot_without_api_key_fails_with_hint() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["tarot", "Will it rain?"])
        .assert()
        .failure()
        .stderr(contains("API key"));
}

#[test]
fn show_config_reports_missing_key() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("--show-config")
        .assert()
        .success()
        .stdout(contains("Not Set"));
}

#[test]
fn set_api_key_round_trips_through_show_config() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--set-api-key", "test-key-12345"])
        .assert()
        .success()
        .stdout(contains("API Key updated."));
    cmd(&home)
        .arg("--show-config")
        .assert()
        .success()
        .stdout(contains("test-key..."));
}
