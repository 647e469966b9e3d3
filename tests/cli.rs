use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("gps_collector").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn separator() -> String {
    "-".repeat(50)
}

#[test]
fn records_one_pair_and_exits() {
    let expected = format!(
        "01 ->  latitude :40.7128  longitude :-74.0060\n{}\n",
        separator()
    );
    cmd()
        .write_stdin("40.7128\n-74.0060\nexit\n")
        .assert()
        .success()
        .stdout(contains(expected))
        .stdout(contains("Enter latitude : or 'exit' to stop "))
        .stdout(contains("Enter Longitude : "));
}

#[test]
fn invalid_pair_is_reported_and_discarded() {
    cmd()
        .write_stdin("abc\n-74.0060\nEXIT\n")
        .assert()
        .success()
        .stdout(contains("invalid Character \n").count(1))
        .stdout(contains("->").not());
}

#[test]
fn whole_log_is_reprinted_after_each_addition() {
    let out = cmd()
        .write_stdin("1\n2\n3\n4\nexit\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();

    // Prompts share a line with the first entry printed after them.
    let entries: Vec<_> = out
        .split(" ->")
        .filter_map(|chunk| chunk.rsplit([' ', '\n']).next())
        .filter(|index| index.len() == 2)
        .collect();
    assert_eq!(entries, vec!["01", "01", "02"]);
}

#[test]
fn closed_stdin_ends_cleanly() {
    cmd().write_stdin("5\n6\n").assert().success();
}

#[test]
fn json_flag_exports_log() {
    cmd()
        .arg("--json")
        .write_stdin("40.7128\n-74.0060\nexit\n")
        .assert()
        .success()
        .stdout(contains("\"lat\": 40.7128"))
        .stdout(contains("\"lon\": -74.006"));
}

#[test]
fn diagnostics_stay_off_stdout() {
    cmd()
        .args(["--log-level", "debug"])
        .write_stdin("1\n2\nexit\n")
        .assert()
        .success()
        .stdout(contains("Appended coordinate").not())
        .stderr(contains("Appended coordinate"));
}
