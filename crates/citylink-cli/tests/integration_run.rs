//! Integration tests for the citylink binary.
//!
//! Each test runs the real executable inside a scratch directory so no
//! stray citylink.json or environment affects the result.

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CHAIN: &str = "3\n0 1 0\n0 0 1\n0 0 0\n";

fn citylink(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("citylink").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CITYLINK_INPUT")
        .env_remove("CITYLINK_ROUTE")
        .env_remove("CITYLINK_PRINT_CLOSURE")
        .env_remove("CITYLINK_WRITE_OUTPUT")
        .env_remove("CITYLINK_OUTPUT_DIR")
        .env_remove("CITYLINK_STRATEGY")
        .env_remove("CITYLINK_SELF_PAIRS")
        .env_remove("CITYLINK_FORMAT");
    cmd
}

fn scratch(table: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("cities.txt"), table).unwrap();
    temp
}

#[test]
fn test_route_found() {
    let temp = scratch(CHAIN);

    citylink(temp.path())
        .args(["-i", "cities.txt", "-r", "0,2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Neighbor table\n0 1 0 \n0 0 1 \n0 0 0 \n\n",
        ))
        .stdout(predicate::str::contains("Yes path exists!\n0 => 1 => 2\n"));
}

#[test]
fn test_route_missing_is_not_an_error() {
    let temp = scratch(CHAIN);

    citylink(temp.path())
        .args(["-i", "cities.txt", "-r", "2,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Path Exists!"));
}

#[test]
fn test_print_closure() {
    let temp = scratch(CHAIN);

    citylink(temp.path())
        .args(["-i", "cities.txt", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\n\nR* Table\n0 -> 1\n1 -> 2\n0 -> 2\n",
        ));
}

#[test]
fn test_write_output_file() {
    let temp = scratch(CHAIN);

    citylink(temp.path())
        .args(["-i", "cities.txt", "-opr", "0,1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saving out-cities.txt..."));

    let written = fs::read_to_string(temp.path().join("out-cities.txt")).unwrap();
    assert_eq!(written, "R* Table\n0 -> 1\n1 -> 2\n0 -> 2\n\n");
}

#[test]
fn test_failed_write_is_not_announced() {
    let temp = scratch(CHAIN);
    // A plain file where the output directory should go
    fs::write(temp.path().join("blocked"), "").unwrap();

    citylink(temp.path())
        .args(["-i", "cities.txt", "-o", "--out-dir", "blocked"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Saving").not());
}

#[test]
#[serial]
fn test_caller_environment_is_ignored() {
    let temp = scratch("3\n0 1 0\n0 0 1\n1 0 0\n");
    unsafe {
        std::env::set_var("CITYLINK_WRITE_OUTPUT", "true");
        std::env::set_var("CITYLINK_OUTPUT_DIR", "leaked");
        std::env::set_var("CITYLINK_STRATEGY", "shortest");
        std::env::set_var("CITYLINK_SELF_PAIRS", "exclude");
    }

    let assert = citylink(temp.path()).args(["-i", "cities.txt", "-p"]).assert();

    unsafe {
        std::env::remove_var("CITYLINK_WRITE_OUTPUT");
        std::env::remove_var("CITYLINK_OUTPUT_DIR");
        std::env::remove_var("CITYLINK_STRATEGY");
        std::env::remove_var("CITYLINK_SELF_PAIRS");
    }

    assert
        .success()
        .stdout(predicate::str::contains("0 -> 0\n"))
        .stderr(predicate::str::contains("Saving").not());
    assert!(!temp.path().join("leaked").exists());
}

#[test]
fn test_write_output_to_out_dir() {
    let temp = scratch(CHAIN);

    citylink(temp.path())
        .args(["-i", "cities.txt", "-o", "--out-dir", "results"])
        .assert()
        .success();

    assert!(temp.path().join("results").join("out-cities.txt").exists());
    assert!(!temp.path().join("out-cities.txt").exists());
}

#[test]
fn test_three_cycle_self_pairs() {
    let temp = scratch("3\n0 1 0\n0 0 1\n1 0 0\n");

    citylink(temp.path())
        .args(["-i", "cities.txt", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 0\n1 -> 1\n2 -> 2\n"));

    citylink(temp.path())
        .args(["-i", "cities.txt", "-p", "--self-pairs", "exclude"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 0").not())
        .stdout(predicate::str::contains("2 -> 1\n"));
}

#[test]
fn test_greedy_stall_falls_back() {
    let temp = scratch("4\n0 1 1 0\n0 0 0 0\n0 0 0 1\n0 0 0 0\n");

    citylink(temp.path())
        .args(["-i", "cities.txt", "-r", "0,3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 => 2 => 3"))
        .stderr(predicate::str::contains("dead end"));
}

#[test]
fn test_shortest_strategy() {
    let temp = scratch("4\n0 1 1 0\n0 0 0 0\n0 0 0 1\n0 0 0 0\n");

    citylink(temp.path())
        .args(["-i", "cities.txt", "-r", "0,3", "--strategy", "shortest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 => 2 => 3"))
        .stderr(predicate::str::contains("dead end").not());
}

#[test]
fn test_json_report() {
    let temp = scratch(CHAIN);

    let output = citylink(temp.path())
        .args(["-i", "cities.txt", "-pr", "0,2", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["cities"], 3);
    assert_eq!(report["closure"]["passes"], 2);
    assert_eq!(report["route"]["status"], "found");
    assert_eq!(report["route"]["path"], serde_json::json!([0, 1, 2]));
}

#[test]
fn test_config_file_and_env() {
    let temp = scratch(CHAIN);
    fs::write(
        temp.path().join("citylink.json"),
        r#"{ "input": "cities.txt", "route": "0,2" }"#,
    )
    .unwrap();

    citylink(temp.path())
        .env("CITYLINK_PRINT_CLOSURE", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("R* Table"))
        .stdout(predicate::str::contains("0 => 1 => 2"));
}

#[test]
fn test_missing_input_flag() {
    let temp = TempDir::new().unwrap();

    citylink(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: input"));
}

#[test]
fn test_missing_input_file() {
    let temp = TempDir::new().unwrap();

    citylink(temp.path())
        .args(["-i", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_route_out_of_range() {
    let temp = scratch(CHAIN);

    citylink(temp.path())
        .args(["-i", "cities.txt", "-r", "0,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cities are numbered 0 to 2"));
}

#[test]
fn test_malformed_route() {
    let temp = scratch(CHAIN);

    citylink(temp.path())
        .args(["-i", "cities.txt", "-r", "zero,two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a city index"));
}

#[test]
fn test_malformed_table() {
    let temp = scratch("2\n0 1\n0 7\n");

    citylink(temp.path())
        .args(["-i", "cities.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid cell '7' on line 3"));
}
