//! Integration tests for the cutlist CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to get a cutlist command
fn cutlist() -> Command {
    Command::cargo_bin("cutlist").unwrap()
}

/// Helper to create a job file in a temp directory
fn setup_job() -> TempDir {
    let tmp = TempDir::new().unwrap();
    cutlist()
        .current_dir(tmp.path())
        .args(["project", "new", "job.cut.json", "--customer", "Nour Kitchens", "--job", "K-118"])
        .assert()
        .success();
    tmp
}

fn add_unit(tmp: &TempDir, label: &str, args: &[&str]) {
    cutlist()
        .current_dir(tmp.path())
        .args(["project", "add", "job.cut.json", "--label", label])
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added unit"));
}

fn read_job(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// compute
// ============================================================================

#[test]
fn test_compute_table() {
    cutlist()
        .args(["compute", "ground", "--width", "60", "--height", "72", "--depth", "30"])
        .args(["--shelves", "1", "--doors", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("side_panel"))
        .stdout(predicate::str::contains("56.40"))
        .stdout(predicate::str::contains("Total area"));
}

#[test]
fn test_compute_table_with_max_shelf_count() {
    cutlist()
        .args(["compute", "ground", "--width", "80", "--height", "72", "--depth", "56"])
        .args(["--shelves", "4294967295"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pieces:          4294967295"));
}

#[test]
fn test_compute_json() {
    let output = cutlist()
        .args(["compute", "ground", "--width", "60", "--height", "72", "--depth", "30", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["type"], "ground");
    let base = result["parts"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "base")
        .unwrap();
    assert_eq!(base["height_cm"], 56.4);
}

#[test]
fn test_compute_unsupported_type() {
    cutlist()
        .args(["compute", "pantry", "--width", "60", "--height", "72", "--depth", "56"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UNSUPPORTED_UNIT_TYPE"));
}

#[test]
fn test_compute_invalid_dimension() {
    cutlist()
        .args(["compute", "wall", "--width", "0", "--height", "70", "--depth", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_INPUT"));
}

#[test]
fn test_compute_missing_required_field() {
    cutlist()
        .args(["compute", "ground_fixed", "--width", "90", "--height", "72", "--depth", "56"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MISSING_FIELD"));
}

#[test]
fn test_compute_with_prices() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("prices.json"),
        r#"{ "currency": "EGP", "prices": { "area": 450, "edge_band": 12 } }"#,
    )
    .unwrap();

    cutlist()
        .current_dir(tmp.path())
        .args(["compute", "wall", "--width", "80", "--height", "70", "--depth", "30"])
        .args(["--prices", "prices.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated cost"))
        .stdout(predicate::str::contains("EGP"));
}

#[test]
fn test_compute_missing_price() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("prices.json"), r#"{ "prices": { "area": 450 } }"#).unwrap();

    cutlist()
        .current_dir(tmp.path())
        .args(["compute", "wall", "--width", "80", "--height", "70", "--depth", "30"])
        .args(["--prices", "prices.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PRICE_NOT_FOUND"));
}

#[test]
fn test_types_lists_every_family() {
    cutlist()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("tall_doors_appliances"))
        .stdout(predicate::str::contains("corner_l_wall"))
        .stdout(predicate::str::contains("side_flush"));
}

// ============================================================================
// settings
// ============================================================================

#[test]
fn test_settings_init_and_use() {
    let tmp = TempDir::new().unwrap();
    cutlist()
        .current_dir(tmp.path())
        .args(["settings", "init", "shop.json"])
        .assert()
        .success();

    let settings: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("shop.json")).unwrap()).unwrap();
    assert_eq!(settings["board_thickness_cm"], 1.8);

    // Refuses to overwrite without --force
    cutlist()
        .current_dir(tmp.path())
        .args(["settings", "init", "shop.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fs::write(tmp.path().join("shop.json"), r#"{ "board_thickness_cm": 1.6 }"#).unwrap();
    cutlist()
        .current_dir(tmp.path())
        .args(["compute", "ground", "--width", "60", "--height", "72", "--depth", "30"])
        .args(["--settings", "shop.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("56.80"));
}

#[test]
fn test_settings_show_defaults() {
    cutlist()
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"assembly_method\": \"full_sides\""));
}

#[test]
fn test_invalid_settings_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bad.json"), r#"{ "mirror_width_cm": -1 }"#).unwrap();

    cutlist()
        .current_dir(tmp.path())
        .args(["compute", "wall", "--width", "80", "--height", "70", "--depth", "30"])
        .args(["--settings", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_INPUT"));
}

// ============================================================================
// project
// ============================================================================

#[test]
fn test_project_new_creates_file() {
    let tmp = setup_job();
    let job = read_job(&tmp.path().join("job.cut.json"));
    assert_eq!(job["meta"]["customer"], "Nour Kitchens");
    assert_eq!(job["meta"]["job_id"], "K-118");
}

#[test]
fn test_project_add_and_show() {
    let tmp = setup_job();
    add_unit(&tmp, "sink run", &["sink", "--width", "80", "--height", "72", "--depth", "56"]);
    add_unit(&tmp, "uppers", &["wall", "--width", "80", "--height", "70", "--depth", "30"]);

    let job = read_job(&tmp.path().join("job.cut.json"));
    assert_eq!(job["units"].as_object().unwrap().len(), 2);

    cutlist()
        .current_dir(tmp.path())
        .args(["project", "show", "job.cut.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sink run"))
        .stdout(predicate::str::contains("uppers"))
        .stdout(predicate::str::contains("Total edge band"));
}

#[test]
fn test_project_add_rejects_bad_unit() {
    let tmp = setup_job();
    cutlist()
        .current_dir(tmp.path())
        .args(["project", "add", "job.cut.json", "--label", "U1"])
        .args(["pantry", "--width", "60", "--height", "72", "--depth", "56"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("UNSUPPORTED_UNIT_TYPE"));

    let job = read_job(&tmp.path().join("job.cut.json"));
    assert!(job["units"].as_object().unwrap().is_empty());
}

#[test]
fn test_project_calc_with_prices() {
    let tmp = setup_job();
    add_unit(&tmp, "uppers", &["wall", "--width", "80", "--height", "70", "--depth", "30"]);
    fs::write(
        tmp.path().join("prices.json"),
        r#"{ "currency": "EGP", "prices": { "area": 450, "edge_band": 12 } }"#,
    )
    .unwrap();

    cutlist()
        .current_dir(tmp.path())
        .args(["project", "calc", "job.cut.json", "--prices", "prices.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recalculated 1 unit(s), 0 failed"));

    let job = read_job(&tmp.path().join("job.cut.json"));
    let unit = job["units"].as_object().unwrap().values().next().unwrap();
    assert!(unit["price_estimate"].as_f64().unwrap() > 0.0);
    assert!(unit["result"]["total_cost"].is_number());
}

#[test]
fn test_estimate_leaves_job_unchanged() {
    let tmp = setup_job();
    add_unit(&tmp, "uppers", &["wall", "--width", "80", "--height", "70", "--depth", "30"]);
    fs::write(
        tmp.path().join("prices.json"),
        r#"{ "currency": "EGP", "prices": { "area": 450, "edge_band": 12 } }"#,
    )
    .unwrap();
    let before = fs::read_to_string(tmp.path().join("job.cut.json")).unwrap();

    cutlist()
        .current_dir(tmp.path())
        .args(["estimate", "job.cut.json", "--prices", "prices.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("edge_band"))
        .stdout(predicate::str::contains("Total:"));

    assert_eq!(fs::read_to_string(tmp.path().join("job.cut.json")).unwrap(), before);
}

#[test]
fn test_project_remove() {
    let tmp = setup_job();
    add_unit(&tmp, "uppers", &["wall", "--width", "80", "--height", "70", "--depth", "30"]);

    let job = read_job(&tmp.path().join("job.cut.json"));
    let id = job["units"].as_object().unwrap().keys().next().unwrap().clone();

    cutlist()
        .current_dir(tmp.path())
        .args(["project", "remove", "job.cut.json", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'uppers'"));

    let job = read_job(&tmp.path().join("job.cut.json"));
    assert!(job["units"].as_object().unwrap().is_empty());
}

#[test]
fn test_project_missing_file() {
    let tmp = TempDir::new().unwrap();
    cutlist()
        .current_dir(tmp.path())
        .args(["project", "show", "nope.cut.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FILE_ERROR"));
}
