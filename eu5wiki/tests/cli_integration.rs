//! Integration tests for eu5wiki CLI

use std::process::Command;

const FIXTURE: &str = "eu5wikilib/tests/fixtures/sample.json";

fn run_eu5wiki(args: &[&str]) -> (String, String, bool) {
    let mut cmd_args = vec!["run", "-p", "eu5wiki", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_eu5wiki(&["--help"]);

    assert!(success);
    assert!(stdout.contains("eu5wiki"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("splice"));
    assert!(stdout.contains("tables"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_eu5wiki(&["--version"]);

    assert!(success);
    assert!(stdout.contains("eu5wiki"));
}

#[test]
fn test_generate_help() {
    let (stdout, _, success) = run_eu5wiki(&["generate", "--help"]);

    assert!(success);
    assert!(stdout.contains("--table"));
    assert!(stdout.contains("--out-dir"));
    assert!(stdout.contains("--game-version"));
}

#[test]
fn test_tables_listing() {
    let (stdout, _, success) = run_eu5wiki(&["tables", "--output", "text"]);

    assert!(success);
    assert!(stdout.contains("buildings"));
    assert!(stdout.contains("estate_privileges"));
    assert!(stdout.contains("Government reforms"));
    assert!(stdout.contains("casus_belli"));
    assert!(stdout.contains("subject_types"));
}

#[test]
fn test_tables_json() {
    let (stdout, _, success) = run_eu5wiki(&["tables", "--output", "json"]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    let tables = parsed["tables"].as_array().expect("tables should be an array");
    assert_eq!(tables.len(), 21);
    assert!(tables
        .iter()
        .any(|row| row["name"] == "countries"
            && row["markers"] == false));
}

#[test]
fn test_generate_prints_page() {
    let (stdout, _, success) = run_eu5wiki(&[
        "generate",
        FIXTURE,
        "--table",
        "traits",
        "--game-version",
        "1.0",
        "--output",
        "text",
    ]);

    assert!(success);
    assert!(stdout.contains("=== traits_ruler ==="));
    assert!(stdout.contains("<section begin=autogenerated_traits_ruler/>"));
    assert!(stdout.contains("{{Version|1.0}}"));
    assert!(stdout.contains("<section end=autogenerated_traits_admiral/>"));
}

#[test]
fn test_generate_json_sections() {
    let (stdout, _, success) = run_eu5wiki(&[
        "generate",
        FIXTURE,
        "--table",
        "goods",
        "--output",
        "json",
    ]);

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["table"], "goods");
    let sections = parsed["sections"].as_object().expect("sections should be a map");
    assert!(sections.contains_key("raw_material"));
    assert!(sections.contains_key("raw_material_food"));
    assert!(sections["produced"].as_str().unwrap().starts_with("{|"));
}

#[test]
fn test_generate_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sections");
    let out_str = out.to_string_lossy().to_string();

    let (stdout, _, success) = run_eu5wiki(&[
        "generate",
        FIXTURE,
        "--table",
        "estate-privileges",
        "--out-dir",
        &out_str,
        "--output",
        "text",
    ]);

    assert!(success);
    assert!(stdout.contains("2 sections written"));
    let nobles = std::fs::read_to_string(out.join("estate_privileges_nobles_estate.txt")).unwrap();
    assert!(nobles.starts_with("<section begin=autogenerated_estate_privileges_nobles_estate/>"));
    assert!(nobles.contains("Tax Exemption"));
    assert!(out.join("estate_privileges_clergy_estate.txt").exists());
}

#[test]
fn test_generate_out_dir_unmarked() {
    let dir = tempfile::tempdir().unwrap();
    let out_str = dir.path().to_string_lossy().to_string();

    let (_, _, success) = run_eu5wiki(&[
        "generate", FIXTURE, "--table", "religions", "--out-dir", &out_str,
    ]);

    assert!(success);
    let religions = std::fs::read_to_string(dir.path().join("religions.txt")).unwrap();
    assert!(religions.starts_with("{|"));
    assert!(!religions.contains("<section"));
}

#[test]
fn test_splice_updates_page_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("Traits.wiki");
    std::fs::write(
        &page,
        "Hand-written intro.\n\
         <section begin=autogenerated_traits_ruler/>\nold table\n<section end=autogenerated_traits_ruler/>\n\
         Hand-written outro.\n",
    )
    .unwrap();
    let page_str = page.to_string_lossy().to_string();

    let (stdout, _, success) = run_eu5wiki(&[
        "splice",
        FIXTURE,
        "--table",
        "traits",
        "--page",
        &page_str,
        "--game-version",
        "1.0",
        "--output",
        "text",
    ]);

    assert!(success);
    assert!(stdout.contains("1 sections spliced"));
    assert!(stdout.contains("traits_admiral"));

    let updated = std::fs::read_to_string(&page).unwrap();
    assert!(updated.starts_with("Hand-written intro.\n"));
    assert!(updated.ends_with("Hand-written outro.\n"));
    assert!(!updated.contains("old table"));
    assert!(updated.contains("{{Version|1.0}}"));
    assert!(updated.contains("Brave"));
    assert!(!updated.contains("Sea Dog"));
}

#[test]
fn test_splice_unbalanced_markers_leave_page_alone() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("Traits.wiki");
    let original = "<section begin=autogenerated_traits_ruler/>\nno end marker\n";
    std::fs::write(&page, original).unwrap();
    let page_str = page.to_string_lossy().to_string();

    let (_, stderr, success) = run_eu5wiki(&[
        "splice", FIXTURE, "--table", "traits", "--page", &page_str,
    ]);

    assert!(!success);
    assert!(stderr.contains("unbalanced markers"));
    assert_eq!(std::fs::read_to_string(&page).unwrap(), original);
}

#[test]
fn test_splice_rejects_unmarked_table() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("Reforms.wiki");
    std::fs::write(&page, "text").unwrap();
    let page_str = page.to_string_lossy().to_string();

    let (_, stderr, success) = run_eu5wiki(&[
        "splice", FIXTURE, "--table", "reforms", "--page", &page_str,
    ]);

    assert!(!success);
    assert!(stderr.contains("no section markers"));
}

#[test]
fn test_unknown_table() {
    let (_, stderr, success) = run_eu5wiki(&["generate", FIXTURE, "--table", "dragons"]);

    assert!(!success);
    assert!(stderr.contains("unknown table 'dragons'"));
}

#[test]
fn test_missing_input_file() {
    let (_, stderr, success) = run_eu5wiki(&[
        "generate",
        "does/not/exist.json",
        "--table",
        "buildings",
    ]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}
