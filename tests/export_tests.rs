mod common;
use common::{add_via_cli, init_db, rac, setup_test_db, stored, temp_out};
use predicates::str::contains;
use ractivity::models::Activity;
use std::fs;

fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_via_cli(db_path, "Palestra", "Maria", &["Ana <ana@ufc.br>"]);
    add_via_cli(
        db_path,
        "Oficina",
        "João",
        &["Bruno <bruno@ufc.br>", "Carla <carla@ufc.br>"],
    );
}

#[test]
fn test_export_json_matches_stored_collection() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");

    rac()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed (2 activities)"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let exported: Vec<Activity> = serde_json::from_str(&content).expect("parse exported json");
    assert_eq!(exported, stored(&db_path));
}

#[test]
fn test_export_csv_one_row_per_activity() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv", "csv");

    rac()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,name,owner,date,description"));
    assert!(content.contains("Bruno <bruno@ufc.br>; Carla <carla@ufc.br>"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "json");
    fs::write(&out, "old").unwrap();

    rac()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    rac()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Oficina"));
}

#[test]
fn test_export_relative_path_rejected() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rac()
        .args([
            "--db",
            &db_path,
            "--test",
            "export",
            "--file",
            "relative_out.json",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_then_import_into_fresh_db() {
    let db_path = setup_test_db("export_import_src");
    init_db_with_data(&db_path);

    let out = temp_out("export_import", "json");
    rac()
        .args(["--db", &db_path, "--test", "export", "--file", &out])
        .assert()
        .success();

    let target = setup_test_db("export_import_dst");
    init_db(&target);

    rac()
        .args(["--db", &target, "--test", "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 2 activities"));

    assert_eq!(stored(&target), stored(&db_path));

    // Importing the same file again only finds duplicates
    rac()
        .args(["--db", &target, "--test", "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 0 activities (2 duplicates skipped"));
    assert_eq!(stored(&target).len(), 2);
}

#[test]
fn test_export_empty_store_round_trips() {
    let db_path = setup_test_db("export_empty_src");
    init_db(&db_path);

    let out = temp_out("export_empty", "json");
    rac()
        .args(["--db", &db_path, "--test", "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed (0 activities)"));
    assert_eq!(fs::read_to_string(&out).unwrap().trim(), "[]");

    let target = setup_test_db("export_empty_dst");
    init_db(&target);
    rac()
        .args(["--db", &target, "--test", "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 0 activities"));
    assert!(stored(&target).is_empty());
}

#[test]
fn test_export_empty_store_csv_has_header() {
    let db_path = setup_test_db("export_empty_csv");
    init_db(&db_path);

    let out = temp_out("export_empty_csv", "csv");
    rac()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(
        content.trim(),
        "id,name,owner,date,description,participant_count,participants"
    );
}
