use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{clg, setup_test_db};

fn init(db_path: &str) {
    clg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_code_add_and_list() {
    let db_path = setup_test_db("code_add_and_list");
    init(&db_path);

    clg()
        .args(["--db", &db_path, "--test", "code", "add", "1234", "001", "Development"])
        .assert()
        .success()
        .stdout(contains("Charge code #1 added: 1234-001."));

    clg()
        .args(["--db", &db_path, "--test", "code", "list"])
        .assert()
        .success()
        .stdout(contains("1234-001"))
        .stdout(contains("Development"))
        .stdout(contains("active"));
}

#[test]
fn test_code_add_rejects_duplicates() {
    let db_path = setup_test_db("code_add_rejects_duplicates");
    init(&db_path);

    clg()
        .args(["--db", &db_path, "--test", "code", "add", "1234", "001", "Development"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "--test", "code", "add", "1234", "001", "Other name"])
        .assert()
        .failure()
        .stderr(contains("Charge code already exists: 1234-001"));
}

#[test]
fn test_code_add_rejects_blank_fields() {
    let db_path = setup_test_db("code_add_rejects_blank_fields");
    init(&db_path);

    clg()
        .args(["--db", &db_path, "--test", "code", "add", "1234", "001", "  "])
        .assert()
        .failure()
        .stderr(contains("Description is required"));

    clg()
        .args(["--db", &db_path, "--test", "code", "add", " ", "001", "Development"])
        .assert()
        .failure()
        .stderr(contains("Project number is required"));
}

#[test]
fn test_code_toggle_hides_from_default_list() {
    let db_path = setup_test_db("code_toggle_hides");
    init(&db_path);

    clg()
        .args(["--db", &db_path, "--test", "code", "add", "1234", "001", "Development"])
        .assert()
        .success();

    clg()
        .args(["--db", &db_path, "--test", "code", "toggle", "1", "--off"])
        .assert()
        .success()
        .stdout(contains("Charge code #1 deactivated."));

    clg()
        .args(["--db", &db_path, "--test", "code", "list"])
        .assert()
        .success()
        .stdout(contains("1234-001").not());

    clg()
        .args(["--db", &db_path, "--test", "code", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("1234-001"))
        .stdout(contains("inactive"));

    // deactivating only hides the code from listings; it still exists,
    // is still owned, and still accepts entries
    clg()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2024-01-04",
            "1",
            "09:00",
            "10:00",
            "Legacy work",
        ])
        .assert()
        .success();
}

#[test]
fn test_code_toggle_unknown_id_fails() {
    let db_path = setup_test_db("code_toggle_unknown");
    init(&db_path);

    clg()
        .args(["--db", &db_path, "--test", "code", "toggle", "9", "--off"])
        .assert()
        .failure()
        .stderr(contains("Charge code not found: 9"));
}
