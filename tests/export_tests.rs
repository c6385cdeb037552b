use predicates::str::contains;
use std::fs;

mod common;
use common::{OWNER, add_staff, bar, finished_shift, init_db, setup_test_db, temp_out};

#[test]
fn export_csv_writes_the_history() {
    let db = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);
    finished_shift(&db, "ana@bar.com");

    bar()
        .args([
            "--db", &db, "--test", "--user", OWNER, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("exported file");
    assert!(content.contains("staff_name"));
    assert!(content.contains("Ana"));
    fs::remove_file(&out).ok();
}

#[test]
fn export_json_writes_the_history() {
    let db = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);
    finished_shift(&db, "ana@bar.com");

    bar()
        .args([
            "--db", &db, "--test", "--user", OWNER, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("exported file");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed[0]["staff_name"], "Ana");
    assert_eq!(parsed[0]["paused_minutes"], 0);
    fs::remove_file(&out).ok();
}

#[test]
fn export_requires_manager_tier() {
    let db = setup_test_db("export_unauthorized");
    let out = temp_out("export_unauthorized", "csv");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);

    bar()
        .args([
            "--db", &db, "--test", "--user", "ana@bar.com", "export", "--format", "csv", "--file",
            &out,
        ])
        .assert()
        .failure()
        .stderr(contains("Access denied"));
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let db = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);
    finished_shift(&db, "ana@bar.com");

    let args: [&str; 10] = [
        "--db", &db, "--test", "--user", OWNER, "export", "--format", "csv", "--file", &out,
    ];
    bar().args(args).assert().success();
    bar()
        .args(args)
        .assert()
        .failure()
        .stderr(contains("already exists"));

    let mut forced: Vec<&str> = args.to_vec();
    forced.push("--force");
    bar().args(&forced).assert().success();
    fs::remove_file(&out).ok();
}

#[test]
fn logs_period_filter_excludes_other_periods() {
    let db = setup_test_db("logs_period");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);
    finished_shift(&db, "ana@bar.com");

    bar()
        .args(["--db", &db, "--test", "--user", OWNER, "logs", "--period", "1999"])
        .assert()
        .success()
        .stdout(contains("No finished shifts"));

    bar()
        .args(["--db", &db, "--test", "--user", OWNER, "logs", "--period", "bogus"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn ratings_feed_the_stats_table() {
    let db = setup_test_db("ratings_stats");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);

    for score in ["5", "4"] {
        bar()
            .args(["--db", &db, "--test", "rate", "add", "ana@bar.com", score])
            .assert()
            .success();
    }

    bar()
        .args(["--db", &db, "--test", "rate", "stats"])
        .assert()
        .success()
        .stdout(contains("Ana"))
        .stdout(contains("4.50"));

    bar()
        .args(["--db", &db, "--test", "rate", "add", "ana@bar.com", "9"])
        .assert()
        .failure()
        .stderr(contains("Invalid score"));
}
