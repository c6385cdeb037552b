use predicates::str::contains;

mod common;
use common::{OWNER, add_staff, bar, init_db, setup_test_db};

#[test]
fn full_shift_cycle_records_a_work_log() {
    let db = setup_test_db("clock_full_cycle");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);

    for action in ["in", "pause", "resume", "out"] {
        bar()
            .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", action])
            .assert()
            .success();
    }

    bar()
        .args(["--db", &db, "--test", "--user", OWNER, "logs"])
        .assert()
        .success()
        .stdout(contains("Ana"))
        .stdout(contains("1 shifts"));
}

#[test]
fn starting_twice_is_rejected() {
    let db = setup_test_db("clock_double_start");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);

    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "in"])
        .assert()
        .success();

    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "in"])
        .assert()
        .failure()
        .stderr(contains("already open"));
}

#[test]
fn pause_without_a_session_is_rejected() {
    let db = setup_test_db("clock_pause_no_session");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);

    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "pause"])
        .assert()
        .failure()
        .stderr(contains("no open session"));

    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "resume"])
        .assert()
        .failure();

    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "out"])
        .assert()
        .failure();
}

#[test]
fn owners_cannot_clock_someone_elses_session() {
    let db = setup_test_db("clock_ownership");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);

    bar()
        .args([
            "--db", &db, "--test", "--user", OWNER, "clock", "in", "--staff", "ana@bar.com",
        ])
        .assert()
        .failure()
        .stderr(contains("Access denied"));
}

#[test]
fn unknown_identities_are_denied() {
    let db = setup_test_db("clock_unknown");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);

    bar()
        .args(["--db", &db, "--test", "--user", "ghost@bar.com", "clock", "in"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));
}

#[test]
fn status_reports_the_open_session() {
    let db = setup_test_db("clock_status");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);

    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "status"])
        .assert()
        .success()
        .stdout(contains("no open session"));

    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "in"])
        .assert()
        .success();

    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "status"])
        .assert()
        .success()
        .stdout(contains("on shift since"));
}

#[test]
fn status_flags_a_session_left_over_from_an_interrupted_finish() {
    let db = setup_test_db("clock_interrupted_finish");
    init_db(&db);
    add_staff(&db, "ana@bar.com", "Ana", None);

    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "in"])
        .assert()
        .success();

    // A finish writes the log first, then clears the session. Replicate
    // a crash in between: the log row lands, the session stays open.
    {
        let pool = barshift::db::pool::DbPool::new(&db).unwrap();
        let ana = barshift::db::queries::find_staff_by_email(&pool.conn, "ana@bar.com")
            .unwrap()
            .expect("ana on the roster");
        let now = chrono::Utc::now();
        barshift::db::queries::insert_work_log(&pool.conn, ana.id, &ana.name, &now, &now, 0, 0)
            .unwrap();
    }

    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "status"])
        .assert()
        .success()
        .stdout(contains("interrupted"))
        .stdout(contains("clock out"));

    // An explicit finish closes it; the next status is clean again.
    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "out"])
        .assert()
        .success();
    bar()
        .args(["--db", &db, "--test", "--user", "ana@bar.com", "clock", "status"])
        .assert()
        .success()
        .stdout(contains("no open session"));
}

#[test]
fn clocking_without_identity_fails_cleanly() {
    let db = setup_test_db("clock_no_identity");
    init_db(&db);

    bar()
        .args(["--db", &db, "--test", "clock", "in"])
        .assert()
        .failure()
        .stderr(contains("No acting identity"));
}
