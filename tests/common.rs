#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Bootstrap identities from the default (test-mode) configuration.
pub const OWNER: &str = "dueno@mrsmithbarpool.com";
pub const MANAGER: &str = "staff@mrsmithbarpool.com";

pub fn bar() -> Command {
    let mut cmd = cargo_bin_cmd!("barshift");
    // Keep tests hermetic: the acting identity always comes from --user.
    cmd.env_remove("BARSHIFT_USER");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_barshift.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the database schema (test mode: no config file is written)
pub fn init_db(db_path: &str) {
    bar()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a roster entry as the bootstrap owner
pub fn add_staff(db_path: &str, email: &str, name: &str, role: Option<&str>) {
    let mut args = vec![
        "--db", db_path, "--test", "--user", OWNER, "staff", "add", "--email", email, "--name",
        name,
    ];
    if let Some(r) = role {
        args.push("--role");
        args.push(r);
    }
    bar().args(&args).assert().success();
}

/// Run one full shift cycle for a staff member so a work log exists
pub fn finished_shift(db_path: &str, email: &str) {
    bar()
        .args(["--db", db_path, "--test", "--user", email, "clock", "in"])
        .assert()
        .success();
    bar()
        .args(["--db", db_path, "--test", "--user", email, "clock", "out"])
        .assert()
        .success();
}
