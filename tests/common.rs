#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use ractivity::db::activities::{ActivityStore, DEFAULT_STORAGE_KEY};
use ractivity::db::pool::DbPool;
use ractivity::models::{Activity, ActivityDraft, Participant};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rac() -> Command {
    cargo_bin_cmd!("ractivity")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ractivity.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ractivity_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `init` in test mode, so the user's config file is never touched
pub fn init_db(db_path: &str) {
    rac()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one activity through the CLI
pub fn add_via_cli(db_path: &str, name: &str, owner: &str, participants: &[&str]) {
    let mut args: Vec<String> = vec![
        "--db".into(),
        db_path.into(),
        "--test".into(),
        "add".into(),
        "--name".into(),
        name.into(),
        "--owner".into(),
        owner.into(),
        "--date".into(),
        "15/03/2025".into(),
        "--description".into(),
        format!("Description of {name}"),
    ];
    for p in participants {
        args.push("--participant".into());
        args.push((*p).into());
    }

    rac().args(&args).assert().success();
}

/// Load the stored collection straight from the database
pub fn stored(db_path: &str) -> Vec<Activity> {
    let pool = DbPool::new(db_path).expect("open db");
    ActivityStore::new(&pool.conn, DEFAULT_STORAGE_KEY)
        .load_all()
        .expect("load activities")
}

pub fn draft(name: &str) -> ActivityDraft {
    ActivityDraft {
        name: name.to_string(),
        owner: "Maria".to_string(),
        date: "10/04/2025".to_string(),
        description: format!("About {name}"),
        participants: vec![Participant::new("Ana", "ana@example.com")],
    }
}
