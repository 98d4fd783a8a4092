#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Sample `/api/leaves/` payload, newest first like the backend returns it.
pub const LEAVES_JSON: &str = r#"[
  {
    "id": 4,
    "employee": 2,
    "employee_full_name": "Petr Svoboda",
    "leave_type": "PERSONAL",
    "start_date": "2025-04-01",
    "end_date": "2025-04-02",
    "status": "PENDING",
    "reason": null,
    "approved_by": null,
    "approved_by_username": null
  },
  {
    "id": 3,
    "employee": 2,
    "employee_full_name": "Petr Svoboda",
    "leave_type": "SICK",
    "start_date": "2025-03-20",
    "end_date": "2025-03-21",
    "status": "REJECTED",
    "reason": "Flu",
    "approved_by": 1,
    "approved_by_username": "hr"
  },
  {
    "id": 2,
    "employee": 1,
    "employee_full_name": "Jana Novakova",
    "leave_type": "VACATION",
    "start_date": "2025-03-10",
    "end_date": "2025-03-12",
    "status": "APPROVED",
    "reason": "Family trip to the mountains, booked months ago and already paid for",
    "approved_by": 1,
    "approved_by_username": "hr"
  },
  {
    "id": 1,
    "employee": 1,
    "employee_full_name": "Jana Novakova",
    "leave_type": "OTHER",
    "start_date": "2025-02-27",
    "end_date": "2025-03-03",
    "status": "APPROVED",
    "reason": "",
    "approved_by": 1,
    "approved_by_username": "hr"
  }
]"#;

pub fn hrcal() -> Command {
    cargo_bin_cmd!("hrcal")
}

/// Command with HOME pointing to a private directory, so the user's real
/// configuration never leaks into a test.
pub fn hrcal_isolated(name: &str) -> Command {
    let mut cmd = hrcal();
    cmd.env("HOME", temp_home(name));
    cmd
}

/// Fresh, empty directory used as HOME for one test.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrcal_home", name));
    fs::create_dir_all(&path).expect("create temp home");
    path
}

pub fn reset_home(name: &str) -> PathBuf {
    let home = temp_home(name);
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create temp home");
    home
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrcal_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the sample leaves payload and return its path.
pub fn write_leaves(name: &str) -> String {
    write_leaves_with(name, LEAVES_JSON)
}

pub fn write_leaves_with(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_leaves.json", name));
    fs::write(&path, content).expect("write leaves fixture");
    path.to_string_lossy().to_string()
}

/// Build a database shaped like the backend's (Django app `app_system`).
pub fn setup_backend_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_backend.sqlite3", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute_batch(
        r#"
        CREATE TABLE app_system_employee (
            id         INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name  TEXT NOT NULL
        );
        CREATE TABLE auth_user (
            id       INTEGER PRIMARY KEY,
            username TEXT NOT NULL
        );
        CREATE TABLE app_system_leave (
            id             INTEGER PRIMARY KEY,
            employee_id    INTEGER NOT NULL,
            leave_type     TEXT NOT NULL,
            start_date     TEXT NOT NULL,
            end_date       TEXT NOT NULL,
            status         TEXT NOT NULL DEFAULT 'PENDING',
            reason         TEXT,
            approved_by_id INTEGER
        );
        INSERT INTO auth_user VALUES (1, 'hr');
        INSERT INTO app_system_employee VALUES (1, 'Jana', 'Novakova'), (2, 'Petr', 'Svoboda');
        INSERT INTO app_system_leave VALUES
            (1, 1, 'OTHER',    '2025-02-27', '2025-03-03', 'APPROVED', NULL, 1),
            (2, 1, 'VACATION', '2025-03-10', '2025-03-12', 'APPROVED', 'Trip', 1),
            (3, 2, 'SICK',     '2025-03-20', '2025-03-21', 'REJECTED', 'Flu', NULL);
        "#,
    )
    .expect("create backend schema");

    db_path
}
