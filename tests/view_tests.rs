mod common;
use chrono::NaiveDate;
use common::{LEAVES_JSON, setup_backend_db, write_leaves, write_leaves_with};
use hrcal::config::Locale;
use hrcal::core::calendar::MonthCursor;
use hrcal::core::logic::Core;
use hrcal::core::render::render_month;
use hrcal::errors::AppError;
use hrcal::models::leave::LeaveRecord;
use hrcal::models::leave_status::LeaveStatus;
use hrcal::source::{JsonLeaveSource, LeaveQuery, SqliteLeaveSource, admissible_intervals};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn sample_records() -> Vec<LeaveRecord> {
    serde_json::from_str(LEAVES_JSON).expect("fixture parses")
}

#[test]
fn test_status_codes_parse_case_insensitively() {
    assert_eq!(LeaveStatus::from_code("APPROVED"), Some(LeaveStatus::Approved));
    assert_eq!(LeaveStatus::from_code("approved"), Some(LeaveStatus::Approved));
    assert_eq!(LeaveStatus::from_code(" Pending "), Some(LeaveStatus::Pending));
    assert_eq!(LeaveStatus::from_code("DONE"), None);
    assert!(LeaveStatus::Approved.is_admissible());
    assert!(!LeaveStatus::Cancelled.is_admissible());
}

#[test]
fn test_only_approved_records_become_intervals() {
    let records = sample_records();
    let admissible = admissible_intervals(&records);

    let kinds: Vec<&str> = admissible.intervals.iter().map(|i| i.kind.as_str()).collect();
    assert_eq!(kinds, vec!["VACATION", "OTHER"]);
    assert_eq!(admissible.skipped, 0);
}

#[test]
fn test_unusable_approved_records_are_counted_as_skipped() {
    let json = r#"[
      {"id": 1, "leave_type": "VACATION", "start_date": "2025-03-12", "end_date": "2025-03-10", "status": "APPROVED"},
      {"id": 2, "leave_type": "SICK", "start_date": "12.3.2025", "end_date": "2025-03-14", "status": "APPROVED"},
      {"id": 3, "leave_type": "SICK", "start_date": "2025-03-05", "end_date": "2025-03-05", "status": "APPROVED"},
      {"id": 4, "leave_type": "SICK", "start_date": "garbage", "end_date": "garbage", "status": "PENDING"}
    ]"#;
    let records: Vec<LeaveRecord> = serde_json::from_str(json).expect("parses");
    let admissible = admissible_intervals(&records);

    assert_eq!(admissible.intervals.len(), 1);
    assert_eq!(admissible.intervals[0].start, d(2025, 3, 5));
    assert_eq!(admissible.skipped, 2);
}

#[test]
fn test_month_view_collects_visible_leaves() {
    let records = sample_records();
    let view = Core::build_month_view(
        MonthCursor::parse("2025-03").unwrap(),
        &records,
        d(2025, 3, 15),
    );

    // 1..3 (OTHER) + 10..12 (VACATION); rejected and pending are ignored
    assert_eq!(view.event_days(), 6);
    assert_eq!(view.visible.len(), 2);
    assert_eq!(view.weeks().len(), 6);
    assert!(view.weeks().iter().all(|w| w.len() <= 7));

    let april = Core::build_month_view(
        MonthCursor::parse("2025-04").unwrap(),
        &records,
        d(2025, 3, 15),
    );
    assert_eq!(april.event_days(), 0);
    assert!(april.visible.is_empty());
}

#[test]
fn test_month_view_with_no_records_still_has_a_grid() {
    let view = Core::build_month_view(MonthCursor::parse("2025-02").unwrap(), &[], d(2025, 3, 15));
    assert_eq!(view.cells.len(), 5 + 28);
    assert_eq!(view.event_days(), 0);
    assert_eq!(view.dated_cells().len(), 28);
    assert_eq!(view.dated_cells()[0].0, d(2025, 2, 1));
}

#[test]
fn test_render_plain_month() {
    let records = sample_records();
    let view = Core::build_month_view(
        MonthCursor::parse("2025-03").unwrap(),
        &records,
        d(2025, 3, 15),
    );
    let out = render_month(&view, Locale::En, false);

    assert!(out.contains("March 2025"));
    assert!(out.contains("Mo   Tu   We   Th   Fr   Sa   Su"));
    assert!(out.contains("[15]"));
    assert!(out.contains(" 10 *"));
    assert!(out.contains(" 13  "));
    assert!(out.contains("2025-03-10 .. 2025-03-12  Vacation (3 d)"));
    assert!(out.contains("2025-02-27 .. 2025-03-03  Other (5 d)"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_render_czech_headers() {
    let view = Core::build_month_view(MonthCursor::parse("2025-03").unwrap(), &[], d(2025, 3, 15));
    let out = render_month(&view, Locale::Cs, false);

    assert!(out.contains("březen 2025"));
    assert!(out.contains("Po   Út   St   Čt   Pá   So   Ne"));
}

#[test]
fn test_render_colored_month_keeps_layout() {
    let records = sample_records();
    let view = Core::build_month_view(
        MonthCursor::parse("2025-03").unwrap(),
        &records,
        d(2025, 3, 15),
    );
    let colored = render_month(&view, Locale::En, true);
    let plain = render_month(&view, Locale::En, false);

    assert!(colored.contains('\x1b'));
    assert_eq!(hrcal::utils::colors::strip_ansi(&colored), plain);
}

#[test]
fn test_json_source_reads_api_dump() {
    let path = write_leaves("view_json_source");
    let mut source = JsonLeaveSource::new(&path);
    let records = source.fetch_leaves().expect("fetch");

    assert_eq!(records.len(), 4);
    assert_eq!(records[2].employee_label(), "Jana Novakova");
    assert_eq!(records[2].approved_by_username.as_deref(), Some("hr"));
}

#[test]
fn test_json_source_errors() {
    let mut missing = JsonLeaveSource::new("/definitely/not/here/leaves.json");
    assert!(matches!(missing.fetch_leaves(), Err(AppError::Source(_))));

    let path = write_leaves_with("view_json_broken", "{ not json");
    let mut broken = JsonLeaveSource::new(&path);
    assert!(matches!(broken.fetch_leaves(), Err(AppError::Json(_))));
}

#[test]
fn test_sqlite_source_reads_backend_tables() {
    let db = setup_backend_db("view_sqlite_source");
    let mut source = SqliteLeaveSource::new(db);
    let records = source.fetch_leaves().expect("fetch");

    // newest first
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert_eq!(records[1].employee_full_name.as_deref(), Some("Jana Novakova"));
    assert_eq!(records[0].parsed_status(), Some(LeaveStatus::Rejected));

    // approver comes from auth_user; a leave nobody decided on has none
    assert_eq!(records[1].approved_by_username.as_deref(), Some("hr"));
    assert_eq!(records[0].approved_by_username, None);

    let admissible = admissible_intervals(&records);
    assert_eq!(admissible.intervals.len(), 2);
}

#[test]
fn test_sqlite_source_without_optional_tables() {
    let mut path = std::env::temp_dir();
    path.push("view_sqlite_bare_backend.sqlite3");
    std::fs::remove_file(&path).ok();
    rusqlite::Connection::open(&path)
        .and_then(|c| {
            c.execute_batch(
                r#"
                CREATE TABLE app_system_leave (
                    id INTEGER PRIMARY KEY, employee_id INTEGER NOT NULL,
                    leave_type TEXT NOT NULL, start_date TEXT NOT NULL,
                    end_date TEXT NOT NULL, status TEXT NOT NULL,
                    reason TEXT, approved_by_id INTEGER
                );
                INSERT INTO app_system_leave VALUES
                    (1, 7, 'SICK', '2025-03-03', '2025-03-04', 'APPROVED', NULL, 1);
                "#,
            )
        })
        .expect("create db");

    let mut source = SqliteLeaveSource::new(path.to_string_lossy().to_string());
    let records = source.fetch_leaves().expect("fetch");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_full_name, None);
    assert_eq!(records[0].approved_by_username, None);
    assert_eq!(records[0].employee_label(), "#7");
}

#[test]
fn test_sqlite_source_without_leave_table() {
    let mut path = std::env::temp_dir();
    path.push("view_sqlite_empty_backend.sqlite3");
    std::fs::remove_file(&path).ok();
    rusqlite::Connection::open(&path)
        .and_then(|c| c.execute_batch("CREATE TABLE other (id INTEGER);"))
        .expect("create db");

    let mut source = SqliteLeaveSource::new(path.to_string_lossy().to_string());
    assert!(matches!(source.fetch_leaves(), Err(AppError::Source(_))));
}
