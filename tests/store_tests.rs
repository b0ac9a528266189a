mod common;
use common::{temp_path, write_temp};

use chrono::{Local, NaiveDateTime, Timelike};
use craftlog::errors::AppError;
use craftlog::models::SessionRecord;
use craftlog::store::csv_io::{HEADER, read_records};
use craftlog::store::events::Notifier;
use craftlog::store::{HistoryEvent, HistoryStore};
use craftlog::timer::Timer;
use std::fs;
use std::time::{Duration, Instant};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn rec(ts: &str, m: u32, s: u32, note: Option<&str>) -> SessionRecord {
    SessionRecord::new(at(ts), m, s, note.map(str::to_string)).unwrap()
}

#[test]
fn open_missing_file_creates_header() {
    let path = temp_path("open_missing", "csv");

    let store = HistoryStore::open(&path).unwrap();
    assert!(store.is_empty());

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim_end(), HEADER.join(","));
}

#[test]
fn open_rejects_foreign_header() {
    let path = write_temp("open_foreign", "when,how_long\n2024-01-01,3\n");

    match HistoryStore::open(&path) {
        Err(AppError::FormatMismatch { found, .. }) => assert_eq!(found, "when,how_long"),
        other => panic!("expected FormatMismatch, got {:?}", other.map(|s| s.len())),
    }
}

#[test]
fn file_matches_memory_after_every_mutation() {
    let path = temp_path("roundtrip", "csv");
    let mut store = HistoryStore::open(&path).unwrap();

    store
        .add(rec("2024-03-01 10:00:00", 5, 30, Some("test")))
        .unwrap();
    assert_eq!(read_records(store.path()).unwrap(), store.records());

    store
        .add(rec("2024-03-02 11:15:00", 0, 59, Some("comma, \"quoted\" note")))
        .unwrap();
    assert_eq!(read_records(store.path()).unwrap(), store.records());

    store.add(rec("2024-03-03 07:00:00", 120, 0, None)).unwrap();
    assert_eq!(read_records(store.path()).unwrap(), store.records());

    store.delete(1).unwrap();
    assert_eq!(read_records(store.path()).unwrap(), store.records());
    assert_eq!(store.len(), 2);

    store
        .replace(0, rec("2024-03-04 08:00:00", 1, 1, Some("多行\n备注")))
        .unwrap();
    assert_eq!(read_records(store.path()).unwrap(), store.records());

    store.delete_all().unwrap();
    assert_eq!(read_records(store.path()).unwrap(), store.records());
    assert!(store.is_empty());
}

#[test]
fn add_inserts_at_front() {
    let path = temp_path("front", "csv");
    let mut store = HistoryStore::open(&path).unwrap();

    store.add(rec("2024-01-01 10:00:00", 1, 0, None)).unwrap();
    store.add(rec("2024-01-02 10:00:00", 2, 0, None)).unwrap();

    assert_eq!(store.records()[0].minutes, 2);
    assert_eq!(store.records()[1].minutes, 1);

    // reopening keeps the order
    let reopened = HistoryStore::open(&path).unwrap();
    assert_eq!(reopened.records(), store.records());
}

#[test]
fn delete_out_of_range_is_reported() {
    let path = temp_path("del_range", "csv");
    let mut store = HistoryStore::open(&path).unwrap();
    store.add(rec("2024-01-01 10:00:00", 1, 0, None)).unwrap();

    assert!(matches!(store.delete(3), Err(AppError::RecordNotFound(4))));
    assert!(matches!(
        store.replace(1, rec("2024-01-01 10:00:00", 1, 0, None)),
        Err(AppError::RecordNotFound(2))
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn export_writes_header_and_rows() {
    let path = temp_path("export_src", "csv");
    let out = temp_path("export_dst", "csv");
    let mut store = HistoryStore::open(&path).unwrap();

    store
        .add(rec("2024-03-01 10:00:00", 5, 30, Some("test")))
        .unwrap();
    store.export(&out).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec!["date_time,minute,second,note", "2024-03-01 10:00:00,5,30,test"]
    );
}

#[test]
fn import_appends_at_end() {
    let path = temp_path("import_ok", "csv");
    let mut store = HistoryStore::open(&path).unwrap();
    store.add(rec("2024-05-01 10:00:00", 3, 0, None)).unwrap();

    let src = write_temp(
        "import_ok_src",
        "date_time,minute,second,note\n\
         2024-01-01 08:00:00,10,5,morning\n\
         2024-01-02 09:00:00,0,0,\n",
    );

    let count = store.import(&src).unwrap();
    assert_eq!(count, 2);
    assert_eq!(store.len(), 3);
    assert_eq!(store.records()[0].minutes, 3);
    assert_eq!(store.records()[1].note.as_deref(), Some("morning"));
    assert_eq!(store.records()[2].note, None);
    assert_eq!(read_records(store.path()).unwrap(), store.records());
}

#[test]
fn import_with_wrong_header_changes_nothing() {
    let path = temp_path("import_bad_header", "csv");
    let mut store = HistoryStore::open(&path).unwrap();
    store.add(rec("2024-05-01 10:00:00", 3, 0, None)).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let src = write_temp(
        "import_bad_header_src",
        "date,minute,second,note\n2024-01-01 08:00:00,10,5,x\n",
    );

    let err = store.import(&src).unwrap_err();
    assert!(matches!(err, AppError::FormatMismatch { .. }));
    assert_eq!(store.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn import_with_bad_row_is_all_or_nothing() {
    let path = temp_path("import_bad_row", "csv");
    let mut store = HistoryStore::open(&path).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let src = write_temp(
        "import_bad_row_src",
        "date_time,minute,second,note\n\
         2024-01-01 08:00:00,10,5,fine\n\
         2024-01-02 08:00:00,ten,5,broken\n",
    );

    match store.import(&src) {
        Err(AppError::Validation { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("minute"));
        }
        other => panic!("expected Validation, got {:?}", other),
    }
    assert!(store.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn import_rejects_seconds_out_of_range_and_short_rows() {
    let path = temp_path("import_ranges", "csv");
    let mut store = HistoryStore::open(&path).unwrap();

    let seconds = write_temp(
        "import_ranges_secs",
        "date_time,minute,second,note\n2024-01-01 08:00:00,1,60,\n",
    );
    assert!(matches!(
        store.import(&seconds),
        Err(AppError::Validation { line: 2, .. })
    ));

    let short = write_temp(
        "import_ranges_short",
        "date_time,minute,second,note\n2024-01-01 08:00:00,1\n",
    );
    assert!(matches!(
        store.import(&short),
        Err(AppError::Validation { line: 2, .. })
    ));

    assert!(store.is_empty());
}

#[test]
fn import_missing_file_is_reported() {
    let path = temp_path("import_missing", "csv");
    let mut store = HistoryStore::open(&path).unwrap();
    let missing = temp_path("import_missing_src", "csv");

    assert!(matches!(
        store.import(&missing),
        Err(AppError::FileNotFound(_))
    ));
}

#[test]
fn subscribers_receive_typed_events() {
    let path = temp_path("events", "csv");
    let mut store = HistoryStore::open(&path).unwrap();
    let rx = store.subscribe();

    store.add(rec("2024-01-01 10:00:00", 1, 0, None)).unwrap();
    store
        .replace(0, rec("2024-01-01 10:00:00", 2, 0, None))
        .unwrap();
    store.delete(0).unwrap();
    store.delete_all().unwrap();

    let events: Vec<HistoryEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            HistoryEvent::Added,
            HistoryEvent::Replaced { index: 0 },
            HistoryEvent::Deleted { index: 0 },
            HistoryEvent::Cleared,
        ]
    );
}

#[test]
fn failed_import_sends_no_event() {
    let path = temp_path("events_failed", "csv");
    let mut store = HistoryStore::open(&path).unwrap();
    let rx = store.subscribe();

    let src = write_temp("events_failed_src", "nope\n");
    assert!(store.import(&src).is_err());
    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn record_rejects_bad_seconds_and_blank_notes() {
    assert!(matches!(
        SessionRecord::new(at("2024-01-01 00:00:00"), 0, 60, None),
        Err(AppError::InvalidDuration(_))
    ));

    let r = SessionRecord::new(at("2024-01-01 00:00:00"), 2, 5, Some("   ".into())).unwrap();
    assert_eq!(r.note, None);
    assert_eq!(r.total_seconds(), 125);
    assert_eq!(r.duration_label(), "2m 5s");
}

#[test]
fn timer_session_with_subsecond_stamp_matches_file() {
    let path = temp_path("timer_stamp", "csv");
    let mut store = HistoryStore::open(&path).unwrap();

    let stamp = Local::now()
        .naive_local()
        .with_nanosecond(214_296_192)
        .unwrap();

    let t0 = Instant::now();
    let mut timer = Timer::new();
    timer.start(t0);
    let record = timer
        .stop(t0 + Duration::from_secs(90), stamp, None)
        .unwrap();
    assert_eq!(record.timestamp.nanosecond(), 0);

    store.add(record).unwrap();
    assert_eq!(read_records(store.path()).unwrap(), store.records());
}

#[test]
fn manual_record_drops_subsecond_precision() {
    let stamp = at("2024-03-01 10:00:00").with_nanosecond(500_000_000).unwrap();
    let r = SessionRecord::new(stamp, 1, 0, None).unwrap();
    assert_eq!(r.timestamp, at("2024-03-01 10:00:00"));
}

#[test]
fn failed_save_rolls_back_memory_and_sends_no_event() {
    let path = temp_path("rollback", "csv");
    fs::remove_dir(&path).ok();
    let mut store = HistoryStore::open(&path).unwrap();
    store.add(rec("2024-01-01 10:00:00", 1, 0, Some("kept"))).unwrap();
    let before = store.records().to_vec();
    let rx = store.subscribe();

    // a directory where the history file was: every rewrite fails
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    assert!(store.add(rec("2024-01-02 10:00:00", 2, 0, None)).is_err());
    assert_eq!(store.records(), before.as_slice());

    assert!(store.delete(0).is_err());
    assert_eq!(store.records(), before.as_slice());

    assert!(store.delete_all().is_err());
    assert_eq!(store.records(), before.as_slice());

    let src = write_temp(
        "rollback_src",
        "date_time,minute,second,note\n2024-01-03 08:00:00,3,0,x\n",
    );
    assert!(store.import(&src).is_err());
    assert_eq!(store.records(), before.as_slice());

    assert_eq!(rx.try_iter().count(), 0);

    fs::remove_dir(&path).unwrap();
}

#[test]
fn dropped_subscribers_are_pruned_on_notify() {
    let mut notifier = Notifier::default();
    let kept = notifier.subscribe();
    let dropped = notifier.subscribe();
    assert_eq!(notifier.subscriber_count(), 2);

    drop(dropped);
    notifier.notify(HistoryEvent::Added);

    assert_eq!(notifier.subscriber_count(), 1);
    assert_eq!(kept.try_iter().collect::<Vec<_>>(), vec![HistoryEvent::Added]);
}
