mod common;
use common::temp_path;

use chrono::{NaiveDate, NaiveDateTime};
use craftlog::core::stats::{Stats, StatsView};
use craftlog::models::SessionRecord;
use craftlog::store::HistoryStore;

fn rec(ts: &str, m: u32, s: u32) -> SessionRecord {
    let at = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap();
    SessionRecord::new(at, m, s, None).unwrap()
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn empty_history_has_zero_average() {
    let stats = Stats::compute(&[], day("2024-06-17"));
    assert_eq!(stats.total, 0);
    assert_eq!(stats.average_minutes, 0.0);
    assert_eq!(stats.this_week, 0);
    assert_eq!(stats.this_month, 0);
}

#[test]
fn average_counts_seconds_as_fractions() {
    let records = vec![
        rec("2024-06-01 10:00:00", 5, 30),
        rec("2024-06-02 10:00:00", 2, 30),
    ];
    assert_eq!(Stats::compute(&records, day("2024-06-17")).average_minutes, 4.0);

    let single = vec![rec("2024-06-01 10:00:00", 1, 20)];
    assert_eq!(Stats::compute(&single, day("2024-06-17")).average_minutes, 1.33);
}

#[test]
fn week_and_month_are_relative_to_today() {
    // 2024-06-17 is a Monday; 2024-06-15 belongs to the previous ISO week
    let records = vec![
        rec("2024-01-01 10:00:00", 1, 0),
        rec("2024-06-15 09:00:00", 1, 0),
        rec("2024-06-17 08:00:00", 1, 0),
    ];

    let stats = Stats::compute(&records, day("2024-06-17"));
    assert_eq!(stats.total, 3);
    assert_eq!(stats.this_month, 2);
    assert_eq!(stats.this_week, 1);

    let stats = Stats::compute(&records, day("2024-06-15"));
    assert_eq!(stats.this_week, 1);
    assert_eq!(stats.this_month, 2);
}

#[test]
fn same_week_number_in_another_year_is_not_this_week() {
    // both are Mondays of ISO week 25
    let records = vec![rec("2023-06-19 10:00:00", 1, 0)];
    let stats = Stats::compute(&records, day("2024-06-17"));
    assert_eq!(stats.this_week, 0);
    assert_eq!(stats.this_month, 0);
}

#[test]
fn iso_week_can_span_new_year() {
    // 2024-12-30 is in ISO week 1 of 2025
    let records = vec![rec("2024-12-30 10:00:00", 1, 0)];
    let stats = Stats::compute(&records, day("2025-01-02"));
    assert_eq!(stats.this_week, 1);
    assert_eq!(stats.this_month, 0);
}

#[test]
fn view_recomputes_after_store_changes() {
    let path = temp_path("stats_view", "csv");
    let mut store = HistoryStore::open(&path).unwrap();
    let mut view = StatsView::new(&mut store);
    let today = day("2024-06-17");

    assert!(!view.is_cached());
    assert_eq!(view.stats(&store, today).total, 0);
    assert!(view.is_cached());

    store.add(rec("2024-06-17 08:00:00", 3, 0)).unwrap();
    assert!(!view.is_cached());

    let stats = view.stats(&store, today);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.average_minutes, 3.0);
    assert_eq!(stats.this_week, 1);

    store.delete_all().unwrap();
    assert_eq!(view.stats(&store, today).total, 0);
}

#[test]
fn view_recomputes_for_another_day() {
    let path = temp_path("stats_view_day", "csv");
    let mut store = HistoryStore::open(&path).unwrap();
    store.add(rec("2024-06-17 08:00:00", 3, 0)).unwrap();

    let mut view = StatsView::new(&mut store);
    assert_eq!(view.stats(&store, day("2024-06-17")).this_week, 1);
    assert_eq!(view.stats(&store, day("2024-07-01")).this_week, 0);
}
