use super::*;
use shared::models::DayStatus;

#[test]
fn test_open_day_creates_single_open_day() {
    let mut snapshot = Snapshot::default();

    let day = open_day(&mut snapshot, at(12, 0)).unwrap();

    assert_eq!(day.status, DayStatus::Open);
    assert_eq!(day.date, at(12, 0).date_naive());
    assert!(day.sale_ids.is_empty());
    assert_eq!(day.total, 0.0);
    assert!(day.closed_at.is_none());
    assert_eq!(open_day_count(&snapshot), 1);
    assert!(find_open_day(&snapshot).is_some());
}

#[test]
fn test_open_day_fails_when_already_open() {
    let mut snapshot = Snapshot::default();
    open_day(&mut snapshot, at(12, 0)).unwrap();

    let err = open_day(&mut snapshot, at(12, 5)).unwrap_err();
    assert!(matches!(err, DayError::AlreadyOpen));
    assert_eq!(err.code(), "DAY_ALREADY_OPEN");
    assert_eq!(open_day_count(&snapshot), 1);
}

#[test]
fn test_already_open_wins_over_schedule_violations() {
    // The duplicate-day check is independent of schedule configuration:
    // even at a time that would be rejected as too early, the error is
    // AlreadyOpen, not a timing error.
    let mut snapshot = Snapshot::default();
    open_day(&mut snapshot, at(12, 0)).unwrap();
    snapshot.schedule = controlled_schedule();

    let err = open_day(&mut snapshot, at(7, 0)).unwrap_err();
    assert!(matches!(err, DayError::AlreadyOpen));
}

#[test]
fn test_at_most_one_open_day_across_cycles() {
    let mut snapshot = Snapshot::default();

    for _ in 0..3 {
        open_day(&mut snapshot, at(9, 0)).unwrap();
        assert_eq!(open_day_count(&snapshot), 1);
        close_day(&mut snapshot, at(18, 0)).unwrap();
        assert_eq!(open_day_count(&snapshot), 0);
    }
    assert_eq!(snapshot.days.len(), 3);
}

#[test]
fn test_control_disabled_ignores_wall_clock() {
    let mut snapshot = Snapshot::default();
    assert!(!snapshot.schedule.control_enabled);

    open_day(&mut snapshot, at(3, 0)).unwrap();
    close_day(&mut snapshot, at(3, 1)).unwrap();
    open_day(&mut snapshot, at(23, 59)).unwrap();
    close_day(&mut snapshot, at(23, 59)).unwrap();
}

#[test]
fn test_open_day_too_early() {
    let mut snapshot = Snapshot::default();
    snapshot.schedule = controlled_schedule();

    let err = open_day(&mut snapshot, at(7, 59)).unwrap_err();
    assert_eq!(err.code(), "OPEN_TOO_EARLY");
    assert!(snapshot.days.is_empty());
}

#[test]
fn test_open_day_within_window() {
    let mut snapshot = Snapshot::default();
    snapshot.schedule = controlled_schedule();

    open_day(&mut snapshot, at(8, 15)).unwrap();
}

#[test]
fn test_open_day_too_late() {
    let mut snapshot = Snapshot::default();
    snapshot.schedule = controlled_schedule();

    let err = open_day(&mut snapshot, at(8, 31)).unwrap_err();
    assert_eq!(err.code(), "OPEN_TOO_LATE");
    assert!(snapshot.days.is_empty());
}

#[test]
fn test_open_window_bounds_are_inclusive() {
    let mut snapshot = Snapshot::default();
    snapshot.schedule = controlled_schedule();
    open_day(&mut snapshot, at(8, 0)).unwrap();

    let mut snapshot = Snapshot::default();
    snapshot.schedule = controlled_schedule();
    open_day(&mut snapshot, at(8, 30)).unwrap();
}

#[test]
fn test_open_window_compares_at_minute_precision() {
    // 08:30:45 still counts as 08:30 against an "08:30" upper bound
    let mut snapshot = Snapshot::default();
    snapshot.schedule = controlled_schedule();

    open_day(&mut snapshot, at_hms(8, 30, 45)).unwrap();
}

#[test]
fn test_close_day_without_open_day() {
    let mut snapshot = Snapshot::default();

    let err = close_day(&mut snapshot, at(18, 0)).unwrap_err();
    assert!(matches!(err, DayError::NoOpenDay));
    assert_eq!(err.code(), "NO_OPEN_DAY");
}

#[test]
fn test_close_day_too_early() {
    let mut snapshot = Snapshot::default();
    open_day(&mut snapshot, at(12, 0)).unwrap();
    snapshot.schedule = controlled_schedule();

    let err = close_day(&mut snapshot, at(16, 59)).unwrap_err();
    assert_eq!(err.code(), "CLOSE_TOO_EARLY");
    assert_eq!(open_day_count(&snapshot), 1);

    // The earliest-close bound itself is allowed
    close_day(&mut snapshot, at(17, 0)).unwrap();
}

#[test]
fn test_close_day_sets_timestamps_and_status() {
    let mut snapshot = Snapshot::default();
    open_day(&mut snapshot, at(9, 0)).unwrap();

    let closed = close_day(&mut snapshot, at(18, 30)).unwrap();
    assert_eq!(closed.status, DayStatus::Closed);
    assert_eq!(closed.closed_at, Some(at(18, 30).timestamp_millis()));
    assert_eq!(snapshot.days[0].status, DayStatus::Closed);
}

#[test]
fn test_close_day_recomputes_total_from_ledger() {
    let mut snapshot = open_snapshot(vec![
        product(1, "Hammer", 10.0, 99),
        product(2, "Drill", 45.5, 99),
    ]);

    commit_sale(&mut snapshot, at(10, 0), items(&[(1, 3)])).unwrap();
    commit_sale(&mut snapshot, at(11, 0), items(&[(2, 1)])).unwrap();

    // Corrupt the running cache: close must not trust it
    let open_idx = snapshot.days.iter().position(|d| d.is_open()).unwrap();
    snapshot.days[open_idx].total = 999.99;

    let closed = close_day(&mut snapshot, at(18, 0)).unwrap();
    assert_eq!(closed.total, 75.5);
    assert_eq!(snapshot.days[open_idx].total, 75.5);
}

#[test]
fn test_close_day_sums_only_referenced_sales() {
    let mut snapshot = open_snapshot(vec![product(1, "Hammer", 10.0, 99)]);
    commit_sale(&mut snapshot, at(10, 0), items(&[(1, 2)])).unwrap();

    // A stray ledger entry not referenced by the day must not count
    let mut stray = snapshot.sales[0].clone();
    stray.id += 1;
    stray.total = 500.0;
    snapshot.sales.push(stray);

    let closed = close_day(&mut snapshot, at(18, 0)).unwrap();
    assert_eq!(closed.total, 20.0);
}
