// File: crates/termgraph-core/tests/calendar.rs
// Purpose: Calendar bucketing (week offsets, weekday index, density) and heatmap rendering.

use chrono::{NaiveDate, Weekday};
use termgraph_core::calendar::{bucket, bucket_with, weekday_index, Percentiles};
use termgraph_core::{Chart, ChartMode, DataError, Dataset, Error, Intensity, ModeFlags, RenderOptions};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn entries_land_on_week_offset_and_weekday() {
    let start = date(2023, 1, 2); // Monday
    let grid = bucket(&[(date(2023, 1, 2), 3.0), (date(2023, 1, 9), 1.0)], start);

    assert_eq!(grid.cells().len(), 8);
    assert_eq!(grid.weeks(), 2);
    assert_eq!(grid.get(0, 0).map(|c| c.value), Some(3.0));
    assert_eq!(grid.get(1, 0).map(|c| c.value), Some(1.0));
    let non_zero = grid.cells().iter().filter(|c| c.value != 0.0).count();
    assert_eq!(non_zero, 2);
    assert!(grid.get(1, 1).is_none());
}

#[test]
fn same_day_entries_are_summed() {
    let start = date(2024, 3, 1);
    let grid = bucket(&[(date(2024, 3, 2), 2.0), (date(2024, 3, 2), 5.0)], start);
    assert_eq!(grid.value_on(date(2024, 3, 2)), Some(7.0));
    assert_eq!(grid.value_on(date(2024, 3, 1)), Some(0.0));
    assert_eq!(grid.value_on(date(2024, 3, 3)), None);
}

#[test]
fn entries_before_start_are_dropped() {
    let start = date(2024, 3, 10);
    let grid = bucket(&[(date(2024, 3, 1), 9.0), (date(2024, 3, 11), 1.0)], start);
    assert_eq!(grid.cells().len(), 2);
    assert_eq!(grid.cells().iter().map(|c| c.value).sum::<f64>(), 1.0);
}

#[test]
fn weekday_follows_first_day_of_week() {
    // 2023-01-01 is a Sunday.
    assert_eq!(weekday_index(date(2023, 1, 1), Weekday::Mon), 6);
    assert_eq!(weekday_index(date(2023, 1, 1), Weekday::Sun), 0);
    let grid = bucket_with(&[(date(2023, 1, 1), 1.0)], date(2023, 1, 1), Weekday::Sun);
    assert_eq!(grid.get(0, 0).map(|c| c.date), Some(date(2023, 1, 1)));
}

#[test]
fn zero_always_maps_to_empty_bucket() {
    assert!(Percentiles::from_values([0.0, 0.0]).is_none());
    let p = Percentiles::from_values([1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(p.intensity(0.0), Intensity::None);
    assert_eq!(p.intensity(1.0), Intensity::Low);
    assert_eq!(p.intensity(2.0), Intensity::Medium);
    assert_eq!(p.intensity(3.0), Intensity::High);
    assert_eq!(p.intensity(4.0), Intensity::Max);
}

fn calendar_opts(start: &str) -> RenderOptions {
    let flags = ModeFlags { calendar: true, start_date: Some(start.into()), ..ModeFlags::default() };
    RenderOptions { mode: ChartMode::from_flags(&flags).unwrap(), ..RenderOptions::default() }
}

#[test]
fn heatmap_rows_are_weekdays() {
    let data = Dataset::from_pairs([("2023-01-02", 3.0), ("2023-01-09", 1.0)]).unwrap();
    let out = Chart::new(data).render_to_string(&calendar_opts("2023-01-02T00:00:00Z")).unwrap();
    assert_eq!(out, "    Jan\nMon ▓ ░\nTue\nWed\nThu\nFri\nSat\nSun\n");
}

#[test]
fn all_zero_calendar_is_uniformly_empty() {
    let data = Dataset::from_pairs([("2023-01-02", 0.0), ("2023-01-04", 0.0)]).unwrap();
    let out = Chart::new(data).render_to_string(&calendar_opts("2023-01-02")).unwrap();
    assert_eq!(out, "    Jan\nMon\nTue\nWed\nThu\nFri\nSat\nSun\n");
}

#[test]
fn bad_date_label_fails_before_output() {
    let data = Dataset::from_pairs([("2023-01-02", 1.0), ("yesterday", 2.0)]).unwrap();
    let err = Chart::new(data).render_to_string(&calendar_opts("2023-01-02")).unwrap_err();
    match err {
        Error::Data(DataError::InvalidDate { line, field }) => {
            assert_eq!(line, 2);
            assert_eq!(field, "yesterday");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn calendar_takes_a_single_series() {
    let data = Dataset::try_new(vec!["2023-01-02".into()], vec![vec![1.0, 2.0]]).unwrap();
    let err = Chart::new(data).render_to_string(&calendar_opts("2023-01-02")).unwrap_err();
    assert!(matches!(err, Error::Data(DataError::Arity { expected: 1, found: 2, .. })));
}
