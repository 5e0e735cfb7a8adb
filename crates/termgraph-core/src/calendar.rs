// File: crates/termgraph-core/src/calendar.rs
// Summary: Calendar bucketer (date -> week x weekday cell) and the heatmap printer.
// Notes:
// - Week columns are consecutive 7-day windows counted from the start date.
// - The grid is dense: one cell per day in [start, latest entry].

use std::collections::BTreeMap;
use std::io::{self, Write};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Weekday};

use crate::text;
use crate::theme::Colour;
use crate::types::TickGlyphs;

const WEEKDAY_LABEL_WIDTH: usize = 4;
const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// 7-day window index counted from the start date.
    pub week: usize,
    /// 0..=6, relative to the first day of the week.
    pub weekday: usize,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalendarGrid {
    start: NaiveDate,
    first_weekday: Weekday,
    cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    pub fn start(&self) -> NaiveDate { self.start }
    pub fn first_weekday(&self) -> Weekday { self.first_weekday }
    /// Cells in date order, one per day.
    pub fn cells(&self) -> &[CalendarCell] { &self.cells }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    /// Number of week columns.
    pub fn weeks(&self) -> usize {
        self.cells.last().map(|c| c.week + 1).unwrap_or(0)
    }

    pub fn get(&self, week: usize, weekday: usize) -> Option<&CalendarCell> {
        let from = (week * 7).min(self.cells.len());
        let to = (from + 7).min(self.cells.len());
        self.cells[from..to].iter().find(|c| c.weekday == weekday)
    }

    /// Cell value for `date`, 0 inside the range, `None` outside it.
    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        let offset = usize::try_from((date - self.start).num_days()).ok()?;
        self.cells.get(offset).map(|c| c.value)
    }
}

/// Weekday index of `date` when weeks begin on `first`.
pub fn weekday_index(date: NaiveDate, first: Weekday) -> usize {
    ((date.weekday().num_days_from_monday() + 7 - first.num_days_from_monday()) % 7) as usize
}

/// Bucket entries with Monday as the first weekday.
pub fn bucket(entries: &[(NaiveDate, f64)], start: NaiveDate) -> CalendarGrid {
    bucket_with(entries, start, Weekday::Mon)
}

/// Place `(date, value)` entries on the week x weekday grid starting at `start`.
/// Same-day entries are summed; days without entries are zero cells; entries
/// before `start` are dropped.
pub fn bucket_with(entries: &[(NaiveDate, f64)], start: NaiveDate, first_weekday: Weekday) -> CalendarGrid {
    let mut days: BTreeMap<usize, f64> = BTreeMap::new();
    for &(date, value) in entries {
        let offset = (date - start).num_days();
        match usize::try_from(offset) {
            Ok(d) => *days.entry(d).or_insert(0.0) += value,
            Err(_) => log::warn!("dropping calendar entry {date}: before start date {start}"),
        }
    }

    let len = days.keys().next_back().map(|&d| d + 1).unwrap_or(0);
    let cells = (0..len)
        .map(|d| {
            let date = start + Duration::days(d as i64);
            CalendarCell {
                date,
                week: d / 7,
                weekday: weekday_index(date, first_weekday),
                value: days.get(&d).copied().unwrap_or(0.0),
            }
        })
        .collect::<Vec<_>>();
    log::debug!("calendar grid: {} day(s) from {start}, {} entries", cells.len(), entries.len());
    CalendarGrid { start, first_weekday, cells }
}

/// Parse a calendar label: `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|t| t.date_naive()))
}

/// Heatmap intensity bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl Intensity {
    pub fn glyph(self) -> &'static str {
        match self {
            Intensity::None => " ",
            Intensity::Low => "░",
            Intensity::Medium => "▒",
            Intensity::High => "▓",
            Intensity::Max => "█",
        }
    }
}

/// Quartile breakpoints over the positive values of a grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentiles {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

impl Percentiles {
    /// `None` when no value is positive: every cell is then empty.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut positive: Vec<f64> = values.into_iter().filter(|&v| v > 0.0).collect();
        if positive.is_empty() {
            return None;
        }
        positive.sort_by(f64::total_cmp);
        let len = positive.len();
        let at = |q: f64| positive[((len as f64 * q).ceil() as usize).saturating_sub(1).min(len - 1)];
        Some(Self { p25: at(0.25), p50: at(0.50), p75: at(0.75) })
    }

    pub fn intensity(&self, value: f64) -> Intensity {
        if value <= 0.0 {
            Intensity::None
        } else if value <= self.p25 {
            Intensity::Low
        } else if value <= self.p50 {
            Intensity::Medium
        } else if value <= self.p75 {
            Intensity::High
        } else {
            Intensity::Max
        }
    }
}

/// Prints a grid as rows of weekdays across week columns, with month names on top.
pub struct HeatmapPrinter<'a> {
    pub glyphs: &'a TickGlyphs,
    pub colour: Option<Colour>,
}

impl HeatmapPrinter<'_> {
    fn cell_width(&self) -> usize {
        let glyph = if self.glyphs.custom { text::display_width(&self.glyphs.full) } else { 1 };
        glyph.max(1) + 1
    }

    fn cell(&self, intensity: Intensity, width: usize) -> String {
        if intensity == Intensity::None {
            return text::blank(width);
        }
        let glyph = if self.glyphs.custom { self.glyphs.full.as_str() } else { intensity.glyph() };
        let padded = text::pad_right(glyph, width - 1);
        let painted = match self.colour {
            Some(c) => c.paint(&padded),
            None => padded,
        };
        format!("{painted} ")
    }

    fn month_header(&self, grid: &CalendarGrid, width: usize) -> String {
        let mut header = text::blank(WEEKDAY_LABEL_WIDTH);
        let mut prev_month = None;
        for week in 0..grid.weeks() {
            let first_day = grid.start() + Duration::days(week as i64 * 7);
            let month = first_day.month0() as usize;
            let at = WEEKDAY_LABEL_WIDTH + week * width;
            // Skip a label that would run into the previous one.
            if prev_month != Some(month) && text::display_width(&header) <= at {
                header.push_str(&text::blank(at - text::display_width(&header)));
                header.push_str(MONTHS[month]);
            }
            prev_month = Some(month);
        }
        header.trim_end().to_string()
    }

    pub fn write<W: Write>(&self, out: &mut W, grid: &CalendarGrid) -> io::Result<()> {
        if grid.is_empty() {
            return Ok(());
        }
        let width = self.cell_width();
        let percentiles = Percentiles::from_values(grid.cells().iter().map(|c| c.value));
        writeln!(out, "{}", self.month_header(grid, width))?;

        let mut day = grid.first_weekday();
        for weekday in 0..7 {
            let name = DAYS[day.num_days_from_monday() as usize];
            let mut line = text::pad_right(name, WEEKDAY_LABEL_WIDTH);
            for week in 0..grid.weeks() {
                let intensity = match (grid.get(week, weekday), percentiles) {
                    (Some(cell), Some(p)) => p.intensity(cell.value),
                    _ => Intensity::None,
                };
                line.push_str(&self.cell(intensity, width));
            }
            writeln!(out, "{}", line.trim_end())?;
            day = day.succ();
        }
        Ok(())
    }
}
