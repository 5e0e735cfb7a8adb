// File: crates/termgraph-core/src/chart.rs
// Summary: Chart struct, render options and the per-mode text rendering pipeline.

use std::io::Write;

use chrono::{NaiveDate, Weekday};

use crate::calendar::{self, HeatmapPrinter};
use crate::error::{ConfigError, DataError, Result};
use crate::format::NumberFormat;
use crate::mode::{ChartMode, ScaleMode};
use crate::row::{self, RowRenderer, Segment};
use crate::scale::{find_min, normalize};
use crate::series::Dataset;
use crate::text;
use crate::types::{TickGlyphs, WIDTH};

/// Immutable render configuration, built once and passed by reference.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Maximum ticks for the largest bar.
    pub width: usize,
    pub format: NumberFormat,
    pub suffix: String,
    pub no_labels: bool,
    pub mode: ChartMode,
    pub ticks: TickGlyphs,
    pub title: Option<String>,
    /// First row of the calendar heatmap.
    pub first_weekday: Weekday,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            format: NumberFormat::default(),
            suffix: String::new(),
            no_labels: false,
            mode: ChartMode::default(),
            ticks: TickGlyphs::default(),
            title: None,
            first_weekday: Weekday::Mon,
        }
    }
}

pub struct Chart {
    pub dataset: Dataset,
}

impl Chart {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Render the chart as text into `out`.
    ///
    /// Input problems are reported before anything is written; an I/O error
    /// midway leaves the rows already written in place.
    pub fn render<W: Write>(&self, opts: &RenderOptions, out: &mut W) -> Result<()> {
        if opts.width == 0 {
            return Err(ConfigError::ZeroWidth.into());
        }
        log::debug!(
            "rendering {} chart: {} label(s) x {} series, width {}, format `{}`",
            opts.mode.name(),
            self.dataset.len(),
            self.dataset.series_count(),
            opts.width,
            opts.format.template()
        );

        // Calendar labels must all parse before the first line goes out.
        let entries = match opts.mode {
            ChartMode::Calendar { .. } => self.calendar_entries()?,
            _ => Vec::new(),
        };

        self.write_header(opts, out)?;
        match opts.mode {
            ChartMode::Calendar { start } => {
                let grid = calendar::bucket_with(&entries, start, opts.first_weekday);
                let printer = HeatmapPrinter { glyphs: &opts.ticks, colour: self.dataset.colour(0) };
                printer.write(out, &grid)?;
            }
            ChartMode::Stacked => self.write_stacked(opts, out)?,
            ChartMode::Vertical { scale } => self.write_vertical(opts, scale, out)?,
            ChartMode::Horizontal { scale } => self.write_horizontal(opts, scale, out)?,
        }
        out.flush()?;
        Ok(())
    }

    /// Render into a `String` (convenient for tests and callers that buffer).
    pub fn render_to_string(&self, opts: &RenderOptions) -> Result<String> {
        let mut buf = Vec::new();
        self.render(opts, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_header<W: Write>(&self, opts: &RenderOptions, out: &mut W) -> Result<()> {
        if let Some(title) = &opts.title {
            writeln!(out, "# {title}\n")?;
        }
        let categories = self.dataset.categories();
        if !categories.is_empty() {
            let legend = categories
                .iter()
                .enumerate()
                .map(|(j, name)| {
                    let key = format!("{} {}", opts.ticks.full, name);
                    match self.dataset.colour(j) {
                        Some(c) => c.paint(&key),
                        None => key,
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(out, "{legend}\n")?;
        }
        Ok(())
    }

    /// Tick magnitudes per label and series, and the minimum each series was scaled against.
    fn scaled(&self, scale: ScaleMode, width: f64) -> (Vec<Vec<f64>>, Vec<f64>) {
        let rows = self.dataset.rows();
        let n = self.dataset.series_count();
        match scale {
            ScaleMode::Shared => (normalize(rows, width), vec![find_min(rows); n]),
            ScaleMode::PerSeries => {
                let mut ticks = vec![vec![0.0; n]; rows.len()];
                let mut mins = Vec::with_capacity(n);
                for j in 0..n {
                    let column = self.dataset.column(j);
                    mins.push(find_min(&column));
                    for (i, t) in normalize(&column, width).into_iter().enumerate() {
                        ticks[i][j] = t[0];
                    }
                }
                (ticks, mins)
            }
        }
    }

    fn segment(&self, ticks: &[Vec<f64>], mins: &[f64], i: usize, j: usize) -> Segment {
        Segment {
            value: self.dataset.rows()[i][j],
            ticks: ticks[i][j],
            min: mins[j],
            colour: self.dataset.colour(j),
        }
    }

    /// One line per (label, series); continuation series get a blank label cell.
    fn write_horizontal<W: Write>(&self, opts: &RenderOptions, scale: ScaleMode, out: &mut W) -> Result<()> {
        let (ticks, mins) = self.scaled(scale, opts.width as f64);
        let renderer = RowRenderer::new(opts, self.dataset.max_label_width());
        for (i, label) in self.dataset.labels().iter().enumerate() {
            for j in 0..self.dataset.series_count() {
                let cell = if j == 0 { renderer.label_cell(label) } else { renderer.blank_cell() };
                let seg = self.segment(&ticks, &mins, i, j);
                renderer.write_row(out, &cell, &[seg], seg.value)?;
            }
        }
        Ok(())
    }

    /// One line per label, series segments end to end, tail is the row sum.
    fn write_stacked<W: Write>(&self, opts: &RenderOptions, out: &mut W) -> Result<()> {
        let (ticks, mins) = self.scaled(ScaleMode::Shared, opts.width as f64);
        let renderer = RowRenderer::new(opts, self.dataset.max_label_width());
        for (i, label) in self.dataset.labels().iter().enumerate() {
            let segments = (0..self.dataset.series_count())
                .map(|j| self.segment(&ticks, &mins, i, j))
                .collect::<Vec<_>>();
            let sum: f64 = self.dataset.rows()[i].iter().sum();
            renderer.write_row(out, &renderer.label_cell(label), &segments, sum)?;
        }
        Ok(())
    }

    /// Columns grown bottom-up, then the values and labels written downwards under each column.
    fn write_vertical<W: Write>(&self, opts: &RenderOptions, scale: ScaleMode, out: &mut W) -> Result<()> {
        if self.dataset.is_empty() {
            return Ok(());
        }
        let (ticks, mins) = self.scaled(scale, opts.width as f64);
        let glyphs = &opts.ticks;
        let col_width = text::display_width(&glyphs.full).max(1);

        let mut columns = Vec::with_capacity(self.dataset.len() * self.dataset.series_count());
        for (i, label) in self.dataset.labels().iter().enumerate() {
            for j in 0..self.dataset.series_count() {
                let seg = self.segment(&ticks, &mins, i, j);
                let height = seg.ticks.max(0.0) as usize;
                let partial = height == 0
                    && row::is_partial(seg.value, seg.ticks, seg.min)
                    && !glyphs.vertical_partial.is_empty();
                columns.push(VerticalColumn {
                    label: (j == 0).then_some(label.as_str()),
                    value: opts.format.format(seg.value),
                    height,
                    partial,
                    seg,
                });
            }
        }

        let paint = |seg: &Segment, body: &str| match seg.colour {
            Some(c) => c.paint(body),
            None => body.to_string(),
        };
        let rows = columns.iter().map(|c| c.height.max(usize::from(c.partial))).max().unwrap_or(0);
        for level in (1..=rows).rev() {
            let line = columns
                .iter()
                .map(|c| {
                    if c.height >= level {
                        paint(&c.seg, &text::pad_right(&glyphs.full, col_width))
                    } else if level == 1 && c.partial {
                        paint(&c.seg, &text::pad_right(&glyphs.vertical_partial, col_width))
                    } else {
                        text::blank(col_width)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{}", line.trim_end())?;
        }

        let rule = "-".repeat(columns.len() * (col_width + 1));
        writeln!(out, "{rule}Values{rule}")?;
        write_downwards(out, columns.iter().map(|c| c.value.trim_end()), col_width)?;
        if !opts.no_labels {
            writeln!(out, "{rule}Labels{rule}")?;
            write_downwards(out, columns.iter().map(|c| c.label.unwrap_or("")), col_width)?;
        }
        Ok(())
    }

    fn calendar_entries(&self) -> Result<Vec<(NaiveDate, f64)>> {
        let series = self.dataset.series_count();
        if series > 1 {
            return Err(DataError::Arity { line: self.dataset.source_line(0), expected: 1, found: series }.into());
        }
        self.dataset
            .labels()
            .iter()
            .zip(self.dataset.rows())
            .enumerate()
            .map(|(i, (label, row))| -> Result<(NaiveDate, f64)> {
                let date = calendar::parse_date(label)
                    .ok_or_else(|| DataError::InvalidDate { line: self.dataset.source_line(i), field: label.clone() })?;
                Ok((date, row[0]))
            })
            .collect()
    }
}

struct VerticalColumn<'a> {
    label: Option<&'a str>,
    value: String,
    height: usize,
    partial: bool,
    seg: Segment,
}

/// Print each string top to bottom, one character per line, one string per column.
fn write_downwards<'a, W: Write>(
    out: &mut W,
    columns: impl Iterator<Item = &'a str> + Clone,
    col_width: usize,
) -> std::io::Result<()> {
    let depth = columns.clone().map(|s| s.chars().count()).max().unwrap_or(0);
    for k in 0..depth {
        let line = columns
            .clone()
            .map(|s| match s.chars().nth(k) {
                Some(ch) => text::pad_right(&ch.to_string(), col_width),
                None => text::blank(col_width),
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
