// File: crates/termgraph-core/src/row.rs
// Summary: Row renderer: label column, coloured tick segments and the formatted value tail.

use std::io::{self, Write};

use crate::chart::RenderOptions;
use crate::text;
use crate::theme::Colour;

/// A value below one tick still gets a partial glyph when it is not the
/// global minimum or is itself positive.
#[inline]
pub fn is_partial(value: f64, ticks: f64, min: f64) -> bool {
    ticks < 1.0 && (value > min || value > 0.0)
}

/// One value of a row: the raw number, its tick magnitude, the minimum it
/// was scaled against and the colour of its series.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub value: f64,
    pub ticks: f64,
    pub min: f64,
    pub colour: Option<Colour>,
}

pub struct RowRenderer<'a> {
    opts: &'a RenderOptions,
    label_width: usize,
}

impl<'a> RowRenderer<'a> {
    pub fn new(opts: &'a RenderOptions, label_width: usize) -> Self {
        Self { opts, label_width }
    }

    /// `"<label padded>: "`, or nothing when labels are hidden.
    pub fn label_cell(&self, label: &str) -> String {
        if self.opts.no_labels {
            String::new()
        } else {
            format!("{}: ", text::pad_right(label, self.label_width))
        }
    }

    /// Blank stand-in for the label on continuation lines of the same label.
    pub fn blank_cell(&self) -> String {
        if self.opts.no_labels {
            String::new()
        } else {
            text::blank(self.label_width + 2)
        }
    }

    /// Tick glyphs for one segment, coloured when the series has a colour.
    pub fn bar(&self, seg: &Segment) -> String {
        let glyphs = &self.opts.ticks;
        let body = if is_partial(seg.value, seg.ticks, seg.min) {
            glyphs.partial.clone()
        } else {
            glyphs.full.repeat(seg.ticks.max(0.0) as usize)
        };
        match seg.colour {
            Some(c) if !body.is_empty() => c.paint(&body),
            _ => body,
        }
    }

    /// `" <formatted value><suffix>"`.
    pub fn tail(&self, value: f64) -> String {
        format!(" {}{}", self.opts.format.format(value), self.opts.suffix)
    }

    /// Write one full line: label cell, every segment end to end, then the tail.
    pub fn write_row<W: Write>(
        &self,
        out: &mut W,
        cell: &str,
        segments: &[Segment],
        tail_value: f64,
    ) -> io::Result<()> {
        out.write_all(cell.as_bytes())?;
        for seg in segments {
            out.write_all(self.bar(seg).as_bytes())?;
        }
        writeln!(out, "{}", self.tail(tail_value))
    }
}
