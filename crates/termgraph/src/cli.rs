// File: crates/termgraph/src/cli.rs
// Summary: Command-line flags and their translation into render options.

use std::path::PathBuf;

use clap::Parser;
use termgraph_core::types::{FORMAT, WIDTH};
use termgraph_core::{ChartMode, Colour, ConfigError, ModeFlags, NumberFormat, RenderOptions, TickGlyphs};

use crate::data::Delimiter;

#[derive(Parser, Debug, Clone)]
#[command(name = "termgraph", version, about = "Draw basic graphs in the terminal")]
pub struct Args {
    /// Data file name (comma or space separated). Reads standard input when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Title printed above the chart.
    #[arg(long)]
    pub title: Option<String>,

    /// Width of the largest bar, in ticks.
    #[arg(long, default_value_t = WIDTH)]
    pub width: usize,

    /// Template for the value after each bar.
    #[arg(long, default_value = FORMAT)]
    pub format: String,

    /// Text appended to each value.
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Do not print labels.
    #[arg(long)]
    pub no_labels: bool,

    /// Bar colour per series: red, blue, green, magenta, yellow, black, cyan.
    #[arg(long = "color", visible_alias = "colour", value_name = "COLOR", num_args = 1.., value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Vertical column chart.
    #[arg(long)]
    pub vertical: bool,

    /// Stack the series of each row into one bar.
    #[arg(long)]
    pub stacked: bool,

    /// Scale each series independently.
    #[arg(long)]
    pub different_scale: bool,

    /// Calendar heatmap; labels are dates.
    #[arg(long)]
    pub calendar: bool,

    /// First day of the calendar (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<String>,

    /// Glyph used instead of the default bar block.
    #[arg(long)]
    pub custom_tick: Option<String>,

    /// Field delimiter; auto-detected per line when omitted.
    #[arg(long)]
    pub delim: Option<String>,

    /// Debug logging on standard error.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn mode_flags(&self) -> ModeFlags {
        ModeFlags {
            vertical: self.vertical,
            stacked: self.stacked,
            different_scale: self.different_scale,
            calendar: self.calendar,
            start_date: self.start_date.clone(),
        }
    }

    /// Validate every option that does not depend on the data.
    pub fn render_options(&self) -> Result<RenderOptions, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        let mode = ChartMode::from_flags(&self.mode_flags())?;
        let format = NumberFormat::parse(&self.format)?;
        let ticks = match self.custom_tick.as_deref() {
            Some(t) if !t.is_empty() => TickGlyphs::custom(t),
            _ => TickGlyphs::default(),
        };
        Ok(RenderOptions {
            width: self.width,
            format,
            suffix: self.suffix.clone(),
            no_labels: self.no_labels,
            mode,
            ticks,
            title: self.title.clone(),
            ..RenderOptions::default()
        })
    }

    pub fn colours(&self) -> Result<Vec<Colour>, ConfigError> {
        self.colors.iter().map(|c| c.trim().parse()).collect()
    }

    pub fn delimiter(&self) -> Delimiter {
        Delimiter::from_flag(self.delim.as_deref())
    }
}
