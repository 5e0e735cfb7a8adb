// File: crates/gitcontrib/src/cli.rs
// Summary: gitcontrib flags and the render options they resolve to.

use std::path::PathBuf;

use clap::Parser;
use termgraph_core::types::{FORMAT, WIDTH};
use termgraph_core::{Colour, ConfigError, NumberFormat, RenderOptions};

use crate::stats::Stat;

#[derive(Parser, Debug, Clone)]
#[command(name = "gitcontrib", version, about = "Per-author contribution chart for a git repository")]
pub struct Args {
    /// Path of the repository to pull statistics for.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Statistic to plot.
    #[arg(long, value_enum, default_value_t = Stat::Commits)]
    pub stat: Stat,

    #[arg(long, default_value_t = WIDTH)]
    pub width: usize,

    #[arg(long, default_value = FORMAT)]
    pub format: String,

    #[arg(long = "color", visible_alias = "colour")]
    pub color: Option<Colour>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Everything checkable without touching the repository.
    pub fn render_options(&self) -> Result<RenderOptions, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(RenderOptions {
            width: self.width,
            format: NumberFormat::parse(&self.format)?,
            title: self.title.clone(),
            ..RenderOptions::default()
        })
    }
}
