// File: crates/termgraph/src/lib.rs
// Summary: CLI library: flag parsing, data loading, logging setup and the run entry point.

pub mod cli;
pub mod data;

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::LevelFilter;
use termgraph_core::Chart;

pub use cli::Args;

/// Install the stderr logger. `RUST_LOG` overrides the level chosen here.
pub fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
        .parse_default_env()
        .try_init();
}

/// Validate options, load the data and write the chart to `out`.
///
/// Configuration errors are returned before any input is read.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let opts = args.render_options().context("invalid options")?;
    let colours = args.colours().context("invalid options")?;
    let delim = args.delimiter();

    let dataset = match &args.file {
        Some(path) => data::read_path(path, &delim)
            .with_context(|| format!("failed to load '{}'", path.display()))?,
        None => data::read_from(io::stdin().lock(), &delim).context("failed to read standard input")?,
    };
    log::info!("loaded {} row(s)", dataset.len());
    let dataset = dataset.with_colours(colours).context("invalid --color")?;

    Chart::new(dataset).render(&opts, out).context("failed to render chart")?;
    Ok(())
}
