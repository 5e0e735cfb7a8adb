// File: crates/gitcontrib/src/lib.rs
// Summary: Collects per-author git statistics and turns them into a chart dataset.

pub mod cli;
pub mod stats;

use std::io::{BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use termgraph_core::{Chart, DataError, Dataset};

pub use cli::Args;
pub use stats::{AuthorStats, Contributions, Stat};

/// Run `git log` in `repo` and total the output per author as it streams in.
pub fn collect(repo: &Path) -> Result<Contributions> {
    let mut cmd = Command::new("git");
    cmd.arg("-C")
        .arg(repo)
        .args(["log", "--no-merges", "--shortstat", stats::LOG_FORMAT])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());
    log::debug!("running {cmd:?}");

    let mut child = cmd.spawn().context("failed to run git")?;
    let stdout = child.stdout.take().context("git stdout was not captured")?;
    // The reader is dropped before `wait`, so an early parse error closes the pipe.
    let parsed = Contributions::parse(BufReader::new(stdout));
    let status = child.wait().context("failed to wait for git")?;
    if !status.success() {
        bail!("git log failed ({status})");
    }
    parsed.context("unexpected git log output")
}

/// One bar per author, largest first.
pub fn dataset(contributions: &Contributions, stat: Stat) -> Result<Dataset, DataError> {
    Dataset::from_pairs(
        contributions
            .ranked(stat)
            .into_iter()
            .map(|a| (a.name.clone(), a.get(stat) as f64)),
    )
}

/// Validate options, read the repository history and write the chart to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let opts = args.render_options().context("invalid options")?;

    let contributions = collect(&args.repo)
        .with_context(|| format!("failed to read history of '{}'", args.repo.display()))?;
    log::info!("{} author(s), plotting {}", contributions.len(), args.stat.name());

    let dataset = dataset(&contributions, args.stat)?.with_colours(args.color.into_iter().collect())?;
    Chart::new(dataset).render(&opts, out)?;
    Ok(())
}
