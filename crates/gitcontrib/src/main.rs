// File: crates/gitcontrib/src/main.rs
// Summary: gitcontrib binary; charts commits or line changes per author of a repository.

use anyhow::Result;
use clap::Parser;
use gitcontrib::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    termgraph::init_logging(args.verbose);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gitcontrib::run(&args, &mut out)
}
