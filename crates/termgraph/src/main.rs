// File: crates/termgraph/src/main.rs
// Summary: termgraph binary; prints a text chart of label/value data to stdout.

use anyhow::Result;
use clap::Parser;
use termgraph::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    termgraph::init_logging(args.verbose);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    termgraph::run(&args, &mut out)
}
