// File: crates/gitcontrib/tests/cli.rs
// Purpose: Option validation happens before git is run; git failures surface as errors.

use std::path::Path;

use clap::Parser;
use gitcontrib::{Args, Stat};
use termgraph_core::ConfigError;

fn args(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("gitcontrib").chain(argv.iter().copied())).expect("parse flags")
}

#[test]
fn defaults() {
    let a = args(&[]);
    assert_eq!(a.stat, Stat::Commits);
    assert_eq!(a.repo, Path::new("."));
    assert_eq!(a.render_options().unwrap().width, 50);
    assert_eq!(args(&["--stat", "fileschanged"]).stat, Stat::FilesChanged);
}

#[test]
fn bad_options_fail_before_reading_history() {
    // The repository does not exist; the option error must win.
    let missing = "/nonexistent/gitcontrib-repo";
    for argv in [vec!["--repo", missing, "--width", "0"], vec!["--repo", missing, "--format", "{:q}"]] {
        let mut out = Vec::new();
        let err = gitcontrib::run(&args(&argv), &mut out).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some(), "{argv:?}: {err:#}");
        assert!(out.is_empty());
    }
    assert_eq!(args(&["--width", "0"]).render_options().unwrap_err(), ConfigError::ZeroWidth);
}

#[test]
fn missing_repository_is_an_error() {
    let err = gitcontrib::collect(Path::new("/nonexistent/gitcontrib-repo")).unwrap_err();
    assert!(err.downcast_ref::<ConfigError>().is_none(), "{err:#}");
}
