// File: crates/termgraph/tests/cli.rs
// Purpose: Flag parsing, option validation and end-to-end runs against a data file.

use std::path::PathBuf;

use clap::Parser;
use termgraph::Args;
use termgraph_core::{ChartMode, Colour, ConfigError};

fn args(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("termgraph").chain(argv.iter().copied())).expect("parse flags")
}

fn data_file(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::write(&path, contents).expect("write data file");
    path
}

fn run_to_string(a: &Args) -> anyhow::Result<String> {
    let mut out = Vec::new();
    termgraph::run(a, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn defaults() {
    let a = args(&[]);
    assert_eq!(a.width, 50);
    assert_eq!(a.format, "{:<5.2f}");
    let opts = a.render_options().unwrap();
    assert_eq!(opts.mode, ChartMode::default());
    assert!(!opts.ticks.custom);
}

#[test]
fn colours_are_repeatable_or_comma_separated() {
    let a = args(&["--color", "red", "--color", "blue"]);
    assert_eq!(a.colours().unwrap(), vec![Colour::Red, Colour::Blue]);
    let a = args(&["--color", "green,cyan"]);
    assert_eq!(a.colours().unwrap(), vec![Colour::Green, Colour::Cyan]);
    let a = args(&["--color", "teal"]);
    assert_eq!(a.colours(), Err(ConfigError::UnknownColour("teal".into())));
}

#[test]
fn invalid_options_are_rejected_before_reading_input() {
    // The file does not exist; the option error must win.
    let missing = "/nonexistent/termgraph-input.dat";
    for argv in [
        vec!["--file", missing, "--width", "0"],
        vec!["--file", missing, "--stacked", "--vertical"],
        vec!["--file", missing, "--calendar"],
        vec!["--file", missing, "--format", "{:q}"],
    ] {
        let err = run_to_string(&args(&argv)).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some(), "{argv:?}: {err:#}");
    }
}

#[test]
fn renders_a_file() {
    let path = data_file("basic.dat", "# sample\nAlice,10\nBob,3\n");
    let a = args(&["--file", path.to_str().unwrap(), "--suffix", " pts"]);
    let out = run_to_string(&a).unwrap();
    assert_eq!(out, format!("Alice: {} 10.00 pts\nBob  : {} 3.00  pts\n", "▇".repeat(10), "▇".repeat(3)));
}

#[test]
fn colour_count_must_match_series() {
    let path = data_file("two_series.dat", "a,1,2\n");
    let a = args(&["--file", path.to_str().unwrap(), "--color", "red"]);
    let err = run_to_string(&a).unwrap_err();
    assert!(format!("{err:#}").contains("colour"), "{err:#}");
}

#[test]
fn calendar_run() {
    let path = data_file("days.dat", "2023-01-02,5\n2023-01-10,1\n");
    let a = args(&["--file", path.to_str().unwrap(), "--calendar", "--start-date", "2023-01-02"]);
    let out = run_to_string(&a).unwrap();
    assert!(out.starts_with("    Jan\n"), "{out}");
    assert!(out.lines().any(|l| l.starts_with("Mon ")));
}

#[test]
fn calendar_bad_date_blames_the_input_line() {
    let path = data_file("bad_day.dat", "# daily commits\n\n2023-01-02,1\nyesterday,2\n");
    let a = args(&["--file", path.to_str().unwrap(), "--calendar", "--start-date", "2023-01-02"]);
    let err = run_to_string(&a).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("line 4: `yesterday` is not a date"), "{chain}");
    assert_eq!(chain.matches("is not a date").count(), 1, "{chain}");
}

#[test]
fn missing_file_is_an_error_with_context() {
    let a = args(&["--file", "/nonexistent/termgraph-input.dat"]);
    let err = run_to_string(&a).unwrap_err();
    assert!(format!("{err}").contains("failed to load"), "{err}");
}
