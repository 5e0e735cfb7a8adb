// File: crates/termgraph-core/tests/vertical.rs
// Purpose: Column charts grow bottom-up with values and labels written underneath.

use termgraph_core::{Chart, ChartMode, Colour, Dataset, RenderOptions, ScaleMode};

fn vertical(width: usize) -> RenderOptions {
    RenderOptions { width, mode: ChartMode::Vertical { scale: ScaleMode::Shared }, ..RenderOptions::default() }
}

#[test]
fn columns_values_and_labels() {
    let data = Dataset::from_pairs([("a", 3.0), ("b", 1.0), ("c", 0.0)]).unwrap();
    let out = Chart::new(data).render_to_string(&vertical(50)).unwrap();
    let want = "\
▇
▇
▇ ▇
------Values------
3 1 0
. . .
0 0 0
0 0 0
------Labels------
a b c
";
    assert_eq!(out, want);
}

#[test]
fn partial_column_sits_on_the_baseline() {
    let data = Dataset::from_pairs([("a", 10.0), ("b", 0.5)]).unwrap();
    let mut opts = vertical(5);
    opts.no_labels = true;
    let out = Chart::new(data).render_to_string(&opts).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(&lines[..5], &["▇", "▇", "▇", "▇", "▇ ▁"]);
    assert_eq!(lines[5], "----Values----");
    assert!(!out.contains("Labels"));
}

#[test]
fn column_height_never_exceeds_width() {
    let data = Dataset::from_pairs([("a", 1_000.0), ("b", 250.0)]).unwrap();
    let out = Chart::new(data).render_to_string(&vertical(8)).unwrap();
    let bar_lines = out.lines().take_while(|l| !l.starts_with('-')).count();
    assert_eq!(bar_lines, 8);
}

#[test]
fn coloured_columns() {
    let data = Dataset::from_pairs([("a", 1.0)]).unwrap().with_colours(vec![Colour::Green]).unwrap();
    let out = Chart::new(data).render_to_string(&vertical(50)).unwrap();
    assert_eq!(out.lines().next(), Some("\x1b[92m▇\x1b[0m"));
}
