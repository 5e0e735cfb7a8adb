// File: crates/termgraph-examples/src/bin/bars.rs
// Summary: Minimal example that prints a coloured two-series bar chart and its stacked form.

use termgraph_core::{Chart, ChartMode, Colour, Dataset, RenderOptions};

fn main() -> termgraph_core::Result<()> {
    let data = Dataset::try_new(
        vec!["2007".into(), "2008".into(), "2009".into(), "2010".into()],
        vec![vec![183.32, 190.52], vec![231.23, 5.0], vec![16.43, 53.1], vec![50.0, 95.4]],
    )?
    .with_categories(vec!["Boys".into(), "Girls".into()])?
    .with_colours(vec![Colour::Red, Colour::Blue])?;

    let mut out = std::io::stdout().lock();
    let opts = RenderOptions { title: Some("Enrollment".into()), ..RenderOptions::default() };
    let chart = Chart::new(data);
    chart.render(&opts, &mut out)?;

    let stacked = RenderOptions { mode: ChartMode::Stacked, title: Some("Enrollment (stacked)".into()), ..opts };
    chart.render(&stacked, &mut out)?;
    Ok(())
}
