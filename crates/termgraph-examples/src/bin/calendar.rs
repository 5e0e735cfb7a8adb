// File: crates/termgraph-examples/src/bin/calendar.rs
// Summary: Calendar heatmap over roughly three months of generated daily values.

use chrono::{Duration, NaiveDate};
use termgraph_core::{Chart, ChartMode, Colour, Dataset, RenderOptions};

fn main() -> termgraph_core::Result<()> {
    let Some(start) = NaiveDate::from_ymd_opt(2024, 1, 1) else {
        return Ok(());
    };
    let pairs = (0..90i64).map(|d| {
        let date = start + Duration::days(d);
        // Quiet weekends, busier mid-week.
        let value = ((d * 7) % 11) as f64 * if d % 7 >= 5 { 0.2 } else { 1.0 };
        (date.format("%Y-%m-%d").to_string(), value)
    });
    let data = Dataset::from_pairs(pairs)?.with_colours(vec![Colour::Green])?;

    let opts = RenderOptions { mode: ChartMode::Calendar { start }, ..RenderOptions::default() };
    Chart::new(data).render(&opts, &mut std::io::stdout().lock())?;
    Ok(())
}
