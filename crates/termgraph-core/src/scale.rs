// File: crates/termgraph-core/src/scale.rs
// Summary: Value-to-tick normalization with negative offset and scale-down to the chart width.

/// Value coordinate (raw data).
pub type Value = f64;

/// Offset and factor mapping raw values onto tick magnitudes.
/// Computed fresh for every render from the full value set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickScale {
    /// Added to every value before scaling; `|min|` when the minimum is negative, else 0.
    pub offset: Value,
    /// Multiplier applied after the offset; 1.0 when no scale-down is needed.
    pub factor: f64,
    /// Upper bound of a tick magnitude (the chart width).
    pub limit: f64,
}

impl TickScale {
    /// Derive the scale for `rows` so the largest value spans at most `width` ticks.
    pub fn compute(rows: &[Vec<Value>], width: f64) -> Self {
        let min = find_min(rows);
        if !min.is_finite() {
            return Self { offset: 0.0, factor: 1.0, limit: width };
        }
        let offset = if min < 0.0 { min.abs() } else { 0.0 };
        let max = find_max(rows) + offset;
        // max == 0 means all-zero data: nothing to scale.
        let factor = if max <= width || max == 0.0 { 1.0 } else { width / max };
        log::debug!("tick scale: min={min} max={max} offset={offset} factor={factor}");
        Self { offset, factor, limit: width }
    }

    #[inline]
    pub fn apply(&self, v: Value) -> f64 {
        // `max * (width / max)` may round a hair above `width`.
        ((v + self.offset) * self.factor).min(self.limit)
    }
}

/// Normalize every value of `rows` into tick magnitudes in `[0, width]`.
/// The row renderer truncates these to whole glyph counts.
pub fn normalize(rows: &[Vec<Value>], width: f64) -> Vec<Vec<f64>> {
    let scale = TickScale::compute(rows, width);
    rows.iter()
        .map(|row| row.iter().map(|&v| scale.apply(v)).collect())
        .collect()
}

fn find(rows: &[Vec<Value>], initial: Value, pick: fn(Value, Value) -> Value) -> Value {
    rows.iter().flatten().fold(initial, |acc, &v| pick(acc, v))
}

/// Smallest value across all rows; `+inf` when there are none.
pub fn find_min(rows: &[Vec<Value>]) -> Value {
    find(rows, f64::INFINITY, f64::min)
}

/// Largest value across all rows; `-inf` when there are none.
pub fn find_max(rows: &[Vec<Value>]) -> Value {
    find(rows, f64::NEG_INFINITY, f64::max)
}
