// File: crates/termgraph-core/src/types.rs
// Summary: Shared constants (default width, glyphs) and the tick glyph set.

/// Default maximum number of ticks for the largest bar.
pub const WIDTH: usize = 50;

/// Full tick glyph.
pub const TICK: &str = "▇";
/// Partial tick for horizontal bars: a non-zero value below one tick.
pub const SM_TICK: &str = "▏";
/// Partial tick for vertical columns.
pub const VERTICAL_SM_TICK: &str = "▁";

/// Default number format template.
pub const FORMAT: &str = "{:<5.2f}";

/// Glyphs used to draw bars.
/// Contract: `full` is non-empty; `partial` may be empty (draws nothing).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickGlyphs {
    pub full: String,
    pub partial: String,
    pub vertical_partial: String,
    /// Set when the glyphs come from a user-supplied tick.
    pub custom: bool,
}

impl TickGlyphs {
    /// A custom tick replaces the full glyph and disables partial ticks.
    pub fn custom(tick: impl Into<String>) -> Self {
        Self {
            full: tick.into(),
            partial: String::new(),
            vertical_partial: String::new(),
            custom: true,
        }
    }
}

impl Default for TickGlyphs {
    fn default() -> Self {
        Self {
            full: TICK.to_string(),
            partial: SM_TICK.to_string(),
            vertical_partial: VERTICAL_SM_TICK.to_string(),
            custom: false,
        }
    }
}
