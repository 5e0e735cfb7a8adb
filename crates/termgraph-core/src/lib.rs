// File: crates/termgraph-core/src/lib.rs
// Summary: Core library entry point; exports the text chart engine API.

pub mod calendar;
pub mod chart;
pub mod error;
pub mod format;
pub mod mode;
pub mod row;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use calendar::{bucket, bucket_with, CalendarCell, CalendarGrid, Intensity};
pub use chart::{Chart, RenderOptions};
pub use error::{ConfigError, DataError, Error, Result};
pub use format::NumberFormat;
pub use mode::{ChartMode, ModeFlags, ScaleMode};
pub use scale::{normalize, TickScale};
pub use series::Dataset;
pub use theme::Colour;
pub use types::TickGlyphs;
