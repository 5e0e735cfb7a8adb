// File: crates/termgraph-core/src/mode.rs
// Summary: Chart mode selection: raw flags validated into a closed mode enum.

use chrono::{DateTime, NaiveDate};

use crate::error::ConfigError;

/// How series are scaled against each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleMode {
    /// One tick scale computed over every series.
    #[default]
    Shared,
    /// Each series normalized against its own min/max ("different scale").
    PerSeries,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartMode {
    Horizontal { scale: ScaleMode },
    /// Series drawn end to end on one row; always a shared scale.
    Stacked,
    Vertical { scale: ScaleMode },
    /// Weekday x week heatmap; weeks counted from `start`.
    Calendar { start: NaiveDate },
}

impl Default for ChartMode {
    fn default() -> Self {
        ChartMode::Horizontal { scale: ScaleMode::Shared }
    }
}

/// Mode switches as they come from a command line, before validation.
#[derive(Clone, Debug, Default)]
pub struct ModeFlags {
    pub vertical: bool,
    pub stacked: bool,
    pub different_scale: bool,
    pub calendar: bool,
    pub start_date: Option<String>,
}

impl ChartMode {
    /// Resolve flags into a single mode, rejecting combinations that have no meaning.
    pub fn from_flags(flags: &ModeFlags) -> Result<Self, ConfigError> {
        let set = [
            ("vertical", flags.vertical),
            ("stacked", flags.stacked),
            ("different-scale", flags.different_scale),
            ("calendar", flags.calendar),
        ];
        for (a, b) in [
            ("vertical", "calendar"),
            ("stacked", "vertical"),
            ("stacked", "calendar"),
            ("stacked", "different-scale"),
            ("different-scale", "calendar"),
        ] {
            let on = |name: &str| set.iter().any(|&(n, v)| n == name && v);
            if on(a) && on(b) {
                return Err(ConfigError::ConflictingModes(a, b));
            }
        }

        let scale = if flags.different_scale { ScaleMode::PerSeries } else { ScaleMode::Shared };
        let mode = if flags.calendar {
            let raw = flags.start_date.as_deref().ok_or(ConfigError::MissingStartDate)?;
            ChartMode::Calendar { start: parse_start_date(raw)? }
        } else if flags.vertical {
            ChartMode::Vertical { scale }
        } else if flags.stacked {
            ChartMode::Stacked
        } else {
            ChartMode::Horizontal { scale }
        };
        log::debug!("chart mode: {mode:?}");
        Ok(mode)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChartMode::Horizontal { .. } => "horizontal",
            ChartMode::Stacked => "stacked",
            ChartMode::Vertical { .. } => "vertical",
            ChartMode::Calendar { .. } => "calendar",
        }
    }
}

/// Parse an RFC 3339 timestamp (a bare `YYYY-MM-DD` is also accepted) into its calendar date.
pub fn parse_start_date(raw: &str) -> Result<NaiveDate, ConfigError> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| ConfigError::InvalidStartDate(raw.to_string()))
}
