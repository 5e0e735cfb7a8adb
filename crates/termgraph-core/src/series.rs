// File: crates/termgraph-core/src/series.rs
// Summary: Series model: ordered labels with one value per series, plus optional colours and category names.
// Notes:
// - Rows are label-major: `rows[i][j]` is the value of series `j` for label `i`.
// - Constructors enforce the shape invariants; rendering never mutates a dataset.

use crate::error::DataError;
use crate::theme::Colour;

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    labels: Vec<String>,
    rows: Vec<Vec<f64>>,
    categories: Vec<String>,
    colours: Option<Vec<Colour>>,
    /// Input line of each row, when the rows came from a file.
    source_lines: Vec<usize>,
}

impl Dataset {
    /// Build a dataset, checking that every label has exactly one finite
    /// value per series and that all rows have the same length.
    pub fn try_new(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        if labels.len() != rows.len() {
            return Err(DataError::LabelCount { labels: labels.len(), rows: rows.len() });
        }
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            let line = i + 1;
            if row.is_empty() {
                return Err(DataError::MissingValues { line });
            }
            if row.len() != expected {
                return Err(DataError::Arity { line, expected, found: row.len() });
            }
            if let Some(v) = row.iter().find(|v| !v.is_finite()) {
                return Err(DataError::NonFinite { line, field: v.to_string() });
            }
        }
        Ok(Self { labels, rows, categories: Vec::new(), colours: None, source_lines: Vec::new() })
    }

    /// Single-series convenience constructor from `(label, value)` pairs.
    pub fn from_pairs<L, I>(pairs: I) -> Result<Self, DataError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let (labels, rows): (Vec<String>, Vec<Vec<f64>>) = pairs.into_iter().map(|(l, v)| (l.into(), vec![v])).unzip();
        Self::try_new(labels, rows)
    }

    /// Attach one colour per series.
    pub fn with_colours(mut self, colours: Vec<Colour>) -> Result<Self, DataError> {
        self.check_series_count(colours.len())
            .map_err(|(expected, found)| DataError::ColourCount { expected, found })?;
        self.colours = if colours.is_empty() { None } else { Some(colours) };
        Ok(self)
    }

    /// Attach one category name per series (printed as a legend).
    pub fn with_categories(mut self, categories: Vec<String>) -> Result<Self, DataError> {
        self.check_series_count(categories.len())
            .map_err(|(expected, found)| DataError::CategoryCount { expected, found })?;
        self.categories = categories;
        Ok(self)
    }

    /// Remember where each row was read from. Ignored unless there is one line per row.
    pub fn with_source_lines(mut self, lines: Vec<usize>) -> Self {
        if lines.len() == self.rows.len() {
            self.source_lines = lines;
        }
        self
    }

    /// Line to blame for row `index`: its input line, else its 1-based position.
    pub fn source_line(&self, index: usize) -> usize {
        self.source_lines.get(index).copied().unwrap_or(index + 1)
    }

    fn check_series_count(&self, found: usize) -> Result<(), (usize, usize)> {
        // An empty dataset has no series count to compare against.
        if found == 0 || self.rows.is_empty() || found == self.series_count() {
            Ok(())
        } else {
            Err((self.series_count(), found))
        }
    }

    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn rows(&self) -> &[Vec<f64>] { &self.rows }
    pub fn categories(&self) -> &[String] { &self.categories }
    pub fn colours(&self) -> Option<&[Colour]> { self.colours.as_deref() }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Number of series (values per label); 0 for an empty dataset.
    pub fn series_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Colour of series `index`, if colours were supplied.
    pub fn colour(&self, index: usize) -> Option<Colour> {
        self.colours.as_ref().and_then(|c| c.get(index).copied())
    }

    /// One series extracted as single-value rows, ready for independent normalization.
    pub fn column(&self, index: usize) -> Vec<Vec<f64>> {
        self.rows.iter().map(|row| vec![row[index]]).collect()
    }

    /// Width in terminal cells of the widest label.
    pub fn max_label_width(&self) -> usize {
        self.labels.iter().map(|l| crate::text::display_width(l)).max().unwrap_or(0)
    }
}
