// File: crates/termgraph/src/data.rs
// Summary: Line-oriented loader turning label/value text into a Dataset.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use termgraph_core::{DataError, Dataset, Error};

/// How fields on a line are separated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// Comma when the line contains one, whitespace otherwise.
    #[default]
    Auto,
    Custom(String),
}

impl Delimiter {
    pub fn from_flag(raw: Option<&str>) -> Self {
        match raw {
            Some(d) if !d.is_empty() => Delimiter::Custom(d.to_string()),
            _ => Delimiter::Auto,
        }
    }
}

pub fn read_path(path: &Path, delim: &Delimiter) -> Result<Dataset, Error> {
    let file = File::open(path)?;
    read_from(BufReader::new(file), delim)
}

/// Parse a whole input stream.
///
/// Blank lines and lines starting with `#` are skipped. A line starting with
/// `@` names the series. Every other line is a label followed by one or more
/// numbers; reported line numbers are physical lines of the input, and the
/// dataset keeps them so later date checks can blame the right line.
pub fn read_from<R: Read>(reader: R, delim: &Delimiter) -> Result<Dataset, Error> {
    let mut labels = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut categories = Vec::new();
    let mut source_lines = Vec::new();
    let mut expected: Option<usize> = None;

    for (idx, raw) in BufReader::new(reader).split(b'\n').enumerate() {
        let lineno = idx + 1;
        let line = String::from_utf8(raw?)
            .map_err(|e| DataError::Malformed { line: lineno, reason: format!("not valid UTF-8 ({})", e.utf8_error()) })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix('@') {
            categories = split_fields(rest, delim, lineno)?
                .into_iter()
                .filter(|c| !c.is_empty())
                .collect();
            log::debug!("line {lineno}: categories {categories:?}");
            continue;
        }

        let fields = split_fields(trimmed, delim, lineno)?;
        let Some((label, raw_values)) = fields.split_first() else {
            continue;
        };
        if raw_values.is_empty() {
            return Err(DataError::MissingValues { line: lineno }.into());
        }
        let values = raw_values
            .iter()
            .map(|f| parse_value(f, lineno))
            .collect::<Result<Vec<_>, _>>()?;
        match expected {
            Some(n) if n != values.len() => {
                return Err(DataError::Arity { line: lineno, expected: n, found: values.len() }.into());
            }
            None => expected = Some(values.len()),
            _ => {}
        }
        labels.push(label.clone());
        rows.push(values);
        source_lines.push(lineno);
    }

    log::debug!("loaded {} row(s), {} series", rows.len(), expected.unwrap_or(0));
    let data = Dataset::try_new(labels, rows)?
        .with_categories(categories)?
        .with_source_lines(source_lines);
    Ok(data)
}

fn parse_value(field: &str, line: usize) -> Result<f64, DataError> {
    let v: f64 = field
        .parse()
        .map_err(|_| DataError::NotANumber { line, field: field.to_string() })?;
    if !v.is_finite() {
        return Err(DataError::NonFinite { line, field: field.to_string() });
    }
    Ok(v)
}

fn split_fields(line: &str, delim: &Delimiter, lineno: usize) -> Result<Vec<String>, DataError> {
    match delim {
        Delimiter::Custom(d) => match d.as_bytes() {
            [b] if b.is_ascii() => split_csv(line, *b, lineno),
            _ => Ok(line.split(d.as_str()).map(|f| f.trim().to_string()).collect()),
        },
        Delimiter::Auto if line.contains(',') => split_csv(line, b',', lineno),
        Delimiter::Auto => Ok(line.split_whitespace().map(str::to_string).collect()),
    }
}

// Quoted fields may hold the delimiter, e.g. `"Smith, J",3`.
fn split_csv(line: &str, delim: u8, lineno: usize) -> Result<Vec<String>, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delim)
        .from_reader(line.as_bytes());
    match rdr.records().next() {
        Some(rec) => {
            let rec = rec.map_err(|e| DataError::Malformed { line: lineno, reason: e.to_string() })?;
            Ok(rec.iter().map(str::to_string).collect())
        }
        None => Ok(Vec::new()),
    }
}
