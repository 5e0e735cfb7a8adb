// File: crates/termgraph/tests/data.rs
// Purpose: Loader handling of delimiters, comments, categories and bad rows.

use std::io::Cursor;

use termgraph::data::{read_from, Delimiter};
use termgraph_core::{DataError, Dataset, Error};

fn load(text: &str) -> Result<Dataset, Error> {
    read_from(Cursor::new(text), &Delimiter::Auto)
}

fn data_err(text: &str) -> DataError {
    match load(text) {
        Err(Error::Data(e)) => e,
        other => panic!("expected a data error, got {other:?}"),
    }
}

#[test]
fn comma_and_whitespace_lines_are_detected_per_line() {
    let data = load("2007, 183.32, 190.52\n2008 231.23 5.0\n").unwrap();
    assert_eq!(data.labels(), ["2007", "2008"]);
    assert_eq!(data.rows(), [vec![183.32, 190.52], vec![231.23, 5.0]]);
}

#[test]
fn comments_blank_lines_and_categories() {
    let text = "# Example data\n@ Boys, Girls\n\n2007,1,2\n  \n2008,3,4\n";
    let data = load(text).unwrap();
    assert_eq!(data.categories(), ["Boys", "Girls"]);
    assert_eq!(data.len(), 2);
}

#[test]
fn whitespace_category_line() {
    let data = load("@ Boys Girls\na 1 2\n").unwrap();
    assert_eq!(data.categories(), ["Boys", "Girls"]);
}

#[test]
fn quoted_label_may_contain_a_comma() {
    let data = load("\"Smith, J\",3\n").unwrap();
    assert_eq!(data.labels(), ["Smith, J"]);
    assert_eq!(data.rows(), [vec![3.0]]);
}

#[test]
fn custom_delimiter() {
    let data = read_from(Cursor::new("a;1;2\nb c;3;4\n"), &Delimiter::Custom(";".into())).unwrap();
    assert_eq!(data.labels(), ["a", "b c"]);
    let data = read_from(Cursor::new("a::1\n"), &Delimiter::Custom("::".into())).unwrap();
    assert_eq!(data.rows(), [vec![1.0]]);
    assert_eq!(Delimiter::from_flag(Some("")), Delimiter::Auto);
}

#[test]
fn errors_report_physical_line_numbers() {
    assert_eq!(
        data_err("# header\na,1\nb,x\n"),
        DataError::NotANumber { line: 3, field: "x".into() }
    );
    assert_eq!(
        data_err("a,1,2\n\nb,3\n"),
        DataError::Arity { line: 3, expected: 2, found: 1 }
    );
    assert_eq!(data_err("a,1\nlonely\n"), DataError::MissingValues { line: 2 });
    assert!(matches!(data_err("a,inf\n"), DataError::NonFinite { line: 1, .. }));
}

#[test]
fn invalid_utf8_is_reported_with_its_line() {
    let bytes: &[u8] = b"a,1\nJos\xe9,2\n";
    match read_from(Cursor::new(bytes), &Delimiter::Auto) {
        Err(Error::Data(DataError::Malformed { line, reason })) => {
            assert_eq!(line, 2);
            assert!(reason.contains("UTF-8"), "{reason}");
        }
        other => panic!("expected a malformed-line error, got {other:?}"),
    }
}

#[test]
fn rows_remember_their_input_lines() {
    let data = load("# header\n\n2023-01-02,1\n# gap\n2023-01-03,2\n").unwrap();
    assert_eq!(data.source_line(0), 3);
    assert_eq!(data.source_line(1), 5);
}

#[test]
fn category_count_must_match_series() {
    assert_eq!(
        data_err("@ one, two, three\na,1,2\n"),
        DataError::CategoryCount { expected: 2, found: 3 }
    );
}

#[test]
fn empty_input_is_an_empty_dataset() {
    assert!(load("").unwrap().is_empty());
    assert!(load("# nothing here\n\n").unwrap().is_empty());
}
