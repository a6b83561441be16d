use std::error::Error;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use csv_frame::{load, Delimiter, Dimensions, FrameError, Loader, NumericPolicy, Pass};

fn data_path(name: &str) -> PathBuf {
    Path::new(file!()).parent().unwrap().join("data").join(name)
}

#[test]
fn test_simple() {
    let table = Loader::new().load_path(data_path("simple.csv")).unwrap();
    assert_eq!(table.dimensions(), Dimensions { rows: 2, cols: 2 });
    assert_eq!(table.header(), &["a", "b"]);
    assert_eq!(table.row(0), Some(&[1.0, 2.0][..]));
    assert_eq!(table.row(1), Some(&[3.0, 4.0][..]));
    assert_eq!(table.delimiter().as_str(), ", ");
}

#[test]
fn test_weather() {
    let table = Loader::new().load_path(data_path("weather.csv")).unwrap();
    assert_eq!(table.header(), &["temp", "humidity", "pressure"]);
    assert_eq!(table.rows(), 4);
    assert_eq!(table.row(2), Some(&[-2.25, 80.0, 998.0][..]));
    assert_eq!(table.column_by_name("pressure"), Some(vec![1013.2, 1009.8, 998.0, 1015.1]));
    assert_eq!(table.get(1, 1), Some(55.5));
}

#[test]
fn test_numeric_fidelity() {
    let table = load(Cursor::new("x, y, z\n1.5, 2.0, 3\n"), &Delimiter::default()).unwrap();
    assert_eq!(table.row(0), Some(&[1.5, 2.0, 3.0][..]));
}

#[test]
fn test_semicolon_crlf() {
    let table = Loader::new()
        .delimiter(";")
        .load_path(data_path("iris-semicolon.csv"))
        .unwrap();
    assert_eq!(table.header(), &["sepallength", "sepalwidth", "speciesid"]);
    assert_eq!(table.column(2), Some(vec![0.0, 0.0, 2.0]));
}

#[test]
fn test_preamble() {
    let table = Loader::new()
        .preamble_rows(2)
        .load_path(data_path("preamble.csv"))
        .unwrap();
    assert_eq!(table.header(), &["hour", "reading"]);
    assert_eq!(table.as_slice(), &[0.0, 1.5, 1.0, 1.75, 2.0, 2.0]);
}

#[test]
fn test_header_only() {
    let table = Loader::new().load_path(data_path("header-only.csv")).unwrap();
    assert_eq!(table.rows(), 0);
    assert_eq!(table.cols(), 3);
    assert_eq!(table.header(), &["temp", "humidity", "pressure"]);
    assert!(table.as_slice().is_empty());
    assert_eq!(table.iter_rows().count(), 0);
}

#[test]
fn test_sanitized_non_ascii_header() {
    let table = Loader::new()
        .delimiter(",")
        .load_path(data_path("accents.csv"))
        .unwrap();
    assert_eq!(table.header(), &["tempratureC", "humidit"]);
    assert_eq!(table.row(0), Some(&[12.0, 80.0][..]));
}

#[test]
fn test_ragged_row_fails() {
    let err = Loader::new().load_path(data_path("ragged.csv")).unwrap_err();
    match err {
        FrameError::MalformedRow { row: 1, expected: 2, found: 1 } => {}
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.pass(), Pass::Population);
    assert_eq!(err.to_string(), "population pass: data row 1 has 1 fields, expected 2");
}

#[test]
fn test_non_numeric_strict() {
    match Loader::new().load_path(data_path("missing-values.csv")) {
        Err(FrameError::NonNumeric { row: 1, col: 1, ref token }) if token == "n/a" => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_non_numeric_lenient() {
    let table = Loader::new()
        .numeric(NumericPolicy::Lenient(f64::NAN))
        .load_path(data_path("missing-values.csv"))
        .unwrap();
    assert_eq!(table.column(0), Some(vec![1.0, 2.0, 3.0]));
    let values = table.column_by_name("value").unwrap();
    assert_eq!(values[0], 0.5);
    assert!(values[1].is_nan());
    assert_eq!(values[2], 7.0);
}

#[test]
fn test_wide_header_fails() {
    match Loader::new().load_path(data_path("wide-header.csv")) {
        Err(FrameError::HeaderMismatch { expected: 2, found: 3 }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.csv");
    let err = Loader::new().load_path(&path).unwrap_err();
    match err {
        FrameError::Open { pass: Pass::Sizing, .. } => {}
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.source().is_some());
    assert!(err.to_string().contains("does-not-exist.csv"));
}

#[test]
fn test_load_twice_from_same_file() {
    let path = data_path("simple.csv");
    let loader = Loader::new();
    let first = loader.load_path(&path).unwrap();
    let second = loader.load_path(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_display() {
    let table = Loader::new().load_path(data_path("simple.csv")).unwrap();
    assert_eq!(table.to_string(), "a  b\n1  2\n3  4\n");
}

#[test]
fn test_leading_blank_lines_are_not_the_header() {
    let table = Loader::new().load_path(data_path("leading-blank.csv")).unwrap();
    assert_eq!(table.header(), &["a", "b"]);
    assert_eq!(table.dimensions(), Dimensions { rows: 1, cols: 2 });
    assert_eq!(table.as_slice(), &[1.0, 2.0]);
}

#[test]
fn test_empty_delimiter_reads_one_column() {
    let table = Loader::new()
        .delimiter("")
        .load_reader(Cursor::new("reading (C)\n1.5\n-2\n"))
        .unwrap();
    assert_eq!(table.header(), &["readingC"]);
    assert_eq!(table.dimensions(), Dimensions { rows: 2, cols: 1 });
    assert_eq!(table.column(0), Some(vec![1.5, -2.0]));
}

#[test]
fn test_invalid_utf8_names_sizing_pass() {
    let err = Loader::new().load_path(data_path("invalid-utf8.csv")).unwrap_err();
    match err {
        FrameError::InvalidUtf8 { pass: Pass::Sizing, line: 2 } => {}
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.pass(), Pass::Sizing);
    assert_eq!(err.to_string(), "sizing pass: line 2 is not valid UTF-8");
}
