use std::fmt;

use tracing::warn;

use crate::delimiter::Delimiter;
use crate::error::*;

/// How a delimited data file is laid out, and how strictly it should be read.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialect {
    /// Separator characters between fields.
    pub delimiter: Delimiter,
    /// Number of lines before the header row that are not part of the table.
    pub preamble_rows: usize,
    /// Which line decides the number of columns.
    pub column_source: ColumnSource,
    /// What to do with data tokens that are not numbers.
    pub numeric: NumericPolicy,
    /// Whether the header must have exactly as many fields as the table has columns.
    pub check_header: bool,
}
impl Default for Dialect {
    fn default() -> Dialect {
        Dialect {
            delimiter: Delimiter::default(),
            preamble_rows: 0,
            column_source: ColumnSource::FirstDataRow,
            numeric: NumericPolicy::Strict,
            check_header: true,
        }
    }
}
impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Dialect:")?;
        writeln!(f, "\tDelimiter: {}", self.delimiter)?;
        writeln!(f, "\tNumber of preamble rows: {}", self.preamble_rows)?;
        writeln!(f, "\tColumn count from: {}", self.column_source)?;
        writeln!(f, "\tNon-numeric tokens: {}", self.numeric)?;
        writeln!(f, "\tCheck header width?: {}", self.check_header)
    }
}

/// The line whose token count fixes the number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// The header row.
    Header,
    /// The first data row after the header. Falls back to the header when there are no data rows.
    FirstDataRow,
}
impl fmt::Display for ColumnSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            ColumnSource::Header       => "header row",
            ColumnSource::FirstDataRow => "first data row",
        })
    }
}

/// Conversion policy for data tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericPolicy {
    /// Fail on the first token that does not parse as a number.
    Strict,
    /// Substitute the given value for tokens that do not parse as a number.
    Lenient(f64),
}
impl NumericPolicy {
    pub(crate) fn convert(&self, token: &str, row: usize, col: usize) -> Result<f64> {
        match token.trim().parse::<f64>() {
            Ok(value) => Ok(value),
            Err(_) => match *self {
                NumericPolicy::Strict => Err(FrameError::NonNumeric {
                    row,
                    col,
                    token: token.to_string(),
                }),
                NumericPolicy::Lenient(fill) => {
                    warn!(row, col, token, fill, "substituting non-numeric token");
                    Ok(fill)
                }
            },
        }
    }
}
impl fmt::Display for NumericPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NumericPolicy::Strict => write!(f, "fail"),
            NumericPolicy::Lenient(fill) => write!(f, "replace with {}", fill),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dialect() {
        let dialect = Dialect::default();
        assert_eq!(dialect.delimiter.as_str(), ", ");
        assert_eq!(dialect.preamble_rows, 0);
        assert_eq!(dialect.column_source, ColumnSource::FirstDataRow);
        assert_eq!(dialect.numeric, NumericPolicy::Strict);
        assert!(dialect.check_header);
    }

    #[test]
    fn strict_conversion() {
        let policy = NumericPolicy::Strict;
        assert_eq!(policy.convert("1.5", 0, 0).unwrap(), 1.5);
        assert_eq!(policy.convert(" -3 ", 0, 0).unwrap(), -3.0);
        assert_eq!(policy.convert("2e3", 0, 0).unwrap(), 2000.0);
        match policy.convert("n/a", 4, 2) {
            Err(FrameError::NonNumeric { row: 4, col: 2, ref token }) if token == "n/a" => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn lenient_conversion() {
        let policy = NumericPolicy::Lenient(-1.0);
        assert_eq!(policy.convert("n/a", 0, 0).unwrap(), -1.0);
        assert_eq!(policy.convert("7", 0, 0).unwrap(), 7.0);
    }

    #[test]
    fn display() {
        let text = Dialect::default().to_string();
        assert!(text.contains("Delimiter: \", \""));
        assert!(text.contains("first data row"));
    }
}
