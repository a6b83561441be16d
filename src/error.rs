use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// The traversal of the source during which an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// The first pass, which counts rows and columns.
    Sizing,
    /// The second pass, which reads the header and fills the matrix.
    Population,
}
impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Pass::Sizing     => "sizing",
            Pass::Population => "population",
        })
    }
}

/// An error that occurs while sizing or loading a delimited data file.
#[derive(Debug)]
pub enum FrameError {
    /// The source could not be opened for reading.
    Open { pass: Pass, path: PathBuf, err: io::Error },
    /// An I/O error while reading or rewinding an open source.
    Io { pass: Pass, err: io::Error },
    /// A line (1-based, counted from the start of the source) is not valid UTF-8.
    InvalidUtf8 { pass: Pass, line: usize },
    /// Storage for the matrix could not be obtained.
    Allocation { rows: usize, cols: usize },
    /// The header holds a different number of fields than the table has columns.
    HeaderMismatch { expected: usize, found: usize },
    /// A data row (0-based) holds a different number of fields than the table has columns.
    MalformedRow { row: usize, expected: usize, found: usize },
    /// A data token did not parse as a number under the strict policy.
    NonNumeric { row: usize, col: usize, token: String },
    /// The population pass saw a different number of data rows than the sizing pass.
    SourceChanged { expected: usize, found: usize },
}

pub type Result<T> = ::std::result::Result<T, FrameError>;

impl FrameError {
    pub(crate) fn io(pass: Pass) -> impl FnOnce(io::Error) -> FrameError {
        move |err| FrameError::Io { pass, err }
    }

    /// The pass during which this error was raised.
    pub fn pass(&self) -> Pass {
        match *self {
            FrameError::Open { pass, .. }
            | FrameError::Io { pass, .. }
            | FrameError::InvalidUtf8 { pass, .. } => pass,
            FrameError::Allocation { .. }
            | FrameError::HeaderMismatch { .. }
            | FrameError::MalformedRow { .. }
            | FrameError::NonNumeric { .. }
            | FrameError::SourceChanged { .. } => Pass::Population,
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FrameError::Open { pass, ref path, ref err } =>
                write!(f, "{} pass: could not open {}: {}", pass, path.display(), err),
            FrameError::Io { pass, ref err } => write!(f, "{} pass: IO error: {}", pass, err),
            FrameError::InvalidUtf8 { pass, line } =>
                write!(f, "{} pass: line {} is not valid UTF-8", pass, line),
            FrameError::Allocation { rows, cols } =>
                write!(f, "population pass: could not allocate a {}x{} matrix", rows, cols),
            FrameError::HeaderMismatch { expected, found } => write!(f,
                "population pass: header has {} fields, expected {}", found, expected),
            FrameError::MalformedRow { row, expected, found } => write!(f,
                "population pass: data row {} has {} fields, expected {}", row, found, expected),
            FrameError::NonNumeric { row, col, ref token } => write!(f,
                "population pass: data row {}, column {}: {:?} is not a number", row, col, token),
            FrameError::SourceChanged { expected, found } => write!(f,
                "population pass: source changed between passes ({} data rows sized, {} read)",
                expected, found),
        }
    }
}

impl Error for FrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            FrameError::Open { ref err, .. } | FrameError::Io { ref err, .. } => Some(err),
            _ => None,
        }
    }
}

/// I/O errors raised outside a pass-aware call are attributed to the population pass.
impl From<io::Error> for FrameError {
    fn from(err: io::Error) -> FrameError {
        FrameError::Io { pass: Pass::Population, err }
    }
}
