use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, info, trace};

use crate::delimiter::Delimiter;
use crate::dialect::*;
use crate::error::*;
use crate::lines::open_lines;
use crate::table::{Dimensions, Table};
use crate::token::{sanitize, tokenize};

/// Reads delimited numeric files into [`Table`]s.
///
/// Loading makes two passes over the source: a sizing pass that counts data rows and columns,
/// and a population pass that reads the header and fills a matrix allocated to exactly the sized
/// dimensions. Both passes read the same handle; the source is rewound in between, so it must not
/// change while a load is running.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    dialect: Dialect,
}
impl Loader {
    /// Create a loader with the default dialect (`", "` delimiter, strict numbers).
    pub fn new() -> Loader {
        Loader::default()
    }
    pub fn from_dialect(dialect: Dialect) -> Loader {
        Loader { dialect }
    }
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Specify the separator characters.
    pub fn delimiter<D: Into<Delimiter>>(&mut self, delimiter: D) -> &mut Loader {
        self.dialect.delimiter = delimiter.into();
        self
    }
    /// Specify how many lines precede the header row.
    pub fn preamble_rows(&mut self, preamble_rows: usize) -> &mut Loader {
        self.dialect.preamble_rows = preamble_rows;
        self
    }
    /// Specify which line fixes the number of columns.
    pub fn column_source(&mut self, column_source: ColumnSource) -> &mut Loader {
        self.dialect.column_source = column_source;
        self
    }
    /// Specify what happens to data tokens that are not numbers.
    pub fn numeric(&mut self, numeric: NumericPolicy) -> &mut Loader {
        self.dialect.numeric = numeric;
        self
    }
    /// Specify whether a header wider or narrower than the data is an error. When disabled, the
    /// header is truncated, or padded with empty names, to the column count.
    pub fn check_header(&mut self, check_header: bool) -> &mut Loader {
        self.dialect.check_header = check_header;
        self
    }

    pub fn size_path<P: AsRef<Path>>(&self, path: P) -> Result<Dimensions> {
        let file = open_file(path.as_ref(), Pass::Sizing)?;
        self.size_reader(file)
    }

    /// Run only the sizing pass, reading from the current position of `reader`.
    pub fn size_reader<R: Read>(&self, reader: R) -> Result<Dimensions> {
        let delim = &self.dialect.delimiter;
        let mut lines = open_lines(reader, Pass::Sizing, self.dialect.preamble_rows)?;

        // the header is never a data row, but may still decide the width
        let header = match lines.next() {
            Some(line) => line?,
            None => {
                debug!("sizing pass found an empty source");
                return Ok(Dimensions::default());
            }
        };
        let mut dims = Dimensions { rows: 0, cols: tokenize(&header, delim).count() };

        for line in lines {
            let line = line?;
            if dims.rows == 0 && self.dialect.column_source == ColumnSource::FirstDataRow {
                dims.cols = tokenize(&line, delim).count();
            }
            dims.rows += 1;
        }
        debug!(rows = dims.rows, cols = dims.cols, "sizing pass complete");
        Ok(dims)
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let path = path.as_ref();
        let file = open_file(path, Pass::Sizing)?;
        let table = self.load_reader(file)?;
        info!(path = %path.display(), rows = table.rows(), cols = table.cols(), "loaded table");
        Ok(table)
    }

    /// Size and load the source read by `reader`, starting from its current position.
    pub fn load_reader<R: Read + Seek>(&self, mut reader: R) -> Result<Table> {
        let start = reader.stream_position().map_err(FrameError::io(Pass::Sizing))?;
        let dims = self.size_reader(&mut reader)?;
        reader.seek(SeekFrom::Start(start)).map_err(FrameError::io(Pass::Population))?;
        self.populate(&mut reader, dims)
    }

    fn populate<R: Read>(&self, reader: R, dims: Dimensions) -> Result<Table> {
        let delim = &self.dialect.delimiter;
        let mut lines = open_lines(reader, Pass::Population, self.dialect.preamble_rows)?;

        let mut header: Vec<String> = Vec::with_capacity(dims.cols);
        if let Some(line) = lines.next() {
            header.extend(tokenize(&line?, delim).map(sanitize));
        }
        debug!(line = lines.line_no(), ?header, "header read");
        if header.len() != dims.cols {
            if self.dialect.check_header {
                return Err(FrameError::HeaderMismatch { expected: dims.cols, found: header.len() });
            }
            header.resize(dims.cols, String::new());
        }

        let matrix = allocate(dims)?;
        let matrix = self.fill(&mut lines, dims, matrix)?;
        debug!(rows = dims.rows, cols = dims.cols, "population pass complete");
        Ok(Table::new(delim.clone(), dims, header, matrix))
    }

    fn fill<I>(&self, lines: &mut I, dims: Dimensions, mut matrix: Vec<f64>) -> Result<Vec<f64>>
    where
        I: Iterator<Item = Result<String>>,
    {
        let delim = &self.dialect.delimiter;
        let mut row = 0;
        while let Some(line) = lines.next() {
            let line = line?;
            if row == dims.rows {
                // more rows than were sized; count the rest for the message
                let found = dims.rows + 1 + lines.by_ref().count();
                return Err(FrameError::SourceChanged { expected: dims.rows, found });
            }
            let tokens: Vec<&str> = tokenize(&line, delim).collect();
            if tokens.len() != dims.cols {
                return Err(FrameError::MalformedRow {
                    row,
                    expected: dims.cols,
                    found: tokens.len(),
                });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                matrix.push(self.dialect.numeric.convert(token, row, col)?);
            }
            trace!(row, "row filled");
            row += 1;
        }
        if row != dims.rows {
            return Err(FrameError::SourceChanged { expected: dims.rows, found: row });
        }
        Ok(matrix)
    }
}

fn open_file(path: &Path, pass: Pass) -> Result<File> {
    let file = File::open(path).map_err(|err| FrameError::Open {
        pass,
        path: path.to_path_buf(),
        err,
    })?;
    debug!(path = %path.display(), %pass, "opened source");
    Ok(file)
}

// reserve the whole matrix up front; filling it never reallocates
fn allocate(dims: Dimensions) -> Result<Vec<f64>> {
    let failed = || FrameError::Allocation { rows: dims.rows, cols: dims.cols };
    let len = dims.rows.checked_mul(dims.cols).ok_or_else(failed)?;
    let mut matrix = Vec::new();
    matrix.try_reserve_exact(len).map_err(|_| failed())?;
    Ok(matrix)
}
