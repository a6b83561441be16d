use std::fmt;
use std::io::{self, Write};

use hashbrown::HashMap;
use tabwriter::TabWriter;

use crate::delimiter::Delimiter;

/// Number of data rows and columns in a source, as found by the sizing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Header names plus a `rows x cols` matrix of numbers, stored row-major.
///
/// A `Table` is only ever built complete: every cell holds a value read from the source, and the
/// header has exactly one (sanitized) name per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    delimiter: Delimiter,
    dims: Dimensions,
    header: Vec<String>,
    matrix: Vec<f64>,
    index: HashMap<String, usize>,
}

impl Table {
    pub(crate) fn new(delimiter: Delimiter, dims: Dimensions, header: Vec<String>,
        matrix: Vec<f64>) -> Table
    {
        debug_assert_eq!(header.len(), dims.cols);
        debug_assert_eq!(matrix.len(), dims.rows * dims.cols);
        let mut index = HashMap::with_capacity(header.len());
        for (col, name) in header.iter().enumerate() {
            // first occurrence wins for duplicated names
            index.entry(name.clone()).or_insert(col);
        }
        Table { delimiter, dims, header, matrix, index }
    }

    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }
    pub fn rows(&self) -> usize {
        self.dims.rows
    }
    pub fn cols(&self) -> usize {
        self.dims.cols
    }
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }
    /// Column names, in file order.
    pub fn header(&self) -> &[String] {
        &self.header
    }
    /// The whole matrix, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.matrix
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.dims.rows {
            return None;
        }
        let start = row * self.dims.cols;
        Some(&self.matrix[start..start + self.dims.cols])
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if col >= self.dims.cols {
            return None;
        }
        self.row(row).map(|values| values[col])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.dims.rows).map(move |row| {
            let start = row * self.dims.cols;
            &self.matrix[start..start + self.dims.cols]
        })
    }

    /// Position of the column called `name` (compared against the sanitized header).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Copy out every value of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Option<Vec<f64>> {
        if col >= self.dims.cols {
            return None;
        }
        Some(self.iter_rows().map(|values| values[col]).collect())
    }

    pub fn column_by_name(&self, name: &str) -> Option<Vec<f64>> {
        self.column_index(name).and_then(|col| self.column(col))
    }

    /// Render the header and rows as tab-aligned columns.
    pub fn write_aligned<W: Write>(&self, wtr: W) -> io::Result<()> {
        let mut tw = TabWriter::new(wtr).minwidth(0).padding(2);
        writeln!(tw, "{}", self.header.join("\t"))?;
        for values in self.iter_rows() {
            let cells: Vec<String> = values.iter().map(|value| value.to_string()).collect();
            writeln!(tw, "{}", cells.join("\t"))?;
        }
        tw.flush()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buffer = Vec::new();
        self.write_aligned(&mut buffer).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}
