//! Load delimited text files of numbers into a fixed-size in-memory [`Table`].
//!
//! The first line of a source is a header of column names; every following non-blank line is a
//! row of numbers. Fields are separated by any character of a [`Delimiter`] (by default a comma
//! or a space), with no quoting or escaping.
//!
//! ```
//! use std::io::Cursor;
//!
//! let table = csv_frame::load(Cursor::new("a, b\n1, 2\n3, 4\n"), &Default::default()).unwrap();
//! assert_eq!(table.header(), &["a", "b"]);
//! assert_eq!(table.row(1), Some(&[3.0, 4.0][..]));
//! ```
use std::io::{Read, Seek};

pub mod error;
pub use error::{FrameError, Pass, Result};

pub mod delimiter;
pub use delimiter::Delimiter;

mod token;
pub use token::{sanitize, tokenize, Tokens};

pub mod dialect;
pub use dialect::{ColumnSource, Dialect, NumericPolicy};

mod table;
pub use table::{Dimensions, Table};

mod loader;
pub use loader::Loader;

pub(crate) mod lines;
pub(crate) mod snip;

/// Count the data rows and columns of `reader` with the default dialect and `delimiter`.
pub fn size_of<R: Read>(reader: R, delimiter: &Delimiter) -> Result<Dimensions> {
    Loader::new().delimiter(delimiter.clone()).size_reader(reader)
}

/// Load `reader` into a [`Table`] with the default dialect and `delimiter`.
pub fn load<R: Read + Seek>(reader: R, delimiter: &Delimiter) -> Result<Table> {
    Loader::new().delimiter(delimiter.clone()).load_reader(reader)
}
