use std::io::{BufRead, BufReader, Read};

use simdutf8::basic::from_utf8;

use crate::error::*;
use crate::snip::snip_preamble;

/// Wrap `reader` in a buffered line source, skipping `n_preamble_rows` lines first.
pub(crate) fn open_lines<R: Read>(reader: R, pass: Pass, n_preamble_rows: usize)
    -> Result<Lines<BufReader<R>>>
{
    let mut buf_reader = BufReader::new(reader);
    let skipped = snip_preamble(&mut buf_reader, n_preamble_rows).map_err(FrameError::io(pass))?;
    Ok(Lines::new(buf_reader, pass, skipped))
}

/// Iterator over the non-blank lines of a source, with line terminators removed.
///
/// Lines are read as bytes and validated as UTF-8 one at a time, so an invalid line is reported
/// with its line number instead of failing the whole read.
pub(crate) struct Lines<R> {
    reader: R,
    pass: Pass,
    buffer: Vec<u8>,
    // 1-based number of the last line read, counting skipped and blank lines
    line_no: usize,
    is_done: bool,
}

impl<R: BufRead> Lines<R> {
    pub(crate) fn new(reader: R, pass: Pass, lines_before: usize) -> Lines<R> {
        Lines {
            reader,
            pass,
            buffer: Vec::with_capacity(1 << 10),
            line_no: lines_before,
            is_done: false,
        }
    }

    /// Number of the line most recently returned.
    pub(crate) fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        while !self.is_done {
            self.buffer.clear();
            let n_bytes_read = match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(n_bytes_read) => n_bytes_read,
                Err(err) => {
                    self.is_done = true;
                    return Some(Err(FrameError::Io { pass: self.pass, err }));
                }
            };
            if n_bytes_read == 0 {
                self.is_done = true;
                return None;
            }
            self.line_no += 1;

            let mut end = self.buffer.len();
            if end > 0 && self.buffer[end - 1] == b'\n' { end -= 1; }
            if end > 0 && self.buffer[end - 1] == b'\r' { end -= 1; }
            if end == 0 {
                continue;
            }
            return Some(match from_utf8(&self.buffer[..end]) {
                Ok(line) => Ok(line.to_owned()),
                Err(_) => {
                    self.is_done = true;
                    Err(FrameError::InvalidUtf8 { pass: self.pass, line: self.line_no })
                }
            });
        }
        None
    }
}
