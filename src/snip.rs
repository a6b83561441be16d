use std::io::{self, BufRead};

/// Consume the first `n_preamble_rows` lines of `reader`, returning how many were skipped (fewer
/// only if the source ends first).
pub(crate) fn snip_preamble<R: BufRead>(reader: &mut R, n_preamble_rows: usize)
    -> io::Result<usize>
{
    let mut skipped = 0;
    let mut partial = false;
    while skipped < n_preamble_rows {
        let (consumed, found) = {
            let buffer = reader.fill_buf()?;
            if buffer.is_empty() {
                // an unterminated last line still counts as a line
                if partial { skipped += 1; }
                break;
            }
            match memchr::memchr(b'\n', buffer) {
                Some(pos) => (pos + 1, true),
                None => (buffer.len(), false),
            }
        };
        reader.consume(consumed);
        if found {
            skipped += 1;
            partial = false;
        } else {
            partial = true;
        }
    }
    Ok(skipped)
}
