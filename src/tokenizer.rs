use memchr::memchr2;

use crate::content::to_content;

const QUOTE: u8 = b'"';
const BACKSLASH: u8 = b'\\';

/// Split a single line of delimited text into its normalized cells.
///
/// The line must not contain line terminators (multi-line quoted fields are
/// expected to be pre-joined by the caller). A separator appearing inside a
/// quoted region does not split; both doubled-quote (`""`) and
/// backslash-quote (`\"`) escapes are recognized inside quoted regions.
///
/// An empty or whitespace-only line yields no cells at all, not a single
/// empty cell. An unterminated quoted region is clamped to the end of the
/// line, never dropped.
pub fn split_into_cells(line: &str, separator: char) -> Vec<String> {
    let mut cells = Vec::new();

    if line.trim().is_empty() {
        return cells;
    }

    let bytes = line.as_bytes();

    let mut sep_buf = [0u8; 4];
    let sep = separator.encode_utf8(&mut sep_buf).as_bytes();

    let mut start: usize = 0;
    let mut pos: usize = 0;

    while pos < bytes.len() {
        if bytes[pos] == QUOTE {
            pos = skip_quoted(bytes, pos + 1);
            continue;
        }

        if bytes[pos..].starts_with(sep) {
            cells.push(to_content(&line[start..pos]));
            pos += sep.len();
            start = pos;
            continue;
        }

        if sep.len() == 1 {
            // Here we are moving to the next quote or separator
            match memchr2(QUOTE, sep[0], &bytes[pos + 1..]) {
                Some(offset) => pos += offset + 1,
                None => break,
            }
        } else {
            pos += 1;
        }
    }

    // Trailing cell, unless the last separator already ended the line. It may
    // still normalize to an empty string.
    if start < line.len() {
        cells.push(to_content(&line[start..]));
    }

    cells
}

// Scans a quoted region, `pos` pointing just after the opening quote.
// Returns the position just after the closing quote, or clamps to the end of
// the buffer when the region is left unterminated.
fn skip_quoted(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() {
        let byte = bytes[pos];

        if byte == QUOTE {
            if bytes.get(pos + 1) == Some(&QUOTE) {
                pos += 2;
                continue;
            }

            return pos + 1;
        }

        if byte == BACKSLASH && bytes.get(pos + 1) == Some(&QUOTE) {
            pos += 2;
            continue;
        }

        // Here we are moving to the next quote or backslash
        match memchr2(QUOTE, BACKSLASH, &bytes[pos + 1..]) {
            Some(offset) => pos += offset + 1,
            None => break,
        }
    }

    bytes.len()
}
