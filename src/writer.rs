use std::io::{self, BufWriter, IntoInnerError, Write};

use memchr::memchr3;

use crate::settings::Settings;
use crate::table::Table;

const QUOTE: char = '"';

/// Render `table` as delimited text under `settings`.
///
/// Every row renders its `width` cells joined by the separator, unset cells
/// rendering empty, followed by the terminator. An empty table yields an
/// empty string.
pub fn serialize(table: &Table, settings: &Settings) -> String {
    let mut out = String::new();

    if table.is_empty() {
        return out;
    }

    for row in table.rows() {
        push_row(&mut out, row, settings);
    }

    out
}

/// Render `table` as bytes under the dialect's charset, byte-order mark
/// included when the charset conventionally carries one.
///
/// An empty table yields an empty vec, without a byte-order mark.
pub fn serialize_to_bytes(table: &Table, settings: &Settings) -> Vec<u8> {
    let mut out = Vec::new();

    if table.is_empty() {
        return out;
    }

    out.extend_from_slice(settings.charset.bom());
    settings.charset.encode_to(&serialize(table, settings), &mut out);

    out
}

fn push_row(out: &mut String, row: &[Option<String>], settings: &Settings) {
    let last_i = row.len().saturating_sub(1);

    for (i, cell) in row.iter().enumerate() {
        push_cell(out, cell.as_deref().unwrap_or(""), settings);

        if i != last_i {
            out.push(settings.separator);
        }
    }

    out.push_str(&settings.terminator);
}

fn push_cell(out: &mut String, cell: &str, settings: &Settings) {
    if settings.always_quote {
        out.push(QUOTE);
        out.push_str(cell);
        out.push(QUOTE);
        return;
    }

    if !must_quote(cell, settings.separator) {
        out.push_str(cell);
        return;
    }

    out.push(QUOTE);

    for c in cell.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }

        out.push(c);
    }

    out.push(QUOTE);
}

fn must_quote(cell: &str, separator: char) -> bool {
    memchr3(b'"', b'\n', b'\r', cell.as_bytes()).is_some() || cell.contains(separator)
}

/// Streams serialized tables into an underlying byte sink under the dialect's
/// charset, emitting the byte-order mark once before the first row.
pub struct Writer<W: Write> {
    settings: Settings,
    bom_written: bool,
    scratch: String,
    encoded: Vec<u8>,
    buffer: BufWriter<W>,
}

impl<W: Write> Writer<W> {
    pub fn new(writer: W, settings: Settings) -> Self {
        Self {
            settings,
            bom_written: false,
            scratch: String::new(),
            encoded: Vec::new(),
            buffer: BufWriter::new(writer),
        }
    }

    pub fn with_capacity(writer: W, capacity: usize, settings: Settings) -> Self {
        Self {
            settings,
            bom_written: false,
            scratch: String::new(),
            encoded: Vec::new(),
            buffer: BufWriter::with_capacity(capacity, writer),
        }
    }

    /// Write every row of `table`. An empty table writes nothing, not even
    /// the byte-order mark.
    pub fn write_table(&mut self, table: &Table) -> io::Result<()> {
        if table.is_empty() {
            return Ok(());
        }

        if !self.bom_written {
            self.buffer.write_all(self.settings.charset.bom())?;
            self.bom_written = true;
        }

        for row in table.rows() {
            self.scratch.clear();
            push_row(&mut self.scratch, row, &self.settings);

            self.encoded.clear();
            self.settings.charset.encode_to(&self.scratch, &mut self.encoded);

            self.buffer.write_all(&self.encoded)?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.buffer.flush()
    }

    pub fn into_inner(self) -> Result<W, IntoInnerError<BufWriter<W>>> {
        self.buffer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    use crate::trow;
    use crate::Charset;

    fn sample_table() -> Table {
        Table::from_rows(vec![
            trow!["HA", "HB", "HC"],
            trow!["11", "12", "13"],
            trow!["21", "22", "23", "24"],
            trow!["31", "32"],
        ])
    }

    #[test]
    fn test_round_trip_layout() {
        // Ragged rows pad with empty trailing cells, producing the trailing
        // separator before the terminator on every short row.
        assert_eq!(
            serialize(&sample_table(), &Settings::default()),
            "HA,HB,HC,\r\n11,12,13,\r\n21,22,23,24\r\n31,32,,\r\n"
        );
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(serialize(&Table::with_shape(0, 3), &Settings::default()), "");
        assert_eq!(serialize(&Table::with_shape(3, 0), &Settings::default()), "");
        assert!(serialize_to_bytes(&Table::with_shape(0, 0), &Settings::default()).is_empty());
    }

    #[test]
    fn test_minimal_quoting() {
        let table = Table::from_rows(vec![trow!["john,", "say \"hi\"", "get\ngot", "45"]]);

        assert_eq!(
            serialize(&table, &Settings::default()),
            "\"john,\",\"say \"\"hi\"\"\",\"get\ngot\",45\r\n"
        );
    }

    #[test]
    fn test_always_quote() {
        let table = Table::from_rows(vec![trow!["a", "b"], trow!["c"]]);

        let settings = Settings {
            always_quote: true,
            ..Settings::default()
        };

        assert_eq!(
            serialize(&table, &settings),
            "\"a\",\"b\"\r\n\"c\",\"\"\r\n"
        );
    }

    #[test]
    fn test_dialect() {
        let table = Table::from_rows(vec![trow!["a;b", "c"]]);

        let settings = Settings {
            separator: ';',
            terminator: "\n".to_string(),
            ..Settings::default()
        };

        assert_eq!(serialize(&table, &settings), "\"a;b\";c\n");
    }

    #[test]
    fn test_bytes_with_bom() {
        let table = Table::from_rows(vec![trow!["a"]]);

        let settings = Settings {
            charset: Charset::Utf8Bom,
            ..Settings::default()
        };

        assert_eq!(serialize_to_bytes(&table, &settings), b"\xef\xbb\xbfa\r\n");

        let settings = Settings {
            charset: Charset::Utf16Le,
            terminator: "\n".to_string(),
            ..Settings::default()
        };

        assert_eq!(
            serialize_to_bytes(&table, &settings),
            b"\xff\xfe\x61\x00\x0a\x00"
        );
    }

    #[test]
    fn test_streaming_writer() -> io::Result<()> {
        let settings = Settings {
            charset: Charset::Utf8Bom,
            ..Settings::default()
        };

        let output = Cursor::new(Vec::<u8>::new());
        let mut writer = Writer::with_capacity(output, 32, settings.clone());

        writer.write_table(&Table::with_shape(0, 0))?;
        writer.write_table(&sample_table())?;

        assert_eq!(
            writer.into_inner()?.into_inner(),
            serialize_to_bytes(&sample_table(), &settings)
        );

        Ok(())
    }

    #[test]
    fn test_output_reparses() {
        let table = sample_table();
        let text = serialize(&table, &Settings::default());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let records = reader.records().collect::<Result<Vec<_>, _>>().unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(&records[0], &vec!["HA", "HB", "HC", ""]);
        assert_eq!(&records[2], &vec!["21", "22", "23", "24"]);
        assert_eq!(&records[3], &vec!["31", "32", "", ""]);
    }
}
