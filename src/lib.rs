/*!
The `tabular-csv` crate provides an in-memory CSV codec built around a
fixed-shape [`Table`] of optional string cells.

It covers the two failure-prone halves of the format: a character-level
tokenizer that splits one line of delimited text into cells while handling
quoted fields, embedded separators and two competing escape conventions
(doubled quotes and backslash-escaped quotes), and a header-aware table
container with stable in-place column sorting and dialect-driven
serialization back to text.

It is geared towards best-effort import/export pipelines where ragged or
malformed tabular data is the common case, not the exceptional one. The core
therefore favors silent degradation over raising: out-of-range addressing is
a no-op, unterminated quoted regions are clamped instead of surfaced, and
serializing an empty table yields an empty result. See the
[error policy](#error-policy) below.

# Examples

*Tokenizing a line with quoted separators*

```
use tabular_csv::split_into_cells;

let cells = split_into_cells("a,\"b,c\",d", ',');
assert_eq!(cells, vec!["a", "b,c", "d"]);
```

*Assembling a table, sorting it, then serializing it back*

```
use tabular_csv::{serialize, Settings, SortOrder, Table};

let mut table = Table::from_lines(vec!["name,age", "zoe,35", "adam,60"], ',');
table.heading(true);

table.sort_by_header("name", SortOrder::Ascending);

assert_eq!(table.get_named("age", 0), Some("60"));

let text = serialize(&table, &Settings::default());
```

*Streaming tables into a byte sink under a dialect*

```
use std::fs::File;
use tabular_csv::{Charset, Settings, Table, Writer};

let settings = Settings {
    separator: ';',
    charset: Charset::Utf8Bom,
    ..Settings::default()
};

let mut writer = Writer::new(File::create("data.csv")?, settings);
writer.write_table(&table)?;
writer.flush()?;
```

# Tokenization rules

- An empty or whitespace-only line yields no cells at all, not a single
  empty cell.
- A separator inside a properly quoted region never splits.
- Inside a quoted region, `""` and `\"` are both escaped quotes; both
  conventions may appear on the same line.
- An unterminated quoted region is clamped to the end of the line; the tail
  is never dropped.
- Each extracted cell is normalized (see [`to_content`]): trimmed, stripped
  of exactly one field-delimiting quote per end, backslash escapes collapsed
  before doubled-quote escapes.

# Serialization layout

Every row renders its `width` cells joined by the separator, followed by the
terminator. Rows shorter than the table width were padded with unset cells at
construction and unset cells render empty, so ragged source rows produce a
visible trailing separator. This layout round-trips with existing consumers
and is preserved on purpose.

# Error policy

Nothing in the core raises under normal use. Absent input, out-of-range
addressing, malformed quoting and no-op parameter combinations (such as
[`SortOrder::Unsorted`]) all degrade silently to empty results or ignored
writes. The only propagating failures are [`std::io::Error`]s from the
streaming [`Writer`]'s sink, which pass through unchanged.

# Threading

A [`Table`] is a plain mutable value with no internal synchronization. All
operations are synchronous and bounded by input size; callers sharing a table
across threads are responsible for external locking.
*/
#[allow(unused_macros)]
macro_rules! trow {
    () => {{
        Vec::<Option<String>>::new()
    }};

    ($($x: expr),*) => {{
        let mut r = Vec::<Option<String>>::new();

        $(
            r.push(Some($x.to_string()));
        )*

        r
    }};
}

#[allow(unused_imports)]
pub(crate) use trow;

mod content;
mod settings;
mod sort;
mod table;
mod tokenizer;
mod writer;

pub use content::to_content;
pub use settings::{Charset, Settings};
pub use sort::SortOrder;
pub use table::{CompareMode, Table};
pub use tokenizer::split_into_cells;
pub use writer::{serialize, serialize_to_bytes, Writer};
