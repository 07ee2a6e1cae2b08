/// Output character encoding for serialized bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Charset {
    #[default]
    Utf8,
    /// UTF-8 with a leading byte-order mark.
    Utf8Bom,
    Utf16Le,
    Utf16Be,
}

impl Charset {
    /// Byte-order mark conventionally emitted by this charset, empty for
    /// plain UTF-8.
    pub fn bom(self) -> &'static [u8] {
        match self {
            Self::Utf8 => b"",
            Self::Utf8Bom => b"\xef\xbb\xbf",
            Self::Utf16Le => b"\xff\xfe",
            Self::Utf16Be => b"\xfe\xff",
        }
    }

    pub(crate) fn encode_to(self, text: &str, out: &mut Vec<u8>) {
        match self {
            Self::Utf8 | Self::Utf8Bom => out.extend_from_slice(text.as_bytes()),
            Self::Utf16Le => {
                for unit in text.encode_utf16() {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
            }
            Self::Utf16Be => {
                for unit in text.encode_utf16() {
                    out.extend_from_slice(&unit.to_be_bytes());
                }
            }
        }
    }
}

/// Dialect configuration consumed by the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Cell separator. Defaults to a comma.
    pub separator: char,

    /// Quote every cell regardless of content. When disabled, only cells
    /// containing the separator, a quote or a line break are quoted, with
    /// embedded quotes escaped by doubling. Defaults to `false`.
    pub always_quote: bool,

    /// Line terminator appended after each row. Defaults to CRLF.
    pub terminator: String,

    /// Output byte encoding. Defaults to plain UTF-8, without a byte-order
    /// mark.
    pub charset: Charset,

    /// Literal used for boolean true by external value-mapping layers. Never
    /// interpreted by this crate. Defaults to `"true"`.
    pub true_literal: String,

    /// Literal used for boolean false by external value-mapping layers. Never
    /// interpreted by this crate. Defaults to `"false"`.
    pub false_literal: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: ',',
            always_quote: false,
            terminator: "\r\n".to_string(),
            charset: Charset::Utf8,
            true_literal: "true".to_string(),
            false_literal: "false".to_string(),
        }
    }
}
