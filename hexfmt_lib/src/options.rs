use serde::{Deserialize, Serialize};

/// Sparse formatting options.
///
/// Every field is optional and resolution never fails: an absent field takes
/// its documented default, and so does any value outside the accepted set
/// (an unknown radix, a negative width, an unrecognized `caps` string...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Bytes rendered per line. Default 16.
    pub bytes_per_line: Option<i64>,
    /// Bytes combined into one numeral: 0 (ungrouped nibble pairs, no
    /// inter-byte space), 1, 2, 4 or 8. Default 2.
    pub bytes_per_group: Option<i64>,
    /// Numeral base: 2, 8, 10 or 16. Default 16.
    pub radix: Option<i64>,
    /// Combine the bytes of a group least-significant first. Default false.
    pub little_endian: Option<bool>,
    /// Emit the leading address column. Default true.
    pub show_address: Option<bool>,
    /// "upper" or "lower" case for radix-16 numerals. Default "lower".
    pub caps: Option<String>,
    /// "ascii" to emit the trailing text column, "none" to drop it.
    /// Default "ascii".
    pub annotate: Option<String>,
    /// Render characters beyond printable ASCII instead of replacing them
    /// with a placeholder. Default false.
    pub extended_chars: Option<bool>,
    /// String prepended to every line, after the indent. Default empty.
    pub prefix: Option<String>,
    /// Number of spaces prepended before the prefix. Default 0.
    pub indent: Option<i64>,
    /// Hypertext output: wrapper elements and entity escaping. Default false.
    pub html: Option<bool>,
    /// Leading bytes of the source to skip. A negative value counts from the
    /// end. Default 0.
    pub offset: Option<i64>,
    /// Byte count to render, -1 for all remaining bytes. Default -1.
    pub length: Option<i64>,
    /// Added to every displayed address; does not affect which bytes are
    /// rendered. Default 0.
    pub display_offset: Option<i64>,
}

impl Options {
    pub(crate) fn resolve(&self) -> Config {
        let html = self.html.unwrap_or(false);
        let indent = match self.indent {
            Some(indent) if indent > 0 => indent as usize,
            _ => 0,
        };
        let filler = if html { "&nbsp;" } else { " " };
        let mut prefix = filler.repeat(indent);
        prefix.push_str(self.prefix.as_deref().unwrap_or(""));

        Config {
            bytes_per_line: match self.bytes_per_line {
                Some(width) if width > 0 => width as usize,
                _ => 16,
            },
            bytes_per_group: match self.bytes_per_group {
                Some(group @ (0 | 1 | 2 | 4 | 8)) => group as usize,
                _ => 2,
            },
            radix: match self.radix {
                Some(radix @ (2 | 8 | 10 | 16)) => radix as u32,
                _ => 16,
            },
            little_endian: self.little_endian.unwrap_or(false),
            show_address: self.show_address.unwrap_or(true),
            upper: self.caps.as_deref() == Some("upper"),
            annotate: self.annotate.as_deref() != Some("none"),
            extended_chars: self.extended_chars.unwrap_or(false),
            prefix,
            html,
            offset: self.offset.unwrap_or(0),
            length: self.length.unwrap_or(-1),
            display_offset: self.display_offset.unwrap_or(0),
        }
    }
}

/// Fully resolved configuration, immutable for the duration of one render.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub bytes_per_line: usize,
    pub bytes_per_group: usize,
    pub radix: u32,
    pub little_endian: bool,
    pub show_address: bool,
    pub upper: bool,
    pub annotate: bool,
    pub extended_chars: bool,
    pub prefix: String,
    pub html: bool,
    pub offset: i64,
    pub length: i64,
    pub display_offset: i64,
}
