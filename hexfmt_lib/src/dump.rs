use crate::escape;
use crate::line;
use crate::numeral::numeral_width;
use crate::options::{Config, Options};
use crate::source::Source;

/// Render `source` as a hex dump according to `options`.
///
/// The result is one string holding every line, each terminated by a line
/// feed. An empty source renders to the empty string, with no lines at all.
/// Rendering never fails: every out-of-range option value falls back to its
/// default instead.
pub fn render<S: Into<Source>>(source: S, options: &Options) -> String {
    let config = options.resolve();
    let bytes = window(source.into().into_bytes(), &config);
    if bytes.is_empty() {
        return String::new();
    }

    let column = column_width(&config);
    let mut out = String::new();
    if config.html {
        out.push_str("<div class='hexfmt'>\n");
    }

    for (index, chunk) in bytes.chunks(config.bytes_per_line).enumerate() {
        let (numerals, raw) = line::render(chunk, &config);
        let address = format_address(
            (index * config.bytes_per_line) as i64 + config.offset + config.display_offset,
        );

        if config.html {
            let marker = if index % 2 == 0 { " even" } else { "  odd" };
            out.push_str("<div class='");
            out.push_str(&address);
            out.push_str(marker);
            out.push_str("'>");
        }
        out.push_str(&config.prefix);
        if config.show_address {
            out.push_str(&address);
            out.push_str(": ");
        }
        right_pad(&mut out, numerals, column, config.html);
        if config.annotate {
            out.push(' ');
            if config.html {
                out.push_str(&escape::hypertext(&raw, config.extended_chars));
            } else {
                out.push_str(&escape::plain(&raw, config.extended_chars));
            }
        }
        out.push_str(if config.html { "</div>\n" } else { "\n" });
    }

    if config.html {
        out.push_str("</div>\n");
    }
    out
}

/// Apply the offset, then the length, to the captured bytes.
///
/// An offset at or beyond the source length leaves the source untouched
/// while still contributing to the displayed addresses; a negative offset
/// counts from the end. A length larger than what remains is ignored; a
/// non-positive length other than -1 empties the result.
fn window(mut bytes: Vec<u8>, config: &Config) -> Vec<u8> {
    let len = bytes.len() as i64;
    if config.offset != 0 && config.offset < len {
        let start = if config.offset >= 0 {
            config.offset
        } else {
            (len + config.offset).max(0)
        };
        bytes.drain(..start as usize);
    }

    match config.length {
        -1 => {}
        length if length <= 0 => bytes.clear(),
        length if length <= bytes.len() as i64 => bytes.truncate(length as usize),
        _ => {}
    }

    bytes
}

/// Width of the numeral column, identical for every line of one dump.
/// Computed from the configured group size before it is clamped to the
/// line width.
fn column_width(config: &Config) -> usize {
    let group = config.bytes_per_group;
    let width = numeral_width(group, config.radix) * config.bytes_per_line / group.max(1);

    width
        + match group {
            0 => 2,
            1 => config.bytes_per_line + 3,
            _ => config.bytes_per_line / group,
        }
}

/// Addresses are zero-padded to 8 hexadecimal digits whatever the numeral
/// radix. A negative address keeps its sign between the padding zeroes and
/// the digits.
fn format_address(address: i64) -> String {
    let digits = if address < 0 {
        format!("-{:x}", address.unsigned_abs())
    } else {
        format!("{address:x}")
    };
    format!("{digits:0>8}")
}

/// Pad the numeral column on the right up to `column` characters, counting
/// the one-space separator that follows it.
fn right_pad(out: &mut String, numerals: String, column: usize, html: bool) {
    let have = numerals.len() + 1;
    out.push_str(&numerals);
    if column > have {
        let filler = if html { "&nbsp;" } else { " " };
        out.push_str(&filler.repeat(column - have));
    }
}
