use crate::numeral::numeral_width;
use crate::options::Config;

/// Render one chunk of up to `bytes_per_line` bytes into its numeral column
/// text and its raw character column text.
pub(crate) fn render(chunk: &[u8], config: &Config) -> (String, String) {
    (numerals(chunk, config), raw_text(chunk))
}

/// The numeral column: the chunk partitioned into groups, each group's bytes
/// combined into one unsigned value and rendered in the configured radix,
/// then trailing padding so every line of a dump ends up the same width.
fn numerals(chunk: &[u8], config: &Config) -> String {
    let group = config.bytes_per_group.min(config.bytes_per_line);
    let step = group.max(1);
    let delimiter = if group == 0 { "" } else { " " };
    let full_width = numeral_width(group, config.radix);

    let mut out = String::new();
    let mut start = 0;
    while start < chunk.len() {
        let run = &chunk[start..chunk.len().min(start + step)];
        let text = format_radix(combine(run, config.little_endian), config);
        // A trailing run may hold fewer bytes than the group size; it is
        // padded to the width of the bytes actually present, not the
        // nominal group width.
        for _ in text.len()..numeral_width(run.len(), config.radix) {
            out.push('0');
        }
        out.push_str(&text);
        out.push_str(delimiter);
        start += step;
    }

    let missing = config.bytes_per_line.saturating_sub(chunk.len());
    if missing > 0 {
        let pad = if group == 0 {
            missing * full_width
        } else {
            missing * (full_width + 1) / step
        };
        let filler = if config.html { "&nbsp;" } else { " " };
        out.push_str(&filler.repeat(pad));
    }

    out
}

/// Combine up to eight bytes into one unsigned value, first byte most
/// significant, or least significant when `little_endian` is set.
fn combine(run: &[u8], little_endian: bool) -> u64 {
    let mut value: u64 = 0;

    if little_endian {
        for byte in run.iter().rev() {
            value = value << 8 | u64::from(*byte);
        }
    } else {
        for byte in run.iter() {
            value = value << 8 | u64::from(*byte);
        }
    }

    value
}

fn format_radix(value: u64, config: &Config) -> String {
    match config.radix {
        2 => format!("{value:b}"),
        8 => format!("{value:o}"),
        10 => format!("{value}"),
        _ if config.upper => format!("{value:X}"),
        _ => format!("{value:x}"),
    }
}

/// The raw character column: the chunk's bytes as code points 0-255 in
/// original order. Endianness never applies here.
fn raw_text(chunk: &[u8]) -> String {
    chunk.iter().map(|byte| char::from(*byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn config(options: Options) -> Config {
        options.resolve()
    }

    #[test]
    fn test_big_endian_groups() {
        let config = config(Options::default());
        assert_eq!("1234 ", numerals(&[0x12, 0x34], &config));
    }

    #[test]
    fn test_little_endian_groups() {
        let config = config(Options {
            little_endian: Some(true),
            ..Default::default()
        });
        assert_eq!("3412 ", numerals(&[0x12, 0x34], &config));
    }

    #[test]
    fn test_partial_group_width_covers_present_bytes_only() {
        let config = config(Options::default());
        assert!(numerals(&[0x61, 0x62, 0x63], &config).starts_with("6162 63 "));

        let config = self::config(Options {
            little_endian: Some(true),
            bytes_per_group: Some(4),
            ..Default::default()
        });
        assert!(numerals(&[0x61, 0x62, 0x63], &config).starts_with("636261 "));
    }

    #[test]
    fn test_group_size_zero_has_no_delimiter() {
        let config = config(Options {
            bytes_per_group: Some(0),
            bytes_per_line: Some(2),
            ..Default::default()
        });
        assert_eq!("0102", numerals(&[0x01, 0x02], &config));
    }

    #[test]
    fn test_radix_coverage() {
        let base = Options {
            bytes_per_group: Some(1),
            bytes_per_line: Some(1),
            ..Default::default()
        };

        let config = config(Options {
            radix: Some(2),
            ..base.clone()
        });
        assert_eq!("00001111 ", numerals(&[0x0f], &config));

        let config = self::config(Options {
            radix: Some(8),
            ..base.clone()
        });
        assert_eq!("017 ", numerals(&[0x0f], &config));

        let config = self::config(Options {
            radix: Some(10),
            ..base
        });
        assert_eq!("015 ", numerals(&[0x0f], &config));
    }

    #[test]
    fn test_short_chunk_padding_keeps_column_width() {
        // 16 bytes per line, 2 per group: a full line occupies 40 columns.
        let config = config(Options::default());
        let full = numerals(&[0xab; 16], &config);
        let short = numerals(&[0xab; 5], &config);
        assert_eq!(40, full.len());
        assert_eq!(40, short.len());
    }

    #[test]
    fn test_padding_uses_entities_in_html_mode() {
        let config = config(Options {
            html: Some(true),
            bytes_per_line: Some(2),
            ..Default::default()
        });
        assert_eq!("01 &nbsp;&nbsp;", numerals(&[0x01], &config));
    }

    #[test]
    fn test_eight_byte_group_uses_full_value() {
        let config = config(Options {
            bytes_per_group: Some(8),
            bytes_per_line: Some(8),
            ..Default::default()
        });
        assert_eq!(
            "ffffffffffffffff ",
            numerals(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff], &config)
        );
    }

    #[test]
    fn test_raw_text_keeps_byte_order() {
        assert_eq!("ab\u{ff}", raw_text(&[0x61, 0x62, 0xff]));
    }
}
