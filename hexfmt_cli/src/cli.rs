use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hexfmt_lib::{render, Options};

use crate::input::read_source;
use crate::AppResult;

/// Hex dump files, standard input or hex strings.
///
/// Renders fixed-width dump lines with an address column, grouped numerals
/// in a configurable radix and an ASCII annotation column. Option values
/// outside the accepted sets are silently replaced by their defaults.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Input file location ("-" or absent to read from standard input)
    pub filepath: Option<PathBuf>,

    /// Take the input bytes from a hex string instead of a file
    #[arg(long, conflicts_with = "filepath")]
    pub bytes: Option<String>,

    /// Load a YAML options record before applying the flags below
    #[arg(long = "options")]
    pub options_file: Option<PathBuf>,

    /// Bytes rendered per line
    #[arg(short, long)]
    pub width: Option<i64>,

    /// Bytes combined into one numeral: 0, 1, 2, 4 or 8
    #[arg(short, long)]
    pub group: Option<i64>,

    /// Numeral base: 2, 8, 10 or 16
    #[arg(short, long)]
    pub radix: Option<i64>,

    /// Combine the bytes of a group least-significant first
    #[arg(short = 'e', long)]
    pub little_endian: bool,

    /// Render hexadecimal digits in upper case
    #[arg(short = 'u', long)]
    pub upper: bool,

    /// Suppress the leading address column
    #[arg(long)]
    pub no_address: bool,

    /// Suppress the trailing ASCII column
    #[arg(long)]
    pub no_ascii: bool,

    /// Render characters beyond printable ASCII instead of '.'
    #[arg(long)]
    pub extended: bool,

    /// Hypertext output: wrapper elements and entity escaping
    #[arg(long)]
    pub html: bool,

    /// String prepended to every line
    #[arg(long)]
    pub prefix: Option<String>,

    /// Number of spaces prepended before the prefix
    #[arg(long)]
    pub indent: Option<i64>,

    /// Skip this many leading bytes of the input (negative: from the end)
    #[arg(short = 's', long, allow_hyphen_values = true)]
    pub seek: Option<i64>,

    /// Render at most this many bytes, -1 for all remaining
    #[arg(short = 'l', long, allow_hyphen_values = true)]
    pub length: Option<i64>,

    /// Add this value to every displayed address
    #[arg(long, allow_hyphen_values = true)]
    pub display_offset: Option<i64>,
}

impl CommandLineArguments {
    /// Merge the flags over `base`, a flag winning over the record field it
    /// maps to whenever it was given on the command line.
    pub fn merge_options(&self, base: Options) -> Options {
        let mut options = base;

        if self.width.is_some() {
            options.bytes_per_line = self.width;
        }
        if self.group.is_some() {
            options.bytes_per_group = self.group;
        }
        if self.radix.is_some() {
            options.radix = self.radix;
        }
        if self.little_endian {
            options.little_endian = Some(true);
        }
        if self.upper {
            options.caps = Some("upper".to_string());
        }
        if self.no_address {
            options.show_address = Some(false);
        }
        if self.no_ascii {
            options.annotate = Some("none".to_string());
        }
        if self.extended {
            options.extended_chars = Some(true);
        }
        if self.html {
            options.html = Some(true);
        }
        if self.prefix.is_some() {
            options.prefix = self.prefix.clone();
        }
        if self.indent.is_some() {
            options.indent = self.indent;
        }
        if self.seek.is_some() {
            options.offset = self.seek;
        }
        if self.length.is_some() {
            options.length = self.length;
        }
        if self.display_offset.is_some() {
            options.display_offset = self.display_offset;
        }

        options
    }
}

/// Acquire the input bytes, resolve the options and write the dump.
pub fn run<W: Write>(arguments: &CommandLineArguments, output: &mut W) -> AppResult<()> {
    let base = match &arguments.options_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read options file {}", path.display()))?;
            serde_yaml::from_str(&text)
                .with_context(|| format!("could not parse options file {}", path.display()))?
        }
        None => Options::default(),
    };
    let options = arguments.merge_options(base);
    let source = read_source(arguments)?;

    output.write_all(render(source, &options).as_bytes())?;

    Ok(())
}
