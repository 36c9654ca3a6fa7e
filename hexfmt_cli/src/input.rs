use std::fs;
use std::io::Read;

use anyhow::Context;
use hexfmt_lib::Source;

use crate::cli::CommandLineArguments;
use crate::AppResult;

/// Acquire the bytes to dump: a hex string argument, a file, or standard
/// input when no file is given (or the file is "-").
pub fn read_source(arguments: &CommandLineArguments) -> AppResult<Source> {
    if let Some(text) = &arguments.bytes {
        return Ok(Source::Bytes(decode_hex_argument(text)?));
    }

    match &arguments.filepath {
        Some(path) if path.as_os_str() != "-" => {
            let bytes =
                fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
            Ok(Source::Bytes(bytes))
        }
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("could not read standard input")?;
            Ok(Source::Bytes(bytes))
        }
    }
}

/// Whitespace in the argument is tolerated so byte runs can be spelled in
/// readable chunks ("6162 63").
fn decode_hex_argument(text: &str) -> AppResult<Vec<u8>> {
    let compact: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();

    hex::decode(&compact).with_context(|| format!("could not decode hex string {text:?}"))
}
