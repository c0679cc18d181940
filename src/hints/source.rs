//! Loading and decoding of the hint source.

use std::fs;
use std::io::Read;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::{debug, info};

use super::types::error::{HintsError, Result};

/// Read the source at `path` (`-` for stdin) and decode it to text.
pub fn load(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = if path == Path::new("-") {
        info!("Reading hints from stdin");
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        info!("Reading hints from {}", path.display());
        fs::read(path)?
    };
    decode(&bytes)
}

/// Decode source bytes.
///
/// A byte order mark selects UTF-8, UTF-16LE or UTF-16BE and is stripped;
/// without one the input is UTF-8. Malformed sequences are an error rather
/// than being replaced.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((UTF_8, 0));
    debug!("Decoding {} bytes as {} (BOM: {} bytes)", bytes.len(), encoding.name(), bom_len);
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(|text| text.into_owned())
        .ok_or(HintsError::Decode {
            encoding: encoding.name(),
        })
}
