//! Input/output character encoding resolution.
//!
//! The transformer works on decoded text; this module turns raw file bytes
//! into that text and back. The encoding is either named explicitly by the
//! caller or sniffed once from the raw content before decoding begins.

use anyhow::{anyhow, Result};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Sniff an encoding from raw file content.
///
/// BOM first, then a UTF-8 validity check over the whole buffer, then
/// windows-1252 as the byte-preserving fallback.
pub fn detect(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        WINDOWS_1252
    }
}

/// Resolve an encoding label supplied on the command line.
///
/// # Errors
///
/// Fails when the label is not in the WHATWG encoding registry.
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| anyhow!("unknown encoding label: {label}"))
}

/// Decode a whole buffer, removing a leading BOM that matches the encoding.
///
/// Returns the text and whether any malformed sequences were replaced.
pub fn decode(encoding: &'static Encoding, bytes: &[u8]) -> (String, bool) {
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    (text.into_owned(), had_errors)
}

/// Encode output text in the same encoding as the input.
pub fn encode(encoding: &'static Encoding, text: &str) -> Vec<u8> {
    let (bytes, _, _) = encoding.encode(text);
    bytes.into_owned()
}
