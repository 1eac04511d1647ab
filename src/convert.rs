use crate::emoji::EMOJI_MAP;
use crate::error::Result;

/// Convert emoji short codes in the given text to their Unicode equivalents
///
/// Scans the text and replaces every occurrence of a short code (e.g.
/// `:smile:`) with the corresponding emoji from the table. Short codes that
/// are not recognized are left untouched.
pub fn convert(text: &str) -> String {
    let mut converted = text.to_string();
    for (code, emoji) in EMOJI_MAP {
        converted = converted.replace(code, emoji);
    }
    converted
}

/// Convert raw bytes that are expected to contain text
///
/// This is the boundary for callers holding untyped input. Bytes that are
/// not valid UTF-8 are rejected with an invalid-input error instead of
/// being converted.
pub fn convert_bytes(input: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(input)?;
    Ok(convert(text))
}
