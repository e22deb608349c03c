use crate::compat::Cow;

/// Percent-decode a component, replacing invalid UTF-8 sequences
pub fn decode(input: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(input).decode_utf8_lossy()
}
