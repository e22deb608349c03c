use crate::character_sets::{SCHEME, is_in};
use crate::error::{ParseError, Result};
use crate::text_range::TextRange;

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub fn is_valid_scheme(scheme: &[u8]) -> bool {
    match scheme.split_first() {
        Some((first, rest)) => {
            first.is_ascii_alphabetic() && rest.iter().all(|&b| is_in(b, SCHEME))
        }
        None => false,
    }
}

/// Check every byte of a component against a class mask.
/// `%` is accepted only as the start of a percent-encoded triplet.
///
/// # Errors
///
/// `ParseError::InvalidPercentEncoding` for a broken triplet, `error` for any
/// other byte outside `mask`.
pub fn scan_component(bytes: &[u8], mask: u8, error: ParseError) -> Result<()> {
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    i += 3;
                }
                _ => return Err(ParseError::InvalidPercentEncoding),
            }
        } else if is_in(b, mask) {
            i += 1;
        } else {
            return Err(error);
        }
    }
    Ok(())
}

/// Decode a port range to u16.
///
/// Absent and empty ranges give 0. Otherwise the leading decimal digits are
/// read and anything after them is ignored, so non-numeric text also gives 0.
/// Values above `u16::MAX` wrap modulo 2^16.
pub fn decode_port(input: &str, range: TextRange) -> u16 {
    range.as_str(input).map_or(0, |text| {
        text.bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0u16, |port, digit| {
                port.wrapping_mul(10).wrapping_add(u16::from(digit - b'0'))
            })
    })
}
