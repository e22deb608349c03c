/// IP literal validation (the text between '[' and ']')
/// IPv6address / IPvFuture per RFC 3986 section 3.2.2
use crate::character_sets::{USERINFO, is_in};
use crate::compat::Vec;
use crate::error::{ParseError, Result};

/// Validate an IP literal without its brackets. The text is never rewritten.
///
/// # Errors
///
/// Returns `ParseError::InvalidIpLiteral` if the text is neither an IPv6
/// address nor an IPvFuture literal.
pub fn validate_ip_literal(literal: &str) -> Result<()> {
    match literal.as_bytes().first() {
        Some(b'v' | b'V') => validate_ipv_future(&literal[1..]),
        _ => parse_ipv6(literal).map(|_| ()),
    }
}

/// IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
fn validate_ipv_future(after_v: &str) -> Result<()> {
    let (version, address) = after_v
        .split_once('.')
        .ok_or(ParseError::InvalidIpLiteral)?;
    let version_ok = !version.is_empty() && version.bytes().all(|b| b.is_ascii_hexdigit());
    let address_ok = !address.is_empty() && address.bytes().all(|b| is_in(b, USERINFO));
    if version_ok && address_ok {
        Ok(())
    } else {
        Err(ParseError::InvalidIpLiteral)
    }
}

/// Parse an IPv6 address (e.g. "`::1`" or "`2001:db8::1`") into its 8 segments.
pub fn parse_ipv6(input: &str) -> Result<[u16; 8]> {
    // Embedded IPv4 (e.g., "::127.0.0.1")
    let has_embedded_ipv4 = input
        .rfind(':')
        .is_some_and(|pos| input[pos + 1..].contains('.'));

    if has_embedded_ipv4 {
        parse_ipv6_with_ipv4(input)
    } else {
        expand_segments(input, 8)
    }
}

/// Expand `h16` groups, with at most one "::", to exactly `width` segments.
fn expand_segments(input: &str, width: usize) -> Result<[u16; 8]> {
    let mut segments = [0u16; 8];

    let Some(double_colon_pos) = input.find("::") else {
        let parsed = parse_segments(input)?;
        if parsed.len() != width {
            return Err(ParseError::InvalidIpLiteral);
        }
        segments[..width].copy_from_slice(&parsed);
        return Ok(segments);
    };

    let before = parse_segments(&input[..double_colon_pos])?;
    let after = parse_segments(&input[double_colon_pos + 2..])?;

    // "::" stands for at least one zero group
    let total = before.len() + after.len();
    if total >= width {
        return Err(ParseError::InvalidIpLiteral);
    }

    segments[..before.len()].copy_from_slice(&before);
    let after_start = width - after.len();
    segments[after_start..width].copy_from_slice(&after);

    Ok(segments)
}

/// IPv6 ending in a dotted IPv4 (e.g. "`::ffff:192.168.1.1`").
fn parse_ipv6_with_ipv4(input: &str) -> Result<[u16; 8]> {
    let last_colon = input.rfind(':').ok_or(ParseError::InvalidIpLiteral)?;
    let ipv4 = parse_ipv4(&input[last_colon + 1..])?;

    // Keep the colon when it belongs to a trailing "::"
    let ipv6_part = if input[..=last_colon].ends_with("::") {
        &input[..=last_colon]
    } else {
        &input[..last_colon]
    };

    if ipv6_part.is_empty() {
        return Err(ParseError::InvalidIpLiteral);
    }
    let mut segments = expand_segments(ipv6_part, 6)?;
    segments[6] = (ipv4 >> 16) as u16;
    segments[7] = ipv4 as u16;

    Ok(segments)
}

/// h16 = 1*4HEXDIG
fn parse_hex_segment(s: &str) -> Result<u16> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidIpLiteral);
    }
    u16::from_str_radix(s, 16).map_err(|_| ParseError::InvalidIpLiteral)
}

/// Parse colon-separated hex segments from a string.
fn parse_segments(s: &str) -> Result<Vec<u16>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(':').map(parse_hex_segment).collect()
}

/// dec-octet "." dec-octet "." dec-octet "." dec-octet
fn parse_ipv4(s: &str) -> Result<u32> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(ParseError::InvalidIpLiteral);
    }

    parts.iter().try_fold(0u32, |acc, part| {
        let byte = parse_dec_octet(part)?;
        Ok((acc << 8) | u32::from(byte))
    })
}

/// 0-255 in decimal, no leading zeros, no sign
fn parse_dec_octet(part: &str) -> Result<u8> {
    let well_formed = matches!(part.len(), 1..=3)
        && part.bytes().all(|b| b.is_ascii_digit())
        && !(part.len() > 1 && part.starts_with('0'));
    if !well_formed {
        return Err(ParseError::InvalidIpLiteral);
    }
    part.parse().map_err(|_| ParseError::InvalidIpLiteral)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv6_full() {
        let result = parse_ipv6("2001:db8:0:0:0:0:0:1").unwrap();
        assert_eq!(result, [0x2001, 0xdb8, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_parse_ipv6_compressed() {
        assert_eq!(
            parse_ipv6("2001:db8::1").unwrap(),
            [0x2001, 0xdb8, 0, 0, 0, 0, 0, 1]
        );
        assert_eq!(parse_ipv6("::").unwrap(), [0; 8]);
        assert_eq!(parse_ipv6("::1").unwrap(), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(parse_ipv6("fe80::").unwrap(), [0xfe80, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_ipv6_with_ipv4() {
        let result = parse_ipv6("::127.0.0.1").unwrap();
        assert_eq!(result, [0, 0, 0, 0, 0, 0, 0x7f00, 0x0001]);

        let result = parse_ipv6("::ffff:192.168.1.1").unwrap();
        assert_eq!(result, [0, 0, 0, 0, 0, 0xffff, 0xc0a8, 0x0101]);

        let result = parse_ipv6("1:2:3:4:5:6:1.2.3.4").unwrap();
        assert_eq!(result, [1, 2, 3, 4, 5, 6, 0x0102, 0x0304]);
    }

    #[test]
    fn test_parse_ipv6_rejects() {
        for input in [
            "",
            ":",
            ":::",
            "1::2::3",
            "1:2:3:4:5:6:7",
            "1:2:3:4:5:6:7:8:9",
            "1:2:3:4:5:6:7::8",
            "12345::",
            "::g",
            "::1%eth0",
            "::1.2.3",
            "::256.1.1.1",
            "::01.1.1.1",
            "1.2.3.4",
        ] {
            assert_eq!(parse_ipv6(input), Err(ParseError::InvalidIpLiteral), "{input}");
        }
    }

    #[test]
    fn test_validate_ipv_future() {
        assert_eq!(validate_ip_literal("v1.fe80::a+en1"), Ok(()));
        assert_eq!(validate_ip_literal("VA.x"), Ok(()));
        assert!(validate_ip_literal("v.x").is_err());
        assert!(validate_ip_literal("v1.").is_err());
        assert!(validate_ip_literal("v1").is_err());
        assert!(validate_ip_literal("v1.a/b").is_err());
    }
}
