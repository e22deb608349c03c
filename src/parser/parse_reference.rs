use super::{ParsedUri, State};
use crate::character_sets::{PATH, QUERY, REG_NAME, USERINFO};
use crate::checkers::{is_valid_scheme, scan_component};
use crate::error::{ParseError, Result};
use crate::helpers::{find_authority_end, find_path_end, find_query_end, find_scheme_end};
use crate::ipv6::validate_ip_literal;
use crate::text_range::TextRange;

/// Parse an RFC 3986 `URI-reference` into text ranges.
///
/// Nothing is normalized or decoded: every range points at the bytes exactly
/// as they appear in `input`. Both absolute URIs and relative references are
/// accepted; the empty string is a valid reference with every component
/// absent.
///
/// # Errors
///
/// Returns the grammar error for the first component that fails to match.
pub fn parse_uri_reference(input: &str) -> Result<ParsedUri<'_>> {
    let bytes = input.as_bytes();
    let mut parsed = ParsedUri::new(input);
    let mut state = State::SchemeStart;
    let mut pointer = 0;

    loop {
        match state {
            State::SchemeStart => {
                if let Some(colon) = find_scheme_end(bytes) {
                    // A relative reference may not carry ':' in its first
                    // segment, so anything before the colon must be a scheme.
                    if !is_valid_scheme(&bytes[..colon]) {
                        return Err(ParseError::InvalidScheme);
                    }
                    parsed.scheme = TextRange::new(0, colon);
                    pointer = colon + 1;
                }
                state = State::HierPart;
            }
            State::HierPart => {
                if bytes[pointer..].starts_with(b"//") {
                    pointer += 2;
                    state = State::Authority;
                } else {
                    state = State::Path;
                }
            }
            State::Authority => {
                let end = find_authority_end(bytes, pointer);
                parse_authority(&mut parsed, pointer, end)?;
                pointer = end;
                state = State::Path;
            }
            State::Path => {
                let end = find_path_end(bytes, pointer);
                parse_path(&mut parsed, pointer, end)?;
                pointer = end;
                match bytes.get(pointer) {
                    Some(b'?') => state = State::Query,
                    Some(b'#') => state = State::Fragment,
                    _ => break,
                }
            }
            State::Query => {
                let start = pointer + 1;
                let end = find_query_end(bytes, start);
                scan_component(&bytes[start..end], QUERY, ParseError::InvalidQuery)?;
                parsed.query = TextRange::new(start, end);
                pointer = end;
                if pointer < bytes.len() {
                    state = State::Fragment;
                } else {
                    break;
                }
            }
            State::Fragment => {
                let start = pointer + 1;
                scan_component(&bytes[start..], QUERY, ParseError::InvalidFragment)?;
                parsed.fragment = TextRange::new(start, bytes.len());
                break;
            }
        }
    }

    Ok(parsed)
}

/// authority = [ userinfo "@" ] host [ ":" port ]
fn parse_authority(parsed: &mut ParsedUri<'_>, start: usize, end: usize) -> Result<()> {
    let input = parsed.input;
    let bytes = input.as_bytes();
    let mut host_start = start;

    if let Some(at) = memchr::memchr(b'@', &bytes[start..end]) {
        scan_component(
            &bytes[start..start + at],
            USERINFO,
            ParseError::InvalidUserinfo,
        )?;
        parsed.user_info = TextRange::new(start, start + at);
        host_start = start + at + 1;
    }

    let host_end = if bytes.get(host_start) == Some(&b'[') {
        let close = memchr::memchr(b']', &bytes[host_start..end])
            .map(|offset| host_start + offset)
            .ok_or(ParseError::InvalidIpLiteral)?;
        validate_ip_literal(&input[host_start + 1..close])?;
        parsed.host_text = TextRange::new(host_start + 1, close);
        let after = close + 1;
        if after < end && bytes[after] != b':' {
            return Err(ParseError::InvalidHost);
        }
        after
    } else {
        let host_end = memchr::memchr(b':', &bytes[host_start..end])
            .map_or(end, |offset| host_start + offset);
        scan_component(
            &bytes[host_start..host_end],
            REG_NAME,
            ParseError::InvalidHost,
        )?;
        parsed.host_text = TextRange::new(host_start, host_end);
        host_end
    };

    if host_end < end {
        // bytes[host_end] is ':'
        let port_start = host_end + 1;
        if !bytes[port_start..end].iter().all(u8::is_ascii_digit) {
            return Err(ParseError::InvalidPort);
        }
        parsed.port_text = TextRange::new(port_start, end);
    }

    Ok(())
}

/// Split `[start, end)` into '/'-separated segment ranges
fn parse_path(parsed: &mut ParsedUri<'_>, start: usize, end: usize) -> Result<()> {
    let bytes = parsed.input.as_bytes();
    if start == end {
        return Ok(());
    }
    scan_component(&bytes[start..end], PATH, ParseError::InvalidPath)?;

    let mut segment_start = start;
    if bytes[start] == b'/' {
        parsed.absolute_path = true;
        segment_start += 1;
    }

    let base = segment_start;
    for slash in memchr::memchr_iter(b'/', &bytes[base..end]) {
        let segment_end = base + slash;
        parsed
            .path_segments
            .push(TextRange::new(segment_start, segment_end));
        segment_start = segment_end + 1;
    }
    parsed.path_segments.push(TextRange::new(segment_start, end));

    Ok(())
}
