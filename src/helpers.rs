/// Find the ':' that ends a scheme.
/// Only a colon that appears before any '/', '?' or '#' can end a scheme.
pub fn find_scheme_end(bytes: &[u8]) -> Option<usize> {
    let stop = memchr::memchr3(b'/', b'?', b'#', bytes).unwrap_or(bytes.len());
    memchr::memchr(b':', &bytes[..stop])
}

/// End of the authority that starts at `start` (exclusive)
pub fn find_authority_end(bytes: &[u8], start: usize) -> usize {
    memchr::memchr3(b'/', b'?', b'#', &bytes[start..]).map_or(bytes.len(), |pos| start + pos)
}

/// End of the path that starts at `start` (exclusive)
pub fn find_path_end(bytes: &[u8], start: usize) -> usize {
    memchr::memchr2(b'?', b'#', &bytes[start..]).map_or(bytes.len(), |pos| start + pos)
}

/// End of the query that starts at `start` (exclusive)
pub fn find_query_end(bytes: &[u8], start: usize) -> usize {
    memchr::memchr(b'#', &bytes[start..]).map_or(bytes.len(), |pos| start + pos)
}
