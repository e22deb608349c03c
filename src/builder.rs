/// Packs a parse tree into a single record block, sized before anything is
/// allocated and filled at increasing offsets in one pass.
use crate::checkers::decode_port;
use crate::compat::Vec;
use crate::error::{ParseError, Result};
use crate::parser::ParsedUri;
use crate::path::{copy_path, path_size};
use crate::text_range::Cursor;
use crate::uri::Uri;
use crate::uri_components::UriComponents;

/// Reserved for splitting userinfo on ':'; always part of the block.
pub const USERINFO_SPLIT_RESERVE: usize = 1;

/// Planned byte counts for each region of a record block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub scheme: usize,
    pub user_info: usize,
    pub host: usize,
    pub path: usize,
    pub query: usize,
    pub fragment: usize,
}

impl BlockLayout {
    pub fn plan(parsed: &ParsedUri<'_>) -> Self {
        Self {
            scheme: parsed.scheme.size_needed(),
            user_info: parsed.user_info.size_needed() + USERINFO_SPLIT_RESERVE,
            host: parsed.host_text.size_needed(),
            path: path_size(&parsed.path_segments),
            query: parsed.query.size_needed(),
            fragment: parsed.fragment.size_needed(),
        }
    }

    /// Exact size of the block
    pub fn total(&self) -> usize {
        self.scheme + self.user_info + self.host + self.path + self.query + self.fragment
    }
}

/// Build an immutable record from a successful parse.
///
/// Exactly one allocation is made; on failure nothing has been allocated and
/// nothing needs releasing.
///
/// # Errors
///
/// Returns `ParseError::InvalidRange` if a range of `parsed` does not lie on
/// character boundaries inside its input, or `ParseError::OutOfMemory` if the
/// block cannot be allocated.
pub fn build(parsed: &ParsedUri<'_>) -> Result<Uri> {
    parsed.check_ranges()?;
    let total = BlockLayout::plan(parsed).total();
    log::trace!("packing {:?} into a {total}-byte block", parsed.input);

    let mut block: Vec<u8> = Vec::new();
    block
        .try_reserve_exact(total)
        .map_err(|_| ParseError::OutOfMemory)?;
    block.resize(total, 0);

    let (components, written) = pack(parsed, &mut block);
    debug_assert!(written + USERINFO_SPLIT_RESERVE <= total);

    Ok(Uri::from_block(block.into_boxed_slice(), components))
}

/// Copy every component of `parsed` into `block` in record order.
/// Returns the header and the number of bytes written.
fn pack(parsed: &ParsedUri<'_>, block: &mut [u8]) -> (UriComponents, usize) {
    let input = parsed.input;
    let mut components = UriComponents::new();
    let mut cursor = Cursor::new(block);

    components.scheme = cursor.copy_range(input, parsed.scheme);
    let (user, pass) = parsed.user_info.split_once(input, b':');
    components.user = cursor.copy_range(input, user);
    components.pass = cursor.copy_range(input, pass);
    components.host = cursor.copy_range(input, parsed.host_text);
    components.port = decode_port(input, parsed.port_text);
    components.path = copy_path(&mut cursor, input, &parsed.path_segments);
    components.query = cursor.copy_range(input, parsed.query);
    components.fragment = cursor.copy_range(input, parsed.fragment);

    (components, cursor.position())
}
