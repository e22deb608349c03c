use crate::text_range::{Cursor, TextRange};
use crate::uri_components::Span;

/// Bytes needed for the joined path, including its nul terminator.
///
/// Each segment costs one '/' plus its text; an empty segment still costs
/// its '/'. No segments means no path at all.
pub fn path_size(segments: &[TextRange]) -> usize {
    if segments.is_empty() {
        return 0;
    }
    1 + segments.iter().map(|s| 1 + s.len()).sum::<usize>()
}

/// Copy the segments as `/seg1/seg2/...` followed by a single nul.
/// Returns `None` without writing when there are no segments.
pub fn copy_path(cursor: &mut Cursor<'_>, input: &str, segments: &[TextRange]) -> Option<Span> {
    if segments.is_empty() {
        return None;
    }

    let start = cursor.position();
    for segment in segments {
        cursor.put(b'/');
        if let Some(text) = segment.as_str(input) {
            cursor.put_slice(text.as_bytes());
        }
    }
    let span = Span::new(start, cursor.position());
    cursor.put(0);
    Some(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Vec;

    fn join(input: &str, segments: &[TextRange]) -> (Option<Span>, Vec<u8>) {
        let mut block = alloc_block(path_size(segments));
        let span = {
            let mut cursor = Cursor::new(&mut block);
            let span = copy_path(&mut cursor, input, segments);
            assert_eq!(cursor.position(), path_size(segments));
            span
        };
        (span, block)
    }

    fn alloc_block(size: usize) -> Vec<u8> {
        let mut block = Vec::new();
        block.resize(size, 0xAA);
        block
    }

    #[test]
    fn test_join_segments() {
        let input = "a/b/c";
        let segments = [
            TextRange::new(0, 1),
            TextRange::new(2, 3),
            TextRange::new(4, 5),
        ];
        let (span, block) = join(input, &segments);
        assert_eq!(span, Some(Span::new(0, 6)));
        assert_eq!(block, b"/a/b/c\0");
    }

    #[test]
    fn test_single_empty_segment() {
        let (span, block) = join("", &[TextRange::new(0, 0)]);
        assert_eq!(span, Some(Span::new(0, 1)));
        assert_eq!(block, b"/\0");
    }

    #[test]
    fn test_empty_segments_keep_their_slash() {
        let input = "a//b/";
        let segments = [
            TextRange::new(0, 1),
            TextRange::new(2, 2),
            TextRange::new(3, 4),
            TextRange::new(5, 5),
        ];
        let (_, block) = join(input, &segments);
        assert_eq!(block, b"/a//b/\0");
    }

    #[test]
    fn test_no_segments() {
        assert_eq!(path_size(&[]), 0);
        let mut block = [0u8; 0];
        let mut cursor = Cursor::new(&mut block);
        assert_eq!(copy_path(&mut cursor, "", &[]), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_path_size_matches_range_sizes_for_non_empty_segments() {
        let segments = [TextRange::new(0, 3), TextRange::new(4, 9)];
        let by_ranges: usize = 1 + segments.iter().map(|s| s.size_needed()).sum::<usize>();
        assert_eq!(path_size(&segments), by_ranges);
    }
}
