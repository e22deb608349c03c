use crate::uri_components::Span;

/// A range of the parsed input, `[first, after_last)`.
///
/// A range without a start is absent. Absent and zero-length ranges both
/// produce an absent record field: an empty query is indistinguishable from
/// a missing one once the record is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRange {
    first: Option<usize>,
    after_last: usize,
}

impl TextRange {
    pub const ABSENT: Self = Self {
        first: None,
        after_last: 0,
    };

    pub fn new(first: usize, after_last: usize) -> Self {
        debug_assert!(first <= after_last);
        Self {
            first: Some(first),
            after_last,
        }
    }

    pub fn is_absent(self) -> bool {
        self.first.is_none()
    }

    /// Number of raw bytes covered (0 when absent)
    pub fn len(self) -> usize {
        match self.first {
            Some(first) => self.after_last.saturating_sub(first),
            None => 0,
        }
    }

    /// True when absent or zero-length
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Bytes needed for a standalone nul-terminated copy, 0 if the copy
    /// would be an absent field
    pub fn size_needed(self) -> usize {
        match self.len() {
            0 => 0,
            len => len + 1,
        }
    }

    /// True when the range is absent or lies on character boundaries
    /// inside `input`
    pub fn fits(self, input: &str) -> bool {
        match self.first {
            Some(first) => first <= self.after_last && input.get(first..self.after_last).is_some(),
            None => true,
        }
    }

    /// Text covered by the range, `None` when absent or empty
    pub fn as_str(self, input: &str) -> Option<&str> {
        match self.first {
            Some(first) if first < self.after_last => input.get(first..self.after_last),
            _ => None,
        }
    }

    /// Split at the first `separator`: text before it and text after it.
    /// Without a separator the whole range is returned with an absent tail.
    pub fn split_once(self, input: &str, separator: u8) -> (Self, Self) {
        let Some(first) = self.first else {
            return (Self::ABSENT, Self::ABSENT);
        };
        let Some(bytes) = input.as_bytes().get(first..self.after_last) else {
            return (Self::ABSENT, Self::ABSENT);
        };
        match memchr::memchr(separator, bytes) {
            Some(pos) => (
                Self::new(first, first + pos),
                Self::new(first + pos + 1, self.after_last),
            ),
            None => (self, Self::ABSENT),
        }
    }
}

/// Write position inside a record block.
///
/// The caller sizes the block from `TextRange::size_needed` (and
/// `path::path_size`) before any write. Writing past the end panics.
pub struct Cursor<'b> {
    block: &'b mut [u8],
    pos: usize,
}

impl<'b> Cursor<'b> {
    pub fn new(block: &'b mut [u8]) -> Self {
        Self { block, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn put(&mut self, byte: u8) {
        self.block[self.pos] = byte;
        self.pos += 1;
    }

    pub fn put_slice(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.block[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    /// Copy a range followed by a nul terminator.
    /// Returns the span of the copy (nul excluded), or `None` without
    /// advancing when the range is absent or empty.
    pub fn copy_range(&mut self, input: &str, range: TextRange) -> Option<Span> {
        let text = range.as_str(input)?;
        let start = self.pos;
        self.put_slice(text.as_bytes());
        let span = Span::new(start, self.pos);
        self.put(0);
        Some(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_needed() {
        assert_eq!(TextRange::ABSENT.size_needed(), 0);
        assert_eq!(TextRange::new(3, 3).size_needed(), 0);
        assert_eq!(TextRange::new(0, 4).size_needed(), 5);
    }

    #[test]
    fn test_absent_versus_empty() {
        let empty = TextRange::new(2, 2);
        assert!(!empty.is_absent());
        assert!(empty.is_empty());
        assert!(TextRange::ABSENT.is_absent());
        assert_eq!(empty.as_str("abcd"), None);
        assert_eq!(TextRange::ABSENT.as_str("abcd"), None);
    }

    #[test]
    fn test_copy_range() {
        let input = "http://host";
        let mut block = [0xAAu8; 10];
        let mut cursor = Cursor::new(&mut block);

        let scheme = cursor.copy_range(input, TextRange::new(0, 4));
        assert_eq!(scheme, Some(Span::new(0, 4)));
        assert_eq!(cursor.position(), 5);

        assert_eq!(cursor.copy_range(input, TextRange::ABSENT), None);
        assert_eq!(cursor.copy_range(input, TextRange::new(7, 7)), None);
        assert_eq!(cursor.position(), 5);

        let host = cursor.copy_range(input, TextRange::new(7, 11));
        assert_eq!(host, Some(Span::new(5, 9)));
        assert_eq!(cursor.position(), 10);
        assert_eq!(&block, b"http\0host\0");
    }

    #[test]
    fn test_fits() {
        let input = "h\u{e9}";
        assert!(TextRange::ABSENT.fits(input));
        assert!(TextRange::new(0, 3).fits(input));
        assert!(TextRange::new(3, 3).fits(input));
        assert!(!TextRange::new(0, 2).fits(input));
        assert!(!TextRange::new(1, 9).fits(input));
    }

    #[test]
    fn test_split_once() {
        let input = "user:pa:ss";
        let whole = TextRange::new(0, input.len());
        let (user, pass) = whole.split_once(input, b':');
        assert_eq!(user.as_str(input), Some("user"));
        assert_eq!(pass.as_str(input), Some("pa:ss"));

        let (user, pass) = TextRange::new(0, 4).split_once(input, b':');
        assert_eq!(user.as_str(input), Some("user"));
        assert!(pass.is_absent());

        let (user, pass) = TextRange::ABSENT.split_once(input, b':');
        assert!(user.is_absent() && pass.is_absent());
    }
}
