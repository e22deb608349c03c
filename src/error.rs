/// Errors that can occur while parsing or packing a URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Invalid scheme format
    InvalidScheme,
    /// Invalid character in userinfo
    InvalidUserinfo,
    /// Invalid character in registered name
    InvalidHost,
    /// Malformed IPv6 or IPvFuture literal
    InvalidIpLiteral,
    /// Port contains something other than digits
    InvalidPort,
    /// Invalid character in path
    InvalidPath,
    /// Invalid character in query
    InvalidQuery,
    /// Invalid character in fragment
    InvalidFragment,
    /// `%` not followed by two hex digits
    InvalidPercentEncoding,
    /// A range of a parse tree falls outside its input or inside a character
    InvalidRange,
    /// The record block could not be allocated
    OutOfMemory,
    /// The requested operation is not supported yet
    NotImplemented,
}

impl ParseError {
    /// True for failures caused by the input text rather than by the
    /// environment or by a missing feature.
    pub fn is_syntax_error(self) -> bool {
        !matches!(self, Self::OutOfMemory | Self::NotImplemented)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidUserinfo => "Invalid userinfo",
            Self::InvalidHost => "Invalid host",
            Self::InvalidIpLiteral => "Invalid IP literal",
            Self::InvalidPort => "Invalid port",
            Self::InvalidPath => "Invalid path",
            Self::InvalidQuery => "Invalid query",
            Self::InvalidFragment => "Invalid fragment",
            Self::InvalidPercentEncoding => "Invalid percent encoding",
            Self::InvalidRange => "Invalid range",
            Self::OutOfMemory => "Out of memory",
            Self::NotImplemented => "Not implemented",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URI operations
pub type Result<T> = core::result::Result<T, ParseError>;
