/// Grammar parser states
/// Based on the RFC 3986 `URI-reference` production
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Looking for a scheme terminated by ':'
    SchemeStart,
    /// After the scheme (or its absence): authority or path
    HierPart,
    /// Userinfo, host and port between "//" and the path
    Authority,
    /// Path segments
    Path,
    /// Query after '?'
    Query,
    /// Fragment after '#'
    Fragment,
}
