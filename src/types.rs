/// String components of a URI record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Scheme,
    User,
    Pass,
    Host,
    Path,
    Query,
    Fragment,
}

impl Component {
    /// Every string component, in record layout order
    pub const ALL: [Self; 7] = [
        Self::Scheme,
        Self::User,
        Self::Pass,
        Self::Host,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::User => "user",
            Self::Pass => "pass",
            Self::Host => "host",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl core::fmt::Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
