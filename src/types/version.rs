use std::fmt;

/// A `major.minor.patch` version triple.
///
/// Ordering is lexicographic over the three numeric components, so
/// `12.9.0 < 12.13.2` even though the strings would compare the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted (or underscored, as in `Mac OS X 10_14_5`) version.
    ///
    /// Missing minor/patch components are 0. Parsing stops at the first
    /// component that is not a plain number. Returns `None` when there is no
    /// numeric major component at all, or it does not fit a `u32`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().split(['.', '_']).map(parse_component);

        let major = parts.next().flatten()?;
        let mut rest = parts.map_while(|p| p);
        let minor = rest.next().unwrap_or(0);
        let patch = rest.next().unwrap_or(0);

        Some(Self::new(major, minor, patch))
    }
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
