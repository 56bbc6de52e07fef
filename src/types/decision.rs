/// What to do with the `SameSite` attribute of a cross-site cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookieAttributeDecision {
    /// Leave `SameSite` off; the client mishandles `SameSite=None`.
    Omit,
    /// Send `SameSite=None` (together with `Secure`).
    EmitNone,
}

impl CookieAttributeDecision {
    /// Value for the `SameSite` cookie attribute, if one should be written.
    pub fn same_site_value(&self) -> Option<&'static str> {
        match self {
            Self::Omit => None,
            Self::EmitNone => Some("None"),
        }
    }

    pub fn is_emit_none(&self) -> bool {
        *self == Self::EmitNone
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Omit => "omit",
            Self::EmitNone => "none",
        }
    }
}
