/// Browser family as reported by the User-Agent parser.
///
/// Chromium-derived browsers that advertise a `Chrome/N` token are reported as
/// [`BrowserFamily::Chrome`] with that version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrowserFamily {
    Chrome,
    Safari,
    Firefox,
    Edge,
    InternetExplorer,
    Opera,
    UCBrowser,
    #[default]
    Unknown,
}

impl BrowserFamily {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chrome" => Some(Self::Chrome),
            "safari" => Some(Self::Safari),
            "firefox" => Some(Self::Firefox),
            "edge" => Some(Self::Edge),
            "internet explorer" | "internetexplorer" | "ie" => Some(Self::InternetExplorer),
            "opera" => Some(Self::Opera),
            "uc browser" | "ucbrowser" => Some(Self::UCBrowser),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Safari => "safari",
            Self::Firefox => "firefox",
            Self::Edge => "edge",
            Self::InternetExplorer => "internet explorer",
            Self::Opera => "opera",
            Self::UCBrowser => "uc browser",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}
