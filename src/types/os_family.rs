/// Operating system family as reported by the User-Agent parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OsFamily {
    IOS,
    MacOS,
    Android,
    Windows,
    ChromeOS,
    Linux,
    #[default]
    Unknown,
}

impl OsFamily {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ios" => Some(Self::IOS),
            "macos" | "mac os x" | "mac" => Some(Self::MacOS),
            "android" => Some(Self::Android),
            "windows" => Some(Self::Windows),
            "chrome os" | "chromeos" => Some(Self::ChromeOS),
            "linux" | "gnu/linux" => Some(Self::Linux),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IOS => "ios",
            Self::MacOS => "macos",
            Self::Android => "android",
            Self::Windows => "windows",
            Self::ChromeOS => "chrome os",
            Self::Linux => "linux",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}
