use super::{BrowserFamily, OsFamily, Version};

/// The four facts about a client that the SameSite rules look at.
///
/// Anything the parser could not recognise is `Unknown` (families) or `None`
/// (versions); neither ever satisfies a family- or version-specific rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClientIdentity {
    pub browser: BrowserFamily,
    pub browser_version: Option<Version>,
    pub os: OsFamily,
    pub os_version: Option<Version>,
}

impl ClientIdentity {
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn new(
        browser: BrowserFamily,
        browser_version: Option<Version>,
        os: OsFamily,
        os_version: Option<Version>,
    ) -> Self {
        Self {
            browser,
            browser_version,
            os,
            os_version,
        }
    }

    pub fn is_unknown(&self) -> bool {
        !self.browser.is_known() && !self.os.is_known()
    }
}
