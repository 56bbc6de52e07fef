use super::types::*;

/// One predicate of an [`IncompatibilityRule`].
///
/// Family conditions never hold for `Unknown`, and version conditions never
/// hold when the version is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Browser(BrowserFamily),
    Os(OsFamily),
    /// Browser major version within `min..=max`.
    BrowserMajorWithin { min: u32, max: u32 },
    /// Browser version strictly below the given version.
    BrowserBelow(Version),
    OsMajor(u32),
    OsMajorMinor(u32, u32),
}

impl Condition {
    pub fn holds(&self, identity: &ClientIdentity) -> bool {
        match *self {
            Self::Browser(family) => family.is_known() && identity.browser == family,
            Self::Os(family) => family.is_known() && identity.os == family,
            Self::BrowserMajorWithin { min, max } => identity
                .browser_version
                .is_some_and(|v| (min..=max).contains(&v.major)),
            Self::BrowserBelow(bound) => identity.browser_version.is_some_and(|v| v < bound),
            Self::OsMajor(major) => identity.os_version.is_some_and(|v| v.major == major),
            Self::OsMajorMinor(major, minor) => identity
                .os_version
                .is_some_and(|v| v.major == major && v.minor == minor),
        }
    }
}

/// A known browser/OS combination that mishandles `SameSite=None`.
/// Matches when every condition holds.
#[derive(Debug)]
pub struct IncompatibilityRule {
    pub name: &'static str,
    pub conditions: &'static [Condition],
}

impl IncompatibilityRule {
    pub fn matches(&self, identity: &ClientIdentity) -> bool {
        self.conditions.iter().all(|c| c.holds(identity))
    }
}

/// Clients known to reject or misread `SameSite=None`, see
/// <https://www.chromium.org/updates/same-site/incompatible-clients>.
///
/// The rules are disjoint. Should a later addition overlap an existing rule,
/// the earlier entry is the one reported by [`incompatibility`].
pub static INCOMPATIBLE_CLIENTS: &[IncompatibilityRule] = &[
    // Chrome 51 to 66 reject the cookie outright. Chromium derivatives and
    // Android WebView report the same Chrome major.
    IncompatibilityRule {
        name: "chrome-51-66",
        conditions: &[
            Condition::Browser(BrowserFamily::Chrome),
            Condition::BrowserMajorWithin { min: 51, max: 66 },
        ],
    },
    // The iOS 12 cookie jar treats None as Strict, whatever the browser.
    IncompatibilityRule {
        name: "ios-12",
        conditions: &[Condition::Os(OsFamily::IOS), Condition::OsMajor(12)],
    },
    // Same bug on macOS 10.14, but only in Safari's network stack.
    IncompatibilityRule {
        name: "macos-10.14-safari",
        conditions: &[
            Condition::Os(OsFamily::MacOS),
            Condition::OsMajorMinor(10, 14),
            Condition::Browser(BrowserFamily::Safari),
        ],
    },
    IncompatibilityRule {
        name: "android-ucbrowser-before-12.13.2",
        conditions: &[
            Condition::Os(OsFamily::Android),
            Condition::Browser(BrowserFamily::UCBrowser),
            Condition::BrowserBelow(Version::new(12, 13, 2)),
        ],
    },
];

/// First rule in [`INCOMPATIBLE_CLIENTS`] matching `identity`, if any.
pub fn incompatibility(identity: &ClientIdentity) -> Option<&'static IncompatibilityRule> {
    INCOMPATIBLE_CLIENTS.iter().find(|rule| rule.matches(identity))
}

/// Decide whether a client should be sent `SameSite=None`.
///
/// Total and pure: unknown or partially known clients get
/// [`CookieAttributeDecision::EmitNone`] unless a rule explicitly matches.
pub fn classify(identity: &ClientIdentity) -> CookieAttributeDecision {
    let rule = incompatibility(identity);
    let decision = match rule {
        Some(_) => CookieAttributeDecision::Omit,
        None => CookieAttributeDecision::EmitNone,
    };
    tracing::trace!(
        rule = rule.map(|r| r.name),
        browser = identity.browser.as_str(),
        os = identity.os.as_str(),
        unrecognised = identity.is_unknown(),
        decision = decision.as_str(),
        "classified client for SameSite=None"
    );
    decision
}
