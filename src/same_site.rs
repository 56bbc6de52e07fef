use std::sync::OnceLock;

use super::classifier::classify;
use super::types::{ClientIdentity, CookieAttributeDecision};
use super::user_agent_parser::{ParseUserAgent, UserAgentParser};

/// Pairs a User-Agent parser with the SameSite rule table.
pub struct SameSiteClassifier<P> {
    parser: P,
}

impl<P: ParseUserAgent> SameSiteClassifier<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn identify(&self, user_agent: &str) -> ClientIdentity {
        self.parser.parse_identity(user_agent)
    }

    /// Decide the `SameSite` attribute for a response to `user_agent`.
    pub fn classify_user_agent(&self, user_agent: &str) -> CookieAttributeDecision {
        classify(&self.identify(user_agent))
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }
}

// Global parser built from the bundled tables on first use. `None` when they
// failed to build, in which case every client is unknown.
static DEFAULT_PARSER: OnceLock<Option<UserAgentParser>> = OnceLock::new();

fn default_parser() -> Option<&'static UserAgentParser> {
    DEFAULT_PARSER
        .get_or_init(|| match UserAgentParser::embedded() {
            Ok(parser) => Some(parser),
            Err(err) => {
                tracing::error!(error = %err, "failed to build bundled user agent parser");
                None
            }
        })
        .as_ref()
}

/// `SameSite=None` decision for a raw `User-Agent` header value, using the
/// bundled signature tables.
///
/// ```
/// use samesite_compat::{same_site_none, CookieAttributeDecision};
///
/// let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
///           (KHTML, like Gecko) Chrome/66.0.3359.181 Safari/537.36";
/// assert_eq!(same_site_none(ua), CookieAttributeDecision::Omit);
/// assert_eq!(same_site_none(ua).same_site_value(), None);
/// ```
pub fn same_site_none(user_agent: &str) -> CookieAttributeDecision {
    let identity = match default_parser() {
        Some(parser) => parser.parse(user_agent),
        None => ClientIdentity::unknown(),
    };
    classify(&identity)
}
