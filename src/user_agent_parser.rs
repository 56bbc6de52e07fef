use std::path::Path;
use std::sync::Arc;

use super::db;
use super::error::{Error, Result};
use super::parser::CompiledParser;
use super::parser_data::SignatureData;
use super::substitution::substitute;
use super::types::*;

/// Maximum length of a User-Agent string that we take into consideration.
/// In-app browsers append long app tokens, so real user agents can pass
/// 512 bytes; anything past this is treated as padding.
const MAX_UA_LENGTH: usize = 2048;

/// Turns a raw `User-Agent` header value into a [`ClientIdentity`].
///
/// Implementations must be total: malformed or hostile input yields
/// [`ClientIdentity::unknown`] fields, never a panic.
pub trait ParseUserAgent {
    fn parse_identity(&self, user_agent: &str) -> ClientIdentity;
}

impl<T: ParseUserAgent + ?Sized> ParseUserAgent for &T {
    fn parse_identity(&self, user_agent: &str) -> ClientIdentity {
        (**self).parse_identity(user_agent)
    }
}

impl<T: ParseUserAgent + ?Sized> ParseUserAgent for Arc<T> {
    fn parse_identity(&self, user_agent: &str) -> ClientIdentity {
        (**self).parse_identity(user_agent)
    }
}

/// Signature-table based User-Agent parser.
///
/// Recognises only what the SameSite rules need: browser family and version,
/// OS family and version.
pub struct UserAgentParser {
    browser_parser: CompiledParser<SignatureData<BrowserFamily>>,
    os_parser: CompiledParser<SignatureData<OsFamily>>,
}

impl UserAgentParser {
    /// Build from the signature tables bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(db::EMBEDDED_BROWSERS, db::EMBEDDED_OSS)
    }

    /// Load `browsers.yml` and `oss.yml` from `dir` and build the parser.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let browsers = std::fs::read_to_string(dir.join("browsers.yml"))?;
        let oss = std::fs::read_to_string(dir.join("oss.yml"))?;
        Self::from_yaml(&browsers, &oss)
    }

    /// Build from the YAML text of a browser table and an OS table.
    pub fn from_yaml(browsers: &str, oss: &str) -> Result<Self> {
        let (browser_parser, os_parser) = rayon::join(
            || build_table(browsers, BrowserFamily::from_str, Error::UnknownBrowserFamily),
            || build_table(oss, OsFamily::from_str, Error::UnknownOsFamily),
        );
        let browser_parser = browser_parser?;
        let os_parser = os_parser?;

        tracing::debug!(
            browser_signatures = browser_parser.len(),
            os_signatures = os_parser.len(),
            "built user agent parser"
        );

        Ok(Self {
            browser_parser,
            os_parser,
        })
    }

    pub fn parse(&self, user_agent: &str) -> ClientIdentity {
        let ua = truncate(user_agent);

        let (browser, browser_version) =
            detect(&self.browser_parser, ua).unwrap_or((BrowserFamily::Unknown, None));
        let (os, os_version) = detect(&self.os_parser, ua).unwrap_or((OsFamily::Unknown, None));

        ClientIdentity {
            browser,
            browser_version,
            os,
            os_version,
        }
    }
}

impl ParseUserAgent for UserAgentParser {
    fn parse_identity(&self, user_agent: &str) -> ClientIdentity {
        self.parse(user_agent)
    }
}

fn build_table<F: Copy + Send>(
    yaml: &str,
    family_from_str: impl Fn(&str) -> Option<F>,
    unknown_family: impl Fn(String) -> Error,
) -> Result<CompiledParser<SignatureData<F>>> {
    let map: db::SignatureMap = serde_yaml::from_str(yaml)?;

    let mut items = Vec::new();
    for (name, entries) in map {
        let family = match family_from_str(&name) {
            Some(f) => f,
            None => return Err(unknown_family(name)),
        };
        items.extend(entries.into_iter().map(|e| {
            (
                e.regex,
                SignatureData {
                    family,
                    version_template: e.version,
                },
            )
        }));
    }

    CompiledParser::build(items)
}

/// Family and version of the first matching signature. An empty or
/// unparseable version leaves the version unknown but keeps the family.
fn detect<F: Copy>(
    parser: &CompiledParser<SignatureData<F>>,
    ua: &str,
) -> Option<(F, Option<Version>)> {
    let m = parser.match_first(ua)?;
    let version = m
        .data
        .version_template
        .as_deref()
        .and_then(|template| Version::parse(&substitute(template, &m.captures)));
    Some((m.data.family, version))
}

fn truncate(ua: &str) -> &str {
    if ua.len() <= MAX_UA_LENGTH {
        return ua;
    }
    let mut end = MAX_UA_LENGTH;
    while !ua.is_char_boundary(end) {
        end -= 1;
    }
    ua.get(..end).unwrap_or_default()
}
