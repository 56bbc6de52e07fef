use fixtures::fixtures;
use samesite_compat::{
    classify, incompatibility, same_site_none, BrowserFamily, ClientIdentity,
    CookieAttributeDecision, OsFamily, SameSiteClassifier, UserAgentParser, Version,
};
use serde::Deserialize;
use std::sync::{Arc, OnceLock};

// Global parser instance that is initialized once
static PARSER_INSTANCE: OnceLock<Arc<UserAgentParser>> = OnceLock::new();

fn shared_parser() -> Arc<UserAgentParser> {
    PARSER_INSTANCE
        .get_or_init(|| Arc::new(UserAgentParser::embedded().expect("failed to build parser")))
        .clone()
}

// ---------------------------------------------------------------------------
// User-Agent fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct UserAgentFixture {
    user_agent: String,
    browser: FamilyFixture,
    os: FamilyFixture,
    same_site_none: bool,
}

#[derive(Debug, Deserialize)]
struct FamilyFixture {
    family: String,
    #[serde(default)]
    version: Option<String>,
}

fn expected_version(fixture: &FamilyFixture) -> Option<Version> {
    fixture
        .version
        .as_deref()
        .map(|v| Version::parse(v).unwrap_or_else(|| panic!("bad fixture version {v:?}")))
}

#[fixtures(["tests/fixtures/*.yml"])]
#[test]
fn test_user_agent_fixtures(path: &std::path::Path) {
    let parser = shared_parser();
    let content = std::fs::read_to_string(path).unwrap();
    let fixtures: Vec<UserAgentFixture> = serde_yaml::from_str(&content).unwrap();
    assert!(!fixtures.is_empty(), "no fixtures in {}", path.display());

    for f in &fixtures {
        let id = parser.parse(&f.user_agent);

        let browser = BrowserFamily::from_str(&f.browser.family).unwrap();
        let os = OsFamily::from_str(&f.os.family).unwrap();
        assert_eq!(id.browser, browser, "browser mismatch for UA: {}", f.user_agent);
        assert_eq!(
            id.browser_version,
            expected_version(&f.browser),
            "browser version mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(id.os, os, "os mismatch for UA: {}", f.user_agent);
        assert_eq!(
            id.os_version,
            expected_version(&f.os),
            "os version mismatch for UA: {}",
            f.user_agent
        );

        assert_eq!(
            classify(&id).is_emit_none(),
            f.same_site_none,
            "unexpected SameSite decision for UA: {} (rule: {:?})",
            f.user_agent,
            incompatibility(&id).map(|r| r.name)
        );
        assert_eq!(same_site_none(&f.user_agent), classify(&id));
    }
}

// ---------------------------------------------------------------------------
// Chrome corpus
// ---------------------------------------------------------------------------

#[test]
fn test_chrome_versions() {
    let cases = [
        ("Mozilla/5.0 (Linux; Android 4.4.2; SM-T330 Build/KOT49H) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/43.0.2357.93 Safari/537.36", true),
        ("Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML like Gecko) Chrome/45.0.2454.85 Safari/537.36 115Browser/6.0.3", true),
        ("Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/50.0. 2661.102 Safari/537.36", true),
        ("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/51.0.2704.103 Safari/537.36", false),
        ("Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/54.0.2840.59 Safari/537.36 115Browser/8.6.2", false),
        ("Mozilla/5.0 (Linux; Android 7.0) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Focus/1.0 Chrome/59.0.3029.83 Mobile Safari/537.36", false),
        ("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/62.0. 3165.0 Safari/537.36", false),
        ("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/66.0.3359.181 Safari/537.36", false),
        ("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/69.0.3497.100 Safari/537.36", true),
        ("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/79.0.3945.88 Safari/537.36", true),
    ];

    for (ua, emit_none) in cases {
        let decision = same_site_none(ua);
        assert_eq!(decision.is_emit_none(), emit_none, "unexpected SameSite attribute on {ua:?}");
        let expected = if emit_none { Some("None") } else { None };
        assert_eq!(decision.same_site_value(), expected);
    }
}

#[test]
fn test_classifier_over_shared_parser() {
    let classifier = SameSiteClassifier::new(shared_parser());
    let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148";

    let id = classifier.identify(ua);
    assert_eq!(id.os, OsFamily::IOS);
    assert_eq!(id.os_version, Some(Version::new(12, 2, 0)));
    assert_eq!(classifier.classify_user_agent(ua), CookieAttributeDecision::Omit);
    assert_eq!(incompatibility(&id).map(|r| r.name), Some("ios-12"));
}

#[test]
fn test_concurrent_classification() {
    let parser = shared_parser();
    let uas = [
        ("Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/60.0.3112.90 Safari/537.36", CookieAttributeDecision::Omit),
        ("Mozilla/5.0 (Windows NT 10.0; rv:70.0) Gecko/20100101 Firefox/70.0", CookieAttributeDecision::EmitNone),
        ("not a browser", CookieAttributeDecision::EmitNone),
    ];

    std::thread::scope(|s| {
        for _ in 0..8 {
            let parser = Arc::clone(&parser);
            s.spawn(move || {
                for _ in 0..100 {
                    for (ua, expected) in uas {
                        assert_eq!(classify(&parser.parse(ua)), expected);
                    }
                }
            });
        }
    });
}

#[test]
fn test_unknown_identity_gets_none() {
    assert_eq!(classify(&ClientIdentity::unknown()), CookieAttributeDecision::EmitNone);
    assert_eq!(classify(&ClientIdentity::default()), CookieAttributeDecision::EmitNone);
    assert!(ClientIdentity::unknown().is_unknown());
}
