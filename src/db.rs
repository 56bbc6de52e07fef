use indexmap::IndexMap;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Signature tables  (regexes/browsers.yml, regexes/oss.yml)
//
// Format: top-level mapping  family_name → [SignatureEntry, ...]
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct SignatureEntry {
    pub regex: String,
    /// Version template, `$1`..`$9` refer to capture groups.
    #[serde(default)]
    pub version: Option<String>,
}

/// Raw deserialization target for a signature table.
/// Uses IndexMap to preserve YAML insertion order (first-match-wins across
/// families as well as within one).
pub(crate) type SignatureMap = IndexMap<String, Vec<SignatureEntry>>;

pub(crate) const EMBEDDED_BROWSERS: &str = include_str!("../regexes/browsers.yml");
pub(crate) const EMBEDDED_OSS: &str = include_str!("../regexes/oss.yml");
