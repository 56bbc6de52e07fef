use aho_corasick::AhoCorasick;
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::literal::extract_literals;

/// Shortest literal worth feeding to the prefilter.
const MIN_LITERAL_LEN: usize = 3;

/// Tables up to this many entries select candidates without allocating.
const INLINE_ENTRIES: usize = 64;

/// Build the full case-insensitive regex string for a signature pattern.
pub(crate) fn full_pattern(pattern: &str) -> String {
    format!("(?i)(?:{})", pattern)
}

/// Result of a successful match.
pub(crate) struct MatchResult<'a, T> {
    pub data: &'a T,
    pub captures: fancy_regex::Captures<'a>,
}

// ---------------------------------------------------------------------------
// CompiledParser: ordered signature list, first match wins
// ---------------------------------------------------------------------------

/// Core matching engine: Aho-Corasick literal prefilter + fancy-regex.
///
/// `T` is the associated data for each entry (family, version template).
/// Only entries whose literal prefix occurs in the input, plus the entries
/// without usable literals, are evaluated; evaluation still follows table
/// order so the result is the same as trying every regex in turn.
///
/// The automaton folds ASCII case only, while `(?i)` also folds `ſ` to `s`
/// and the Kelvin sign to `k`. Those are the only non-ASCII characters that
/// fold onto ASCII, so the prefilter is skipped for non-ASCII input.
pub(crate) struct CompiledParser<T> {
    regexes: Vec<fancy_regex::Regex>,
    /// Case-insensitive automaton over every extracted literal.
    prefilter: Option<AhoCorasick>,
    /// Maps prefilter pattern index → entry index.
    literal_to_entry: Vec<usize>,
    /// Entries that must be tried on every input.
    always_candidate: Vec<bool>,
    data: Vec<T>,
}

impl<T> CompiledParser<T> {
    /// Build a CompiledParser from an iterator of (regex_pattern, data) pairs.
    pub fn build(items: impl IntoIterator<Item = (String, T)>) -> Result<Self>
    where
        T: Send,
    {
        let (patterns, data): (Vec<String>, Vec<T>) = items.into_iter().unzip();

        let regexes = patterns
            .par_iter()
            .map(|p| fancy_regex::Regex::new(&full_pattern(p)).map_err(Error::from))
            .collect::<Result<Vec<_>>>()?;

        let literals: Vec<Vec<String>> = patterns
            .par_iter()
            .map(|p| extract_literals(p, MIN_LITERAL_LEN))
            .collect();

        let mut ac_patterns: Vec<String> = Vec::new();
        let mut literal_to_entry: Vec<usize> = Vec::new();
        let mut always_candidate: Vec<bool> = Vec::with_capacity(literals.len());

        for (idx, lits) in literals.into_iter().enumerate() {
            always_candidate.push(lits.is_empty());
            for lit in lits {
                ac_patterns.push(lit);
                literal_to_entry.push(idx);
            }
        }

        let prefilter = if ac_patterns.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(&ac_patterns)?,
            )
        };

        tracing::debug!(
            entries = regexes.len(),
            literals = ac_patterns.len(),
            always_candidates = always_candidate.iter().filter(|a| **a).count(),
            "compiled signature table"
        );

        Ok(Self {
            regexes,
            prefilter,
            literal_to_entry,
            always_candidate,
            data,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Find the first matching entry (preserving table order).
    pub fn match_first<'a>(&'a self, ua: &'a str) -> Option<MatchResult<'a, T>> {
        let mut candidates: SmallVec<[bool; INLINE_ENTRIES]> =
            SmallVec::from_slice(&self.always_candidate);
        if !ua.is_ascii() {
            candidates.fill(true);
        } else if let Some(ac) = &self.prefilter {
            for m in ac.find_overlapping_iter(ua) {
                if let Some(&entry_idx) = self.literal_to_entry.get(m.pattern().as_usize()) {
                    candidates[entry_idx] = true;
                }
            }
        }

        candidates
            .iter()
            .zip(self.regexes.iter().zip(&self.data))
            .filter(|(candidate, _)| **candidate)
            // A regex that errors at match time (backtrack limit) counts as no match.
            .find_map(|(_, (re, data))| match re.captures(ua) {
                Ok(Some(captures)) => Some(MatchResult { data, captures }),
                _ => None,
            })
    }
}
