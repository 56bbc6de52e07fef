use regex_syntax::{hir::literal::Extractor, parse};

/// Extract literal prefixes from a signature pattern for use as Aho-Corasick
/// pre-filter candidates. Every match of the pattern starts with one of the
/// returned (lowercased) literals.
///
/// Returns an empty vec, meaning the signature must always be tried, when the
/// pattern cannot be parsed by `regex_syntax` (look-around and other
/// fancy-only syntax), when the prefix set is infinite, or when any prefix is
/// non-ASCII or shorter than `min_len` bytes. Dropping only the short ones
/// would make the prefilter skip inputs the pattern can match.
pub(crate) fn extract_literals(pattern: &str, min_len: usize) -> Vec<String> {
    let hir = match parse(pattern) {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    let Some(literals) = seq.literals() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(literals.len());
    for lit in literals {
        match std::str::from_utf8(lit.as_bytes()) {
            Ok(s) if s.len() >= min_len && s.is_ascii() => out.push(s.to_ascii_lowercase()),
            _ => return Vec::new(),
        }
    }
    out.sort();
    out.dedup();
    out
}
