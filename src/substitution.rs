use std::borrow::Cow;

/// Replace `$1`..`$9` in a version `template` with capture groups from the
/// signature match, then trim trailing whitespace, dots and underscores.
///
/// Groups that did not take part in the match expand to nothing, so a
/// template of `$1` on a match without a version yields an empty string.
pub(crate) fn substitute<'a>(template: &'a str, captures: &fancy_regex::Captures<'_>) -> Cow<'a, str> {
    if !template.contains('$') {
        return Cow::Borrowed(trim_version(template));
    }

    let mut result = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(idx) = chars.peek().and_then(|d| d.to_digit(10)) {
                chars.next();
                if let Some(m) = captures.get(idx as usize) {
                    result.push_str(m.as_str());
                }
                continue;
            }
        }
        result.push(c);
    }

    let trimmed_len = trim_version(&result).len();
    result.truncate(trimmed_len);
    Cow::Owned(result)
}

fn trim_version(s: &str) -> &str {
    s.trim_end_matches(|c: char| c.is_whitespace() || c == '.' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps<'a>(re: &'a fancy_regex::Regex, text: &'a str) -> fancy_regex::Captures<'a> {
        re.captures(text).unwrap().unwrap()
    }

    #[test]
    fn substitutes_group() {
        let re = fancy_regex::Regex::new(r"Mac OS X (\d+)[_.](\d+)").unwrap();
        let c = caps(&re, "Intel Mac OS X 10_14_5");
        assert_eq!(substitute("$1.$2", &c), "10.14");
    }

    #[test]
    fn literal_template_is_borrowed() {
        let re = fancy_regex::Regex::new(r"(Edge)").unwrap();
        let c = caps(&re, "Edge");
        assert!(matches!(substitute("18.0", &c), Cow::Borrowed("18.0")));
    }

    #[test]
    fn missing_group_expands_to_nothing() {
        let re = fancy_regex::Regex::new(r"UCWEB(?:/(\d+))?").unwrap();
        let c = caps(&re, "UCWEB");
        assert_eq!(substitute("$1", &c), "");
    }

    #[test]
    fn trailing_separators_trimmed() {
        let re = fancy_regex::Regex::new(r"Chrome/([\d.]+)").unwrap();
        let c = caps(&re, "Chrome/50.0.");
        assert_eq!(substitute("$1", &c), "50.0");
    }
}
