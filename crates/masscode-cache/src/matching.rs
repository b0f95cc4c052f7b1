//! Fuzzy name matching for tags and folders.

use masscode_api_rs::models::Named;
use regex::{Regex, RegexBuilder};

/// A compiled name pattern.
///
/// Patterns are tried as case-insensitive regular expressions first. A pattern
/// that does not compile (`"["`, `"(?<"`, ...) becomes a case-insensitive
/// substring test instead, so building one never fails.
#[derive(Debug, Clone)]
pub enum NamePattern {
    /// A valid regular expression.
    Regex(Regex),
    /// Lowercased literal text to look for.
    Substring(String),
}

impl NamePattern {
    /// Compiles `pattern`, falling back to substring matching.
    pub fn new(pattern: &str) -> Self {
        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) => NamePattern::Regex(regex),
            Err(e) => {
                tracing::warn!(pattern, error = %e, "Invalid pattern; using substring match");
                NamePattern::Substring(pattern.to_lowercase())
            }
        }
    }

    /// Returns true if the pattern fell back to substring matching.
    pub fn is_substring(&self) -> bool {
        matches!(self, NamePattern::Substring(_))
    }

    /// Tests a single name.
    pub fn is_match(&self, name: &str) -> bool {
        match self {
            NamePattern::Regex(regex) => regex.is_match(name),
            NamePattern::Substring(needle) => name.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Returns the records whose name matches, in their original order.
    pub fn filter<'a, T: Named>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.is_match(r.name())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masscode_api_rs::models::{Extra, Tag};

    fn tags(names: &[&str]) -> Vec<Tag> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Tag {
                id: format!("t{i}"),
                name: name.to_string(),
                created_at: None,
                updated_at: None,
                extra: Extra::new(),
            })
            .collect()
    }

    fn names<'a>(matched: &[&'a Tag]) -> Vec<&'a str> {
        matched.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_regex_is_case_insensitive() {
        let pattern = NamePattern::new("^ru");
        assert!(!pattern.is_substring());
        assert!(pattern.is_match("Rust"));
        assert!(!pattern.is_match("trust"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let all = tags(&["beta", "alpha", "alphabet", "gamma"]);
        let matched = NamePattern::new("alpha|gamma").filter(&all);
        assert_eq!(names(&matched), vec!["alpha", "alphabet", "gamma"]);
    }

    #[test]
    fn test_invalid_regex_falls_back_to_substring() {
        let all = tags(&["foo", "bar"]);
        let pattern = NamePattern::new("[");
        assert!(pattern.is_substring());
        assert!(pattern.filter(&all).is_empty());

        let all = tags(&["x[a]", "plain", "X[A"]);
        let matched = NamePattern::new("[a").filter(&all);
        assert_eq!(names(&matched), vec!["x[a]", "X[A"]);
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let all = tags(&["foo", "bar"]);
        assert_eq!(NamePattern::new("").filter(&all).len(), 2);
    }
}
