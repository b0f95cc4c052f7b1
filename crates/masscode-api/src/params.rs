//! Query parameters for filtered `GET` requests.

use std::fmt;

/// An ordered list of query parameters, passed to the server verbatim.
///
/// Keys may repeat (`?tagsIds_like=a&tagsIds_like=b`), and insertion order is
/// preserved on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key/value pair, keeping any existing pairs with the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Builder-style variant of [`append`](Self::append).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_duplicates_in_order() {
        let mut params = QueryParams::new();
        params.append("tagsIds_like", "a").append("q", "x");
        params.append("tagsIds_like", "b");

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("tagsIds_like"), Some("a"));
        assert_eq!(
            params.get_all("tagsIds_like").collect::<Vec<_>>(),
            vec!["a", "b"]
        );
        assert_eq!(params.to_string(), "tagsIds_like=a&q=x&tagsIds_like=b");
    }

    #[test]
    fn test_from_iterator() {
        let params: QueryParams = [("id", "s1")].into_iter().collect();
        assert_eq!(params.pairs(), &[("id".to_string(), "s1".to_string())]);
        assert!(QueryParams::new().is_empty());
    }
}
