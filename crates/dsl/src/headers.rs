//! Header accumulation.
//!
//! [`Headers`] is a name → value mapping where the last write for a name wins. Names and
//! values are plain strings here; they are checked by the response builder when the
//! response is finished.

use std::ops::AddAssign;

/// An insertion ordered header mapping with unique names.
///
/// Equality ignores order: two mappings are equal when they hold the same pairs.
#[derive(Debug, Clone, Default, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, overwriting the value of an existing one with the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Sets every pair in order, so a later pair wins over an earlier one with the same name.
    pub fn set_all<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in pairs {
            self.set(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl PartialEq for Headers {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        headers.set_all(iter);
        headers
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Headers {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Headers {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.set_all(iter);
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The scope handed to a `headers(..)` block.
///
/// `builder.header((name, value))` and `*builder += (name, value)` are the same call.
#[derive(Debug, Default)]
pub struct HeadersBuilder {
    headers: Headers,
}

impl HeadersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header<K, V>(&mut self, (name, value): (K, V)) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.set(name, value);
        self
    }

    pub fn headers<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.set_all(pairs);
        self
    }

    /// The mapping collected so far.
    pub fn build(&self) -> &Headers {
        &self.headers
    }

    pub fn into_headers(self) -> Headers {
        self.headers
    }
}

impl<K, V> AddAssign<(K, V)> for HeadersBuilder
where
    K: Into<String>,
    V: Into<String>,
{
    fn add_assign(&mut self, pair: (K, V)) {
        self.header(pair);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut headers = Headers::new();
        headers.set("X-A", "1");
        headers.set("X-B", "2");
        headers.set("X-A", "3");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("X-A"), Some("3"));
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec![("X-A", "3"), ("X-B", "2")]);
    }

    #[test]
    fn set_all_in_order() {
        let headers: Headers = [("X-A", "1"), ("X-A", "2")].into_iter().collect();
        assert_eq!(headers.get("X-A"), Some("2"));
    }

    #[test]
    fn equality_ignores_order() {
        let a: Headers = [("X-A", "1"), ("X-B", "2")].into_iter().collect();
        let b: Headers = [("X-B", "2"), ("X-A", "1")].into_iter().collect();
        let c: Headers = [("X-B", "2"), ("X-A", "3")].into_iter().collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn terse_form_is_the_named_form() {
        let mut verbose = HeadersBuilder::new();
        verbose.header(("Content-Type", "application/json")).header(("X-TEST-HEADER", "1")).header(("X-TEST-HEADER", "2"));

        let mut terse = HeadersBuilder::new();
        terse += ("Content-Type", "application/json");
        terse += ("X-TEST-HEADER", "1");
        terse += ("X-TEST-HEADER", "2");

        assert_eq!(verbose.build(), terse.build());
        assert_eq!(terse.build().get("X-TEST-HEADER"), Some("2"));
    }

    #[test]
    fn build_is_repeatable() {
        let mut builder = HeadersBuilder::new();
        builder.header(("X-A", "1"));

        assert_eq!(builder.build(), builder.build());
        assert_eq!(builder.into_headers().get("X-A"), Some("1"));
    }
}
