//! HTTP header map with case-insensitive name lookup.
//!
//! HTTP headers are order-preserving and case-insensitive per [RFC 9110 §5].
//! The map distinguishes between [`append`](Headers::append) (multi-value,
//! e.g. `Set-Cookie`) and [`set`](Headers::set) (single-value, last write
//! wins, e.g. `Cache-Control` or `Location`).

use std::fmt;

/// A case-insensitive, insertion-order-preserving HTTP header map.
///
/// # Examples
///
/// ```
/// use respkit::http::Headers;
///
/// let mut headers = Headers::new();
/// headers.append("Content-Type", "text/html; charset=utf-8");
/// headers.set("Cache-Control", "no-store");
/// headers.set("cache-control", "max-age=60");
///
/// assert_eq!(headers.get("content-type"), Some("text/html; charset=utf-8"));
/// assert_eq!(headers.get("Cache-Control"), Some("max-age=60"));
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Headers {
    inner: Vec<(String, String)>,
}

impl Headers {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a header entry. Multiple values for the same name are preserved.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Sets a header to a single value, replacing any existing entries with
    /// the same name (case-insensitive).
    ///
    /// The entry keeps the position of the first existing occurrence, or is
    /// appended when the name was not present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .inner
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(at) => {
                let mut i = at + 1;
                while i < self.inner.len() {
                    if self.inner[i].0.eq_ignore_ascii_case(&name) {
                        self.inner.remove(i);
                    } else {
                        i += 1;
                    }
                }
                self.inner[at] = (name, value);
            }
            None => self.inner.push((name, value)),
        }
    }

    /// Returns the first value for the given header name (case-insensitive), or `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns an iterator over all values for the given header name (case-insensitive).
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.inner
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Removes all entries with the given header name (case-insensitive).
    ///
    /// Returns `true` if any entries were removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.inner.len();
        self.inner.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.inner.len() < before
    }

    /// Returns `true` if the map contains at least one entry with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Copies every entry of `other` into this map via [`set`](Self::set),
    /// so the incoming map wins on name collisions.
    pub fn merge(&mut self, other: &Headers) {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
    }

    /// Returns the total number of header entries (not unique names).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no header entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over all `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.inner {
            write!(f, "{name}: {value}\r\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_get() {
        let mut h = Headers::new();
        h.append("Content-Type", "text/plain");
        assert_eq!(h.get("content-type"), Some("text/plain"));
        assert_eq!(h.get("CONTENT-TYPE"), Some("text/plain"));
        assert_eq!(h.get("Content-Type"), Some("text/plain"));
    }

    #[test]
    fn append_preserves_multi_value() {
        let mut h = Headers::new();
        h.append("Set-Cookie", "a=1");
        h.append("Set-Cookie", "b=2");
        let vals: Vec<_> = h.get_all("set-cookie").collect();
        assert_eq!(vals, vec!["a=1", "b=2"]);
    }

    #[test]
    fn set_last_write_wins() {
        let mut h = Headers::new();
        h.set("Cache-Control", "no-store");
        h.set("cache-control", "public");
        assert_eq!(h.len(), 1);
        assert_eq!(h.get("Cache-Control"), Some("public"));
    }

    #[test]
    fn set_collapses_appended_duplicates() {
        let mut h = Headers::new();
        h.append("X-Foo", "one");
        h.append("X-Foo", "two");
        h.set("x-foo", "final");
        assert_eq!(h.len(), 1);
        assert_eq!(h.get("X-Foo"), Some("final"));
    }

    #[test]
    fn set_keeps_position_of_first_occurrence() {
        let mut h = Headers::new();
        h.append("A", "1");
        h.append("B", "2");
        h.append("C", "3");
        h.set("b", "updated");
        let names: Vec<_> = h.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(names, vec!["A", "b", "C"]);
    }

    #[test]
    fn merge_overrides_colliding_names() {
        let mut base = Headers::new();
        base.set("Content-Type", "text/plain");
        base.set("X-Trace", "1");

        let mut extra = Headers::new();
        extra.set("content-type", "application/json");

        base.merge(&extra);
        assert_eq!(base.get("Content-Type"), Some("application/json"));
        assert_eq!(base.get("X-Trace"), Some("1"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn remove() {
        let mut h = Headers::new();
        h.append("X-Foo", "bar");
        h.append("X-Foo", "baz");
        assert!(h.remove("x-foo"));
        assert!(h.is_empty());
        assert!(!h.remove("x-foo")); // already gone
    }

    #[test]
    fn contains() {
        let mut h = Headers::new();
        h.append("Authorization", "Bearer token");
        assert!(h.contains("authorization"));
        assert!(!h.contains("x-missing"));
    }
}
