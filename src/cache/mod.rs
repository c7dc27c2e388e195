//! `Cache-Control` directive serialization and header attachment.
//!
//! This module owns the translation from a typed set of caching directives
//! to the comma-separated wire syntax of [RFC 9111 §5.2]:
//!
//! - [`CacheDirectives`] — an ordered, typed directive set built fluently.
//! - [`CacheDirectives::serialize`] — the wire-format serializer.
//! - [`with_cache_header`] — clones a [`Response`] and sets the serialized
//!   value under `Cache-Control`, leaving the original untouched.
//! - [`CachePolicy`] — a declarative, serde-friendly policy record for
//!   configuration-driven callers.
//!
//! Directive names are held in their camelCase spelling and dash-cased on
//! serialization by [`dash_case`], so adding a directive never touches the
//! name transform.

use tracing::trace;

use crate::http::Response;

pub mod policy;

pub use policy::CachePolicy;

/// Converts a camelCase directive name to its dash-case wire key.
///
/// Every internal uppercase ASCII letter is replaced by a hyphen followed by
/// its lowercase form. The transform is generic over the input; it is not a
/// per-directive lookup table.
///
/// # Examples
///
/// ```
/// use respkit::cache::dash_case;
///
/// assert_eq!(dash_case("maxAge"), "max-age");
/// assert_eq!(dash_case("staleWhileRevalidate"), "stale-while-revalidate");
/// assert_eq!(dash_case("public"), "public");
/// ```
pub fn dash_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// The value of a single cache directive: a boolean flag or a duration in
/// seconds.
///
/// Flags serialize to a bare token only when `true`; numeric directives
/// always serialize as `key=value`, including zero and negative values.
/// No range validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectiveValue {
    Flag(bool),
    Seconds(i64),
}

/// An ordered set of `Cache-Control` directives.
///
/// Directives serialize in the order they were supplied, not a canonical
/// order. Setting the same directive twice overwrites the value in place and
/// keeps its original position, matching object-literal update semantics.
///
/// # Examples
///
/// ```
/// use respkit::cache::CacheDirectives;
///
/// let directives = CacheDirectives::new()
///     .immutable(true)
///     .max_age(3600)
///     .public(true);
///
/// assert_eq!(directives.serialize(), "immutable, max-age=3600, public");
/// assert_eq!(CacheDirectives::new().serialize(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheDirectives {
    entries: Vec<(&'static str, DirectiveValue)>,
}

impl CacheDirectives {
    /// Creates an empty directive set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no directives have been supplied.
    ///
    /// An empty set still serializes to a header value (the empty string);
    /// callers that want to skip the header entirely can branch on this.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn put(mut self, name: &'static str, value: DirectiveValue) -> Self {
        match self.entries.iter().position(|(n, _)| *n == name) {
            Some(at) => self.entries[at].1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Sets the `immutable` flag.
    #[must_use]
    pub fn immutable(self, on: bool) -> Self {
        self.put("immutable", DirectiveValue::Flag(on))
    }

    /// Sets `max-age` in seconds.
    #[must_use]
    pub fn max_age(self, seconds: i64) -> Self {
        self.put("maxAge", DirectiveValue::Seconds(seconds))
    }

    /// Sets the `must-revalidate` flag.
    #[must_use]
    pub fn must_revalidate(self, on: bool) -> Self {
        self.put("mustRevalidate", DirectiveValue::Flag(on))
    }

    /// Sets the `must-understand` flag.
    #[must_use]
    pub fn must_understand(self, on: bool) -> Self {
        self.put("mustUnderstand", DirectiveValue::Flag(on))
    }

    /// Sets the `no-cache` flag.
    #[must_use]
    pub fn no_cache(self, on: bool) -> Self {
        self.put("noCache", DirectiveValue::Flag(on))
    }

    /// Sets the `no-store` flag.
    #[must_use]
    pub fn no_store(self, on: bool) -> Self {
        self.put("noStore", DirectiveValue::Flag(on))
    }

    /// Sets the `no-transform` flag.
    #[must_use]
    pub fn no_transform(self, on: bool) -> Self {
        self.put("noTransform", DirectiveValue::Flag(on))
    }

    /// Sets the `private` flag.
    #[must_use]
    pub fn private(self, on: bool) -> Self {
        self.put("private", DirectiveValue::Flag(on))
    }

    /// Sets the `proxy-revalidate` flag.
    #[must_use]
    pub fn proxy_revalidate(self, on: bool) -> Self {
        self.put("proxyRevalidate", DirectiveValue::Flag(on))
    }

    /// Sets the `public` flag.
    #[must_use]
    pub fn public(self, on: bool) -> Self {
        self.put("public", DirectiveValue::Flag(on))
    }

    /// Sets `s-maxage` in seconds.
    #[must_use]
    pub fn s_maxage(self, seconds: i64) -> Self {
        self.put("sMaxage", DirectiveValue::Seconds(seconds))
    }

    /// Sets `stale-if-error` in seconds.
    #[must_use]
    pub fn stale_if_error(self, seconds: i64) -> Self {
        self.put("staleIfError", DirectiveValue::Seconds(seconds))
    }

    /// Sets `stale-while-revalidate` in seconds.
    #[must_use]
    pub fn stale_while_revalidate(self, seconds: i64) -> Self {
        self.put("staleWhileRevalidate", DirectiveValue::Seconds(seconds))
    }

    /// Serializes the directive set to `Cache-Control` wire syntax.
    ///
    /// Flags contribute their dash-cased name only when `true`; numeric
    /// directives always contribute `key=value`, so `max-age=0` survives
    /// (semantically distinct from an absent `max-age`). Tokens are joined
    /// with `", "` in supply order. An empty set yields `""`.
    pub fn serialize(&self) -> String {
        let tokens: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(name, value)| match value {
                DirectiveValue::Flag(true) => Some(dash_case(name)),
                DirectiveValue::Flag(false) => None,
                DirectiveValue::Seconds(n) => Some(format!("{}={n}", dash_case(name))),
            })
            .collect();
        tokens.join(", ")
    }
}

/// Returns a copy of `response` with its `Cache-Control` header set to the
/// serialized form of `directives`.
///
/// The original response is not mutated. The header is written with
/// last-write-wins semantics, so a pre-existing `Cache-Control` value is
/// replaced rather than duplicated. An empty directive set still sets the
/// header, to an empty value — downstream layers may rely on its presence.
///
/// # Examples
///
/// ```
/// use respkit::cache::{CacheDirectives, with_cache_header};
/// use respkit::http::{Response, StatusCode};
///
/// let original = Response::new(StatusCode::Ok).header("Content-Type", "text/html");
/// let cached = with_cache_header(&original, &CacheDirectives::new().no_store(true));
///
/// assert_eq!(cached.headers().get("Cache-Control"), Some("no-store"));
/// assert!(!original.headers().contains("Cache-Control"));
/// ```
pub fn with_cache_header(response: &Response, directives: &CacheDirectives) -> Response {
    let value = directives.serialize();
    trace!(cache_control = %value, "attaching Cache-Control header");
    response.clone().set_header("Cache-Control", value)
}
