//! Declarative cache policies for configuration-driven callers.
//!
//! A [`CachePolicy`] is the record-shaped counterpart of
//! [`CacheDirectives`](crate::cache::CacheDirectives): one optional field per
//! directive, deserializable from JSON/TOML with the camelCase field names
//! used on the wire-key side. Converting a policy into a directive set walks
//! the fields in declaration order, which becomes the token order of the
//! serialized header.

use serde::{Deserialize, Serialize};

use super::CacheDirectives;

/// A `Cache-Control` policy as loaded from configuration.
///
/// Every field is independently optional; unset fields contribute nothing to
/// the header. A flag set to `false` is carried through as a disabled flag
/// (it still emits nothing, but survives re-serialization of the policy).
///
/// # Examples
///
/// ```
/// use respkit::cache::CachePolicy;
///
/// let policy: CachePolicy =
///     serde_json::from_str(r#"{"public": true, "maxAge": 3600}"#).unwrap();
/// assert_eq!(policy.to_directives().serialize(), "public, max-age=3600");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CachePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immutable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_revalidate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_understand: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_store: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_transform: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_revalidate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s_maxage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_if_error: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_while_revalidate: Option<i64>,
}

impl CachePolicy {
    /// Converts the policy into an ordered directive set, visiting fields in
    /// declaration order.
    pub fn to_directives(&self) -> CacheDirectives {
        let mut d = CacheDirectives::new();
        if let Some(v) = self.immutable {
            d = d.immutable(v);
        }
        if let Some(n) = self.max_age {
            d = d.max_age(n);
        }
        if let Some(v) = self.must_revalidate {
            d = d.must_revalidate(v);
        }
        if let Some(v) = self.must_understand {
            d = d.must_understand(v);
        }
        if let Some(v) = self.no_cache {
            d = d.no_cache(v);
        }
        if let Some(v) = self.no_store {
            d = d.no_store(v);
        }
        if let Some(v) = self.no_transform {
            d = d.no_transform(v);
        }
        if let Some(v) = self.private {
            d = d.private(v);
        }
        if let Some(v) = self.proxy_revalidate {
            d = d.proxy_revalidate(v);
        }
        if let Some(v) = self.public {
            d = d.public(v);
        }
        if let Some(n) = self.s_maxage {
            d = d.s_maxage(n);
        }
        if let Some(n) = self.stale_if_error {
            d = d.stale_if_error(n);
        }
        if let Some(n) = self.stale_while_revalidate {
            d = d.stale_while_revalidate(n);
        }
        d
    }
}

impl From<&CachePolicy> for CacheDirectives {
    fn from(policy: &CachePolicy) -> Self {
        policy.to_directives()
    }
}

impl From<CachePolicy> for CacheDirectives {
    fn from(policy: CachePolicy) -> Self {
        policy.to_directives()
    }
}
