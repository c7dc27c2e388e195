//! # respkit
//!
//! A small toolkit for constructing outgoing HTTP responses: typed
//! `Cache-Control` directive serialization, immutable cache-header
//! attachment, and redirect responses.
//!
//! ## Quick Start
//!
//! ```
//! use respkit::{CacheDirectives, Response, StatusCode, redirect_to, with_cache_header};
//!
//! let page = Response::new(StatusCode::Ok)
//!     .header("Content-Type", "text/html")
//!     .body("<h1>hello</h1>");
//!
//! let cached = with_cache_header(
//!     &page,
//!     &CacheDirectives::new().public(true).max_age(3600).immutable(true),
//! );
//! assert_eq!(
//!     cached.headers().get("Cache-Control"),
//!     Some("public, max-age=3600, immutable"),
//! );
//!
//! let login = redirect_to("/login");
//! assert_eq!(login.status(), StatusCode::Found);
//! ```
//!
//! All operations are synchronous and side-effect free: they take their
//! inputs by reference or value and return a fresh [`Response`], never
//! mutating what the caller passed in.

pub mod cache;
pub mod http;
pub mod redirect;

// ── Convenience re-exports ────────────────────────────────────────────────────
pub use cache::{CacheDirectives, CachePolicy, with_cache_header};
pub use http::{Headers, Response, ResponseInit, StatusCode};
pub use redirect::{redirect_to, redirect_to_with};
