//! HTTP/1.1 response builder.
//!
//! Provides a fluent builder API for constructing HTTP responses and
//! serializing them to a byte buffer for transmission over TCP. Responses
//! are plain values: decorating one (see [`crate::cache::with_cache_header`])
//! clones it and returns a fresh instance, leaving the original usable.

use bytes::{BufMut, BytesMut};

use super::{Headers, StatusCode};

/// An HTTP/1.1 response, ready to be serialized and sent.
///
/// # Examples
///
/// ```
/// use respkit::http::{Response, StatusCode};
///
/// let response = Response::new(StatusCode::Ok)
///     .header("Content-Type", "application/json")
///     .body(r#"{"status":"ok"}"#);
///
/// let bytes = response.into_bytes();
/// let text = std::str::from_utf8(&bytes).unwrap();
/// assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
/// assert!(text.contains("Content-Length: 15\r\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: Headers,
    body: Vec<u8>,
    keep_alive: bool,
}

impl Response {
    /// Creates a new response with the given status and an empty body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Vec::new(),
            keep_alive: true,
        }
    }

    /// Creates a response with the given status, applying any overrides in
    /// `init`. Headers from `init` are copied in as-is.
    pub fn with_init(default_status: StatusCode, init: &ResponseInit) -> Self {
        let mut response = Self::new(init.status.unwrap_or(default_status));
        response.headers.merge(&init.headers);
        if let Some(keep_alive) = init.keep_alive {
            response.keep_alive = keep_alive;
        }
        response
    }

    /// Appends a response header. Multiple calls with the same name are additive.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Sets a response header, replacing any existing values for the name.
    #[must_use]
    pub fn set_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Sets the response body from a string.
    ///
    /// The `Content-Length` header is written automatically by [`into_bytes`](Self::into_bytes).
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into().into_bytes();
        self
    }

    /// Sets the response body from raw bytes.
    #[must_use]
    pub fn body_bytes(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Controls whether the `Connection: keep-alive` or `Connection: close` header is written.
    #[must_use]
    pub fn keep_alive(mut self, keep_alive: bool) -> Self {
        self.keep_alive = keep_alive;
        self
    }

    /// Returns the status code of this response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the response body bytes.
    pub fn body_as_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Returns the response body as UTF-8 text, or `None` if it is not valid UTF-8.
    pub fn body_as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Serializes the response into a `BytesMut` buffer using HTTP/1.1 wire format.
    ///
    /// Automatically adds:
    /// - `Content-Type: text/plain; charset=utf-8` if the body is non-empty and no
    ///   `Content-Type` header was set.
    /// - `Content-Length: <n>` (always written).
    /// - `Connection: keep-alive` or `Connection: close`.
    pub fn into_bytes(mut self) -> BytesMut {
        let content_length = self.body.len();

        if !self.body.is_empty() && !self.headers.contains("content-type") {
            self.headers
                .set("Content-Type", "text/plain; charset=utf-8");
        }

        let connection = if self.keep_alive {
            "keep-alive"
        } else {
            "close"
        };
        self.headers.set("Connection", connection);

        let estimated_size = 128 + self.headers.len() * 64 + content_length;
        let mut buf = BytesMut::with_capacity(estimated_size);

        // Status line
        buf.put(
            format!(
                "HTTP/1.1 {} {}\r\n",
                self.status.as_u16(),
                self.status.canonical_reason()
            )
            .as_bytes(),
        );

        // Headers
        for (name, value) in self.headers.iter() {
            buf.put(format!("{name}: {value}\r\n").as_bytes());
        }

        // Content-Length is always the last header before the blank line
        buf.put(format!("Content-Length: {content_length}\r\n").as_bytes());

        // Header/body separator
        buf.put(&b"\r\n"[..]);

        // Body
        if !self.body.is_empty() {
            buf.put(self.body.as_slice());
        }

        buf
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(StatusCode::Ok)
    }
}

/// Optional overrides applied when constructing a response.
///
/// Mirrors the init-options bag of browser-style `Response` constructors:
/// every field is independently optional and `Default` means "no overrides".
///
/// # Examples
///
/// ```
/// use respkit::http::{Headers, ResponseInit, StatusCode};
///
/// let mut headers = Headers::new();
/// headers.set("X-Trace", "1");
///
/// let init = ResponseInit::new()
///     .status(StatusCode::MovedPermanently)
///     .headers(headers);
/// assert_eq!(init.status, Some(StatusCode::MovedPermanently));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponseInit {
    /// Overrides the operation's default status when set.
    pub status: Option<StatusCode>,
    /// Headers copied onto the new response before operation-owned headers.
    pub headers: Headers,
    /// Overrides the keep-alive flag when set.
    pub keep_alive: Option<bool>,
}

impl ResponseInit {
    /// Creates an empty init with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status override.
    #[must_use]
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the initial header collection.
    #[must_use]
    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single header to the init collection.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Sets the keep-alive override.
    #[must_use]
    pub fn keep_alive(mut self, keep_alive: bool) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(bytes: BytesMut) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn simple_ok_response() {
        let r = Response::new(StatusCode::Ok).body("Hello");
        let s = to_string(r.into_bytes());
        assert!(s.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(s.contains("Content-Length: 5\r\n"));
        assert!(s.ends_with("\r\n\r\nHello"));
    }

    #[test]
    fn custom_header() {
        let r = Response::new(StatusCode::Ok)
            .header("X-Request-Id", "abc-123")
            .body("ok");
        let s = to_string(r.into_bytes());
        assert!(s.contains("X-Request-Id: abc-123\r\n"));
    }

    #[test]
    fn set_header_replaces_value() {
        let r = Response::new(StatusCode::Ok)
            .header("Cache-Control", "no-store")
            .set_header("cache-control", "public");
        assert_eq!(r.headers().get("Cache-Control"), Some("public"));
        assert_eq!(r.headers().len(), 1);
    }

    #[test]
    fn no_body_no_content_type() {
        let r = Response::new(StatusCode::NoContent);
        let s = to_string(r.into_bytes());
        assert!(!s.contains("Content-Type"));
        assert!(s.contains("Content-Length: 0\r\n"));
    }

    #[test]
    fn connection_close() {
        let r = Response::new(StatusCode::Ok).keep_alive(false);
        let s = to_string(r.into_bytes());
        assert!(s.contains("Connection: close\r\n"));
    }

    #[test]
    fn clone_is_independent() {
        let original = Response::new(StatusCode::Ok).header("Content-Type", "text/html");
        let decorated = original.clone().set_header("Cache-Control", "no-store");

        assert!(decorated.headers().contains("cache-control"));
        assert!(!original.headers().contains("cache-control"));
        assert_eq!(original.headers().get("Content-Type"), Some("text/html"));
    }

    #[test]
    fn with_init_applies_overrides() {
        let init = ResponseInit::new()
            .status(StatusCode::MovedPermanently)
            .header("X-Trace", "1");
        let r = Response::with_init(StatusCode::Found, &init);
        assert_eq!(r.status(), StatusCode::MovedPermanently);
        assert_eq!(r.headers().get("X-Trace"), Some("1"));
    }

    #[test]
    fn body_accessors_expose_the_same_bytes() {
        let r = Response::new(StatusCode::Ok).body_bytes(vec![0xde, 0xad]);
        assert_eq!(r.body_as_bytes(), &[0xde, 0xad]);
        assert_eq!(r.body_as_str(), None); // not UTF-8

        let r = Response::new(StatusCode::Ok).body("plain");
        assert_eq!(r.body_as_bytes(), b"plain");
        assert_eq!(r.body_as_str(), Some("plain"));
    }

    #[test]
    fn with_init_honors_keep_alive_override() {
        let init = ResponseInit::new().keep_alive(false);
        let s = to_string(Response::with_init(StatusCode::Found, &init).into_bytes());
        assert!(s.contains("Connection: close\r\n"));

        let s = to_string(Response::with_init(StatusCode::Found, &ResponseInit::new()).into_bytes());
        assert!(s.contains("Connection: keep-alive\r\n"));
    }

    #[test]
    fn with_init_defaults_when_empty() {
        let r = Response::with_init(StatusCode::Found, &ResponseInit::new());
        assert_eq!(r.status(), StatusCode::Found);
        assert!(r.headers().is_empty());
    }
}
