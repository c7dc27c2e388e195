//! Redirect response construction.
//!
//! Builds a fresh [`Response`] carrying a `Location` header and a short
//! plain-text body naming the target. The location string is passed through
//! uninterpreted; supplying a well-formed URI or path is the caller's job.

use tracing::debug;

use crate::http::{Response, ResponseInit, StatusCode};

/// Returns a `302 Found` redirect to `location`.
///
/// # Examples
///
/// ```
/// use respkit::redirect::redirect_to;
/// use respkit::http::StatusCode;
///
/// let response = redirect_to("/login");
/// assert_eq!(response.status(), StatusCode::Found);
/// assert_eq!(response.headers().get("Location"), Some("/login"));
/// ```
pub fn redirect_to(location: impl Into<String>) -> Response {
    redirect_to_with(location, ResponseInit::new())
}

/// Returns a redirect to `location`, applying the overrides in `init`.
///
/// `init.status` replaces the default `302 Found`; `init.headers` are copied
/// onto the response first and `Location` is then forced to the argument, so
/// it always reflects the explicit target even when the init headers carried
/// their own.
///
/// # Examples
///
/// ```
/// use respkit::redirect::redirect_to_with;
/// use respkit::http::{ResponseInit, StatusCode};
///
/// let response = redirect_to_with(
///     "/new-home",
///     ResponseInit::new().status(StatusCode::MovedPermanently),
/// );
/// assert_eq!(response.status(), StatusCode::MovedPermanently);
/// ```
pub fn redirect_to_with(location: impl Into<String>, init: ResponseInit) -> Response {
    let location = location.into();
    debug!(location = %location, "building redirect response");
    Response::with_init(StatusCode::Found, &init)
        .body(format!("Redirecting you to {location}..."))
        .set_header("Location", location)
}
