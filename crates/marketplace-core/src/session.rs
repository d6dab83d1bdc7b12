//! Session cookie clearing.
//!
//! The storefront never reads or validates session cookies. Logging out
//! deletes them and nothing else.

use cookie::Cookie;
use cookie::time::{Duration, OffsetDateTime};
use tracing::debug;

/// Cookie holding the signed-in user's identifier.
pub const USER_ID_COOKIE: &str = "userID";

/// Cookie holding the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Every cookie removed on logout, in removal order.
pub const SESSION_COOKIES: [&str; 2] = [USER_ID_COOKIE, TOKEN_COOKIE];

/// A cookie jar the session can be cleared from.
///
/// Removal is infallible from the caller's point of view; implementations
/// that can fail log and carry on.
#[cfg_attr(test, mockall::automock)]
pub trait CookieStore {
    /// Delete the cookie with the given name.
    fn remove(&mut self, name: &str);
}

/// Remove both session cookies from the store.
pub fn clear_session<S: CookieStore + ?Sized>(store: &mut S) {
    for name in SESSION_COOKIES {
        store.remove(name);
    }
    debug!("Session cookies cleared");
}

/// Serialized `Set-Cookie` style value that expires `name` on `path`.
///
/// Assigning this string to `document.cookie` deletes the cookie.
pub fn removal_cookie(name: &str, path: &str) -> String {
    Cookie::build((name.to_owned(), String::new()))
        .path(path.to_owned())
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
        .to_string()
}
