//! One-shot messages carried across a redirect in a cookie.

use tower_cookies::{Cookie, Cookies};

pub const FLASH_COOKIE: &str = "flash";

/// Stores `message` to be shown by the next page that calls [`take`].
pub fn set(cookies: &Cookies, message: &str) {
    let mut cookie = Cookie::new(FLASH_COOKIE, urlencoding::encode(message).into_owned());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookies.add(cookie);
}

/// Returns the pending message, if any, and clears it.
pub fn take(cookies: &Cookies) -> Option<String> {
    let cookie = cookies.get(FLASH_COOKIE)?;

    let mut removal = Cookie::new(FLASH_COOKIE, "");
    removal.set_path("/");
    cookies.remove(removal);

    match urlencoding::decode(cookie.value()) {
        Ok(message) if !message.is_empty() => Some(message.into_owned()),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!("Discarding malformed flash cookie: {}", e);
            None
        }
    }
}
