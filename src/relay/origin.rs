//! Origin allow-list: only loopback pages may use the relay from a browser.

use url::Url;

/// Returns true when a request with this `Origin` header may be served.
/// A missing or empty origin means a non-browser client (curl, the TUI) and is allowed.
pub fn is_allowed_origin(origin: Option<&str>) -> bool {
    let Some(origin) = origin.filter(|o| !o.is_empty()) else {
        return true;
    };
    match Url::parse(origin) {
        Ok(url) => matches!(url.host_str(), Some("localhost" | "127.0.0.1")),
        Err(_) => false,
    }
}
