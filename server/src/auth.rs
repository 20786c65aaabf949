//! Bearer-presence gate
//!
//! Identity is delegated to an external provider; the server only checks
//! that a bearer credential is present, never its contents.

use hyper::{header, Body, Request};

/// The bearer token on a request, if one is present and non-empty
pub fn bearer_token(req: &Request<Body>) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
