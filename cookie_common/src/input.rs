//! Classification of a raw argument into encode or decode mode.
use log::debug;

use crate::cookie::{self, PersistenceCookie};
use crate::endpoint::{self, EndpointAddress};
use crate::error::CookieError;
use crate::policy::OverflowPolicy;
use crate::result::Result;

/// What a single input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Input was an `a.b.c.d:port` endpoint.
    Encode(EndpointAddress),
    /// Input was a `<int>.<int>.0000` cookie, possibly named.
    Decode(PersistenceCookie),
}

/// Decides whether `raw` is an endpoint or a cookie and parses it.
///
/// Input matching neither shape is a `Usage` error. Input with the right
/// shape but bad content fails with `InvalidAddress` or `MalformedCookie`.
pub fn classify(raw: &str, policy: OverflowPolicy) -> Result<Mode> {
    if endpoint::looks_like_endpoint(raw) {
        debug!("'{}' classified as endpoint", raw.trim());
        return EndpointAddress::parse(raw, policy).map(Mode::Encode);
    }
    if cookie::looks_like_cookie(raw) {
        debug!("'{}' classified as cookie", raw.trim());
        return PersistenceCookie::parse(raw).map(Mode::Decode);
    }
    Err(CookieError::Usage(format!(
        "'{}' is neither an a.b.c.d:port endpoint nor an <int>.<int>.0000 cookie",
        raw.trim()
    )))
}
