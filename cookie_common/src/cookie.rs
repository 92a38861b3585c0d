//! BigIP persistence cookie value.
//!
//! The value has the shape `<ipEncoded>.<portEncoded>.0000`. When copied out of
//! an HTTP header it may also carry the cookie name, `BIGipServer<pool>=`, and
//! trailing attributes such as `; path=/`. Both are accepted on input; the
//! pool name is kept so it can be reported, the attributes are dropped.
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::CookieError;
use crate::result::Result;

/// Literal suffix closing every cookie value.
pub const SUFFIX: &str = "0000";
/// Prefix of the cookie name the load balancer sets.
pub const NAME_PREFIX: &str = "BIGipServer";

lazy_static! {
    static ref COOKIE: Regex = Regex::new(
        r"^(?:BIGipServer([A-Za-z0-9_.~-]+)=)?([0-9]+)\.([0-9]+)\.([0-9]+)(?:\s*;.*)?$"
    )
    .unwrap(/* known good */);
    static ref POOL: Regex = Regex::new(r"^[A-Za-z0-9_.~-]+$").unwrap(/* known good */);
}

/// Returns `true` if `s` has the lexical shape of a cookie: three
/// dot-separated integers, optionally named. The suffix is checked by
/// [`PersistenceCookie::parse`].
pub fn looks_like_cookie(s: &str) -> bool {
    COOKIE.is_match(s.trim())
}

/// Encoded address and port of a pool member, as issued to clients.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PersistenceCookie {
    ip_encoded: u32,
    port_encoded: u16,
    pool: Option<String>,
}

impl PersistenceCookie {
    /// Creates a cookie from its two encoded fields.
    pub fn new(ip_encoded: u32, port_encoded: u16) -> Self {
        Self {
            ip_encoded,
            port_encoded,
            pool: None,
        }
    }

    /// Attaches the pool the cookie is issued for.
    pub fn with_pool(mut self, pool: &str) -> Result<Self> {
        if !POOL.is_match(pool) {
            return Err(CookieError::Usage(format!(
                "'{}' is not a valid pool name",
                pool
            )));
        }
        self.pool = Some(pool.to_string());
        Ok(self)
    }

    /// Parses a cookie value, optionally prefixed with `BIGipServer<pool>=`.
    ///
    /// Fails with `MalformedCookie` unless the input has three integer
    /// segments, the last is literally `0000`, and the first two fit 32 and
    /// 16 bits respectively.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let caps = COOKIE.captures(trimmed).ok_or_else(|| {
            CookieError::MalformedCookie(format!(
                "'{}' is not of the form <int>.<int>.{}",
                trimmed, SUFFIX
            ))
        })?;

        if &caps[4] != SUFFIX {
            return Err(CookieError::MalformedCookie(format!(
                "'{}' must end in .{}, found .{}",
                trimmed, SUFFIX, &caps[4]
            )));
        }

        let ip_encoded = caps[2].parse::<u32>().map_err(|e| {
            CookieError::MalformedCookie(format!(
                "address field '{}' of '{}': {}",
                &caps[2], trimmed, e
            ))
        })?;
        let port_encoded = caps[3].parse::<u16>().map_err(|e| {
            CookieError::MalformedCookie(format!(
                "port field '{}' of '{}': {}",
                &caps[3], trimmed, e
            ))
        })?;

        Ok(Self {
            ip_encoded,
            port_encoded,
            pool: caps.get(1).map(|m| m.as_str().to_string()),
        })
    }

    /// Little-endian encoded address field.
    pub fn ip_encoded(&self) -> u32 {
        self.ip_encoded
    }

    /// Byte-swapped port field.
    pub fn port_encoded(&self) -> u16 {
        self.port_encoded
    }

    /// Pool name, if the cookie was named.
    pub fn pool(&self) -> Option<&str> {
        self.pool.as_deref()
    }

    /// Cookie name (`BIGipServer<pool>`), if a pool is known.
    pub fn name(&self) -> Option<String> {
        self.pool.as_ref().map(|p| format!("{}{}", NAME_PREFIX, p))
    }

    /// Bare value without the cookie name.
    pub fn value(&self) -> String {
        format!("{}.{}.{}", self.ip_encoded, self.port_encoded, SUFFIX)
    }
}

impl FromStr for PersistenceCookie {
    type Err = CookieError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Renders `name=value` when a pool is attached, the bare value otherwise.
impl fmt::Display for PersistenceCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}={}", name, self.value()),
            None => f.write_str(&self.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_value() {
        let c: PersistenceCookie = "16777226.20480.0000".parse().unwrap();
        assert_eq!(c.ip_encoded(), 16777226);
        assert_eq!(c.port_encoded(), 20480);
        assert_eq!(c.pool(), None);
        assert_eq!(c.to_string(), "16777226.20480.0000");
    }

    #[test]
    fn parses_zero_cookie() {
        let c: PersistenceCookie = "0.0.0000".parse().unwrap();
        assert_eq!((c.ip_encoded(), c.port_encoded()), (0, 0));
        assert_eq!(c.value(), "0.0.0000");
    }

    #[test]
    fn parses_named_header_value() {
        let c = PersistenceCookie::parse("BIGipServerweb_pool=16777226.20480.0000; path=/").unwrap();
        assert_eq!(c.pool(), Some("web_pool"));
        assert_eq!(c.name().as_deref(), Some("BIGipServerweb_pool"));
        assert_eq!(c.value(), "16777226.20480.0000");
        assert_eq!(c.to_string(), "BIGipServerweb_pool=16777226.20480.0000");
    }

    #[test]
    fn rejects_wrong_suffix() {
        assert!(looks_like_cookie("1.2.3"));
        assert!(matches!(
            PersistenceCookie::parse("1.2.3"),
            Err(CookieError::MalformedCookie(_))
        ));
        assert!(matches!(
            PersistenceCookie::parse("1.2.00000"),
            Err(CookieError::MalformedCookie(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_segments() {
        assert!(!looks_like_cookie("abc.def.0000"));
        assert!(matches!(
            PersistenceCookie::parse("abc.def.0000"),
            Err(CookieError::MalformedCookie(_))
        ));
        assert!(matches!(
            PersistenceCookie::parse("1.2.3.0000"),
            Err(CookieError::MalformedCookie(_))
        ));
        assert!(matches!(
            PersistenceCookie::parse(""),
            Err(CookieError::MalformedCookie(_))
        ));
    }

    #[test]
    fn rejects_fields_wider_than_encoding() {
        assert!(matches!(
            PersistenceCookie::parse("4294967296.0.0000"),
            Err(CookieError::MalformedCookie(_))
        ));
        assert!(matches!(
            PersistenceCookie::parse("1.65536.0000"),
            Err(CookieError::MalformedCookie(_))
        ));
        assert!(PersistenceCookie::parse("4294967295.65535.0000").is_ok());
    }

    #[test]
    fn validates_pool_names() {
        let c = PersistenceCookie::new(1, 2);
        assert!(c.clone().with_pool("app-01.prod").is_ok());
        assert!(matches!(c.clone().with_pool(""), Err(CookieError::Usage(_))));
        assert!(matches!(c.with_pool("a b"), Err(CookieError::Usage(_))));
    }
}
