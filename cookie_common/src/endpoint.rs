//! Backend endpoint (IPv4 address plus port) as written on the command line.
//!
//! An endpoint is written `a.b.c.d:port`. Every captured digit string is read
//! and narrowed to `u8`/`u16` through the active `OverflowPolicy`, so
//! out-of-range values never wrap by accident.
use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::error::CookieError;
use crate::policy::OverflowPolicy;
use crate::result::Result;

lazy_static! {
    static ref ENDPOINT: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+):([0-9]+)$").unwrap(/* known good */);
}

/// Returns `true` if `s` has the lexical shape of an `a.b.c.d:port` endpoint.
///
/// Only the shape is checked; ranges are validated by [`EndpointAddress::parse`].
pub fn looks_like_endpoint(s: &str) -> bool {
    ENDPOINT.is_match(s.trim())
}

/// IPv4 address and port of a pool member.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EndpointAddress {
    address: Ipv4Addr,
    port: u16,
}

impl EndpointAddress {
    /// Creates an endpoint from already-bounded parts.
    pub fn new(address: Ipv4Addr, port: u16) -> Self {
        Self { address, port }
    }

    /// Parses `a.b.c.d:port`, narrowing octets and port with `policy`.
    pub fn parse(s: &str, policy: OverflowPolicy) -> Result<Self> {
        let trimmed = s.trim();
        let caps = ENDPOINT.captures(trimmed).ok_or_else(|| {
            CookieError::InvalidAddress(format!("'{}' is not of the form a.b.c.d:port", trimmed))
        })?;

        let mut octets = [0u8; 4];
        for (i, octet) in octets.iter_mut().enumerate() {
            let digits = &caps[i + 1];
            *octet = policy.read(digits).and_then(|v| policy.octet(v)).ok_or_else(|| {
                CookieError::InvalidAddress(format!(
                    "octet {} of '{}' is {}, expected 0-255",
                    i + 1,
                    trimmed,
                    digits
                ))
            })?;
            if wrapped(digits, u64::from(*octet)) {
                warn!("Octet {} of '{}' wrapped from {} to {}", i + 1, trimmed, digits, octet);
            }
        }

        let digits = &caps[5];
        let port = policy.read(digits).and_then(|v| policy.port(v)).ok_or_else(|| {
            CookieError::InvalidAddress(format!(
                "port of '{}' is {}, expected 0-65535",
                trimmed, digits
            ))
        })?;
        if wrapped(digits, u64::from(port)) {
            warn!("Port of '{}' wrapped from {} to {}", trimmed, digits, port);
        }

        Ok(Self::new(Ipv4Addr::from(octets), port))
    }

    /// IPv4 address of the endpoint.
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// The four octets in dotted-decimal order.
    pub fn octets(&self) -> [u8; 4] {
        self.address.octets()
    }

    /// Port of the endpoint.
    pub fn port(&self) -> u16 {
        self.port
    }
}

fn wrapped(digits: &str, kept: u64) -> bool {
    digits.parse::<u64>().map_or(true, |v| v != kept)
}

impl FromStr for EndpointAddress {
    type Err = CookieError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, OverflowPolicy::Reject)
    }
}

impl From<SocketAddrV4> for EndpointAddress {
    fn from(addr: SocketAddrV4) -> Self {
        Self::new(*addr.ip(), addr.port())
    }
}

impl From<EndpointAddress> for SocketAddrV4 {
    fn from(endpoint: EndpointAddress) -> Self {
        SocketAddrV4::new(endpoint.address, endpoint.port)
    }
}

impl fmt::Display for EndpointAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}
