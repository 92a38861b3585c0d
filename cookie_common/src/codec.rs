//! Translation between an endpoint and its persistence cookie.
//!
//! The address field is the dotted address read as a little-endian 32-bit
//! integer: `o1 + o2*256 + o3*256^2 + o4*256^3`. The port field is the port
//! with its two bytes swapped.
//!
//! Both byte reversals are done on the zero-padded hexadecimal rendering of
//! the value (8 digits for the address, 4 for the port), split into 2-digit
//! groups whose order is reversed.
use std::net::Ipv4Addr;

use log::debug;

use crate::cookie::PersistenceCookie;
use crate::endpoint::EndpointAddress;
use crate::error::CookieError;
use crate::result::Result;

/// Encodes an endpoint into its cookie value.
pub fn encode(endpoint: &EndpointAddress) -> Result<PersistenceCookie> {
    let ip_encoded = encode_address(endpoint.octets());
    let port_encoded = swap_port(endpoint.port())
        .map_err(|e| CookieError::InvalidAddress(format!("port {}: {}", endpoint.port(), e)))?;

    let cookie = PersistenceCookie::new(ip_encoded, port_encoded);
    debug!("Encoded {} as {}", endpoint, cookie);
    Ok(cookie)
}

/// Decodes a cookie value back into the endpoint it was issued for.
pub fn decode(cookie: &PersistenceCookie) -> Result<EndpointAddress> {
    let malformed = |e: std::num::ParseIntError| {
        CookieError::MalformedCookie(format!("'{}': {}", cookie.value(), e))
    };

    let octets = decode_address(cookie.ip_encoded()).map_err(malformed)?;
    let port = swap_port(cookie.port_encoded()).map_err(malformed)?;

    let endpoint = EndpointAddress::new(Ipv4Addr::from(octets), port);
    debug!("Decoded {} as {}", cookie, endpoint);
    Ok(endpoint)
}

fn encode_address([o1, o2, o3, o4]: [u8; 4]) -> u32 {
    u32::from(o1) + u32::from(o2) * 256 + u32::from(o3) * 256 * 256 + u32::from(o4) * 256 * 256 * 256
}

fn decode_address(ip_encoded: u32) -> std::result::Result<[u8; 4], std::num::ParseIntError> {
    let hex = reverse_hex_bytes(&format!("{:08x}", ip_encoded));
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)?;
    }
    Ok(octets)
}

/// Byte-swaps a 16-bit value through its 4-digit hex rendering. The
/// transform is its own inverse, so it serves both directions.
fn swap_port(value: u16) -> std::result::Result<u16, std::num::ParseIntError> {
    u16::from_str_radix(&reverse_hex_bytes(&format!("{:04x}", value)), 16)
}

/// Reverses the order of the 2-digit groups of an even-length hex string.
fn reverse_hex_bytes(hex: &str) -> String {
    let groups: Vec<&str> = (0..hex.len()).step_by(2).map(|i| &hex[i..i + 2]).collect();
    groups.into_iter().rev().collect()
}
