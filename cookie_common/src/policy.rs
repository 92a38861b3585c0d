//! Handling of out-of-range octets and ports when encoding.

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// What to do when an endpoint carries an octet above 255 or a port above 65535.
///
/// `Reject` refuses such input with `CookieError::InvalidAddress`. `Wrap`
/// reduces each octet modulo 256 and the port modulo 65536, matching the
/// silent truncation older tooling applied when it packed values into bytes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OverflowPolicy {
    /// Fail on out-of-range values.
    #[default]
    Reject,
    /// Truncate out-of-range values to their field width.
    Wrap,
}

/// Octet and port moduli both divide this, so reducing by it keeps both results.
const WRAP_MODULUS: u64 = 65536;

impl OverflowPolicy {
    /// Reads an ASCII decimal digit string.
    ///
    /// `Reject` needs the exact value and yields `None` past `u64`. `Wrap`
    /// reduces while reading, so a digit string of any length is accepted.
    pub fn read(self, digits: &str) -> Option<u64> {
        match self {
            OverflowPolicy::Reject => digits.parse::<u64>().ok(),
            OverflowPolicy::Wrap => {
                if digits.is_empty() || !digits.bytes().all(|d| d.is_ascii_digit()) {
                    return None;
                }
                Some(
                    digits
                        .bytes()
                        .fold(0, |acc, d| (acc * 10 + u64::from(d - b'0')) % WRAP_MODULUS),
                )
            }
        }
    }

    /// Narrows a parsed octet to `u8`, or `None` if the policy rejects it.
    pub fn octet(self, value: u64) -> Option<u8> {
        match self {
            OverflowPolicy::Reject => u8::try_from(value).ok(),
            OverflowPolicy::Wrap => Some((value % 256) as u8),
        }
    }

    /// Narrows a parsed port to `u16`, or `None` if the policy rejects it.
    pub fn port(self, value: u64) -> Option<u16> {
        match self {
            OverflowPolicy::Reject => u16::try_from(value).ok(),
            OverflowPolicy::Wrap => Some((value % 65536) as u16),
        }
    }
}
