//! Result of a single conversion and its rendering to stdout.
use cookie_common::{EndpointAddress, Mode, PersistenceCookie, Result, decode, encode};
use log::warn;
use serde::Serialize;

use crate::args::OutputFormat;

/// Direction the conversion ran in.
#[derive(Debug, Clone, Copy, Serialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Endpoint to cookie.
    Encode,
    /// Cookie to endpoint.
    Decode,
}

/// Both sides of a conversion, whichever side was given.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    /// Direction of the conversion.
    pub mode: Direction,
    /// Dotted IPv4 address of the pool member.
    pub address: String,
    /// Port of the pool member.
    pub port: u16,
    /// Bare cookie value, `<int>.<int>.0000`.
    pub cookie: String,
    /// Pool name, when one was given or found in the cookie name.
    pub pool: Option<String>,
    #[serde(skip)]
    text: String,
}

impl Conversion {
    /// Runs the codec in the direction `mode` selects.
    ///
    /// `pool` names the cookie produced when encoding; decoding reports the
    /// pool found in the input instead.
    pub fn run(mode: Mode, pool: Option<&str>) -> Result<Self> {
        match mode {
            Mode::Encode(endpoint) => {
                let mut cookie = encode(&endpoint)?;
                if let Some(pool) = pool {
                    cookie = cookie.with_pool(pool)?;
                }
                Ok(Self::new(Direction::Encode, &endpoint, &cookie, cookie.to_string()))
            }
            Mode::Decode(cookie) => {
                if let Some(pool) = pool {
                    warn!("--pool {} ignored when decoding", pool);
                }
                let endpoint = decode(&cookie)?;
                Ok(Self::new(Direction::Decode, &endpoint, &cookie, endpoint.to_string()))
            }
        }
    }

    fn new(
        mode: Direction,
        endpoint: &EndpointAddress,
        cookie: &PersistenceCookie,
        text: String,
    ) -> Self {
        Conversion {
            mode,
            address: endpoint.address().to_string(),
            port: endpoint.port(),
            cookie: cookie.value(),
            pool: cookie.pool().map(str::to_string),
            text,
        }
    }

    /// The single output line for `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.text.clone()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}
