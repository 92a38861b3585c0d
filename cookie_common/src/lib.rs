//! BigIP persistence-cookie codec shared by the command-line tool.
//!
//! This crate aggregates:
//! - `error` — unified error type `CookieError`.
//! - `result` — handy `Result<T, CookieError>` alias.
//! - `endpoint` — `EndpointAddress`, the `a.b.c.d:port` side of the codec.
//! - `cookie` — `PersistenceCookie`, the `<int>.<int>.0000` side.
//! - `codec` — `encode` / `decode` between the two.
//! - `policy` — `OverflowPolicy` for out-of-range endpoint input.
//! - `input` — classification of a raw argument into a `Mode`.
#![warn(missing_docs)]
pub mod codec;
pub mod cookie;
pub mod endpoint;
pub mod error;
pub mod input;
pub mod policy;
pub mod result;

pub use codec::{decode, encode};
pub use cookie::PersistenceCookie;
pub use endpoint::EndpointAddress;
pub use error::CookieError;
pub use input::{Mode, classify};
pub use policy::OverflowPolicy;
pub use result::Result;
