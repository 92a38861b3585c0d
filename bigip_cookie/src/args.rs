//! Command-line arguments for the cookie tool.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};
use cookie_common::OverflowPolicy;
use strum::Display;

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Display, Eq, PartialEq)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// The converted value alone.
    #[default]
    Text,
    /// One JSON object describing the conversion.
    Json,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Endpoint to encode (`a.b.c.d:port`) or cookie to decode (`<int>.<int>.0000`,
    /// optionally `BIGipServer<pool>=...`).
    pub input: Option<String>,

    /// What to do with octets above 255 or ports above 65535.
    #[clap(long, value_enum, env = "BIGIP_COOKIE_OVERFLOW", default_value_t = OverflowPolicy::Reject)]
    pub overflow: OverflowPolicy,

    /// Pool name; when encoding, print `BIGipServer<POOL>=<cookie>`.
    #[clap(long)]
    pub pool: Option<String>,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log debug details to stderr.
    #[clap(short, long)]
    pub verbose: bool,
}
