//! BigIP cookie tool — converts between a pool member endpoint and the
//! persistence cookie a BigIP load balancer issues for it.
//!
//! The single argument selects the direction: an `a.b.c.d:port` endpoint is
//! encoded, an `<int>.<int>.0000` cookie (optionally named
//! `BIGipServer<pool>=...`) is decoded. Exactly one line is written to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! bigip_cookie 10.0.0.1:80                 # 16777226.20480.0000
//! bigip_cookie 16777226.20480.0000         # 10.0.0.1:80
//! bigip_cookie --pool web 10.0.0.1:80      # BIGipServerweb=16777226.20480.0000
//! bigip_cookie --format json 16777226.20480.0000
//! ```
//!
//! Any failure, including a missing or unrecognized argument, exits with
//! status 1 after printing the reason and the usage line to stderr.
#![warn(missing_docs)]
mod args;
mod output;

use crate::args::Args;
use crate::output::Conversion;
use clap::{CommandFactory, Parser};
use cookie_common::CookieError;
use cookie_common::Result;
use cookie_common::classify;
use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;

/// Classifies the input, converts it and writes the result line.
fn run(args: &Args) -> Result<(), CookieError> {
    let input = args
        .input
        .as_deref()
        .ok_or_else(|| CookieError::Usage("no input given".to_string()))?;

    debug!("Input '{}', overflow policy {}, format {}", input, args.overflow, args.format);
    let mode = classify(input, args.overflow)?;
    let conversion = Conversion::run(mode, args.pool.as_deref())?;
    let line = conversion.render(args.format)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            e.print().ok();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };
    init_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("error: {}", e);
            if e.is_input_error() {
                eprintln!("{}", Args::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info).parse_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
