//! `cross-build` entry point: discover host defaults, parse the shared flags
//! and print the resolved configuration.

use std::io;

use cross_build::error::{CrossBuildError, Result};
use cross_build::{resolve, write_flags};
use cross_flags::{HostDefaults, is_display_request};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let defaults = HostDefaults::discover()?;
    let flags = match resolve(std::env::args_os(), &defaults) {
        Ok(flags) => flags,
        Err(CrossBuildError::Usage(err)) => {
            if !is_display_request(&err) {
                tracing::debug!(kind = ?err.kind(), "command line rejected");
            }
            err.exit()
        }
        Err(other) => return Err(other),
    };
    let mut stdout = io::stdout().lock();
    write_flags(&mut stdout, &flags)
}
