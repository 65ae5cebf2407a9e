//! # podpath: host path per pod Flexvolume driver
//!
//! Like `hostPath`, but every pod gets its own directory:
//! `<hostPath>/<pod namespace>/<pod name>/<pod uid>` is created on demand
//! and bind-mounted into the pod's volume directory.
//!
//! The orchestrator reads exactly one JSON line from stdout per call, so
//! all diagnostics go to stderr.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

mod commands;
mod logging;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref(), cli.log_format);
    commands::execute(cli)
}
