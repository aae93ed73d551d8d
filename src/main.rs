//! The `killconn` command-line utility inspects established IPv4 TCP
//! connections and forcibly resets the ones matching an owning process
//! name and/or a remote port.
//!
//! It exists to exercise reconnection logic in long-lived network clients
//! by simulating abrupt connection loss.

use clap::Parser;
use killconn::cli::KillConnArgs;
use killconn::killconn::{run, KillConn};
use log::error;
use std::process::exit;

fn main() {
    // Parse command-line arguments
    let args = KillConnArgs::parse();

    // Set up logging environment
    let log_level = args
        .verbose
        .log_level()
        .map(|level| level.to_level_filter())
        .unwrap_or(log::LevelFilter::Off);

    env_logger::Builder::new()
        .format_module_path(log_level == log::LevelFilter::Trace)
        .format_target(log_level == log::LevelFilter::Trace)
        .format_timestamp(Option::None)
        .filter_level(log_level)
        .init();

    match run(&args, &KillConn) {
        Ok(code) => exit(code),
        Err(err) => {
            error!("{:#}", err);
            exit(1);
        }
    }
}
