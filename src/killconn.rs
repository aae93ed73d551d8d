use crate::cli::KillConnArgs;
use crate::conn::Connection;
use crate::filter::filter_connections;
use crate::{listing, reset};
use anyhow::Result;
use log::warn;
use nix::unistd::Uid;

/// Interface over the two OS-level operations, so the driver flow can be
/// exercised without touching the real socket table.
pub trait KillConnOperations {
    /// Enumerates established IPv4 TCP connections.
    fn list_connections(&self) -> Result<Vec<Connection>>;

    /// Resets one connection, returning the underlying command's exit code.
    fn reset_connection(&self, conn: &Connection, dry_run: bool) -> Result<i32>;
}

pub struct KillConn;

impl KillConnOperations for KillConn {
    fn list_connections(&self) -> Result<Vec<Connection>> {
        listing::list_established()
    }

    fn reset_connection(&self, conn: &Connection, dry_run: bool) -> Result<i32> {
        reset::reset_connection(conn, dry_run)
    }
}

/// Runs the whole linear flow: enumerate, then either list, or filter and
/// reset every match.
///
/// Returns the process exit code: 0 on success (list mode and dry-run
/// included), 1 when no connection matched, otherwise the bitwise OR of
/// the reset commands' exit codes.
pub fn run(args: &KillConnArgs, ops: &dyn KillConnOperations) -> Result<i32> {
    if !Uid::effective().is_root() {
        warn!("Not running as root; `ss` may hide connection owners and refuse to reset");
    }

    let connections = ops.list_connections()?;

    if args.list {
        for conn in &connections {
            println!("{:<6} {}", conn.remote_port, conn.describe_processes());
        }
        return Ok(0);
    }

    let process = args.process.as_deref().unwrap_or("");
    let matches = filter_connections(&connections, Some(process), args.port);

    if matches.is_empty() {
        eprintln!("No matching connections found");
        return Ok(1);
    }

    for (index, conn) in matches.iter().enumerate() {
        println!("{}. {} ({})", index + 1, conn.endpoints(), conn.process_names());
    }

    if !args.dry_run {
        warn!("{}", reset::EINVAL_ADVISORY);
    }

    let mut status = 0;
    for conn in &matches {
        status |= ops.reset_connection(conn, args.dry_run)?;
    }

    Ok(status)
}
