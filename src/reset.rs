use crate::conn::Connection;
use anyhow::{Context, Result};
use std::process::Command;

/// Some kernels answer the socket-destroy request with an "Invalid
/// argument" netlink error even though the connection is torn down.
pub const EINVAL_ADVISORY: &str =
    "`ss -K` may report \"Invalid argument\" on some kernels even when the reset takes effect";

/// Argument vector for the `ss -K` invocation targeting exactly one 4-tuple.
pub fn reset_args(conn: &Connection) -> Vec<String> {
    vec![
        "-K".to_string(),
        "src".to_string(),
        conn.local_ip.clone(),
        "sport".to_string(),
        "=".to_string(),
        conn.local_port.clone(),
        "dst".to_string(),
        conn.remote_ip.clone(),
        "dport".to_string(),
        "=".to_string(),
        conn.remote_port.clone(),
    ]
}

/// Printable form of the reset command.
pub fn reset_command_line(conn: &Connection) -> String {
    format!("ss {}", reset_args(conn).join(" "))
}

/// Asks the kernel to reset a single connection.
///
/// The command line is printed before anything runs, so the operator can
/// see exactly what will be executed; in dry-run mode that is all that
/// happens. The command's stderr stays attached to ours, so kernel
/// diagnostics reach the operator verbatim. Returns the command's exit
/// code, 0 meaning the reset was accepted.
pub fn reset_connection(conn: &Connection, dry_run: bool) -> Result<i32> {
    println!("+ {}", reset_command_line(conn));
    if dry_run {
        return Ok(0);
    }

    let status = Command::new("ss")
        .args(reset_args(conn))
        .status()
        .context("failed to run `ss -K`")?;

    if status.success() {
        println!("Reset {}", conn.endpoints());
        Ok(0)
    } else {
        let code = status.code().unwrap_or(1);
        eprintln!(
            "Failed to reset {}: `ss -K` exited with code {}",
            conn.endpoints(),
            code
        );
        Ok(code)
    }
}
