use crate::conn::{self, Connection};
use anyhow::{bail, Context, Result};
use log::debug;
use std::process::Command;

/// Enumerates established IPv4 TCP connections via `ss`.
///
/// Asks for numeric, process-annotated, headerless output so the result is
/// stable and script-friendly. A failure to run `ss`, or a non-zero exit
/// from it, is fatal: without a complete listing there is nothing sensible
/// to filter or reset.
pub fn list_established() -> Result<Vec<Connection>> {
    let output = Command::new("ss")
        .args(["-H", "-t", "-n", "-p", "-4", "state", "established"])
        .output()
        .context("failed to run `ss`")?;

    if !output.status.success() {
        bail!(
            "`ss` exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(parse_output(&String::from_utf8_lossy(&output.stdout)))
}

/// Parses `ss` output, one connection per line, skipping lines that do not
/// fit the expected shape.
pub fn parse_output(output: &str) -> Vec<Connection> {
    let mut connections = Vec::new();
    for line in output.lines() {
        match conn::parse_line(line) {
            Some(connection) => connections.push(connection),
            None => {
                if !line.trim().is_empty() {
                    debug!("Skipping unparseable line: {}", line);
                }
            }
        }
    }
    connections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_lines_and_drops_garbage() {
        let output = "\
ESTAB 0 0 10.0.0.5:54321 93.184.216.34:443 users:((\"curl\",pid=1234,fd=5))
Recv-Q Send-Q Local Address:Port Peer Address:Port Process
0 0 192.168.1.10:40000 10.0.0.1:8080 users:((\"nginx\",pid=77,fd=12))

not a connection line
";
        let connections = parse_output(output);
        assert_eq!(connections.len(), 2);
        assert_eq!(connections[0].remote_port, "443");
        assert_eq!(connections[1].remote_port, "8080");
    }

    #[test]
    fn empty_output_gives_empty_listing() {
        assert!(parse_output("").is_empty());
        assert!(parse_output("\n\n").is_empty());
    }
}
