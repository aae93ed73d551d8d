use crate::conn::Connection;

/// Selects the connections matching the given criteria, preserving order.
///
/// `process` is a case-insensitive substring matched against owning process
/// names; a record with no known owner never matches a present process
/// criterion, even the empty substring. `port` must equal the remote port's
/// decimal form exactly. Present criteria combine with AND; with neither
/// present every record matches.
pub fn filter_connections(
    connections: &[Connection],
    process: Option<&str>,
    port: Option<u16>,
) -> Vec<Connection> {
    connections
        .iter()
        .filter(|conn| matches(conn, process, port))
        .cloned()
        .collect()
}

fn matches(conn: &Connection, process: Option<&str>, port: Option<u16>) -> bool {
    if let Some(substr) = process {
        let substr = substr.to_lowercase();
        if !conn
            .processes
            .iter()
            .any(|p| p.name.to_lowercase().contains(&substr))
        {
            return false;
        }
    }
    if let Some(port) = port {
        if conn.remote_port != port.to_string() {
            return false;
        }
    }
    true
}
