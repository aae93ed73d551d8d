use regex::Regex;

/// One established IPv4 TCP connection as reported by the socket table
/// query. Records are immutable once parsed and live only for the duration
/// of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Always "established"; the enumeration query is state-filtered.
    pub state: String,
    pub local_ip: String,
    pub local_port: String,
    pub remote_ip: String,
    pub remote_port: String,
    /// Owning processes, in reported order. Empty when ownership could not
    /// be determined (e.g. insufficient privilege).
    pub processes: Vec<ProcessRef>,
    /// The original unparsed line, kept for diagnostics.
    pub raw: String,
}

/// An owning process reference from the `users:(...)` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRef {
    pub name: String,
    pub pid: u32,
}

impl Connection {
    /// `local_ip:local_port -> remote_ip:remote_port`
    pub fn endpoints(&self) -> String {
        format!(
            "{}:{} -> {}:{}",
            self.local_ip, self.local_port, self.remote_ip, self.remote_port
        )
    }

    /// Comma-joined unique owner names, or "unknown" when there are none.
    pub fn process_names(&self) -> String {
        let mut names: Vec<&str> = Vec::new();
        for process in &self.processes {
            if !names.contains(&process.name.as_str()) {
                names.push(&process.name);
            }
        }
        if names.is_empty() {
            "unknown".to_string()
        } else {
            names.join(",")
        }
    }

    /// Owner list as `name(pid)` pairs, or `-` when there are none.
    pub fn describe_processes(&self) -> String {
        if self.processes.is_empty() {
            return "-".to_string();
        }
        self.processes
            .iter()
            .map(|p| format!("{}({})", p.name, p.pid))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Parses one line of `ss` output into a connection record.
///
/// Expects five whitespace-separated fields: recv-queue, send-queue, local
/// endpoint, peer endpoint and the process annotation. `ss` omits the State
/// column when given a state filter, but some builds keep it; a sixth
/// leading field is taken to be the state label and dropped. Lines that do
/// not fit, or whose endpoints lack a `:` separator, yield `None`.
pub fn parse_line(line: &str) -> Option<Connection> {
    let mut fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() == 6 {
        fields.remove(0);
    }
    if fields.len() != 5 {
        return None;
    }

    let (local_ip, local_port) = fields[2].rsplit_once(':')?;
    let (remote_ip, remote_port) = fields[3].rsplit_once(':')?;

    Some(Connection {
        state: "established".to_string(),
        local_ip: local_ip.to_string(),
        local_port: local_port.to_string(),
        remote_ip: remote_ip.to_string(),
        remote_port: remote_port.to_string(),
        processes: parse_process_field(fields[4]),
        raw: line.to_string(),
    })
}

/// Extracts `(name, pid)` owner pairs from a `users:(("name",pid=N,fd=M),...)`
/// annotation. Zero matches is not an error.
fn parse_process_field(field: &str) -> Vec<ProcessRef> {
    let pattern = Regex::new(r#"\("([^"]*)",pid=(\d+)"#).unwrap();
    pattern
        .captures_iter(field)
        .filter_map(|caps| {
            Some(ProcessRef {
                name: caps[1].to_string(),
                pid: caps[2].parse().ok()?,
            })
        })
        .collect()
}
