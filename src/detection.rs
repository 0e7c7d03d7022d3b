use crate::models::dto::{CountEntry, SuspiciousPorts};

/// SMB, RDP, SSH, Telnet.
pub const SUSPICIOUS_PORTS: [&str; 4] = ["445", "3389", "22", "23"];

pub fn is_suspicious_port(port: &str) -> bool {
    SUSPICIOUS_PORTS.contains(&port)
}

/// Keeps the watched ports from `port_counts`, preserving its order.
pub fn flag_suspicious_ports<'a, I>(port_counts: I) -> SuspiciousPorts
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    let flagged: Vec<CountEntry> = port_counts
        .into_iter()
        .filter(|(port, _)| is_suspicious_port(port))
        .map(|(port, count)| CountEntry::new(port, count))
        .collect();

    if flagged.is_empty() {
        SuspiciousPorts::NoneFlagged
    } else {
        SuspiciousPorts::Flagged(flagged)
    }
}
