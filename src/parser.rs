// Windows Firewall log layout:
// date time action protocol src-ip dst-ip src-port dst-port [size tcpflags ... path]
// The trailing `path` column carries SEND / RECEIVE.

use crate::models::domain::{Direction, Record};
use tracing::trace;

pub const MIN_FIELDS: usize = 8;

/// Parses one raw line. Comments, blank lines and lines with fewer than
/// `MIN_FIELDS` tokens yield `None`.
pub fn parse_record(line: &str) -> Option<Record<'_>> {
    if line.starts_with('#') || line.trim().is_empty() {
        return None;
    }

    let mut fields = line.split_whitespace();
    let parts: Vec<&str> = fields.by_ref().take(MIN_FIELDS).collect();
    if parts.len() < MIN_FIELDS {
        trace!(tokens = parts.len(), "skipping short line");
        return None;
    }

    // last token of the whole line, not of the first eight
    let last = fields.last().unwrap_or(parts[MIN_FIELDS - 1]);

    Some(Record {
        action: parts[2],
        protocol: parts[3],
        source_ip: parts[4],
        dest_ip: parts[5],
        source_port: parts[6],
        dest_port: parts[7],
        direction: Direction::from_token(last),
    })
}
