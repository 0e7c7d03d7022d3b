use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::aggregator::TOP_N;
use crate::error::{Error, Result};
use crate::models::dto::{IpList, Summary, SuspiciousPorts};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const INDENT: &str = "   ";

fn push_ip_list(lines: &mut Vec<String>, heading: &str, list: &IpList) {
    lines.push(format!("\nList of IPs for {heading}:"));
    for ip in &list.ips {
        lines.push(format!("{INDENT}{ip}"));
    }
    lines.push(format!("{INDENT}Total: {} IPs", list.total));
}

/// Renders the plain-text report. Lines are joined with `\n` and there is no
/// trailing newline.
pub fn render(summary: &Summary, run_at: NaiveDateTime) -> String {
    let mut lines = Vec::new();

    lines.push("Action counts:".to_string());
    for entry in &summary.action_counts {
        lines.push(format!("{INDENT}{}: {}", entry.key, entry.count));
    }

    lines.push(format!("\nTop {TOP_N} most common source IPs:"));
    for entry in &summary.top_source_ips {
        lines.push(format!("{INDENT}{}: {} connections", entry.key, entry.count));
    }

    lines.push(format!("\nTop {TOP_N} destination ports:"));
    for entry in &summary.top_dest_ports {
        lines.push(format!("{INDENT}Port {}: {} connections", entry.key, entry.count));
    }

    push_ip_list(&mut lines, "SEND", &summary.send_ips);
    push_ip_list(&mut lines, "RECEIVE", &summary.receive_ips);

    lines.push("\nList of IPs/port ranges of concern:".to_string());
    match &summary.suspicious_ports {
        SuspiciousPorts::Flagged(ports) => {
            for entry in ports {
                lines.push(format!("{INDENT}Port {}: {} connections", entry.key, entry.count));
            }
        }
        SuspiciousPorts::NoneFlagged => lines.push(format!("{INDENT}None flagged")),
    }

    lines.push(format!(
        "\n✅ Analysis complete: {} entries processed",
        summary.total_entries
    ));
    lines.push(format!("Run on: {}", run_at.format(TIMESTAMP_FORMAT)));

    lines.join("\n")
}

pub fn write_report(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| Error::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "report written");
    Ok(())
}

pub fn to_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn write_json(path: impl AsRef<Path>, summary: &Summary) -> Result<()> {
    let json = to_json(summary)?;
    write_report(path, &json)
}
