use fwlog::detection::SUSPICIOUS_PORTS;
use fwlog::{LogAggregator, SuspiciousPorts, TOP_N};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "ALLOW", "DROP", "DENY", "TCP", "UDP", "10.0.0.1", "10.0.0.2", "192.168.1.1", "22",
        "23", "80", "443", "445", "3389", "-", "SEND", "RECEIVE",
    ])
    .prop_map(|s| s.to_string())
}

/// Mix of well-formed records, short lines, comments and blanks.
fn log_line() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::collection::vec(token(), 8..14).prop_map(|t| t.join(" ")),
        1 => prop::collection::vec(token(), 0..8).prop_map(|t| t.join("  ")),
        1 => ".*".prop_map(|s| format!("#{s}")),
        1 => "[ \t]*",
    ]
}

fn is_counted(line: &str) -> bool {
    !line.starts_with('#') && line.split_whitespace().count() >= 8
}

proptest! {
    #[test]
    fn totals_match_well_formed_lines(lines in prop::collection::vec(log_line(), 0..60)) {
        let mut agg = LogAggregator::new();
        agg.ingest_all(&lines);

        let expected = lines.iter().filter(|l| is_counted(l)).count();
        prop_assert_eq!(agg.total_entries(), expected);
        prop_assert_eq!(agg.action_counts().total(), expected);
        prop_assert_eq!(agg.source_ip_counts().total(), expected);
        prop_assert_eq!(agg.dest_port_counts().total(), expected);
    }

    #[test]
    fn summary_shape_holds(lines in prop::collection::vec(log_line(), 0..60)) {
        let mut agg = LogAggregator::new();
        agg.ingest_all(&lines);
        let summary = agg.finalize();

        prop_assert!(summary.top_source_ips.len() <= TOP_N);
        prop_assert_eq!(summary.top_source_ips.len(), agg.source_ip_counts().len().min(TOP_N));
        prop_assert_eq!(summary.top_dest_ports.len(), agg.dest_port_counts().len().min(TOP_N));
        for pair in summary.top_dest_ports.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }

        let mut sorted = summary.send_ips.ips.clone();
        sorted.sort();
        prop_assert_eq!(&sorted, &summary.send_ips.ips);
        prop_assert_eq!(summary.send_ips.total, summary.send_ips.ips.len());
        prop_assert_eq!(summary.receive_ips.total, summary.receive_ips.ips.len());

        match &summary.suspicious_ports {
            SuspiciousPorts::Flagged(ports) => {
                prop_assert!(!ports.is_empty());
                for entry in ports {
                    prop_assert!(SUSPICIOUS_PORTS.contains(&entry.key.as_str()));
                    prop_assert_eq!(entry.count, agg.dest_port_counts().get(&entry.key));
                }
            }
            SuspiciousPorts::NoneFlagged => {
                for port in SUSPICIOUS_PORTS {
                    prop_assert_eq!(agg.dest_port_counts().get(port), 0);
                }
            }
        }

        prop_assert_eq!(summary, agg.finalize());
    }

    #[test]
    fn each_line_feeds_at_most_one_direction(line in log_line()) {
        let mut agg = LogAggregator::new();
        agg.ingest(&line);
        let summary = agg.finalize();
        prop_assert!(summary.send_ips.total + summary.receive_ips.total <= 1);
    }
}
