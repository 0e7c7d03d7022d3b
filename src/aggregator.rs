use std::collections::{BTreeSet, HashMap};

use crate::detection::flag_suspicious_ports;
use crate::models::domain::Direction;
use crate::models::dto::{CountEntry, IpList, Summary};
use crate::parser::parse_record;

pub const TOP_N: usize = 5;

/// Occurrence counter that remembers the order keys were first seen.
#[derive(Debug, Default, Clone)]
pub struct FrequencyCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.to_owned(), self.entries.len());
                self.entries.push((key.to_owned(), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// The `n` highest counts. Ties keep first-seen order (the sort is stable).
    pub fn most_common(&self, n: usize) -> Vec<CountEntry> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(key, count)| CountEntry::new(key.as_str(), *count))
            .collect()
    }

    fn to_entries(&self) -> Vec<CountEntry> {
        self.iter().map(|(key, count)| CountEntry::new(key, count)).collect()
    }
}

/// Single-pass statistics over a firewall log.
#[derive(Debug, Default, Clone)]
pub struct LogAggregator {
    action_counts: FrequencyCounter,
    source_ip_counts: FrequencyCounter,
    dest_port_counts: FrequencyCounter,
    send_ips: BTreeSet<String>,
    receive_ips: BTreeSet<String>,
    total_entries: usize,
}

impl LogAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one raw line into the statistics. Lines that do not parse are dropped.
    pub fn ingest(&mut self, line: &str) {
        let Some(record) = parse_record(line) else {
            return;
        };

        self.action_counts.increment(record.action);
        self.source_ip_counts.increment(record.source_ip);
        self.dest_port_counts.increment(record.dest_port);
        self.total_entries += 1;

        match record.direction {
            Direction::Send => {
                self.send_ips.insert(record.source_ip.to_owned());
            }
            Direction::Receive => {
                self.receive_ips.insert(record.dest_ip.to_owned());
            }
            Direction::None => {}
        }
    }

    pub fn ingest_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.ingest(line.as_ref());
        }
    }

    pub fn total_entries(&self) -> usize {
        self.total_entries
    }

    pub fn action_counts(&self) -> &FrequencyCounter {
        &self.action_counts
    }

    pub fn source_ip_counts(&self) -> &FrequencyCounter {
        &self.source_ip_counts
    }

    pub fn dest_port_counts(&self) -> &FrequencyCounter {
        &self.dest_port_counts
    }

    pub fn finalize(&self) -> Summary {
        Summary {
            action_counts: self.action_counts.to_entries(),
            top_source_ips: self.source_ip_counts.most_common(TOP_N),
            top_dest_ports: self.dest_port_counts.most_common(TOP_N),
            send_ips: ip_list(&self.send_ips),
            receive_ips: ip_list(&self.receive_ips),
            suspicious_ports: flag_suspicious_ports(self.dest_port_counts.iter()),
            total_entries: self.total_entries,
        }
    }
}

fn ip_list(ips: &BTreeSet<String>) -> IpList {
    IpList {
        ips: ips.iter().cloned().collect(),
        total: ips.len(),
    }
}
