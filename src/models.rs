pub mod domain {
    /// Flow direction taken from the last token of a log line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Direction {
        Send,
        Receive,
        None,
    }

    impl Direction {
        pub fn from_token(token: &str) -> Self {
            match token {
                "SEND" => Direction::Send,
                "RECEIVE" => Direction::Receive,
                _ => Direction::None,
            }
        }
    }

    /// One well-formed log line. Borrows from the line it was parsed from.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Record<'a> {
        pub action: &'a str,
        pub protocol: &'a str,
        pub source_ip: &'a str,
        pub dest_ip: &'a str,
        pub source_port: &'a str,
        pub dest_port: &'a str,
        pub direction: Direction,
    }
}

pub mod dto {
    use serde::Serialize;

    #[derive(Debug, Serialize, Clone, PartialEq, Eq)]
    pub struct CountEntry {
        pub key: String,
        pub count: usize,
    }

    impl CountEntry {
        pub fn new(key: impl Into<String>, count: usize) -> Self {
            Self {
                key: key.into(),
                count,
            }
        }
    }

    #[derive(Debug, Serialize, Clone, PartialEq, Eq)]
    pub struct IpList {
        /// Lexicographically sorted.
        pub ips: Vec<String>,
        pub total: usize,
    }

    /// Watched destination ports that showed up in the log.
    #[derive(Debug, Serialize, Clone, PartialEq, Eq)]
    #[serde(tag = "status", content = "ports", rename_all = "snake_case")]
    pub enum SuspiciousPorts {
        Flagged(Vec<CountEntry>),
        NoneFlagged,
    }

    impl SuspiciousPorts {
        pub fn is_flagged(&self) -> bool {
            matches!(self, SuspiciousPorts::Flagged(_))
        }
    }

    #[derive(Debug, Serialize, Clone, PartialEq, Eq)]
    pub struct Summary {
        /// Every action seen, in first-seen order.
        pub action_counts: Vec<CountEntry>,
        pub top_source_ips: Vec<CountEntry>,
        pub top_dest_ports: Vec<CountEntry>,
        pub send_ips: IpList,
        pub receive_ips: IpList,
        pub suspicious_ports: SuspiciousPorts,
        pub total_entries: usize,
    }
}
