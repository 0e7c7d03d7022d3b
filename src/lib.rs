//! Firewall log analysis.
//!
//! [`LogAggregator`] folds raw Windows Firewall log lines into counts and produces a
//! [`Summary`]. The `source` and `report` modules read logs from disk and render or
//! persist the result.

pub mod aggregator;
pub mod config;
pub mod detection;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod report;
pub mod source;

pub use aggregator::{FrequencyCounter, LogAggregator, TOP_N};
pub use error::{Error, Result};
pub use models::domain::{Direction, Record};
pub use models::dto::{CountEntry, IpList, Summary, SuspiciousPorts};
pub use source::aggregate_file;
