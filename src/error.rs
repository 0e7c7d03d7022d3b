use std::io;
use std::path::PathBuf;

/// Failures of the layers around the aggregator. The aggregator itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Log file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize summary")]
    Json(#[from] serde_json::Error),

    #[error("failed to read answer from stdin")]
    Prompt(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
