use crossbeam_channel::{unbounded, Receiver, Sender};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{debug, error, info};

use crate::aggregator::LogAggregator;
use crate::error::{Error, Result};
use crate::models::dto::Summary;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::ReadSource {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

// Firewall logs are not guaranteed to be valid UTF-8, so lines are decoded lossily.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Reads every line of `path` into memory.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = BufReader::new(open(path)?);
    let mut buf = Vec::new();
    let mut lines = Vec::new();

    while let Some(line) = next_line(&mut reader, &mut buf).map_err(|source| Error::ReadSource {
        path: path.to_path_buf(),
        source,
    })? {
        lines.push(line);
    }
    Ok(lines)
}

// A read error is forwarded as the last item on the channel.
fn stream_lines<R: Read>(reader: R, path: &Path, sender: Sender<io::Result<String>>) {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut sent = 0usize;

    loop {
        match next_line(&mut reader, &mut buf) {
            Ok(Some(line)) => {
                if sender.send(Ok(line)).is_err() {
                    debug!("line receiver dropped, stopping reader");
                    break;
                }
                sent += 1;
            }
            Ok(None) => break,
            Err(e) => {
                error!(path = %path.display(), "read error after {} lines: {}", sent, e);
                let _ = sender.send(Err(e));
                break;
            }
        }
    }
    debug!(lines = sent, "reader finished");
}

/// Opens `path` and streams its lines, in file order, from a background thread.
/// The channel disconnects at end of file, or right after yielding a read error.
pub fn spawn_reader(path: impl AsRef<Path>) -> Result<Receiver<io::Result<String>>> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let file = open(&path)?;
    let (tx, rx) = unbounded();

    let thread_path = path.clone();
    thread::Builder::new()
        .name("fwlog-reader".into())
        .spawn(move || stream_lines(file, &thread_path, tx))
        .map_err(|source| Error::ReadSource { path, source })?;

    Ok(rx)
}

/// Runs one full pass over a log file and returns its summary.
pub fn aggregate_file(path: impl AsRef<Path>) -> Result<Summary> {
    let path = path.as_ref();
    let rx = spawn_reader(path)?;
    let mut aggregator = LogAggregator::new();

    for line in rx {
        let line = line.map_err(|source| Error::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        aggregator.ingest(&line);
    }

    info!(
        path = %path.display(),
        entries = aggregator.total_entries(),
        "finished aggregating log"
    );
    Ok(aggregator.finalize())
}
