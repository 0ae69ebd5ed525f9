//! Log analysis pipeline for mdlog.
//!
//! Dispatches each input file to its dialect parser, concatenates the
//! per-key series across files, and validates frame-count consistency
//! before handing the table to the caller.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use mdlog_core::error::{MdlogError, Result};
use mdlog_core::series::SeriesTable;
use tracing::{debug, warn};

use crate::{amber, namd};

// ── LogDialect ────────────────────────────────────────────────────────────────

/// The two supported log file structural formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDialect {
    /// AMBER (including CHAMBER) mdout: tagged RESULTS section.
    Amber,
    /// NAMD log: ETITLE header plus ENERGY record stream.
    Namd,
}

impl LogDialect {
    /// The key whose series length defines the canonical frame count.
    pub fn frame_index_key(self) -> &'static str {
        match self {
            LogDialect::Amber => "TIME",
            LogDialect::Namd => "TS",
        }
    }

    /// Human-readable file-type name for diagnostics.
    pub fn filetype(self) -> &'static str {
        match self {
            LogDialect::Amber => amber::FILETYPE,
            LogDialect::Namd => namd::FILETYPE,
        }
    }
}

impl std::str::FromStr for LogDialect {
    type Err = MdlogError;

    /// Case-insensitive dialect selector, as given on the command line.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "amber" => Ok(LogDialect::Amber),
            "namd" => Ok(LogDialect::Namd),
            _ => Err(MdlogError::UnsupportedDialect(s.to_string())),
        }
    }
}

// ── Aggregation ───────────────────────────────────────────────────────────────

/// Parse every file in caller order, concatenate the per-key series, and
/// validate that each retained series has one value per frame.
///
/// Files representing sequential simulation segments concatenate into one
/// continuous time series per key. Series whose length differs from the
/// frame count are meaningless as aligned time series (they typically appear
/// only on restart boundaries) and are dropped with a warning. Parse
/// failures propagate immediately; no partial aggregate is exposed.
pub fn analyze(dialect: LogDialect, paths: &[PathBuf]) -> Result<SeriesTable> {
    let mut data = SeriesTable::new();

    for path in paths {
        let parsed = parse_file(dialect, path)?;
        debug!(
            "Read {} file {}: {} data sets",
            dialect.filetype(),
            path.display(),
            parsed.len()
        );
        data.extend(parsed);
    }

    let frame_key = dialect.frame_index_key();
    let frames = data.get(frame_key).map(|s| s.len()).unwrap_or(0);
    if frames == 0 {
        return Err(MdlogError::NoData { key: frame_key });
    }

    let misaligned: Vec<String> = data
        .iter()
        .filter(|(key, series)| *key != frame_key && series.len() != frames)
        .map(|(key, _)| key.to_string())
        .collect();
    for key in &misaligned {
        warn!(
            "Dropping '{}': {} values for {} '{}' frames",
            key,
            data.get(key).map(|s| s.len()).unwrap_or(0),
            frames,
            frame_key
        );
        data.remove(key);
    }

    if data.len() <= 1 {
        return Err(MdlogError::NoUsableData);
    }
    Ok(data)
}

/// Open and parse a single file with the dialect's parser.
///
/// The file handle is dropped on every exit path before the caller moves on
/// to the next file.
fn parse_file(dialect: LogDialect, path: &Path) -> Result<SeriesTable> {
    let file = File::open(path).map_err(|source| MdlogError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    match dialect {
        LogDialect::Amber => amber::parse(reader, path),
        LogDialect::Namd => namd::parse(reader, path),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
