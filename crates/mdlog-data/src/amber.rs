//! Parser for AMBER (including CHAMBER) mdout files.
//!
//! Extracts `KEY = value` items from the numbered RESULTS section into
//! per-key time series, one value appended per simulation frame.

use std::io::BufRead;
use std::path::Path;

use mdlog_core::error::{MdlogError, Result};
use mdlog_core::series::{SeriesTable, Value};
use regex::Regex;
use tracing::warn;

/// Human-readable dialect name used in errors and diagnostics.
pub const FILETYPE: &str = "AMBER mdout";

// ── Patterns ──────────────────────────────────────────────────────────────────

/// Compiled line patterns for one parse pass.
struct Patterns {
    /// Numbered section header, e.g. `   4.  RESULTS`.
    begin: Regex,
    /// One `KEY = NUMBER` item. The key may carry a `1-4 `-style prefix;
    /// an attached unit such as `TIME(PS)` is matched but discarded.
    item: Regex,
    /// The letter-spaced averages banner that closes the per-frame output.
    end: Regex,
}

impl Patterns {
    fn new() -> Self {
        Self {
            begin: Regex::new(r"^\s+\d\.\s+RESULTS\b").expect("regex is valid"),
            item: Regex::new(
                r"\s+(?P<key>(\d-\d )?[A-Za-z]+)(\([A-Za-z]+\))?\s*=\s*(?P<value>[+-]?(?:[1-9]\d*\.\d*|0?\.\d*|[1-9]\d*|0))",
            )
            .expect("regex is valid"),
            end: Regex::new(r"^\s+A V E R A G E S   O V E R").expect("regex is valid"),
        }
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse one mdout stream into per-key series.
///
/// `path` is used for diagnostics only; the stream itself is consumed.
///
/// Fails with [`MdlogError::MalformedInput`] when the RESULTS header never
/// appears. A missing averages banner is non-fatal: the file is treated as
/// truncated (e.g. a run killed mid-simulation) and whatever was accumulated
/// is returned after a warning.
pub fn parse<R: BufRead>(reader: R, path: &Path) -> Result<SeriesTable> {
    let patterns = Patterns::new();
    let mut table = SeriesTable::new();
    let mut in_results = false;
    let mut closed = false;

    for line in reader.lines() {
        let line = line.map_err(|source| MdlogError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        if !in_results {
            in_results = patterns.begin.is_match(&line);
            continue;
        }

        // Per-frame output is space-indented; anything else is noise.
        if !line.starts_with(' ') {
            continue;
        }

        for caps in patterns.item.captures_iter(&line) {
            let Some(value) = Value::parse(&caps["value"]) else {
                continue;
            };
            table.push(&caps["key"], value);
        }

        if patterns.end.is_match(&line) {
            closed = true;
            break;
        }
    }

    if !in_results {
        return Err(MdlogError::MalformedInput {
            dialect: FILETYPE,
            path: path.to_path_buf(),
            reason: "no RESULTS section found".to_string(),
        });
    }

    if !closed {
        warn!(
            "Broken {} file '{}': no averages banner, keeping partial data",
            FILETYPE,
            path.display()
        );
    }

    Ok(table)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
