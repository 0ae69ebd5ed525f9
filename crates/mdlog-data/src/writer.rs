//! Delimited-text output for aligned series columns.
//!
//! Two formats, chosen by output-file extension: plain space-separated rows
//! for gnuplot-style tools, and spreadsheet-compatible CSV with `\r\n` line
//! ends. Rows carry no header; every row is one frame.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mdlog_core::error::{MdlogError, Result};
use mdlog_core::series::Value;
use tracing::info;

/// One named output column.
pub type Column<'a> = (&'a str, &'a [Value]);

/// Write `x` and `ys` to `path`, picking the format from the extension.
///
/// `.csv` (compared case-insensitively) selects the spreadsheet format;
/// anything else gets plain space-delimited text. Every y column must match
/// x's length; on mismatch nothing is written.
pub fn write_series(path: &Path, x: Column<'_>, ys: &[Column<'_>]) -> Result<()> {
    check_lengths(x, ys)?;

    let file = File::create(path).map_err(|source| MdlogError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    if is_csv(path) {
        write_rows(&mut out, x.1, ys, ",", "\r\n")?;
    } else {
        write_rows(&mut out, x.1, ys, " ", "\n")?;
    }
    out.flush()?;

    info!("Wrote {} rows to {}", x.1.len(), path.display());
    Ok(())
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Every y column must have exactly as many rows as x.
fn check_lengths(x: Column<'_>, ys: &[Column<'_>]) -> Result<()> {
    for (column, (_, series)) in ys.iter().enumerate() {
        if series.len() != x.1.len() {
            return Err(MdlogError::ColumnMismatch {
                column,
                x_len: x.1.len(),
                y_len: series.len(),
            });
        }
    }
    Ok(())
}

fn write_rows<W: Write>(
    out: &mut W,
    x: &[Value],
    ys: &[Column<'_>],
    sep: &str,
    eol: &str,
) -> Result<()> {
    for (i, xv) in x.iter().enumerate() {
        write!(out, "{}", xv)?;
        for (_, series) in ys {
            write!(out, "{}{}", sep, series[i])?;
        }
        out.write_all(eol.as_bytes())?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
