mod bootstrap;

use anyhow::{bail, Result};
use clap::Parser;
use mdlog_core::series::SeriesTable;
use mdlog_core::settings::Settings;
use mdlog_data::analysis::{analyze, LogDialect};
use mdlog_data::writer::{write_series, Column};

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("mdlog v{} starting", env!("CARGO_PKG_VERSION"));

    let dialect: LogDialect = settings.input_type.parse()?;
    let data = analyze(dialect, &settings.input)?;

    let x_key = settings
        .xaxis
        .clone()
        .unwrap_or_else(|| dialect.frame_index_key().to_string());
    let (x, ys) = select_columns(&data, &x_key, &settings.yaxis)?;

    write_series(&settings.output, x, &ys)?;
    Ok(())
}

/// Resolve the x column and the y columns from the validated table.
///
/// Requested keys must exist in the table; with no explicit y keys, every
/// data set other than x is written in table order.
fn select_columns<'a>(
    data: &'a SeriesTable,
    x_key: &'a str,
    y_keys: &'a [String],
) -> Result<(Column<'a>, Vec<Column<'a>>)> {
    let Some(x) = data.get(x_key) else {
        bail!("data set '{}' not found", x_key);
    };

    let mut ys: Vec<Column<'a>> = Vec::new();
    if y_keys.is_empty() {
        for (key, series) in data.iter() {
            if key != x_key {
                ys.push((key, series));
            }
        }
    } else {
        for key in y_keys {
            match data.get(key) {
                Some(series) => ys.push((key, series)),
                None => bail!("data set '{}' not found", key),
            }
        }
    }
    Ok(((x_key, x), ys))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
