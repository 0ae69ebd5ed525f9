use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the mdlog pipeline.
#[derive(Error, Debug)]
pub enum MdlogError {
    /// A log file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be created or written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log file is structurally invalid for the selected dialect.
    #[error("Invalid {dialect} file {path}: {reason}")]
    MalformedInput {
        dialect: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// The requested log file type is not one of the supported dialects.
    #[error("Unsupported log file type: {0}")]
    UnsupportedDialect(String),

    /// The frame-index series is absent or empty after parsing.
    #[error("No data found: no '{key}' frames in the input")]
    NoData { key: &'static str },

    /// Every series other than the frame index was dropped during validation.
    #[error("No usable data left after frame-count validation")]
    NoUsableData,

    /// A y column handed to a writer does not match the x column's length.
    #[error("Column {column}: x has {x_len} rows but y has {y_len}")]
    ColumnMismatch {
        column: usize,
        x_len: usize,
        y_len: usize,
    },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the mdlog crates.
pub type Result<T> = std::result::Result<T, MdlogError>;
