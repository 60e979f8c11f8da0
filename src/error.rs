//! Error types for the exporter library

use std::path::PathBuf;

/// Errors surfaced by the library.
///
/// A missing source file during export is deliberately absent here: it is
/// the one anticipated partial failure, handled inside the exporter and
/// reported through [`crate::ExportSummary`] instead of aborting the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Banshee database is missing, unreadable, or its schema does not
    /// match the expected Core* tables.
    #[error("cannot read Banshee database: {0}")]
    DataAccess(#[from] rusqlite::Error),

    /// A track URI uses a scheme the exporter can never resolve
    /// (only absolute file:// URIs are supported).
    #[error("unsupported URI {uri:?}: only local file:/// URIs are handled")]
    UnsupportedUri { uri: String },

    /// The target directory path has no final component to name the
    /// manifest after (e.g. `/`).
    #[error("target directory {0:?} has no usable name for the m3u manifest")]
    InvalidTarget(PathBuf),

    /// Any filesystem failure other than a vanished source file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Specialized Result type for this crate
pub type Result<T> = std::result::Result<T, Error>;
