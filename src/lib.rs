//! Banshee Exporter - Banshee playlist to m3u exporter
//!
//! This library reads playlists from Banshee's SQLite database and exports
//! them as a flat directory of audio files plus an m3u manifest that
//! preserves the user-chosen track order.

pub mod banshee;
pub mod error;
pub mod export;
pub mod model;
pub mod uri;

pub use banshee::BansheeDb;
pub use error::{Error, Result};
pub use export::config::ExportConfig;
pub use export::exporter::{ExportSummary, PlaylistExporter};
