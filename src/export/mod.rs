//! Export orchestration and manifest writing

pub mod config;
pub mod exporter;

pub use config::ExportConfig;
pub use exporter::{ExportSummary, PlaylistExporter};
