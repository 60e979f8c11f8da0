//! Export configuration

use std::path::PathBuf;

/// Album tag written to exported copies when stripping is enabled,
/// so duplicated songs don't clutter players' album views
pub const STRIPPED_ALBUM_NAME: &str = "Playlists";

/// Configuration for one playlist export
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Target directory; created (with parents) if absent. The manifest
    /// is named after its final component.
    pub target_dir: PathBuf,

    /// Rewrite each copy's album tag to [`STRIPPED_ALBUM_NAME`]
    pub strip_album_tag: bool,

    /// Emit a per-file notice at info level while copying
    pub verbose: bool,
}

impl ExportConfig {
    /// Create a new export configuration for the given target directory
    pub fn new(target_dir: PathBuf) -> Self {
        Self {
            target_dir,
            strip_album_tag: false,
            verbose: false,
        }
    }

    /// Enable or disable album tag stripping
    pub fn with_album_strip(mut self, strip: bool) -> Self {
        self.strip_album_tag = strip;
        self
    }

    /// Enable or disable per-file progress output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
