//! Playlist export: ordered copy plus m3u manifest

use super::config::{ExportConfig, STRIPPED_ALBUM_NAME};
use crate::banshee::BansheeDb;
use crate::error::{Error, Result};
use crate::uri;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Outcome of one export run
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Number of files copied; equals the number of manifest lines
    pub copied: usize,

    /// Source paths whose files had vanished from disk; these tracks are
    /// skipped and do not appear in the manifest.
    pub missing: Vec<PathBuf>,
}

/// Exports one playlist into a flat directory with an ordered manifest
pub struct PlaylistExporter<'a> {
    db: &'a BansheeDb,
    config: ExportConfig,
}

impl<'a> PlaylistExporter<'a> {
    /// Create a new exporter over an open database handle
    pub fn new(db: &'a BansheeDb, config: ExportConfig) -> Self {
        Self { db, config }
    }

    /// Copy the playlist's tracks into the target directory, in view
    /// order, and write `<dirname>.m3u` alongside them
    ///
    /// A track whose source file no longer exists is recorded in the
    /// summary and skipped; an unsupported URI scheme or any other
    /// filesystem failure aborts the export. Already-copied files and the
    /// partial manifest are left in place on abort.
    pub fn export(&self, playlist_id: i64) -> Result<ExportSummary> {
        let tracks = self.db.playlist_tracks(playlist_id)?;
        let target = &self.config.target_dir;

        let dir_name = target
            .file_name()
            .ok_or_else(|| Error::InvalidTarget(target.clone()))?
            .to_string_lossy()
            .into_owned();

        fs::create_dir_all(target)?;
        let manifest_path = target.join(format!("{dir_name}.m3u"));

        log::info!(
            "Exporting {} track(s) to {:?} (manifest {dir_name}.m3u)",
            tracks.len(),
            target
        );

        // Unbuffered on purpose: every accepted line reaches the OS
        // before the next track is attempted, so a fatal failure later in
        // the run cannot lose manifest lines for files already copied.
        let mut manifest = File::create(&manifest_path)?;

        let mut summary = ExportSummary::default();
        for (i, track) in tracks.iter().enumerate() {
            let source = uri::to_path(&track.uri)?;
            let basename = source.file_name().ok_or_else(|| Error::UnsupportedUri {
                uri: track.uri.clone(),
            })?;
            let dest = target.join(basename);

            match fs::copy(&source, &dest) {
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::warn!("File not found, skipping: {:?}", source);
                    summary.missing.push(source);
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            if self.config.strip_album_tag {
                if let Err(e) = strip_album_tag(&dest) {
                    log::warn!("Could not rewrite album tag on {:?}: {e}", dest);
                }
            }

            let name = basename.to_string_lossy();
            manifest.write_all(name.as_bytes())?;
            manifest.write_all(b"\n")?;
            summary.copied += 1;

            if self.config.verbose {
                log::info!("[{}/{}] Added {} ({})", i + 1, tracks.len(), name, track.title);
            } else {
                log::debug!("Added {}", name);
            }
        }

        log::info!(
            "Copied {} file(s), {} missing source(s)",
            summary.copied,
            summary.missing.len()
        );
        Ok(summary)
    }
}

/// Replace the copy's album tag with a fixed name so exported duplicates
/// don't clutter album views on the receiving player
fn strip_album_tag(path: &Path) -> anyhow::Result<()> {
    use lofty::config::WriteOptions;
    use lofty::prelude::*;
    use lofty::probe::Probe;
    use lofty::tag::Tag;

    let mut tagged_file = Probe::open(path)
        .map_err(|e| anyhow::anyhow!("failed to open file for tagging: {e}"))?
        .read()
        .map_err(|e| anyhow::anyhow!("failed to read tags: {e}"))?;

    let tag_type = tagged_file.file_type().primary_tag_type();

    let tag = match tagged_file.tag_mut(tag_type) {
        Some(t) => t,
        None => {
            tagged_file.insert_tag(Tag::new(tag_type));
            tagged_file.tag_mut(tag_type).unwrap()
        }
    };

    tag.insert_text(ItemKey::AlbumTitle, STRIPPED_ALBUM_NAME.to_string());

    tagged_file
        .save_to_path(path, WriteOptions::default())
        .map_err(|e| anyhow::anyhow!("failed to save tags: {e}"))?;

    log::debug!("Rewrote album tag to {STRIPPED_ALBUM_NAME:?} on {:?}", path);
    Ok(())
}
