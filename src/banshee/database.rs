//! Read-only wrapper around Banshee's SQLite database

use crate::error::Result;
use crate::model::{Playlist, PlaylistEntry, Track};
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;

/// Handle to Banshee's database, scoped to one program invocation
///
/// The connection is opened with `SQLITE_OPEN_READ_ONLY`, so the
/// read-only guarantee holds at the driver level: no statement issued
/// through this handle can mutate Banshee's data or schema.
#[derive(Debug)]
pub struct BansheeDb {
    conn: Connection,
}

impl BansheeDb {
    /// Open the database at `path` in read-only mode
    ///
    /// Fails if the file is missing or not a readable SQLite database.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        log::debug!("Opened Banshee database at {:?}", path);
        Ok(Self { conn })
    }

    /// All user-created playlists, excluding play queues and other
    /// system playlists (`Special != 0`)
    pub fn list_regular_playlists(&self) -> Result<Vec<Playlist>> {
        let mut stmt = self.conn.prepare(
            "SELECT PlaylistID, Name, Special FROM CorePlaylists
             WHERE Special = 0 ORDER BY PlaylistID",
        )?;
        let playlists = stmt
            .query_map([], |row| {
                Ok(Playlist {
                    playlist_id: row.get(0)?,
                    name: row.get(1)?,
                    special: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(playlists)
    }

    /// Look up a single playlist by id, `None` if no such row exists
    pub fn find_playlist(&self, playlist_id: i64) -> Result<Option<Playlist>> {
        let mut stmt = self.conn.prepare(
            "SELECT PlaylistID, Name, Special FROM CorePlaylists WHERE PlaylistID = ?1",
        )?;
        let mut rows = stmt.query_map(params![playlist_id], |row| {
            Ok(Playlist {
                playlist_id: row.get(0)?,
                name: row.get(1)?,
                special: row.get(2)?,
            })
        })?;
        rows.next().transpose().map_err(Into::into)
    }

    /// Entries of a playlist, ascending by view order
    ///
    /// Ties on `ViewOrder` are broken by `EntryID` so repeated queries
    /// return the same sequence.
    pub fn playlist_entries(&self, playlist_id: i64) -> Result<Vec<PlaylistEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT EntryID, PlaylistID, TrackID, ViewOrder FROM CorePlaylistEntries
             WHERE PlaylistID = ?1 ORDER BY ViewOrder ASC, EntryID ASC",
        )?;
        let entries = stmt
            .query_map(params![playlist_id], |row| {
                Ok(PlaylistEntry {
                    entry_id: row.get(0)?,
                    playlist_id: row.get(1)?,
                    track_id: row.get(2)?,
                    view_order: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Tracks of a playlist in view order, via the entries join
    ///
    /// A playlist id with no matching rows yields an empty vector rather
    /// than an error, matching the join semantics.
    pub fn playlist_tracks(&self, playlist_id: i64) -> Result<Vec<Track>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.TrackID, t.ArtistID, t.Uri, t.Title
             FROM CorePlaylistEntries e
             JOIN CoreTracks t ON t.TrackID = e.TrackID
             WHERE e.PlaylistID = ?1
             ORDER BY e.ViewOrder ASC, e.EntryID ASC",
        )?;
        let tracks = stmt
            .query_map(params![playlist_id], |row| {
                Ok(Track {
                    track_id: row.get(0)?,
                    artist_id: row.get(1)?,
                    uri: row.get(2)?,
                    title: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tracks)
    }

    /// Source URIs of a playlist's tracks in view order
    pub fn track_uris(&self, playlist_id: i64) -> Result<Vec<String>> {
        let tracks = self.playlist_tracks(playlist_id)?;
        Ok(tracks.into_iter().map(|t| t.uri).collect())
    }
}
