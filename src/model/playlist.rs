use serde::{Deserialize, Serialize};

/// A playlist row from Banshee's `CorePlaylists` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Primary key (`PlaylistID`)
    pub playlist_id: i64,

    /// User-visible playlist name (`Name`)
    pub name: String,

    /// Nonzero marks system playlists such as the play queue (`Special`);
    /// those are excluded from user-facing listings.
    pub special: i64,
}

impl Playlist {
    /// Whether this is a user-created playlist rather than a system one
    pub fn is_regular(&self) -> bool {
        self.special == 0
    }
}

/// A row from `CorePlaylistEntries`, tying a track to a playlist
/// at a user-chosen position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Primary key (`EntryID`)
    pub entry_id: i64,

    /// Owning playlist (`PlaylistID`)
    pub playlist_id: i64,

    /// Referenced track (`TrackID`); a track may appear in several
    /// playlists, or several times in one.
    pub track_id: i64,

    /// Position within the playlist (`ViewOrder`), ascending
    pub view_order: i64,
}
