use serde::{Deserialize, Serialize};

/// A track row from Banshee's `CoreTracks` table
///
/// Stores a file:// URI rather than a filename; referenced from
/// [`super::PlaylistEntry`] by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Primary key (`TrackID`)
    pub track_id: i64,

    /// Foreign key into Banshee's artist table (`ArtistID`)
    pub artist_id: i64,

    /// Source location as stored by Banshee (`Uri`, a file:// URI)
    pub uri: String,

    /// Display title (`Title`)
    pub title: String,
}
