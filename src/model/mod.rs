//! Data model mirroring Banshee's database tables
//!
//! These are plain read-only records populated straight from query
//! results; all mutation happens in Banshee itself.

mod playlist;
mod track;

pub use playlist::{Playlist, PlaylistEntry};
pub use track::Track;
