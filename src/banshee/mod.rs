//! Banshee database access
//!
//! Read-only queries against Banshee's SQLite database
//! (typically ~/.config/banshee-1/banshee.db). The schema is owned by
//! Banshee and addressed here by its fixed table and column names.

mod database;

pub use database::BansheeDb;

/// Default location of Banshee's database, `~` unexpanded
pub const DEFAULT_DB_PATH: &str = "~/.config/banshee-1/banshee.db";
