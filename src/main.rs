use anyhow::{bail, Context, Result};
use banshee_exporter::banshee::DEFAULT_DB_PATH;
use banshee_exporter::{BansheeDb, ExportConfig, PlaylistExporter};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "banshee-exporter")]
#[command(about = "Export Banshee playlists to a directory with an m3u manifest", long_about = None)]
struct Args {
    /// Path to Banshee's database (banshee.db)
    #[arg(short = 'd', long, default_value = DEFAULT_DB_PATH)]
    database: String,

    /// Target directory (default: ~/<playlist name>)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Export this playlist id without prompting
    #[arg(long = "playlist")]
    playlist_id: Option<i64>,

    /// Print all files while copying
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Replace album tags in the exported copies
    #[arg(short = 'r', long = "remove-album-tags")]
    strip: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the database path
    let db_path = shellexpand::tilde(&args.database);
    let db = BansheeDb::open(PathBuf::from(db_path.as_ref()).as_path())
        .with_context(|| format!("Failed to open Banshee database at {}", db_path))?;

    let playlists = db.list_regular_playlists()?;
    if playlists.is_empty() {
        bail!("No user playlists found in {}", db_path);
    }

    println!("Banshee playlists:");
    println!("  ID | Name");
    for playlist in &playlists {
        println!("{:4} | {}", playlist.playlist_id, playlist.name);
    }

    let playlist_id = match args.playlist_id {
        Some(id) => id,
        None => prompt_playlist_id()?,
    };

    let playlist = db
        .find_playlist(playlist_id)?
        .with_context(|| format!("No playlist with id {}", playlist_id))?;

    let target_dir = match args.output {
        Some(dir) => dir,
        None => PathBuf::from(shellexpand::tilde(&format!("~/{}", playlist.name)).as_ref()),
    };

    let config = ExportConfig::new(target_dir.clone())
        .with_album_strip(args.strip)
        .with_verbose(args.verbose);

    let exporter = PlaylistExporter::new(&db, config);
    let summary = exporter
        .export(playlist_id)
        .with_context(|| format!("Failed to export playlist {:?}", playlist.name))?;

    log::info!(
        "Exported {:?}: {} file(s) copied to {:?}",
        playlist.name,
        summary.copied,
        target_dir
    );
    for source in &summary.missing {
        log::warn!("Skipped missing file {:?}", source);
    }

    println!("Done");
    Ok(())
}

/// Ask the user which playlist to export
fn prompt_playlist_id() -> Result<i64> {
    print!("Enter playlist ID: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read playlist selection")?;

    line.trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid playlist id {:?}", line.trim()))
}
